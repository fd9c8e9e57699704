use super::marker_style::MarkerKind;
use crate::types::{
    lat_lng::LatLng,
    midpoint::{MidpointResult, Place},
};

pub const DEFAULT_PLACE_NAME: &str = "Place";

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub kind: MarkerKind,
    pub position: LatLng,
    pub title: String,
    /// Index into the result's places, for place markers.
    pub place_index: Option<usize>,
}

/// Smallest latitude/longitude box holding every drawn marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl Bounds {
    pub fn around(point: LatLng) -> Self {
        Bounds {
            south: point.lat,
            west: point.lng,
            north: point.lat,
            east: point.lng,
        }
    }

    pub fn extend(&mut self, point: LatLng) {
        self.south = self.south.min(point.lat);
        self.north = self.north.max(point.lat);
        self.west = self.west.min(point.lng);
        self.east = self.east.max(point.lng);
    }

    pub fn contains(&self, point: LatLng) -> bool {
        (self.south..=self.north).contains(&point.lat)
            && (self.west..=self.east).contains(&point.lng)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListEntry {
    pub title: String,
    pub rating: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub markers: Vec<Marker>,
    pub viewport: Bounds,
    pub entries: Vec<ListEntry>,
}

impl Scene {
    pub fn has_results(&self) -> bool {
        !self.entries.is_empty()
    }
}

pub fn display_name(place: &Place) -> &str {
    place.name.as_deref().unwrap_or(DEFAULT_PLACE_NAME)
}

/// `⭐ 4.5 (120)`, or nothing for unrated places.
pub fn rating_line(place: &Place) -> Option<String> {
    match place.rating {
        Some(rating) if rating != 0.0 => Some(format!(
            "⭐ {} ({})",
            rating,
            place.user_ratings_total.unwrap_or(0)
        )),
        _ => None,
    }
}

pub fn render(result: &MidpointResult) -> Scene {
    let origin1 = result.origin1.location();
    let origin2 = result.origin2.location();

    let mut markers = vec![
        fixed_marker(MarkerKind::You, origin1, "You"),
        fixed_marker(MarkerKind::Friend, origin2, "Friend"),
        fixed_marker(MarkerKind::Midpoint, result.midpoint, "Midpoint"),
    ];

    let mut viewport = Bounds::around(origin1);
    viewport.extend(origin2);
    viewport.extend(result.midpoint);

    for (index, place) in result.places.iter().enumerate() {
        let Some(position) = place.location else {
            continue;
        };

        markers.push(Marker {
            kind: MarkerKind::Place,
            position,
            title: display_name(place).to_string(),
            place_index: Some(index),
        });
        viewport.extend(position);
    }

    let entries = result
        .places
        .iter()
        .map(|place| ListEntry {
            title: display_name(place).to_string(),
            rating: rating_line(place),
        })
        .collect();

    Scene {
        markers,
        viewport,
        entries,
    }
}

fn fixed_marker(kind: MarkerKind, position: LatLng, title: &str) -> Marker {
    Marker {
        kind,
        position,
        title: title.to_string(),
        place_index: None,
    }
}
