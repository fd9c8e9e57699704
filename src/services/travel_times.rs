use tracing::warn;

use crate::{
    services::maps_client::{
        maps_service::MapsService,
        types::google_distance_matrix_response::GoogleDistanceMatrixElement,
    },
    types::{lat_lng::LatLng, midpoint::Place},
};

/// Two origins per destination must stay under the matrix element cap.
pub const MAX_MATRIX_DESTINATIONS: usize = 20;

const AVERAGE_SPEED_MPH: f64 = 35.0;
const UNAVAILABLE: &str = "Distance unavailable";

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OriginSlot {
    First,
    Second,
}

pub struct TravelText {
    pub time: String,
    pub distance: String,
}

pub async fn add_travel_times(
    maps: &MapsService,
    places: &mut [Place],
    origin1: LatLng,
    origin2: LatLng,
) {
    let annotated = places.len().min(MAX_MATRIX_DESTINATIONS);
    let places = &mut places[..annotated];

    let located: Vec<(usize, LatLng)> = places
        .iter()
        .enumerate()
        .filter_map(|(i, p)| p.location.map(|l| (i, l)))
        .collect();
    if located.is_empty() {
        return;
    }

    let destinations: Vec<LatLng> = located.iter().map(|(_, l)| *l).collect();

    let matrix = match maps.distance_matrix(&[origin1, origin2], &destinations).await {
        Ok(m) if m.status == "OK" && m.rows.len() >= 2 => m,
        Ok(m) => {
            warn!(
                "Distance matrix returned status {} with {} rows, estimating travel times",
                m.status,
                m.rows.len()
            );
            estimate_all(places, origin1, origin2);
            return;
        }
        Err(e) => {
            warn!("Failed to fetch distance matrix, estimating travel times: {}", e);
            estimate_all(places, origin1, origin2);
            return;
        }
    };

    for place in places.iter_mut().filter(|p| p.location.is_none()) {
        set_travel_text(place, OriginSlot::First, estimate(None, origin1));
        set_travel_text(place, OriginSlot::Second, estimate(None, origin2));
    }

    for (column, (index, _)) in located.iter().enumerate() {
        let place = &mut places[*index];

        for (slot, origin, row) in [
            (OriginSlot::First, origin1, &matrix.rows[0]),
            (OriginSlot::Second, origin2, &matrix.rows[1]),
        ] {
            let text = row
                .elements
                .get(column)
                .and_then(element_text)
                .unwrap_or_else(|| estimate(place.location, origin));
            set_travel_text(place, slot, text);
        }
    }
}

fn estimate_all(places: &mut [Place], origin1: LatLng, origin2: LatLng) {
    for place in places.iter_mut() {
        let first = estimate(place.location, origin1);
        let second = estimate(place.location, origin2);
        set_travel_text(place, OriginSlot::First, first);
        set_travel_text(place, OriginSlot::Second, second);
    }
}

fn element_text(element: &GoogleDistanceMatrixElement) -> Option<TravelText> {
    if element.status != "OK" {
        return None;
    }

    Some(TravelText {
        time: element.duration.as_ref()?.text.clone(),
        distance: element.distance.as_ref()?.text.clone(),
    })
}

/// Straight-line estimate at an average driving speed.
pub fn estimate(place: Option<LatLng>, origin: LatLng) -> TravelText {
    let Some(place) = place else {
        return TravelText {
            time: UNAVAILABLE.to_string(),
            distance: String::new(),
        };
    };

    let miles = origin.miles_to(&place);
    let minutes = (miles / AVERAGE_SPEED_MPH * 60.0) as u64;

    let time = if minutes < 60 {
        format!("~{} min", minutes)
    } else {
        match (minutes / 60, minutes % 60) {
            (hours, 0) => format!("~{}h", hours),
            (hours, rest) => format!("~{}h {}m", hours, rest),
        }
    };

    TravelText {
        time,
        distance: format!("~{:.1} mi", miles),
    }
}

fn set_travel_text(place: &mut Place, slot: OriginSlot, text: TravelText) {
    match slot {
        OriginSlot::First => {
            place.travel_time_from_origin1_text = Some(text.time);
            place.travel_distance_from_origin1_text = Some(text.distance);
        }
        OriginSlot::Second => {
            place.travel_time_from_origin2_text = Some(text.time);
            place.travel_distance_from_origin2_text = Some(text.distance);
        }
    }
}
