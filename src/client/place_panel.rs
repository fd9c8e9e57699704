use urlencoding::encode;

use super::render::display_name;
use crate::types::{lat_lng::LatLng, midpoint::Place};

const DIRECTIONS_URL: &str = "https://www.google.com/maps/dir/?api=1";

/// The two address strings of the submission whose results are on screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectionOrigins {
    pub address1: String,
    pub address2: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TravelSummary {
    pub time: String,
    pub distance: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaceDetail {
    pub title: String,
    pub rating: String,
    pub address: String,
    pub travel_from_you: TravelSummary,
    pub travel_from_friend: TravelSummary,
    pub directions_from_you: String,
    pub directions_from_friend: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Panel {
    #[default]
    Hidden,
    Visible(PlaceDetail),
}

impl PlaceDetail {
    pub fn new(place: &Place, origins: &DirectionOrigins) -> Self {
        let rating = match place.rating {
            Some(rating) if rating != 0.0 => format!(
                "⭐ {} ({} reviews)",
                rating,
                place.user_ratings_total.unwrap_or(0)
            ),
            _ => "No rating available".to_string(),
        };

        PlaceDetail {
            title: display_name(place).to_string(),
            rating,
            address: place
                .address
                .clone()
                .unwrap_or_else(|| "Address not available".to_string()),
            travel_from_you: travel_summary(
                &place.travel_time_from_origin1_text,
                &place.travel_distance_from_origin1_text,
            ),
            travel_from_friend: travel_summary(
                &place.travel_time_from_origin2_text,
                &place.travel_distance_from_origin2_text,
            ),
            directions_from_you: directions_url(&origins.address1, place.location),
            directions_from_friend: directions_url(&origins.address2, place.location),
        }
    }
}

fn travel_summary(time: &Option<String>, distance: &Option<String>) -> TravelSummary {
    match time.as_deref().filter(|t| !t.is_empty()) {
        Some(time) => TravelSummary {
            time: time.to_string(),
            distance: distance.clone().filter(|d| !d.is_empty()),
        },
        None => TravelSummary {
            time: "Travel time not available".to_string(),
            distance: None,
        },
    }
}

/// Directions from a free-text origin to a place's coordinates. A place
/// without coordinates gets an empty `lat,lng` pair.
pub fn directions_url(origin: &str, destination: Option<LatLng>) -> String {
    let destination = destination
        .map(|l| l.to_string())
        .unwrap_or_else(|| ",".to_string());

    format!(
        "{}&origin={}&destination={}",
        DIRECTIONS_URL,
        encode(origin),
        encode(&destination)
    )
}
