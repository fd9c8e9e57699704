use std::fmt;

use serde::{Deserialize, Serialize};

const EARTH_RADIUS_MILES: f64 = 3959.0;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        LatLng { lat, lng }
    }

    pub fn midpoint(&self, other: &LatLng) -> LatLng {
        LatLng {
            lat: (self.lat + other.lat) / 2.0,
            lng: (self.lng + other.lng) / 2.0,
        }
    }

    /// Great-circle distance in miles (haversine).
    pub fn miles_to(&self, other: &LatLng) -> f64 {
        let (lat1, lng1) = (self.lat.to_radians(), self.lng.to_radians());
        let (lat2, lng2) = (other.lat.to_radians(), other.lng.to_radians());

        let dlat = lat2 - lat1;
        let dlng = lng2 - lng1;

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_MILES * c
    }
}

impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// What a geocoding lookup is keyed by.
#[derive(Debug, Clone, PartialEq)]
pub enum GeocodeTarget {
    Address(String),
    PlaceId(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoint_is_the_coordinate_mean() {
        let a = LatLng::new(1.0, 1.0);
        let b = LatLng::new(2.0, 2.0);

        assert_eq!(a.midpoint(&b), LatLng::new(1.5, 1.5));
    }

    #[test]
    fn one_degree_of_latitude() {
        let miles = LatLng::new(0.0, 0.0).miles_to(&LatLng::new(1.0, 0.0));

        assert!((miles - 69.0975).abs() < 0.001, "got {}", miles);
    }

    #[test]
    fn display_joins_with_a_comma() {
        assert_eq!(LatLng::new(1.4, 1.6).to_string(), "1.4,1.6");
    }
}
