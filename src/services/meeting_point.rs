use serde::Serialize;
use tracing::{info, warn};

use crate::{
    services::maps_client::maps_service::MapsService,
    types::{
        lat_lng::{GeocodeTarget, LatLng},
        midpoint::Place,
    },
};

/// Nearby-search radii in meters, tried in order until one finds places.
pub const SEARCH_RADII: [u32; 5] = [3000, 5000, 10000, 15000, 25000];

/// What happened while geocoding one origin, reported back on failure.
#[derive(Debug, Default, Serialize, PartialEq)]
pub struct GeocodeReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_id_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_id_error_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_id_exception: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_error_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_exception: Option<String>,
}

pub struct ResolvedOrigin {
    pub location: Option<LatLng>,
    pub report: GeocodeReport,
}

/// Prefers the place id when one was selected, falling back to the free text.
pub async fn resolve_origin(
    maps: &MapsService,
    address: &str,
    place_id: &str,
) -> ResolvedOrigin {
    let mut report = GeocodeReport::default();
    let mut location = None;

    if !place_id.is_empty() {
        match maps
            .geocode(&GeocodeTarget::PlaceId(place_id.to_string()))
            .await
        {
            Ok(output) => {
                report.place_id_status = Some(output.status);
                report.place_id_error_message = output.error_message;
                location = output.location;
            }
            Err(e) => {
                warn!("Failed to geocode place id {}: {}", place_id, e);
                report.place_id_exception = Some(e.to_string());
            }
        }
    }

    if location.is_none() {
        match maps
            .geocode(&GeocodeTarget::Address(address.to_string()))
            .await
        {
            Ok(output) => {
                report.address_status = Some(output.status);
                report.address_error_message = output.error_message;
                location = output.location;
            }
            Err(e) => {
                warn!("Failed to geocode address {}: {}", address, e);
                report.address_exception = Some(e.to_string());
            }
        }
    }

    ResolvedOrigin { location, report }
}

pub async fn find_places_near(
    maps: &MapsService,
    midpoint: LatLng,
    place_type: &str,
) -> Vec<Place> {
    for radius in SEARCH_RADII {
        match maps.nearby_search(midpoint, place_type, radius).await {
            Ok(places) if !places.is_empty() => {
                info!(
                    "Found {} {} places within {}m of {}",
                    places.len(),
                    place_type,
                    radius,
                    midpoint
                );
                return places;
            }
            Ok(_) => {}
            Err(e) => warn!("Nearby search at {}m failed: {}", radius, e),
        }
    }

    Vec::new()
}
