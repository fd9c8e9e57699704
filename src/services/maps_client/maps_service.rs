use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;
use urlencoding::encode;

use super::types::{
    google_distance_matrix_response::GoogleDistanceMatrixResponse,
    google_geocode_response::GoogleGeocodeResponse,
    google_nearby_search_response::{GoogleNearbySearchResponse, GoogleNearbySearchResult},
    maps_service_error::MapsServiceError,
};
use crate::types::{
    lat_lng::{GeocodeTarget, LatLng},
    midpoint::Place,
};

const LOOKUP_TIMEOUT: Duration = Duration::from_secs(15);
const MATRIX_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone)]
pub struct MapsServiceConfig {
    pub api_key: Option<String>,
    pub host: String,
}

#[derive(Clone)]
pub struct MapsService {
    config: MapsServiceConfig,
    client: reqwest::Client,
}

pub struct GeocodeOutput {
    pub status: String,
    pub error_message: Option<String>,
    pub location: Option<LatLng>,
}

impl MapsService {
    pub fn new(config: MapsServiceConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.config
            .api_key
            .as_deref()
            .is_some_and(|key| !key.is_empty())
    }

    /// Looks up coordinates for an address or place id. Only an `OK` status
    /// with at least one result yields a location; the first result wins.
    pub async fn geocode(
        &self,
        target: &GeocodeTarget,
    ) -> Result<GeocodeOutput, MapsServiceError> {
        let query = match target {
            GeocodeTarget::Address(address) => format!("address={}", encode(address)),
            GeocodeTarget::PlaceId(place_id) => format!("place_id={}", encode(place_id)),
        };
        let url = format!(
            "{}/maps/api/geocode/json?{}&key={}",
            self.config.host,
            query,
            self.key()
        );

        let body = self
            .get_json::<GoogleGeocodeResponse>(&url, LOOKUP_TIMEOUT)
            .await?;

        debug!("Geocode {:?} returned status {}", target, body.status);

        let location = match body.status.as_str() {
            "OK" => body.results.first().map(|r| r.geometry.location),
            _ => None,
        };

        Ok(GeocodeOutput {
            status: body.status,
            error_message: body.error_message,
            location,
        })
    }

    pub async fn nearby_search(
        &self,
        location: LatLng,
        place_type: &str,
        radius_meters: u32,
    ) -> Result<Vec<Place>, MapsServiceError> {
        let url = format!(
            "{}/maps/api/place/nearbysearch/json?location={}&radius={}&type={}&key={}",
            self.config.host,
            encode(&location.to_string()),
            radius_meters,
            encode(place_type),
            self.key()
        );

        let body = self
            .get_json::<GoogleNearbySearchResponse>(&url, LOOKUP_TIMEOUT)
            .await?;

        Ok(body.results.into_iter().map(into_place).collect())
    }

    pub async fn distance_matrix(
        &self,
        origins: &[LatLng],
        destinations: &[LatLng],
    ) -> Result<GoogleDistanceMatrixResponse, MapsServiceError> {
        let url = format!(
            "{}/maps/api/distancematrix/json?origins={}&destinations={}&mode=driving&units=imperial&key={}",
            self.config.host,
            encode(&join_locations(origins)),
            encode(&join_locations(destinations)),
            self.key()
        );

        self.get_json::<GoogleDistanceMatrixResponse>(&url, MATRIX_TIMEOUT)
            .await
    }

    fn key(&self) -> String {
        encode(self.config.api_key.as_deref().unwrap_or_default()).into_owned()
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        timeout: Duration,
    ) -> Result<T, MapsServiceError> {
        let resp = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| MapsServiceError::Request(e.without_url().to_string()))?;

        if !resp.status().is_success() {
            return Err(MapsServiceError::Status(resp.status().as_u16()));
        }

        resp.json::<T>()
            .await
            .map_err(|e| MapsServiceError::Body(e.without_url().to_string()))
    }
}

fn join_locations(locations: &[LatLng]) -> String {
    locations
        .iter()
        .map(|l| l.to_string())
        .collect::<Vec<String>>()
        .join("|")
}

fn into_place(r: GoogleNearbySearchResult) -> Place {
    let location = match (r.geometry.location.lat, r.geometry.location.lng) {
        (Some(lat), Some(lng)) => Some(LatLng::new(lat, lng)),
        _ => None,
    };
    let maps_url = r.place_id.as_ref().map(|id| {
        format!(
            "https://www.google.com/maps/search/?api=1&query_place_id={}",
            encode(id)
        )
    });

    Place {
        name: r.name,
        rating: r.rating,
        user_ratings_total: r.user_ratings_total,
        address: r.vicinity.or(r.formatted_address),
        place_id: r.place_id,
        location,
        maps_url,
        ..Place::default()
    }
}
