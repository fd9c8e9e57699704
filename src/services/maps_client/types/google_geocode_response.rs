use serde::{Deserialize, Serialize};

use crate::types::lat_lng::LatLng;

#[derive(Serialize, Deserialize)]
pub struct GoogleGeometry {
    pub location: LatLng,
}

#[derive(Serialize, Deserialize)]
pub struct GoogleGeocodeResult {
    pub geometry: GoogleGeometry,
}

#[derive(Serialize, Deserialize)]
pub struct GoogleGeocodeResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<GoogleGeocodeResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}
