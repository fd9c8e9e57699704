use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Default)]
pub struct GoogleNearbyLocation {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

#[derive(Serialize, Deserialize, Default)]
pub struct GoogleNearbyGeometry {
    #[serde(default)]
    pub location: GoogleNearbyLocation,
}

#[derive(Serialize, Deserialize, Default)]
pub struct GoogleNearbySearchResult {
    pub name: Option<String>,
    pub rating: Option<f64>,
    pub user_ratings_total: Option<u64>,
    pub vicinity: Option<String>,
    pub formatted_address: Option<String>,
    pub place_id: Option<String>,
    #[serde(default)]
    pub geometry: GoogleNearbyGeometry,
}

#[derive(Serialize, Deserialize)]
pub struct GoogleNearbySearchResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub results: Vec<GoogleNearbySearchResult>,
}
