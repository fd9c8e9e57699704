use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
pub struct GoogleTextValue {
    pub text: String,
    #[serde(default)]
    pub value: i64,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct GoogleDistanceMatrixElement {
    pub status: String,
    #[serde(default)]
    pub duration: Option<GoogleTextValue>,
    #[serde(default)]
    pub distance: Option<GoogleTextValue>,
}

#[derive(Serialize, Deserialize)]
pub struct GoogleDistanceMatrixRow {
    #[serde(default)]
    pub elements: Vec<GoogleDistanceMatrixElement>,
}

#[derive(Serialize, Deserialize)]
pub struct GoogleDistanceMatrixResponse {
    pub status: String,
    #[serde(default)]
    pub rows: Vec<GoogleDistanceMatrixRow>,
}
