use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use super::lat_lng::LatLng;

/// Body of `POST /api/find_midpoint`.
///
/// Missing or `null` fields decode as empty strings and every field is trimmed,
/// so validation only has to check for emptiness.
#[derive(Debug, Clone, Default, PartialEq, Validate, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FindMidpointRequest {
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "Please provide address1, address2, and placeType."))]
    pub address1: String,

    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "Please provide address1, address2, and placeType."))]
    pub address2: String,

    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "Please provide address1, address2, and placeType."))]
    pub place_type: String,

    #[serde(default, deserialize_with = "trimmed")]
    pub place_id1: String,

    #[serde(default, deserialize_with = "trimmed")]
    pub place_id2: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Origin {
    pub lat: f64,
    pub lng: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Origin {
    pub fn location(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Place {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub user_ratings_total: Option<u64>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_location")]
    pub location: Option<LatLng>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maps_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_time_from_origin1_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_distance_from_origin1_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_time_from_origin2_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_distance_from_origin2_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MidpointResult {
    pub origin1: Origin,
    pub origin2: Origin,
    pub midpoint: LatLng,
    #[serde(default)]
    pub places: Vec<Place>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?
        .map(|s| s.trim().to_string())
        .unwrap_or_default())
}

// Anything other than two numeric coordinates is treated as "no location".
fn lenient_location<'de, D>(deserializer: D) -> Result<Option<LatLng>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;

    Ok(value.and_then(|v| {
        Some(LatLng {
            lat: v.get("lat")?.as_f64()?,
            lng: v.get("lng")?.as_f64()?,
        })
    }))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn request_uses_camel_case_keys() {
        let request = FindMidpointRequest {
            address1: "123 Main St".to_string(),
            address2: "456 Oak Ave".to_string(),
            place_type: "cafe".to_string(),
            place_id1: "".to_string(),
            place_id2: "abc".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "address1": "123 Main St",
                "address2": "456 Oak Ave",
                "placeType": "cafe",
                "placeId1": "",
                "placeId2": "abc",
            })
        );
    }

    #[test]
    fn request_fields_are_trimmed_and_defaulted() {
        let request: FindMidpointRequest = serde_json::from_value(json!({
            "address1": "  123 Main St ",
            "address2": null,
            "placeType": "cafe\n",
        }))
        .unwrap();

        assert_eq!(request.address1, "123 Main St");
        assert_eq!(request.address2, "");
        assert_eq!(request.place_type, "cafe");
        assert_eq!(request.place_id1, "");
        assert!(request.validate().is_err());
    }

    #[test]
    fn blank_request_fails_validation_with_the_shared_message() {
        let request: FindMidpointRequest =
            serde_json::from_value(json!({ "address1": "   " })).unwrap();

        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();

        assert_eq!(fields.len(), 3);
        for errs in fields.values() {
            assert_eq!(
                errs[0].message.as_deref(),
                Some("Please provide address1, address2, and placeType.")
            );
        }
    }

    #[test]
    fn place_location_must_be_numeric() {
        let places: Vec<Place> = serde_json::from_value(json!([
            { "name": "A", "location": { "lat": 1.0, "lng": 2 } },
            { "name": "B", "location": { "lat": "1.0", "lng": 2.0 } },
            { "name": "C", "location": { "lat": null, "lng": null } },
            { "name": "D" },
        ]))
        .unwrap();

        assert_eq!(places[0].location, Some(LatLng::new(1.0, 2.0)));
        assert_eq!(places[1].location, None);
        assert_eq!(places[2].location, None);
        assert_eq!(places[3].location, None);
    }

    #[test]
    fn result_ignores_origin_addresses_and_unknown_keys() {
        let result: MidpointResult = serde_json::from_value(json!({
            "origin1": { "lat": 1, "lng": 1, "address": "123 Main St" },
            "origin2": { "lat": 2, "lng": 2 },
            "midpoint": { "lat": 1.5, "lng": 1.5 },
            "places": [],
            "extra": true,
        }))
        .unwrap();

        assert_eq!(result.origin1.location(), LatLng::new(1.0, 1.0));
        assert_eq!(result.origin1.address.as_deref(), Some("123 Main St"));
        assert!(result.places.is_empty());
    }
}
