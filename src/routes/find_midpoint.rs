use crate::{
    services::{
        meeting_point::{find_places_near, resolve_origin},
        travel_times::add_travel_times,
    },
    types::{
        app_state::AppState,
        midpoint::{FindMidpointRequest, MidpointResult, Origin},
    },
    utils::{app_error::AppError, validated_json::ValidatedJson},
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
#[cfg(test)]
use axum_macros::debug_handler;
use serde_json::json;
use tracing::{info, warn};

#[cfg_attr(test, debug_handler)]
pub async fn find_midpoint(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<FindMidpointRequest>,
) -> Result<Response, AppError> {
    let maps = &state.maps_service;

    let (first, second) = futures::join!(
        resolve_origin(maps, &payload.address1, &payload.place_id1),
        resolve_origin(maps, &payload.address2, &payload.place_id2),
    );

    let (origin1, origin2) = match (first.location, second.location) {
        (Some(a), Some(b)) => (a, b),
        _ => {
            warn!(
                "Could not geocode {:?} / {:?}",
                payload.address1, payload.address2
            );
            return Err(AppError::new(
                StatusCode::BAD_REQUEST,
                "Could not geocode one or both addresses.",
            )
            .with_details(json!({ "a1": first.report, "a2": second.report })));
        }
    };

    let midpoint = origin1.midpoint(&origin2);
    let mut places = find_places_near(maps, midpoint, &payload.place_type).await;
    add_travel_times(maps, &mut places, origin1, origin2).await;

    info!(
        "Midpoint {} for {:?} found {} places",
        midpoint,
        payload.place_type,
        places.len()
    );

    Ok((
        StatusCode::OK,
        Json(MidpointResult {
            origin1: Origin {
                lat: origin1.lat,
                lng: origin1.lng,
                address: Some(payload.address1),
            },
            origin2: Origin {
                lat: origin2.lat,
                lng: origin2.lng,
                address: Some(payload.address2),
            },
            midpoint,
            places,
        }),
    )
        .into_response())
}
