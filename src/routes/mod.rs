use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::{middlewares::maps_key::require_maps_key, types::app_state::AppState};

mod find_midpoint;
mod get_health;

pub fn apply_routes(app: Router<AppState>, state: &AppState) -> Router<AppState> {
    app.route("/api/health", get(get_health::get_health)).route(
        "/api/find_midpoint",
        post(find_midpoint::find_midpoint).route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_maps_key,
        )),
    )
}
