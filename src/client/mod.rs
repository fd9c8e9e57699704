pub mod client_error;
pub mod marker_style;
pub mod midpoint_client;
pub mod place_category;
pub mod place_panel;
pub mod render;
pub mod session;
