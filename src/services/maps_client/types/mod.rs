pub mod google_distance_matrix_response;
pub mod google_geocode_response;
pub mod google_nearby_search_response;
pub mod maps_service_error;
