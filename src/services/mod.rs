pub mod maps_client;
pub mod meeting_point;
pub mod travel_times;
