pub mod maps_key;
