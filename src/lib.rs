pub mod app;
pub mod client;
pub mod config;
pub mod middlewares;
pub mod routes;
pub mod services;
pub mod types;
pub mod utils;
