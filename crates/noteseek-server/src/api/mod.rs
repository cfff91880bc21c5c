//! HTTP API handlers for noteseek-server

pub mod health;
pub mod notes;

pub use health::health_routes;
pub use notes::extract_notes;
