pub mod client;
pub mod config;
pub mod error;
pub mod extractor;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod telemetry;
pub mod ui;

pub use routes::{create_router, AppState};

/// Product name used as the prefix of user-facing error messages
pub const PROJECT_NAME: &str = "BookHive";
