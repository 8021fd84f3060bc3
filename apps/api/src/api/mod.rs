// API layer module (adapters for controllers)
// Handlers translate HTTP into requests and run them through the pipeline

pub mod errors;
pub mod extractors;
pub mod handlers;
pub mod routes;
pub mod state;

pub use errors::ApiError;
pub use routes::router;
pub use state::AppState;
