// Domain layer module exports
// Players and teams are independent aggregates; the market keeps their
// references consistent

use uuid::Uuid;

pub mod errors;
pub mod player;
pub mod repositories;
pub mod team;

pub use errors::{FootballError, FootballResult, FootballResultExt, ValidationErrors};

/// Generates a fresh entity identifier (32 lowercase hex characters)
pub fn new_id() -> String {
    Uuid::new_v4().simple().to_string()
}
