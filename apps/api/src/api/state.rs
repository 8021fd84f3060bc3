use std::sync::Arc;

use sqlx::SqlitePool;

use crate::application::Services;
use crate::infrastructure::repositories::{
    SqliteMarketRepository, SqlitePlayerRepository, SqliteTeamRepository,
};

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<Services>,
}

impl AppState {
    pub fn new(services: Services) -> Self {
        Self {
            services: Arc::new(services),
        }
    }

    /// Wires the SQLite repositories of one pool into the services
    pub fn sqlite(pool: SqlitePool) -> Self {
        Self::new(Services::new(
            Arc::new(SqlitePlayerRepository::new(pool.clone())),
            Arc::new(SqliteTeamRepository::new(pool.clone())),
            Arc::new(SqliteMarketRepository::new(pool)),
        ))
    }
}
