//! SQLite connection pool and schema setup
//!
//! The store is an embedded SQLite database. File databases run in WAL mode so
//! readers never wait on the market's write transactions; the in-memory
//! database used by tests lives on a single connection because every new
//! connection would open a fresh, empty database.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::domain::errors::FootballError;

/// Embedded schema migrations from `migrations/`
static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();

/// Opens a pool for `database_url` and brings the schema up to date
///
/// # Arguments
/// * `database_url` - `sqlite://path/to/file.db?mode=rwc` or `sqlite::memory:`
/// * `max_connections` - pool size for file databases (ignored for memory)
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .busy_timeout(Duration::from_secs(5));

    let pool = if is_in_memory(database_url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?
    } else {
        SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect_with(options.journal_mode(SqliteJournalMode::Wal))
            .await?
    };

    MIGRATOR.run(&pool).await?;
    tracing::debug!(database_url, "Database schema is up to date");

    Ok(pool)
}

/// Opens a fresh, migrated in-memory database
pub async fn connect_in_memory() -> Result<SqlitePool, sqlx::Error> {
    connect("sqlite::memory:", 1).await
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Maps a sqlx failure onto the domain error type
///
/// Unique violations become `DuplicateId` for `collection`/`id`; everything
/// else is a storage failure.
pub(crate) fn storage_error(err: sqlx::Error, collection: &'static str, id: &str) -> FootballError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            FootballError::DuplicateId {
                collection,
                id: id.to_string(),
            }
        }
        _ => FootballError::Storage(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_in_memory_urls() {
        assert!(is_in_memory("sqlite::memory:"));
        assert!(is_in_memory("sqlite://football?mode=memory&cache=shared"));
        assert!(!is_in_memory("sqlite://football.db?mode=rwc"));
    }

    #[test]
    fn non_database_errors_are_storage_failures() {
        let err = storage_error(sqlx::Error::PoolTimedOut, "players", "p1");
        assert!(matches!(err, FootballError::Storage(_)));
    }

    #[tokio::test]
    async fn in_memory_database_is_migrated() {
        let pool = connect_in_memory().await.expect("in-memory database");

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM teams")
            .fetch_one(&pool)
            .await
            .expect("teams table exists");

        assert_eq!(count, 0);
    }
}
