// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces on SQLite

pub mod sqlite_market_repository;
pub mod sqlite_player_repository;
pub mod sqlite_team_repository;

pub use sqlite_market_repository::SqliteMarketRepository;
pub use sqlite_player_repository::SqlitePlayerRepository;
pub use sqlite_team_repository::SqliteTeamRepository;
