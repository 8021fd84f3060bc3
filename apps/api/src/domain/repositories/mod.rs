// Repository contracts (ports)
// Infrastructure provides the adapters

pub mod market_repository;
pub mod player_repository;
pub mod team_repository;

pub use market_repository::MarketRepository;
pub use player_repository::PlayerRepository;
pub use team_repository::TeamRepository;
