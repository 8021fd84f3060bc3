// Application layer: commands, queries and their handlers
// Every request goes through the pipeline; every mutation holds the write lock

use std::sync::Arc;

use tokio::sync::Mutex;

pub mod market;
pub mod pipeline;
pub mod players;
pub mod teams;
pub mod validation;

pub use market::MarketService;
pub use pipeline::{Request, RequestHandler, RequestPipeline};
pub use players::PlayerService;
pub use teams::TeamService;
pub use validation::{Validate, Validator};

use crate::domain::repositories::{MarketRepository, PlayerRepository, TeamRepository};

/// Serializes mutating commands
///
/// Reads never take it. Each write reads its preconditions and commits while
/// holding the lock, so no two writes interleave.
pub type WriteLock = Arc<Mutex<()>>;

/// All handlers, wired to one set of repositories and one write lock
#[derive(Clone)]
pub struct Services {
    pub pipeline: RequestPipeline,
    pub players: PlayerService,
    pub teams: TeamService,
    pub market: MarketService,
}

impl Services {
    pub fn new(
        players: Arc<dyn PlayerRepository>,
        teams: Arc<dyn TeamRepository>,
        market: Arc<dyn MarketRepository>,
    ) -> Self {
        let write_lock: WriteLock = Arc::new(Mutex::new(()));

        Self {
            pipeline: RequestPipeline::new(),
            players: PlayerService::new(
                players.clone(),
                teams.clone(),
                market.clone(),
                write_lock.clone(),
            ),
            teams: TeamService::new(
                teams.clone(),
                players.clone(),
                market.clone(),
                write_lock.clone(),
            ),
            market: MarketService::new(players, teams, market, write_lock),
        }
    }
}
