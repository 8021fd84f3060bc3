//! Sign and drop commands
//!
//! Preconditions (both entities exist, membership) are checked here while the
//! write lock is held; the market repository then applies the writes as one
//! transaction.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use super::pipeline::{Request, RequestHandler};
use super::validation::{Validate, Validator};
use super::WriteLock;
use crate::domain::errors::{FootballError, FootballResult, FootballResultExt};
use crate::domain::repositories::{MarketRepository, PlayerRepository, TeamRepository};

/// Signs a player to a team, transferring it if it plays elsewhere
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SignPlayerCommand {
    #[serde(skip)]
    pub team_id: String,
    pub player_id: String,
}

impl Validate for SignPlayerCommand {
    fn validate(&self) -> FootballResult<()> {
        Validator::new()
            .id("team_id", &self.team_id)
            .id("player_id", &self.player_id)
            .finish()
    }
}

impl Request for SignPlayerCommand {
    type Response = ();
    const NAME: &'static str = "SignPlayerCommand";
}

/// Releases a player from a team
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DropPlayerCommand {
    #[serde(skip)]
    pub team_id: String,
    pub player_id: String,
}

impl Validate for DropPlayerCommand {
    fn validate(&self) -> FootballResult<()> {
        Validator::new()
            .id("team_id", &self.team_id)
            .id("player_id", &self.player_id)
            .finish()
    }
}

impl Request for DropPlayerCommand {
    type Response = ();
    const NAME: &'static str = "DropPlayerCommand";
}

/// Handles sign and drop
#[derive(Clone)]
pub struct MarketService {
    players: Arc<dyn PlayerRepository>,
    teams: Arc<dyn TeamRepository>,
    market: Arc<dyn MarketRepository>,
    write_lock: WriteLock,
}

impl MarketService {
    pub fn new(
        players: Arc<dyn PlayerRepository>,
        teams: Arc<dyn TeamRepository>,
        market: Arc<dyn MarketRepository>,
        write_lock: WriteLock,
    ) -> Self {
        Self {
            players,
            teams,
            market,
            write_lock,
        }
    }
}

#[async_trait]
impl RequestHandler<SignPlayerCommand> for MarketService {
    async fn handle(&self, command: SignPlayerCommand) -> FootballResult<()> {
        let SignPlayerCommand { team_id, player_id } = command;
        let _guard = self.write_lock.lock().await;

        let player = self.players.get(&player_id).await.map_not_found(|| {
            FootballError::invalid_market_operation(format!(
                "Failed to sign player {} to team {} because the player was not found.",
                player_id, team_id
            ))
        })?;

        if player.is_signed_to(&team_id) {
            return Err(FootballError::invalid_market_operation(format!(
                "Player {} is already signed to team {}.",
                player_id, team_id
            )));
        }

        let team = self.teams.get(&team_id).await.map_not_found(|| {
            FootballError::invalid_market_operation(format!(
                "Failed to sign player {} to team {} because the team was not found.",
                player_id, team_id
            ))
        })?;

        self.market.sign_player(&player, &team).await
    }
}

#[async_trait]
impl RequestHandler<DropPlayerCommand> for MarketService {
    async fn handle(&self, command: DropPlayerCommand) -> FootballResult<()> {
        let DropPlayerCommand { team_id, player_id } = command;
        let _guard = self.write_lock.lock().await;

        let player = self.players.get(&player_id).await.map_not_found(|| {
            FootballError::invalid_market_operation(format!(
                "Failed to drop player {} from team {} because the player was not found.",
                player_id, team_id
            ))
        })?;

        let team = self.teams.get(&team_id).await.map_not_found(|| {
            FootballError::invalid_market_operation(format!(
                "Failed to drop player {} from team {} because the team was not found.",
                player_id, team_id
            ))
        })?;

        if !team.has_player(player.id()) {
            return Err(FootballError::invalid_market_operation(format!(
                "Failed to drop player {} from team {} because the player is not signed to the team.",
                player_id, team_id
            )));
        }

        self.market.drop_player(&player, &team).await
    }
}
