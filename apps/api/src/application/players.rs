//! Player commands, queries and their handler

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::pipeline::{Request, RequestHandler};
use super::validation::{Validate, Validator};
use super::WriteLock;
use crate::domain::errors::FootballResult;
use crate::domain::player::{Player, PlayerProfile};
use crate::domain::repositories::{MarketRepository, PlayerRepository, TeamRepository};
use crate::domain::team::Team;

/// Team summary embedded in a player response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerTeamResponse {
    pub id: String,
    pub name: String,
}

impl From<&Team> for PlayerTeamResponse {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id().to_string(),
            name: team.name().to_string(),
        }
    }
}

/// Player as returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerResponse {
    pub id: String,
    pub name: String,
    pub height_cm: u32,
    pub age: u32,
    pub nationality: String,
    pub team: Option<PlayerTeamResponse>,
}

impl PlayerResponse {
    fn new(player: &Player, team: Option<PlayerTeamResponse>) -> Self {
        Self {
            id: player.id().to_string(),
            name: player.name().to_string(),
            height_cm: player.height_cm(),
            age: player.age(),
            nationality: player.nationality().to_string(),
            team,
        }
    }
}

/// Registers a new free agent
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreatePlayerCommand {
    pub name: String,
    pub height_cm: i32,
    pub age: i32,
    pub nationality: String,
}

impl Validate for CreatePlayerCommand {
    fn validate(&self) -> FootballResult<()> {
        Validator::new()
            .text("name", &self.name)
            .positive("height_cm", self.height_cm)
            .positive("age", self.age)
            .text("nationality", &self.nationality)
            .finish()
    }
}

impl Request for CreatePlayerCommand {
    type Response = PlayerResponse;
    const NAME: &'static str = "CreatePlayerCommand";
}

#[derive(Debug, Clone)]
pub struct GetPlayerQuery {
    pub id: String,
}

impl Validate for GetPlayerQuery {
    fn validate(&self) -> FootballResult<()> {
        Validator::new().id("id", &self.id).finish()
    }
}

impl Request for GetPlayerQuery {
    type Response = PlayerResponse;
    const NAME: &'static str = "GetPlayerQuery";
}

#[derive(Debug, Clone, Default)]
pub struct GetAllPlayersQuery;

impl Validate for GetAllPlayersQuery {
    fn validate(&self) -> FootballResult<()> {
        Ok(())
    }
}

impl Request for GetAllPlayersQuery {
    type Response = Vec<PlayerResponse>;
    const NAME: &'static str = "GetAllPlayersQuery";
}

/// Replaces every profile field; the team reference is kept
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdatePlayerCommand {
    #[serde(skip)]
    pub id: String,
    pub name: String,
    pub height_cm: i32,
    pub age: i32,
    pub nationality: String,
}

impl Validate for UpdatePlayerCommand {
    fn validate(&self) -> FootballResult<()> {
        Validator::new()
            .bounded_id("id", &self.id)
            .text("name", &self.name)
            .positive("height_cm", self.height_cm)
            .positive("age", self.age)
            .text("nationality", &self.nationality)
            .finish()
    }
}

impl Request for UpdatePlayerCommand {
    type Response = ();
    const NAME: &'static str = "UpdatePlayerCommand";
}

/// Replaces the provided profile fields only
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PatchPlayerCommand {
    #[serde(skip)]
    pub id: String,
    pub name: Option<String>,
    pub height_cm: Option<i32>,
    pub age: Option<i32>,
    pub nationality: Option<String>,
}

impl Validate for PatchPlayerCommand {
    fn validate(&self) -> FootballResult<()> {
        Validator::new()
            .bounded_id("id", &self.id)
            .optional_text("name", self.name.as_deref())
            .optional_positive("height_cm", self.height_cm)
            .optional_positive("age", self.age)
            .optional_text("nationality", self.nationality.as_deref())
            .finish()
    }
}

impl Request for PatchPlayerCommand {
    type Response = ();
    const NAME: &'static str = "PatchPlayerCommand";
}

#[derive(Debug, Clone)]
pub struct DeletePlayerCommand {
    pub id: String,
}

impl Validate for DeletePlayerCommand {
    fn validate(&self) -> FootballResult<()> {
        Validator::new().bounded_id("id", &self.id).finish()
    }
}

impl Request for DeletePlayerCommand {
    type Response = ();
    const NAME: &'static str = "DeletePlayerCommand";
}

/// Handles every player command and query
#[derive(Clone)]
pub struct PlayerService {
    players: Arc<dyn PlayerRepository>,
    teams: Arc<dyn TeamRepository>,
    market: Arc<dyn MarketRepository>,
    write_lock: WriteLock,
}

impl PlayerService {
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

    /// Resolves the player's team for display
    ///
    /// A dangling reference is logged and shown as no team rather than failing
    /// the read.
    async fn team_of(&self, player: &Player) -> FootballResult<Option<PlayerTeamResponse>> {
        let Some(team_id) = player.team_id() else {
            return Ok(None);
        };

        match self.teams.get(team_id).await {
            Ok(team) => Ok(Some(PlayerTeamResponse::from(&team))),
            Err(e) if e.is_not_found() => {
                tracing::warn!(player_id = player.id(), team_id, "Player references a missing team");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

// validated values are positive, so unsigned_abs is the value itself
fn to_u32(value: i32) -> u32 {
    value.unsigned_abs()
}

#[async_trait]
impl RequestHandler<CreatePlayerCommand> for PlayerService {
    async fn handle(&self, command: CreatePlayerCommand) -> FootballResult<PlayerResponse> {
        let _guard = self.write_lock.lock().await;

        let player = Player::register(PlayerProfile::new(
            command.name,
            to_u32(command.height_cm),
            to_u32(command.age),
            command.nationality,
        ));
        self.players.insert(&player).await?;

        Ok(PlayerResponse::new(&player, None))
    }
}

#[async_trait]
impl RequestHandler<GetPlayerQuery> for PlayerService {
    async fn handle(&self, query: GetPlayerQuery) -> FootballResult<PlayerResponse> {
        let player = self.players.get(&query.id).await?;
        let team = self.team_of(&player).await?;
        Ok(PlayerResponse::new(&player, team))
    }
}

#[async_trait]
impl RequestHandler<GetAllPlayersQuery> for PlayerService {
    async fn handle(&self, _query: GetAllPlayersQuery) -> FootballResult<Vec<PlayerResponse>> {
        let players = self.players.get_all().await?;
        let teams = self.teams.get_all().await?;
        let teams_by_id: HashMap<&str, &Team> = teams.iter().map(|t| (t.id(), t)).collect();

        Ok(players
            .iter()
            .map(|player| {
                let team = player
                    .team_id()
                    .and_then(|id| teams_by_id.get(id))
                    .map(|team| PlayerTeamResponse::from(*team));
                PlayerResponse::new(player, team)
            })
            .collect())
    }
}

#[async_trait]
impl RequestHandler<UpdatePlayerCommand> for PlayerService {
    async fn handle(&self, command: UpdatePlayerCommand) -> FootballResult<()> {
        let _guard = self.write_lock.lock().await;

        let current = self.players.get(&command.id).await?;
        let updated = current.with_profile(PlayerProfile::new(
            command.name,
            to_u32(command.height_cm),
            to_u32(command.age),
            command.nationality,
        ));
        self.players.update(&updated).await
    }
}

#[async_trait]
impl RequestHandler<PatchPlayerCommand> for PlayerService {
    async fn handle(&self, command: PatchPlayerCommand) -> FootballResult<()> {
        let _guard = self.write_lock.lock().await;

        let current = self.players.get(&command.id).await?;
        let profile = current.profile().merge(
            command.name,
            command.height_cm.map(to_u32),
            command.age.map(to_u32),
            command.nationality,
        );
        self.players.update(&current.with_profile(profile)).await
    }
}

#[async_trait]
impl RequestHandler<DeletePlayerCommand> for PlayerService {
    async fn handle(&self, command: DeletePlayerCommand) -> FootballResult<()> {
        let _guard = self.write_lock.lock().await;

        let player = self.players.get(&command.id).await?;
        self.market.delete_player(&player).await
    }
}
