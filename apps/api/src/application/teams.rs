//! Team commands, queries and their handler

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::pipeline::{Request, RequestHandler};
use super::validation::{Validate, Validator};
use super::WriteLock;
use crate::domain::errors::FootballResult;
use crate::domain::player::Player;
use crate::domain::repositories::{MarketRepository, PlayerRepository, TeamRepository};
use crate::domain::team::{Team, TeamProfile};

/// Team as returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamResponse {
    pub id: String,
    pub name: String,
    pub country: String,
    pub league: String,
    pub player_ids: Vec<String>,
}

impl From<&Team> for TeamResponse {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id().to_string(),
            name: team.name().to_string(),
            country: team.country().to_string(),
            league: team.league().to_string(),
            player_ids: team.roster().ids().to_vec(),
        }
    }
}

/// Roster entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamPlayerResponse {
    pub id: String,
    pub name: String,
    pub height_cm: u32,
    pub age: u32,
    pub nationality: String,
}

impl From<&Player> for TeamPlayerResponse {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id().to_string(),
            name: player.name().to_string(),
            height_cm: player.height_cm(),
            age: player.age(),
            nationality: player.nationality().to_string(),
        }
    }
}

/// Registers a new team with an empty roster
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateTeamCommand {
    pub name: String,
    pub country: String,
    pub league: String,
}

impl Validate for CreateTeamCommand {
    fn validate(&self) -> FootballResult<()> {
        Validator::new()
            .text("name", &self.name)
            .text("country", &self.country)
            .text("league", &self.league)
            .finish()
    }
}

impl Request for CreateTeamCommand {
    type Response = TeamResponse;
    const NAME: &'static str = "CreateTeamCommand";
}

#[derive(Debug, Clone)]
pub struct GetTeamQuery {
    pub id: String,
}

impl Validate for GetTeamQuery {
    fn validate(&self) -> FootballResult<()> {
        Validator::new().id("id", &self.id).finish()
    }
}

impl Request for GetTeamQuery {
    type Response = TeamResponse;
    const NAME: &'static str = "GetTeamQuery";
}

#[derive(Debug, Clone, Default)]
pub struct GetAllTeamsQuery;

impl Validate for GetAllTeamsQuery {
    fn validate(&self) -> FootballResult<()> {
        Ok(())
    }
}

impl Request for GetAllTeamsQuery {
    type Response = Vec<TeamResponse>;
    const NAME: &'static str = "GetAllTeamsQuery";
}

/// Players on a team's roster
#[derive(Debug, Clone)]
pub struct GetTeamPlayersQuery {
    pub team_id: String,
}

impl Validate for GetTeamPlayersQuery {
    fn validate(&self) -> FootballResult<()> {
        Validator::new().id("team_id", &self.team_id).finish()
    }
}

impl Request for GetTeamPlayersQuery {
    type Response = Vec<TeamPlayerResponse>;
    const NAME: &'static str = "GetTeamPlayersQuery";
}

/// Replaces every profile field; the roster is kept
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateTeamCommand {
    #[serde(skip)]
    pub id: String,
    pub name: String,
    pub country: String,
    pub league: String,
}

impl Validate for UpdateTeamCommand {
    fn validate(&self) -> FootballResult<()> {
        Validator::new()
            .bounded_id("id", &self.id)
            .text("name", &self.name)
            .text("country", &self.country)
            .text("league", &self.league)
            .finish()
    }
}

impl Request for UpdateTeamCommand {
    type Response = ();
    const NAME: &'static str = "UpdateTeamCommand";
}

/// Replaces the provided profile fields only
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PatchTeamCommand {
    #[serde(skip)]
    pub id: String,
    pub name: Option<String>,
    pub country: Option<String>,
    pub league: Option<String>,
}

impl Validate for PatchTeamCommand {
    fn validate(&self) -> FootballResult<()> {
        Validator::new()
            .bounded_id("id", &self.id)
            .optional_text("name", self.name.as_deref())
            .optional_text("country", self.country.as_deref())
            .optional_text("league", self.league.as_deref())
            .finish()
    }
}

impl Request for PatchTeamCommand {
    type Response = ();
    const NAME: &'static str = "PatchTeamCommand";
}

#[derive(Debug, Clone)]
pub struct DeleteTeamCommand {
    pub id: String,
}

impl Validate for DeleteTeamCommand {
    fn validate(&self) -> FootballResult<()> {
        Validator::new().bounded_id("id", &self.id).finish()
    }
}

impl Request for DeleteTeamCommand {
    type Response = ();
    const NAME: &'static str = "DeleteTeamCommand";
}

/// Handles every team command and query
#[derive(Clone)]
pub struct TeamService {
    teams: Arc<dyn TeamRepository>,
    players: Arc<dyn PlayerRepository>,
    market: Arc<dyn MarketRepository>,
    write_lock: WriteLock,
}

impl TeamService {
    pub fn new(
        teams: Arc<dyn TeamRepository>,
        players: Arc<dyn PlayerRepository>,
        market: Arc<dyn MarketRepository>,
        write_lock: WriteLock,
    ) -> Self {
        Self {
            teams,
            players,
            market,
            write_lock,
        }
    }
}

#[async_trait]
impl RequestHandler<CreateTeamCommand> for TeamService {
    async fn handle(&self, command: CreateTeamCommand) -> FootballResult<TeamResponse> {
        let _guard = self.write_lock.lock().await;

        let team = Team::register(TeamProfile::new(command.name, command.country, command.league));
        self.teams.insert(&team).await?;

        Ok(TeamResponse::from(&team))
    }
}

#[async_trait]
impl RequestHandler<GetTeamQuery> for TeamService {
    async fn handle(&self, query: GetTeamQuery) -> FootballResult<TeamResponse> {
        let team = self.teams.get(&query.id).await?;
        Ok(TeamResponse::from(&team))
    }
}

#[async_trait]
impl RequestHandler<GetAllTeamsQuery> for TeamService {
    async fn handle(&self, _query: GetAllTeamsQuery) -> FootballResult<Vec<TeamResponse>> {
        let teams = self.teams.get_all().await?;
        Ok(teams.iter().map(TeamResponse::from).collect())
    }
}

#[async_trait]
impl RequestHandler<GetTeamPlayersQuery> for TeamService {
    async fn handle(&self, query: GetTeamPlayersQuery) -> FootballResult<Vec<TeamPlayerResponse>> {
        let team = self.teams.get(&query.team_id).await?;
        let roster = self
            .players
            .filter(&|player: &Player| team.has_player(player.id()))
            .await?;

        Ok(roster.iter().map(TeamPlayerResponse::from).collect())
    }
}

#[async_trait]
impl RequestHandler<UpdateTeamCommand> for TeamService {
    async fn handle(&self, command: UpdateTeamCommand) -> FootballResult<()> {
        let _guard = self.write_lock.lock().await;

        let current = self.teams.get(&command.id).await?;
        let updated = current.with_profile(TeamProfile::new(
            command.name,
            command.country,
            command.league,
        ));
        self.teams.update(&updated).await
    }
}

#[async_trait]
impl RequestHandler<PatchTeamCommand> for TeamService {
    async fn handle(&self, command: PatchTeamCommand) -> FootballResult<()> {
        let _guard = self.write_lock.lock().await;

        let current = self.teams.get(&command.id).await?;
        let profile = current
            .profile()
            .merge(command.name, command.country, command.league);
        self.teams.update(&current.with_profile(profile)).await
    }
}

#[async_trait]
impl RequestHandler<DeleteTeamCommand> for TeamService {
    async fn handle(&self, command: DeleteTeamCommand) -> FootballResult<()> {
        let _guard = self.write_lock.lock().await;

        let team = self.teams.get(&command.id).await?;
        self.market.delete_team(&team).await
    }
}
