//! Shared setup for integration tests: one fresh in-memory database per test

#![allow(dead_code)]

use std::sync::Arc;

use football_api::application::Services;
use football_api::domain::player::{Player, PlayerProfile};
use football_api::domain::repositories::{PlayerRepository, TeamRepository};
use football_api::domain::team::{Team, TeamProfile};
use football_api::infrastructure::database;
use football_api::infrastructure::repositories::{
    SqliteMarketRepository, SqlitePlayerRepository, SqliteTeamRepository,
};
use sqlx::SqlitePool;

pub struct TestContext {
    pub pool: SqlitePool,
    pub players: Arc<SqlitePlayerRepository>,
    pub teams: Arc<SqliteTeamRepository>,
    pub market: Arc<SqliteMarketRepository>,
}

impl TestContext {
    pub fn services(&self) -> Services {
        Services::new(
            self.players.clone(),
            self.teams.clone(),
            self.market.clone(),
        )
    }
}

/// Setup test database with repositories
pub async fn setup() -> TestContext {
    let pool = database::connect_in_memory()
        .await
        .expect("Failed to open in-memory database");

    TestContext {
        players: Arc::new(SqlitePlayerRepository::new(pool.clone())),
        teams: Arc::new(SqliteTeamRepository::new(pool.clone())),
        market: Arc::new(SqliteMarketRepository::new(pool.clone())),
        pool,
    }
}

/// Setup a file database with a multi-connection WAL pool
///
/// The returned directory must outlive the context.
pub async fn setup_file() -> (tempfile::TempDir, TestContext) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("football.db").display());
    let pool = database::connect(&url, 4)
        .await
        .expect("Failed to open file database");

    let ctx = TestContext {
        players: Arc::new(SqlitePlayerRepository::new(pool.clone())),
        teams: Arc::new(SqliteTeamRepository::new(pool.clone())),
        market: Arc::new(SqliteMarketRepository::new(pool.clone())),
        pool,
    };
    (dir, ctx)
}

pub fn player(id: &str, name: &str) -> Player {
    Player::new(id, PlayerProfile::new(name, 180, 25, "Netherlands"))
}

pub fn team(id: &str, name: &str) -> Team {
    Team::new(id, TeamProfile::new(name, "Netherlands", "Eredivisie"))
}

/// Asserts both directions of the player/team reference rule
pub async fn assert_consistent(players: &dyn PlayerRepository, teams: &dyn TeamRepository) {
    let all_players = players.get_all().await.expect("Failed to list players");
    let all_teams = teams.get_all().await.expect("Failed to list teams");

    for team in &all_teams {
        for player_id in team.roster().ids() {
            let player = players
                .get(player_id)
                .await
                .expect("Roster references a missing player");
            assert_eq!(
                player.team_id(),
                Some(team.id()),
                "Player {} is on roster of {} but references {:?}",
                player_id,
                team.id(),
                player.team_id()
            );
        }
    }

    for player in &all_players {
        if let Some(team_id) = player.team_id() {
            let team = teams
                .get(team_id)
                .await
                .expect("Player references a missing team");
            assert!(
                team.has_player(player.id()),
                "Player {} references {} but is not on its roster",
                player.id(),
                team_id
            );
        }
        let holders = all_teams.iter().filter(|t| t.has_player(player.id())).count();
        assert!(holders <= 1, "Player {} is on {} rosters", player.id(), holders);
    }
}
