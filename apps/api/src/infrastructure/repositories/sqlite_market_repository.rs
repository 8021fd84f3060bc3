use async_trait::async_trait;
use sqlx::{Sqlite, SqlitePool, Transaction};

use super::sqlite_player_repository::{self as players, fetch_players_by_team, update_player};
use super::sqlite_team_repository::{self as teams, fetch_team, fetch_teams_with_player, update_team};
use crate::domain::errors::{FootballError, FootballResult};
use crate::domain::player::Player;
use crate::domain::repositories::MarketRepository;
use crate::domain::team::Team;

/// SQLite implementation of MarketRepository
///
/// Every operation runs in a single write transaction. Entities passed in by
/// the caller are used for their ids; rosters and team references are read
/// again inside the transaction so the writes never act on a stale snapshot.
/// Returning early with `?` drops the transaction, which rolls it back.
#[derive(Debug, Clone)]
pub struct SqliteMarketRepository {
    pool: SqlitePool,
}

impl SqliteMarketRepository {
    /// Creates a new SqliteMarketRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn begin(&self) -> FootballResult<Transaction<'static, Sqlite>> {
        self.pool
            .begin()
            .await
            .map_err(|e| FootballError::Storage(format!("Failed to begin transaction: {}", e)))
    }
}

async fn commit(tx: Transaction<'static, Sqlite>) -> FootballResult<()> {
    tx.commit()
        .await
        .map_err(|e| FootballError::Storage(format!("Failed to commit transaction: {}", e)))
}

/// Loads a player inside the transaction, NotFound if it vanished
async fn reload_player(tx: &mut Transaction<'static, Sqlite>, id: &str) -> FootballResult<Player> {
    players::fetch_player(tx, id)
        .await?
        .ok_or_else(|| FootballError::not_found(players::COLLECTION, id))
}

/// Loads a team inside the transaction, NotFound if it vanished
async fn reload_team(tx: &mut Transaction<'static, Sqlite>, id: &str) -> FootballResult<Team> {
    fetch_team(tx, id)
        .await?
        .ok_or_else(|| FootballError::not_found(teams::COLLECTION, id))
}

#[async_trait]
impl MarketRepository for SqliteMarketRepository {
    async fn sign_player(&self, player: &Player, team: &Team) -> FootballResult<()> {
        let mut tx = self.begin().await?;

        // release the player from any selling team
        let origin_teams = fetch_teams_with_player(&mut tx, player.id(), team.id()).await?;
        for mut origin in origin_teams {
            origin.release(player.id());
            update_team(&mut tx, &origin).await?;
            tracing::debug!(
                player_id = player.id(),
                from_team_id = origin.id(),
                "Released player from origin team"
            );
        }

        let mut signing = reload_team(&mut tx, team.id()).await?;
        signing.sign(player.id());
        update_team(&mut tx, &signing).await?;

        let signed = reload_player(&mut tx, player.id())
            .await?
            .with_team(Some(signing.id().to_string()));
        update_player(&mut tx, &signed).await?;

        commit(tx).await?;

        tracing::info!(
            player_id = player.id(),
            team_id = team.id(),
            "Player signed"
        );
        Ok(())
    }

    async fn drop_player(&self, player: &Player, team: &Team) -> FootballResult<()> {
        let mut tx = self.begin().await?;

        let mut dropping = reload_team(&mut tx, team.id()).await?;
        dropping.release(player.id());
        update_team(&mut tx, &dropping).await?;

        let released = reload_player(&mut tx, player.id()).await?.with_team(None);
        update_player(&mut tx, &released).await?;

        commit(tx).await?;

        tracing::info!(
            player_id = player.id(),
            team_id = team.id(),
            "Player dropped"
        );
        Ok(())
    }

    async fn delete_player(&self, player: &Player) -> FootballResult<()> {
        let mut tx = self.begin().await?;

        let current = reload_player(&mut tx, player.id()).await?;
        if let Some(team_id) = current.team_id() {
            let mut team = reload_team(&mut tx, team_id).await?;
            team.release(player.id());
            update_team(&mut tx, &team).await?;
        }

        players::delete_player(&mut tx, player.id()).await?;
        commit(tx).await?;

        tracing::info!(player_id = player.id(), "Player deleted");
        Ok(())
    }

    async fn delete_team(&self, team: &Team) -> FootballResult<()> {
        let mut tx = self.begin().await?;

        let roster_players = fetch_players_by_team(&mut tx, team.id()).await?;
        let released = roster_players.len();
        for roster_player in roster_players {
            update_player(&mut tx, &roster_player.with_team(None)).await?;
        }

        teams::delete_team(&mut tx, team.id()).await?;
        commit(tx).await?;

        tracing::info!(team_id = team.id(), released, "Team deleted");
        Ok(())
    }
}
