use async_trait::async_trait;
use sqlx::{SqliteConnection, SqlitePool};

use crate::domain::errors::{FootballError, FootballResult};
use crate::domain::player::{Player, PlayerProfile};
use crate::domain::repositories::PlayerRepository;
use crate::infrastructure::database::storage_error;

pub(crate) const COLLECTION: &str = "players";

const SELECT_PLAYERS: &str = r#"
    SELECT id, name, height_cm, age, nationality, team_id
    FROM players
"#;

/// Row shape of the `players` table
#[derive(Debug, sqlx::FromRow)]
struct PlayerRow {
    id: String,
    name: String,
    height_cm: i64,
    age: i64,
    nationality: String,
    team_id: Option<String>,
}

impl TryFrom<PlayerRow> for Player {
    type Error = FootballError;

    fn try_from(row: PlayerRow) -> Result<Self, Self::Error> {
        let height_cm = u32::try_from(row.height_cm).map_err(|_| {
            FootballError::Storage(format!("Player {} has invalid height {}", row.id, row.height_cm))
        })?;
        let age = u32::try_from(row.age).map_err(|_| {
            FootballError::Storage(format!("Player {} has invalid age {}", row.id, row.age))
        })?;

        Ok(Player::from_persistence(
            row.id,
            PlayerProfile::new(row.name, height_cm, age, row.nationality),
            row.team_id,
        ))
    }
}

/// SQLite implementation of PlayerRepository
///
/// The statement helpers below take a plain connection so the market can run
/// them inside its own transaction.
#[derive(Debug, Clone)]
pub struct SqlitePlayerRepository {
    pool: SqlitePool,
}

impl SqlitePlayerRepository {
    /// Creates a new SqlitePlayerRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for the embedded database
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn connection(&self) -> FootballResult<sqlx::pool::PoolConnection<sqlx::Sqlite>> {
        self.pool
            .acquire()
            .await
            .map_err(|e| FootballError::Storage(e.to_string()))
    }
}

pub(crate) async fn fetch_player(conn: &mut SqliteConnection, id: &str) -> FootballResult<Option<Player>> {
    let row = sqlx::query_as::<_, PlayerRow>(&format!("{SELECT_PLAYERS} WHERE id = ?1"))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| storage_error(e, COLLECTION, id))?;

    row.map(Player::try_from).transpose()
}

pub(crate) async fn fetch_all_players(conn: &mut SqliteConnection) -> FootballResult<Vec<Player>> {
    let rows = sqlx::query_as::<_, PlayerRow>(&format!("{SELECT_PLAYERS} ORDER BY rowid"))
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| FootballError::Storage(e.to_string()))?;

    rows.into_iter().map(Player::try_from).collect()
}

pub(crate) async fn fetch_players_by_team(
    conn: &mut SqliteConnection,
    team_id: &str,
) -> FootballResult<Vec<Player>> {
    let rows =
        sqlx::query_as::<_, PlayerRow>(&format!("{SELECT_PLAYERS} WHERE team_id = ?1 ORDER BY rowid"))
            .bind(team_id)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| FootballError::Storage(e.to_string()))?;

    rows.into_iter().map(Player::try_from).collect()
}

pub(crate) async fn insert_player(conn: &mut SqliteConnection, player: &Player) -> FootballResult<()> {
    sqlx::query(
        r#"
        INSERT INTO players (id, name, height_cm, age, nationality, team_id)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        "#,
    )
    .bind(player.id())
    .bind(player.name())
    .bind(i64::from(player.height_cm()))
    .bind(i64::from(player.age()))
    .bind(player.nationality())
    .bind(player.team_id())
    .execute(&mut *conn)
    .await
    .map_err(|e| storage_error(e, COLLECTION, player.id()))?;

    Ok(())
}

/// Replaces every column of an existing player, NotFound if absent
pub(crate) async fn update_player(conn: &mut SqliteConnection, player: &Player) -> FootballResult<()> {
    let result = sqlx::query(
        r#"
        UPDATE players
        SET name = ?2, height_cm = ?3, age = ?4, nationality = ?5, team_id = ?6
        WHERE id = ?1
        "#,
    )
    .bind(player.id())
    .bind(player.name())
    .bind(i64::from(player.height_cm()))
    .bind(i64::from(player.age()))
    .bind(player.nationality())
    .bind(player.team_id())
    .execute(&mut *conn)
    .await
    .map_err(|e| storage_error(e, COLLECTION, player.id()))?;

    if result.rows_affected() == 0 {
        return Err(FootballError::not_found(COLLECTION, player.id()));
    }

    Ok(())
}

pub(crate) async fn upsert_player(conn: &mut SqliteConnection, player: &Player) -> FootballResult<()> {
    sqlx::query(
        r#"
        INSERT INTO players (id, name, height_cm, age, nationality, team_id)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        ON CONFLICT (id) DO UPDATE SET
            name = excluded.name,
            height_cm = excluded.height_cm,
            age = excluded.age,
            nationality = excluded.nationality,
            team_id = excluded.team_id
        "#,
    )
    .bind(player.id())
    .bind(player.name())
    .bind(i64::from(player.height_cm()))
    .bind(i64::from(player.age()))
    .bind(player.nationality())
    .bind(player.team_id())
    .execute(&mut *conn)
    .await
    .map_err(|e| storage_error(e, COLLECTION, player.id()))?;

    Ok(())
}

pub(crate) async fn delete_player(conn: &mut SqliteConnection, id: &str) -> FootballResult<()> {
    let result = sqlx::query("DELETE FROM players WHERE id = ?1")
        .bind(id)
        .execute(&mut *conn)
        .await
        .map_err(|e| storage_error(e, COLLECTION, id))?;

    if result.rows_affected() == 0 {
        return Err(FootballError::not_found(COLLECTION, id));
    }

    Ok(())
}

#[async_trait]
impl PlayerRepository for SqlitePlayerRepository {
    async fn get(&self, id: &str) -> FootballResult<Player> {
        let mut conn = self.connection().await?;
        fetch_player(&mut conn, id)
            .await?
            .ok_or_else(|| FootballError::not_found(COLLECTION, id))
    }

    async fn get_all(&self) -> FootballResult<Vec<Player>> {
        let mut conn = self.connection().await?;
        let players = fetch_all_players(&mut conn).await?;
        tracing::debug!(count = players.len(), "Loaded players");
        Ok(players)
    }

    async fn filter(
        &self,
        predicate: &(dyn for<'a> Fn(&'a Player) -> bool + Send + Sync),
    ) -> FootballResult<Vec<Player>> {
        let players = self.get_all().await?;
        Ok(players.into_iter().filter(|p| predicate(p)).collect())
    }

    async fn insert(&self, player: &Player) -> FootballResult<()> {
        let mut conn = self.connection().await?;
        insert_player(&mut conn, player).await?;
        tracing::debug!(player_id = player.id(), "Inserted player");
        Ok(())
    }

    async fn update(&self, player: &Player) -> FootballResult<()> {
        let mut conn = self.connection().await?;
        update_player(&mut conn, player).await?;
        tracing::debug!(player_id = player.id(), "Updated player");
        Ok(())
    }

    async fn upsert(&self, player: &Player) -> FootballResult<()> {
        let mut conn = self.connection().await?;
        upsert_player(&mut conn, player).await
    }

    async fn delete(&self, id: &str) -> FootballResult<()> {
        let mut conn = self.connection().await?;
        delete_player(&mut conn, id).await?;
        tracing::debug!(player_id = id, "Deleted player");
        Ok(())
    }

    async fn delete_all(&self) -> FootballResult<()> {
        sqlx::query("DELETE FROM players")
            .execute(&self.pool)
            .await
            .map_err(|e| FootballError::Storage(e.to_string()))?;

        Ok(())
    }
}
