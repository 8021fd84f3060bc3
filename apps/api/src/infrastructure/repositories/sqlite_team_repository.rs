use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::{SqliteConnection, SqlitePool};

use crate::domain::errors::{FootballError, FootballResult};
use crate::domain::repositories::TeamRepository;
use crate::domain::team::{Roster, Team, TeamProfile};
use crate::infrastructure::database::storage_error;

pub(crate) const COLLECTION: &str = "teams";

const SELECT_TEAMS: &str = r#"
    SELECT id, name, country, league, player_ids
    FROM teams
"#;

/// Row shape of the `teams` table; the roster is a JSON array of player ids
#[derive(Debug, sqlx::FromRow)]
struct TeamRow {
    id: String,
    name: String,
    country: String,
    league: String,
    player_ids: Json<Vec<String>>,
}

impl From<TeamRow> for Team {
    fn from(row: TeamRow) -> Self {
        Team::from_persistence(
            row.id,
            TeamProfile::new(row.name, row.country, row.league),
            Roster::from(row.player_ids.0),
        )
    }
}

/// SQLite implementation of TeamRepository
#[derive(Debug, Clone)]
pub struct SqliteTeamRepository {
    pool: SqlitePool,
}

impl SqliteTeamRepository {
    /// Creates a new SqliteTeamRepository
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

pub(crate) async fn fetch_team(conn: &mut SqliteConnection, id: &str) -> FootballResult<Option<Team>> {
    let row = sqlx::query_as::<_, TeamRow>(&format!("{SELECT_TEAMS} WHERE id = ?1"))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| storage_error(e, COLLECTION, id))?;

    Ok(row.map(Team::from))
}

pub(crate) async fn fetch_all_teams(conn: &mut SqliteConnection) -> FootballResult<Vec<Team>> {
    let rows = sqlx::query_as::<_, TeamRow>(&format!("{SELECT_TEAMS} ORDER BY rowid"))
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| FootballError::Storage(e.to_string()))?;

    Ok(rows.into_iter().map(Team::from).collect())
}

/// Teams other than `except_team_id` whose roster lists `player_id`
pub(crate) async fn fetch_teams_with_player(
    conn: &mut SqliteConnection,
    player_id: &str,
    except_team_id: &str,
) -> FootballResult<Vec<Team>> {
    let rows = sqlx::query_as::<_, TeamRow>(&format!(
        r#"{SELECT_TEAMS}
        WHERE id <> ?2
          AND EXISTS (SELECT 1 FROM json_each(teams.player_ids) WHERE json_each.value = ?1)
        "#
    ))
    .bind(player_id)
    .bind(except_team_id)
    .fetch_all(&mut *conn)
    .await
    .map_err(|e| FootballError::Storage(e.to_string()))?;

    Ok(rows.into_iter().map(Team::from).collect())
}

pub(crate) async fn insert_team(conn: &mut SqliteConnection, team: &Team) -> FootballResult<()> {
    sqlx::query(
        r#"
        INSERT INTO teams (id, name, country, league, player_ids)
        VALUES (?1, ?2, ?3, ?4, ?5)
        "#,
    )
    .bind(team.id())
    .bind(team.name())
    .bind(team.country())
    .bind(team.league())
    .bind(Json(team.roster().ids()))
    .execute(&mut *conn)
    .await
    .map_err(|e| storage_error(e, COLLECTION, team.id()))?;

    Ok(())
}

/// Replaces profile and roster of an existing team, NotFound if absent
pub(crate) async fn update_team(conn: &mut SqliteConnection, team: &Team) -> FootballResult<()> {
    let result = sqlx::query(
        r#"
        UPDATE teams
        SET name = ?2, country = ?3, league = ?4, player_ids = ?5
        WHERE id = ?1
        "#,
    )
    .bind(team.id())
    .bind(team.name())
    .bind(team.country())
    .bind(team.league())
    .bind(Json(team.roster().ids()))
    .execute(&mut *conn)
    .await
    .map_err(|e| storage_error(e, COLLECTION, team.id()))?;

    if result.rows_affected() == 0 {
        return Err(FootballError::not_found(COLLECTION, team.id()));
    }

    Ok(())
}

pub(crate) async fn upsert_team(conn: &mut SqliteConnection, team: &Team) -> FootballResult<()> {
    sqlx::query(
        r#"
        INSERT INTO teams (id, name, country, league, player_ids)
        VALUES (?1, ?2, ?3, ?4, ?5)
        ON CONFLICT (id) DO UPDATE SET
            name = excluded.name,
            country = excluded.country,
            league = excluded.league,
            player_ids = excluded.player_ids
        "#,
    )
    .bind(team.id())
    .bind(team.name())
    .bind(team.country())
    .bind(team.league())
    .bind(Json(team.roster().ids()))
    .execute(&mut *conn)
    .await
    .map_err(|e| storage_error(e, COLLECTION, team.id()))?;

    Ok(())
}

pub(crate) async fn delete_team(conn: &mut SqliteConnection, id: &str) -> FootballResult<()> {
    let result = sqlx::query("DELETE FROM teams WHERE id = ?1")
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
impl TeamRepository for SqliteTeamRepository {
    async fn get(&self, id: &str) -> FootballResult<Team> {
        let mut conn = self.connection().await?;
        fetch_team(&mut conn, id)
            .await?
            .ok_or_else(|| FootballError::not_found(COLLECTION, id))
    }

    async fn get_all(&self) -> FootballResult<Vec<Team>> {
        let mut conn = self.connection().await?;
        let teams = fetch_all_teams(&mut conn).await?;
        tracing::debug!(count = teams.len(), "Loaded teams");
        Ok(teams)
    }

    async fn filter(
        &self,
        predicate: &(dyn for<'a> Fn(&'a Team) -> bool + Send + Sync),
    ) -> FootballResult<Vec<Team>> {
        let teams = self.get_all().await?;
        Ok(teams.into_iter().filter(|t| predicate(t)).collect())
    }

    async fn insert(&self, team: &Team) -> FootballResult<()> {
        let mut conn = self.connection().await?;
        insert_team(&mut conn, team).await?;
        tracing::debug!(team_id = team.id(), "Inserted team");
        Ok(())
    }

    async fn update(&self, team: &Team) -> FootballResult<()> {
        let mut conn = self.connection().await?;
        update_team(&mut conn, team).await?;
        tracing::debug!(team_id = team.id(), "Updated team");
        Ok(())
    }

    async fn upsert(&self, team: &Team) -> FootballResult<()> {
        let mut conn = self.connection().await?;
        upsert_team(&mut conn, team).await
    }

    async fn delete(&self, id: &str) -> FootballResult<()> {
        let mut conn = self.connection().await?;
        delete_team(&mut conn, id).await?;
        tracing::debug!(team_id = id, "Deleted team");
        Ok(())
    }

    async fn delete_all(&self) -> FootballResult<()> {
        sqlx::query("DELETE FROM teams")
            .execute(&self.pool)
            .await
            .map_err(|e| FootballError::Storage(e.to_string()))?;

        Ok(())
    }
}
