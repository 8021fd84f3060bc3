use async_trait::async_trait;

use crate::domain::errors::FootballResult;
use crate::domain::team::Team;

/// Repository trait for the Team collection
///
/// Every mutating call is persisted before it returns, so a following `get`
/// observes it. The roster is stored as part of the team and `update`
/// replaces it along with the profile.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Find a team by id, NotFound if absent
    async fn get(&self, id: &str) -> FootballResult<Team>;

    /// All teams, empty when the collection is empty
    async fn get_all(&self) -> FootballResult<Vec<Team>>;

    /// Teams matching `predicate`
    async fn filter(
        &self,
        predicate: &(dyn for<'a> Fn(&'a Team) -> bool + Send + Sync),
    ) -> FootballResult<Vec<Team>>;

    /// Insert a new team, DuplicateId if the id is taken
    async fn insert(&self, team: &Team) -> FootballResult<()>;

    /// Replace a stored team, NotFound if absent
    async fn update(&self, team: &Team) -> FootballResult<()>;

    /// Insert or replace
    async fn upsert(&self, team: &Team) -> FootballResult<()>;

    /// Delete a team by id, NotFound if absent
    async fn delete(&self, id: &str) -> FootballResult<()>;

    /// Delete every team
    async fn delete_all(&self) -> FootballResult<()>;
}
