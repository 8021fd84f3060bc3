use async_trait::async_trait;

use crate::domain::errors::FootballResult;
use crate::domain::player::Player;

/// Repository trait for the Player collection
///
/// Every mutating call is persisted before it returns, so a following `get`
/// observes it. `update` replaces the team reference along with the
/// profile.
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    /// Find a player by id, NotFound if absent
    async fn get(&self, id: &str) -> FootballResult<Player>;

    /// All players, empty when the collection is empty
    async fn get_all(&self) -> FootballResult<Vec<Player>>;

    /// Players matching `predicate`
    async fn filter(
        &self,
        predicate: &(dyn for<'a> Fn(&'a Player) -> bool + Send + Sync),
    ) -> FootballResult<Vec<Player>>;

    /// Insert a new player, DuplicateId if the id is taken
    async fn insert(&self, player: &Player) -> FootballResult<()>;

    /// Replace a stored player, NotFound if absent
    async fn update(&self, player: &Player) -> FootballResult<()>;

    /// Insert or replace
    async fn upsert(&self, player: &Player) -> FootballResult<()>;

    /// Delete a player by id, NotFound if absent
    async fn delete(&self, id: &str) -> FootballResult<()>;

    /// Delete every player
    async fn delete_all(&self) -> FootballResult<()>;
}
