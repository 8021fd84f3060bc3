use async_trait::async_trait;

use crate::domain::errors::FootballResult;
use crate::domain::player::Player;
use crate::domain::team::Team;

/// Cross-collection operations that keep player and team references in sync
///
/// Each method is one all-or-nothing unit: either every write it performs is
/// visible afterwards or none is. Existence and membership preconditions are
/// the caller's job; implementations do not re-check them.
#[async_trait]
pub trait MarketRepository: Send + Sync {
    /// Signs `player` to `team`
    ///
    /// Removes the player from the roster of any other team first, then adds
    /// it to `team`'s roster, then points the player at `team`.
    async fn sign_player(&self, player: &Player, team: &Team) -> FootballResult<()>;

    /// Drops `player` from `team`
    ///
    /// Removes the player from the roster, then clears the player's team.
    async fn drop_player(&self, player: &Player, team: &Team) -> FootballResult<()>;

    /// Deletes `player`, removing it from its team's roster in the same unit
    async fn delete_player(&self, player: &Player) -> FootballResult<()>;

    /// Deletes `team`, clearing the team of every roster player in the same unit
    async fn delete_team(&self, team: &Team) -> FootballResult<()>;
}
