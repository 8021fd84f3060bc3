use super::value_objects::{Roster, TeamProfile};
use crate::domain::new_id;

/// Team aggregate root
///
/// Owns the roster side of the player/team relationship.
///
/// # Invariants
/// - The roster never holds the same player twice
/// - Every player in the roster references this team (kept by the market)
///
/// # Example
/// ```
/// use football_api::domain::team::{Team, TeamProfile};
///
/// let mut team = Team::register(TeamProfile::new("Ajax", "Netherlands", "Eredivisie"));
/// assert!(team.sign("player-1"));
/// assert!(team.has_player("player-1"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    id: String,
    profile: TeamProfile,
    roster: Roster,
}

impl Team {
    /// Creates a team with an empty roster and a freshly generated id
    pub fn register(profile: TeamProfile) -> Self {
        Self::new(new_id(), profile)
    }

    /// Creates a team with an empty roster and the given id
    pub fn new(id: impl Into<String>, profile: TeamProfile) -> Self {
        Self {
            id: id.into(),
            profile,
            roster: Roster::new(),
        }
    }

    /// Adds a player to the roster, returns false if already there
    pub fn sign(&mut self, player_id: &str) -> bool {
        self.roster.add(player_id)
    }

    /// Removes a player from the roster, returns false if absent
    pub fn release(&mut self, player_id: &str) -> bool {
        self.roster.remove(player_id)
    }

    /// Returns a copy with the profile replaced, keeping id and roster
    pub fn with_profile(self, profile: TeamProfile) -> Self {
        Self { profile, ..self }
    }

    pub fn has_player(&self, player_id: &str) -> bool {
        self.roster.contains(player_id)
    }

    // ===== Getters =====

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn profile(&self) -> &TeamProfile {
        &self.profile
    }

    pub fn name(&self) -> &str {
        &self.profile.name
    }

    pub fn country(&self) -> &str {
        &self.profile.country
    }

    pub fn league(&self) -> &str {
        &self.profile.league
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Reconstructs a Team from stored data
    ///
    /// Only to be used by repository implementations.
    pub fn from_persistence(id: String, profile: TeamProfile, roster: Roster) -> Self {
        Self {
            id,
            profile,
            roster,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ajax() -> Team {
        Team::register(TeamProfile::new("Ajax", "Netherlands", "Eredivisie"))
    }

    #[test]
    fn register_starts_with_empty_roster() {
        let team = ajax();

        assert_eq!(team.name(), "Ajax");
        assert_eq!(team.country(), "Netherlands");
        assert_eq!(team.league(), "Eredivisie");
        assert!(team.roster().is_empty());
    }

    #[test]
    fn sign_and_release_player() {
        let mut team = ajax();

        assert!(team.sign("p1"));
        assert!(!team.sign("p1"));
        assert!(team.has_player("p1"));

        assert!(team.release("p1"));
        assert!(!team.release("p1"));
        assert!(!team.has_player("p1"));
    }

    #[test]
    fn with_profile_keeps_roster() {
        let mut team = ajax();
        team.sign("p1");
        let id = team.id().to_string();

        let renamed = team.with_profile(TeamProfile::new("AFC Ajax", "Netherlands", "Eredivisie"));

        assert_eq!(renamed.id(), id);
        assert_eq!(renamed.name(), "AFC Ajax");
        assert!(renamed.has_player("p1"));
    }
}
