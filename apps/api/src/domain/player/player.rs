use super::value_objects::PlayerProfile;
use crate::domain::new_id;

/// Player aggregate
///
/// A player belongs to at most one team. The team reference is only changed
/// by market operations; profile updates carry it over untouched.
///
/// # Example
/// ```
/// use football_api::domain::player::{Player, PlayerProfile};
///
/// let player = Player::register(PlayerProfile::new("Cristiano Ronaldo", 187, 39, "Portugal"));
///
/// assert_eq!(player.name(), "Cristiano Ronaldo");
/// assert!(player.team_id().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: String,
    profile: PlayerProfile,
    team_id: Option<String>,
}

impl Player {
    /// Creates a free agent with a freshly generated id
    pub fn register(profile: PlayerProfile) -> Self {
        Self::new(new_id(), profile)
    }

    /// Creates a free agent with the given id
    pub fn new(id: impl Into<String>, profile: PlayerProfile) -> Self {
        Self {
            id: id.into(),
            profile,
            team_id: None,
        }
    }

    /// Returns a copy referencing `team_id` (or no team)
    pub fn with_team(self, team_id: Option<String>) -> Self {
        Self { team_id, ..self }
    }

    /// Returns a copy with the profile replaced, keeping id and team
    pub fn with_profile(self, profile: PlayerProfile) -> Self {
        Self { profile, ..self }
    }

    /// True when the player currently references `team_id`
    pub fn is_signed_to(&self, team_id: &str) -> bool {
        self.team_id.as_deref() == Some(team_id)
    }

    // ===== Getters =====

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn profile(&self) -> &PlayerProfile {
        &self.profile
    }

    pub fn name(&self) -> &str {
        &self.profile.name
    }

    pub fn height_cm(&self) -> u32 {
        self.profile.height_cm
    }

    pub fn age(&self) -> u32 {
        self.profile.age
    }

    pub fn nationality(&self) -> &str {
        &self.profile.nationality
    }

    /// Returns the id of the team the player belongs to, if any
    pub fn team_id(&self) -> Option<&str> {
        self.team_id.as_deref()
    }

    /// Reconstructs a Player from stored data
    ///
    /// Only to be used by repository implementations.
    pub fn from_persistence(id: String, profile: PlayerProfile, team_id: Option<String>) -> Self {
        Self {
            id,
            profile,
            team_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ronaldo() -> Player {
        Player::register(PlayerProfile::new("Cristiano Ronaldo", 187, 39, "Portugal"))
    }

    #[test]
    fn register_generates_distinct_ids() {
        let a = ronaldo();
        let b = ronaldo();

        assert_eq!(a.id().len(), 32);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn new_player_is_free_agent() {
        let player = ronaldo();

        assert!(player.team_id().is_none());
        assert!(!player.is_signed_to("ajax"));
    }

    #[test]
    fn with_team_sets_and_clears_reference() {
        let player = ronaldo().with_team(Some("ajax".to_string()));
        assert!(player.is_signed_to("ajax"));
        assert_eq!(player.team_id(), Some("ajax"));

        let player = player.with_team(None);
        assert!(player.team_id().is_none());
    }

    #[test]
    fn with_profile_keeps_identity_and_team() {
        let player = ronaldo().with_team(Some("ajax".to_string()));
        let id = player.id().to_string();

        let updated = player.with_profile(PlayerProfile::new("CR7", 187, 40, "Portugal"));

        assert_eq!(updated.id(), id);
        assert_eq!(updated.name(), "CR7");
        assert_eq!(updated.age(), 40);
        assert_eq!(updated.team_id(), Some("ajax"));
    }
}
