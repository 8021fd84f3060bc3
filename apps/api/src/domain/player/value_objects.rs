use serde::{Deserialize, Serialize};

/// Profile fields of a player, everything except identity and team reference
///
/// Range checks live in the request validators; a profile that reaches the
/// domain has already been validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub name: String,
    pub height_cm: u32,
    pub age: u32,
    pub nationality: String,
}

impl PlayerProfile {
    pub fn new(
        name: impl Into<String>,
        height_cm: u32,
        age: u32,
        nationality: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            height_cm,
            age,
            nationality: nationality.into(),
        }
    }

    /// Returns a copy with every provided field replacing the current one
    pub fn merge(
        &self,
        name: Option<String>,
        height_cm: Option<u32>,
        age: Option<u32>,
        nationality: Option<String>,
    ) -> Self {
        Self {
            name: name.unwrap_or_else(|| self.name.clone()),
            height_cm: height_cm.unwrap_or(self.height_cm),
            age: age.unwrap_or(self.age),
            nationality: nationality.unwrap_or_else(|| self.nationality.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_keeps_absent_fields() {
        let profile = PlayerProfile::new("Mika Godts", 176, 19, "Belgium");

        let merged = profile.merge(None, None, Some(20), None);

        assert_eq!(merged.name, "Mika Godts");
        assert_eq!(merged.height_cm, 176);
        assert_eq!(merged.age, 20);
        assert_eq!(merged.nationality, "Belgium");
    }

    #[test]
    fn merge_replaces_all_provided_fields() {
        let profile = PlayerProfile::new("Mika Godts", 176, 19, "Belgium");

        let merged = profile.merge(
            Some("Brian Brobbey".to_string()),
            Some(182),
            Some(22),
            Some("Netherlands".to_string()),
        );

        assert_eq!(merged, PlayerProfile::new("Brian Brobbey", 182, 22, "Netherlands"));
    }
}
