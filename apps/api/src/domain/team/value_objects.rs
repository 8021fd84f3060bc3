use serde::{Deserialize, Serialize};

/// Profile fields of a team, everything except identity and roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamProfile {
    pub name: String,
    pub country: String,
    pub league: String,
}

impl TeamProfile {
    pub fn new(
        name: impl Into<String>,
        country: impl Into<String>,
        league: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            country: country.into(),
            league: league.into(),
        }
    }

    /// Returns a copy with every provided field replacing the current one
    pub fn merge(
        &self,
        name: Option<String>,
        country: Option<String>,
        league: Option<String>,
    ) -> Self {
        Self {
            name: name.unwrap_or_else(|| self.name.clone()),
            country: country.unwrap_or_else(|| self.country.clone()),
            league: league.unwrap_or_else(|| self.league.clone()),
        }
    }
}

/// Players currently attached to a team, by player id
///
/// # Invariants
/// - No player id appears twice
/// - Order is insertion order but carries no meaning
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Roster(Vec<String>);

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a player id, returns false if it was already present
    pub fn add(&mut self, player_id: &str) -> bool {
        if self.contains(player_id) {
            return false;
        }
        self.0.push(player_id.to_string());
        true
    }

    /// Removes a player id, returns false if it was not present
    pub fn remove(&mut self, player_id: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|id| id != player_id);
        self.0.len() != before
    }

    pub fn contains(&self, player_id: &str) -> bool {
        self.0.iter().any(|id| id == player_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn ids(&self) -> &[String] {
        &self.0
    }
}

impl From<Vec<String>> for Roster {
    fn from(ids: Vec<String>) -> Self {
        let mut roster = Roster::new();
        for id in &ids {
            roster.add(id);
        }
        roster
    }
}

impl From<Roster> for Vec<String> {
    fn from(roster: Roster) -> Self {
        roster.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_is_duplicate_free() {
        let mut roster = Roster::new();

        assert!(roster.add("p1"));
        assert!(!roster.add("p1"));
        assert!(roster.add("p2"));

        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn remove_reports_membership() {
        let mut roster = Roster::from(vec!["p1".to_string(), "p2".to_string()]);

        assert!(roster.remove("p1"));
        assert!(!roster.remove("p1"));
        assert!(!roster.contains("p1"));
        assert!(roster.contains("p2"));
    }

    #[test]
    fn from_vec_drops_duplicates() {
        let roster = Roster::from(vec!["p1".to_string(), "p1".to_string(), "p2".to_string()]);

        assert_eq!(roster.ids(), &["p1".to_string(), "p2".to_string()]);
    }

    #[test]
    fn serializes_as_plain_array() {
        let roster = Roster::from(vec!["p1".to_string()]);

        let json = serde_json::to_string(&roster).unwrap();
        assert_eq!(json, r#"["p1"]"#);

        let back: Roster = serde_json::from_str(r#"["p1","p1"]"#).unwrap();
        assert_eq!(back.len(), 1);
    }

    #[test]
    fn merge_keeps_absent_fields() {
        let profile = TeamProfile::new("Ajax", "Netherlands", "Eredivisie");

        let merged = profile.merge(Some("AFC Ajax".to_string()), None, None);

        assert_eq!(merged.name, "AFC Ajax");
        assert_eq!(merged.country, "Netherlands");
        assert_eq!(merged.league, "Eredivisie");
    }
}
