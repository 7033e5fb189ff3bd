//! Team (faction) classification for catalog characters

use serde::{Deserialize, Serialize};

/// The four teams a character can belong to.
///
/// Scripts are assembled team by team; random generation always
/// processes teams in [`Team::GENERATION_ORDER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    Townsfolk,
    Outsider,
    Minion,
    Demon,
}

impl Team {
    /// All teams, in display order.
    pub const ALL: [Team; 4] = [Team::Townsfolk, Team::Outsider, Team::Minion, Team::Demon];

    /// Fixed processing order for random fills: scarcest pools first,
    /// so exhaustion is reported against the team that caused it.
    pub const GENERATION_ORDER: [Team; 4] =
        [Team::Demon, Team::Minion, Team::Outsider, Team::Townsfolk];

    /// Parse the lowercase team strings used by the catalog API.
    pub fn parse(s: &str) -> Option<Team> {
        match s.to_lowercase().as_str() {
            "townsfolk" => Some(Team::Townsfolk),
            "outsider" => Some(Team::Outsider),
            "minion" => Some(Team::Minion),
            "demon" => Some(Team::Demon),
            _ => None,
        }
    }

    /// The lowercase wire name, as used by the API and the export format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Team::Townsfolk => "townsfolk",
            Team::Outsider => "outsider",
            Team::Minion => "minion",
            Team::Demon => "demon",
        }
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roundtrip() {
        for team in Team::ALL {
            assert_eq!(Team::parse(team.as_str()), Some(team));
        }
        assert_eq!(Team::parse("Demon"), Some(Team::Demon));
        assert_eq!(Team::parse("traveller"), None);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Team::Townsfolk).expect("serialization should succeed");
        assert_eq!(json, "\"townsfolk\"");
        let team: Team = serde_json::from_str("\"demon\"").expect("deserialization should succeed");
        assert_eq!(team, Team::Demon);
    }
}
