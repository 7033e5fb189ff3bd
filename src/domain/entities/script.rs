//! Script draft entity - the mutable script being assembled

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::entities::Character;
use crate::domain::value_objects::Team;

/// Advertised difficulty of a finished script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptDifficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

/// A script under construction.
///
/// Characters stay in selection order; team ordering is a presentation
/// concern. The draft lives only as long as its session - there is no
/// persistence beyond the JSON export.
#[derive(Debug, Clone, Default)]
pub struct ScriptDraft {
    pub name: String,
    pub name_en: Option<String>,
    pub author: String,
    pub description: String,
    pub selected: Vec<Character>,
    pub player_count: u8,
    pub difficulty: ScriptDifficulty,
}

impl ScriptDraft {
    pub fn new(name: impl Into<String>, author: impl Into<String>, player_count: u8) -> Self {
        Self {
            name: name.into(),
            author: author.into(),
            player_count,
            ..Default::default()
        }
    }

    pub fn with_name_en(mut self, name_en: impl Into<String>) -> Self {
        self.name_en = Some(name_en.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_difficulty(mut self, difficulty: ScriptDifficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn selected_ids(&self) -> Vec<&str> {
        self.selected.iter().map(|c| c.id.as_str()).collect()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.selected.iter().any(|c| c.id == id)
    }

    /// Selected character count per team; teams with no selection are
    /// present with a zero count.
    pub fn count_by_team(&self) -> HashMap<Team, u8> {
        let mut counts: HashMap<Team, u8> = Team::ALL.iter().map(|t| (*t, 0)).collect();
        for character in &self.selected {
            *counts.entry(character.team).or_insert(0) += 1;
        }
        counts
    }
}
