//! Character entity - immutable catalog reference data

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Team;

/// Coarse difficulty tag attached to some catalog characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Beginner,
    Intermediate,
    Advanced,
}

/// A character from the catalog.
///
/// Loaded once per session from the catalog API (or the built-in
/// fallback) and never mutated afterwards. `first_night` / `other_night`
/// are night-sheet positions; 0 means the character does not act that
/// night.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    pub id: String,
    /// Display name (localized).
    pub name: String,
    /// English name, when the catalog provides one.
    #[serde(default)]
    pub name_en: Option<String>,
    pub team: Team,
    pub ability: String,
    /// Whether the character modifies setup (bracketed ability text).
    #[serde(default)]
    pub setup: bool,
    #[serde(default)]
    pub first_night: u32,
    #[serde(default)]
    pub other_night: u32,
    #[serde(default)]
    pub reminders: Vec<String>,
    /// Ids of characters this one is jinxed with.
    #[serde(default)]
    pub jinxes: Vec<String>,
    /// Edition key, e.g. "tb".
    #[serde(default)]
    pub edition: Option<String>,
    #[serde(default)]
    pub complexity: Option<Complexity>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Character {
    pub fn new(id: impl Into<String>, name: impl Into<String>, team: Team) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            name_en: None,
            team,
            ability: String::new(),
            setup: false,
            first_night: 0,
            other_night: 0,
            reminders: Vec::new(),
            jinxes: Vec::new(),
            edition: None,
            complexity: None,
            tags: Vec::new(),
        }
    }

    pub fn with_ability(mut self, ability: impl Into<String>) -> Self {
        self.ability = ability.into();
        self
    }

    pub fn with_name_en(mut self, name_en: impl Into<String>) -> Self {
        self.name_en = Some(name_en.into());
        self
    }

    pub fn with_nights(mut self, first_night: u32, other_night: u32) -> Self {
        self.first_night = first_night;
        self.other_night = other_night;
        self
    }

    pub fn with_edition(mut self, edition: impl Into<String>) -> Self {
        self.edition = Some(edition.into());
        self
    }

    pub fn with_complexity(mut self, complexity: Complexity) -> Self {
        self.complexity = Some(complexity);
        self
    }

    pub fn with_setup(mut self) -> Self {
        self.setup = true;
        self
    }

    pub fn with_reminders<I, S>(mut self, reminders: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reminders = reminders.into_iter().map(Into::into).collect();
        self
    }

    /// True when the character acts on the first night.
    pub fn acts_first_night(&self) -> bool {
        self.first_night > 0
    }

    /// True when the character acts on nights after the first.
    pub fn acts_other_nights(&self) -> bool {
        self.other_night > 0
    }
}

/// The loaded character catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    characters: Vec<Character>,
}

impl Catalog {
    pub fn new(characters: Vec<Character>) -> Self {
        Self { characters }
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Character> {
        self.characters.iter().find(|c| c.id == id)
    }
}
