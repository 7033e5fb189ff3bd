//! Catalog filtering - pure function of (catalog, filter state)

use std::collections::HashSet;

use crate::domain::entities::{Catalog, Character, Complexity};
use crate::domain::value_objects::Team;

/// Filter state across the four dimensions.
///
/// `None` on search/edition/complexity means no constraint on that
/// dimension. The team set is the exception: an empty set matches
/// nothing, because every character belongs to some team and the UI
/// treats unchecking every team as "show none".
#[derive(Debug, Clone)]
pub struct CharacterFilter {
    pub search: Option<String>,
    pub edition: Option<String>,
    pub complexity: Option<Complexity>,
    pub teams: HashSet<Team>,
}

impl Default for CharacterFilter {
    fn default() -> Self {
        Self {
            search: None,
            edition: None,
            complexity: None,
            teams: Team::ALL.into_iter().collect(),
        }
    }
}

impl CharacterFilter {
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
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

    pub fn with_teams<I: IntoIterator<Item = Team>>(mut self, teams: I) -> Self {
        self.teams = teams.into_iter().collect();
        self
    }

    fn matches(&self, character: &Character) -> bool {
        if !self.teams.contains(&character.team) {
            return false;
        }
        if let Some(edition) = &self.edition {
            if character.edition.as_deref() != Some(edition.as_str()) {
                return false;
            }
        }
        if let Some(complexity) = self.complexity {
            if character.complexity != Some(complexity) {
                return false;
            }
        }
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            if needle.is_empty() {
                return true;
            }
            let in_name = character.name.to_lowercase().contains(&needle);
            let in_name_en = character
                .name_en
                .as_deref()
                .is_some_and(|n| n.to_lowercase().contains(&needle));
            let in_ability = character.ability.to_lowercase().contains(&needle);
            if !(in_name || in_name_en || in_ability) {
                return false;
            }
        }
        true
    }
}

/// Subset of the catalog matching every filter dimension.
pub fn filter_characters<'a>(catalog: &'a Catalog, filter: &CharacterFilter) -> Vec<&'a Character> {
    catalog
        .characters()
        .iter()
        .filter(|c| filter.matches(c))
        .collect()
}
