//! Night order derivation - pure function over a selection

use crate::domain::entities::Character;

/// The two wake orders for a script, derived on demand and never stored.
#[derive(Debug, Clone, Default)]
pub struct NightOrder {
    /// Characters acting on the first night, ascending by sheet position.
    pub first_night: Vec<Character>,
    /// Characters acting on later nights, ascending by sheet position.
    pub other_night: Vec<Character>,
}

/// Derive both night sequences from a selection.
///
/// A character appears in a sequence iff its ordering number for that
/// night is positive.
pub fn derive_night_order(selected: &[Character]) -> NightOrder {
    let mut first_night: Vec<Character> = selected
        .iter()
        .filter(|c| c.acts_first_night())
        .cloned()
        .collect();
    first_night.sort_by_key(|c| c.first_night);

    let mut other_night: Vec<Character> = selected
        .iter()
        .filter(|c| c.acts_other_nights())
        .cloned()
        .collect();
    other_night.sort_by_key(|c| c.other_night);

    NightOrder { first_night, other_night }
}
