//! Domain entities - Core business objects with identity

mod character;
mod script;

pub use character::{Catalog, Character, Complexity};
pub use script::{ScriptDifficulty, ScriptDraft};
