//! Domain services - pure operations over catalog and draft

mod filter;
mod night_order;
mod validator;

pub use filter::{filter_characters, CharacterFilter};
pub use night_order::{derive_night_order, NightOrder};
pub use validator::{validate_draft, ValidationReport};
