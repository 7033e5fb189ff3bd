//! Script Forge - script assembly, validation and export for social
//! deduction games
//!
//! The crate is the generator component a hosting UI embeds: it loads
//! the character catalog from the external API (with a built-in
//! fallback), filters it, assembles scripts in random, manual or
//! hybrid mode against the per-team quota table, derives night orders,
//! validates drafts and exports them as interchange JSON.

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{CatalogSource, ScriptSession};
