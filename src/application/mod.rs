//! Application layer - use cases and session orchestration

pub mod ports;
pub mod services;
pub mod session;

pub use session::{CatalogSource, ScriptSession};
