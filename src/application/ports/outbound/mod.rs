//! Outbound ports - Interfaces that the application requires from external systems

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::entities::Character;

/// Source of the character catalog.
///
/// Implemented by the HTTP catalog client; tests substitute failing or
/// canned implementations to exercise the fallback path.
#[async_trait]
pub trait CatalogPort: Send + Sync {
    /// Fetch the full character list. A single attempt; the caller
    /// bounds the wait and decides what to do on failure.
    async fn fetch_characters(&self) -> Result<Vec<Character>>;
}
