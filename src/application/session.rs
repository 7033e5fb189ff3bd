//! Script session - the context object owning catalog, draft and state
//!
//! One session per open script editor. All generator operations go
//! through the session instead of ambient globals, so there is exactly
//! one owner for the mutable draft.

use std::time::Duration;

use rand::Rng;
use tracing::{info, warn};

use crate::application::ports::outbound::CatalogPort;
use crate::application::services::{
    generate, GenerationError, GenerationMode, GenerationState,
};
use crate::domain::entities::{Catalog, Character, ScriptDraft};
use crate::domain::services::{
    derive_night_order, filter_characters, validate_draft, CharacterFilter, NightOrder,
    ValidationReport,
};
use crate::infrastructure::fallback::fallback_catalog;

/// Where the session's catalog came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSource {
    Remote,
    /// The built-in catalog; the host may show a passive offline notice.
    Fallback,
}

pub struct ScriptSession {
    catalog: Catalog,
    catalog_source: CatalogSource,
    draft: ScriptDraft,
    state: GenerationState,
}

impl ScriptSession {
    /// Load the catalog through the port, waiting at most `wait`.
    ///
    /// A single attempt; on error or timeout the built-in catalog is
    /// substituted and the session stays fully usable offline.
    pub async fn load(port: &dyn CatalogPort, wait: Duration) -> Self {
        let (catalog, catalog_source) =
            match tokio::time::timeout(wait, port.fetch_characters()).await {
                Ok(Ok(characters)) => {
                    info!(count = characters.len(), "character catalog loaded");
                    (Catalog::new(characters), CatalogSource::Remote)
                }
                Ok(Err(e)) => {
                    warn!("catalog fetch failed, using built-in catalog: {:#}", e);
                    (fallback_catalog(), CatalogSource::Fallback)
                }
                Err(_) => {
                    warn!("catalog fetch timed out after {:?}, using built-in catalog", wait);
                    (fallback_catalog(), CatalogSource::Fallback)
                }
            };

        Self::with_catalog(catalog, catalog_source)
    }

    pub fn with_catalog(catalog: Catalog, catalog_source: CatalogSource) -> Self {
        Self {
            catalog,
            catalog_source,
            draft: ScriptDraft::default(),
            state: GenerationState::Idle,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn catalog_source(&self) -> CatalogSource {
        self.catalog_source
    }

    pub fn draft(&self) -> &ScriptDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut ScriptDraft {
        &mut self.draft
    }

    pub fn state(&self) -> GenerationState {
        self.state
    }

    /// Catalog subset matching the filter.
    pub fn filter(&self, filter: &CharacterFilter) -> Vec<&Character> {
        filter_characters(&self.catalog, filter)
    }

    /// Run a generation against the filtered catalog and, on success,
    /// replace the draft's selection. A rejected generation leaves the
    /// draft exactly as it was.
    pub fn generate<R: Rng>(
        &mut self,
        mode: GenerationMode,
        filter: &CharacterFilter,
        preselected: &[Character],
        rng: &mut R,
    ) -> Result<NightOrder, GenerationError> {
        self.state = GenerationState::Generating;
        let pool = filter_characters(&self.catalog, filter);
        match generate(&pool, mode, self.draft.player_count, preselected, rng) {
            Ok(outcome) => {
                self.draft.selected = outcome.characters;
                self.state = GenerationState::Done;
                Ok(outcome.night_order)
            }
            Err(e) => {
                self.state = GenerationState::Rejected;
                Err(e)
            }
        }
    }

    pub fn night_order(&self) -> NightOrder {
        derive_night_order(&self.draft.selected)
    }

    pub fn validate(&self) -> ValidationReport {
        validate_draft(&self.draft)
    }
}
