//! Catalog load lifecycle.

use crate::catalog::CatalogError;

/// Where the one-time catalog load stands.
///
/// Moves `Idle -> Loading -> Loaded | Failed` and never leaves a terminal
/// state; there is no retry.
#[derive(Debug, Default)]
pub enum LoadState {
    /// No request issued yet.
    #[default]
    Idle,
    /// Request in flight.
    Loading { since: web_time::Instant },
    /// Payload parsed. `skipped` counts malformed measures.
    Loaded { count: usize, skipped: usize },
    /// Request or payload failed as a whole.
    Failed(CatalogError),
}

impl LoadState {
    pub fn is_idle(&self) -> bool {
        matches!(self, LoadState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading { .. })
    }

    pub fn error(&self) -> Option<&CatalogError> {
        match self {
            LoadState::Failed(e) => Some(e),
            _ => None,
        }
    }
}
