//! Error types for pool operations
use thiserror::Error;

use crate::actor::PrefabId;

/// Result type for pool operations
pub type PoolResult<T> = Result<T, PoolError>;

/// Error type for pool operations.
///
/// Deliberately small: stale handles and foreign releases are handled
/// silently inside the pool (see the manager docs), so only conditions the
/// caller can act on surface here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    /// The requested prefab identifier is empty
    #[error("Invalid prefab: identifier is empty")]
    InvalidPrefab,

    /// The host world is not available for spawning
    #[error("Host world is unavailable")]
    WorldUnavailable,

    /// The host world failed to construct a fresh instance
    #[error("Host failed to construct an instance of prefab '{prefab}'")]
    SpawnFailed {
        /// The prefab that could not be constructed
        prefab: PrefabId,
    },
}

impl PoolError {
    /// Create a construction-failure error for the given prefab
    pub fn spawn_failed(prefab: &PrefabId) -> Self {
        Self::SpawnFailed {
            prefab: prefab.clone(),
        }
    }

    /// Check if this error may clear on its own (retry later)
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::WorldUnavailable)
    }

    /// Get the prefab associated with this error (if any)
    #[must_use]
    pub fn prefab(&self) -> Option<&PrefabId> {
        match self {
            Self::InvalidPrefab | Self::WorldUnavailable => None,
            Self::SpawnFailed { prefab } => Some(prefab),
        }
    }
}
