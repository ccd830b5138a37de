//! Core vocabulary for pooled actors: handles, prefab identity, placement.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Opaque handle to a live actor owned by the host world.
///
/// Handles are minted by the host when it spawns an actor; the pool never
/// fabricates one. A handle can go stale at any time, since the host is
/// free to destroy actors behind the pool's back, so every stored handle is
/// re-validated against the host before it is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ActorHandle(u64);

impl ActorHandle {
    /// Wrap a raw host identifier
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw host identifier
    #[must_use]
    pub const fn into_raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ActorHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "actor#{}", self.0)
    }
}

/// Identifier of a spawnable actor kind (a "prefab").
///
/// This is what keys a pool: every pooled instance of the same prefab is
/// interchangeable. An empty identifier is never valid and is rejected at
/// the manager boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PrefabId(String);

impl PrefabId {
    /// Create a prefab identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the identifier is empty (and therefore unusable as a pool key)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for PrefabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PrefabId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PrefabId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Scene-graph grouping for pooled actors.
///
/// Categories only decide which group actor an instance is parented under,
/// to keep the host's scene outliner tidy. They never affect reuse: pools
/// are keyed by prefab alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PoolCategory {
    /// General gameplay actors
    #[default]
    Gameplay,
    /// Short-lived projectiles
    Projectiles,
    /// Particle and audio effect carriers
    Effects,
    /// Camera-facing billboard actors
    Billboards,
}

impl PoolCategory {
    /// All categories, in declaration order
    pub const ALL: [Self; 4] = [
        Self::Gameplay,
        Self::Projectiles,
        Self::Effects,
        Self::Billboards,
    ];

    /// Label given to this category's group actor in the host scene
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Gameplay => "Pool_Gameplay",
            Self::Projectiles => "Pool_Projectiles",
            Self::Effects => "Pool_Effects",
            Self::Billboards => "Pool_Billboards",
        }
    }
}

impl fmt::Display for PoolCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Gameplay => "gameplay",
            Self::Projectiles => "projectiles",
            Self::Effects => "effects",
            Self::Billboards => "billboards",
        };
        f.write_str(name)
    }
}

/// Where to put an actor when it is handed out.
///
/// Position and orientation are plain scene-unit triples, passed through to
/// the host untouched. Orientation is degrees of pitch, yaw and roll.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Placement {
    /// World-space position
    pub position: [f32; 3],
    /// Rotation in degrees (pitch, yaw, roll)
    pub orientation: [f32; 3],
}

impl Placement {
    /// Create a placement from a position and an orientation
    #[must_use]
    pub const fn new(position: [f32; 3], orientation: [f32; 3]) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// Placement at a position with identity orientation
    #[must_use]
    pub const fn at(position: [f32; 3]) -> Self {
        Self {
            position,
            orientation: [0.0; 3],
        }
    }
}

/// A typed description of a spawnable kind.
///
/// Implement this on unit types that know their own prefab identifier and
/// category; the manager's `acquire_as` / `prewarm_as` entry points then
/// route through the right pool without stringly-typed call sites.
pub trait Prefab {
    /// Pool key for this kind
    fn prefab_id(&self) -> PrefabId;

    /// Scene grouping for freshly created instances
    fn category(&self) -> PoolCategory {
        PoolCategory::Gameplay
    }
}
