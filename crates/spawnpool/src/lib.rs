//! # spawnpool
//!
//! Instance pooling for game-world actors. Instead of destroying an actor
//! when gameplay is done with it, [`PoolManager::release`] parks it dormant
//! (invisible, collisionless, not ticking) in a per-prefab pool, and the
//! next [`PoolManager::acquire`] for that prefab revives it in place of an
//! expensive fresh construction.
//!
//! The manager is generic over an [`ActorWorld`], the host environment that
//! actually owns actors. Production code implements the trait over the
//! engine's scene API; the [`testing`] module ships a recording fake. The
//! whole subsystem is synchronous and single-threaded: pooling decisions
//! belong on the game loop, not on a background thread.
//!
//! Pooled handles are never trusted: the host may destroy any actor at any
//! time, so the pool re-validates each stored handle before handing it out
//! and silently drops the stale ones.

pub mod actor;
pub mod error;
pub mod manager;
mod ownership;
mod registry;
mod roots;
pub mod testing;
pub mod world;

pub use actor::{ActorHandle, Placement, PoolCategory, Prefab, PrefabId};
pub use error::{PoolError, PoolResult};
pub use manager::{PoolManager, PoolStats};
pub use world::ActorWorld;
