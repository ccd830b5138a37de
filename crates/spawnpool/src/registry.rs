//! Per-prefab free lists and the registry that owns them.

use std::collections::HashMap;

use tracing::debug;

use crate::actor::{ActorHandle, PrefabId};
use crate::world::ActorWorld;

/// LIFO free list of deactivated instances of a single prefab.
///
/// Last released, first reused: the instance most recently in play is the
/// one handed back out.
#[derive(Debug, Default)]
pub(crate) struct ActorPool {
    idle: Vec<ActorHandle>,
}

impl ActorPool {
    /// Pop the most recently released instance, stale or not
    fn pop(&mut self) -> Option<ActorHandle> {
        self.idle.pop()
    }

    /// Insert `actor` unless it is already pooled.
    ///
    /// Set semantics: a double release must not produce a duplicate entry,
    /// or the same actor would later be handed to two callers at once.
    /// Returns whether the actor was actually inserted.
    fn insert(&mut self, actor: ActorHandle) -> bool {
        if self.idle.contains(&actor) {
            return false;
        }
        self.idle.push(actor);
        true
    }

    fn len(&self) -> usize {
        self.idle.len()
    }

    fn take_all(&mut self) -> Vec<ActorHandle> {
        std::mem::take(&mut self.idle)
    }
}

/// Every free list in the subsystem, keyed by prefab.
///
/// A prefab with no entry behaves exactly like one with an empty pool; the
/// entry is created on first touch.
#[derive(Debug, Default)]
pub(crate) struct PoolRegistry {
    pools: HashMap<PrefabId, ActorPool>,
    /// Stale handles dropped by [`try_take`](Self::try_take) so far
    discarded: u64,
}

impl PoolRegistry {
    /// Take the most recently pooled instance of `prefab` that the world
    /// still considers alive.
    ///
    /// Stale handles encountered on the way are silently dropped; the host
    /// destroying a pooled actor is expected, not an error. Returns `None`
    /// once the pool is exhausted.
    pub(crate) fn try_take<W: ActorWorld>(
        &mut self,
        world: &W,
        prefab: &PrefabId,
    ) -> Option<ActorHandle> {
        let pool = self.pools.entry(prefab.clone()).or_default();
        while let Some(candidate) = pool.pop() {
            if world.is_valid(candidate) {
                return Some(candidate);
            }
            // Destroyed behind our back; forget the handle and keep looking.
            self.discarded += 1;
            debug!(actor = %candidate, prefab = %prefab, "Discarded stale pooled handle");
        }
        None
    }

    /// Record `actor` as pooled under `prefab`.
    ///
    /// Returns whether the pool actually grew (`false` on a duplicate).
    pub(crate) fn return_actor(&mut self, prefab: &PrefabId, actor: ActorHandle) -> bool {
        self.pools.entry(prefab.clone()).or_default().insert(actor)
    }

    /// Number of instances currently pooled for `prefab`
    pub(crate) fn pooled(&self, prefab: &PrefabId) -> usize {
        self.pools.get(prefab).map_or(0, ActorPool::len)
    }

    /// Stale handles discarded so far
    pub(crate) fn discarded(&self) -> u64 {
        self.discarded
    }

    /// Empty every pool and forget all prefabs, yielding the handles that
    /// were pooled. Validity is the caller's problem; the yielded handles
    /// may include stale ones.
    pub(crate) fn drain_all(&mut self) -> Vec<ActorHandle> {
        let handles: Vec<ActorHandle> = self
            .pools
            .values_mut()
            .flat_map(ActorPool::take_all)
            .collect();
        self.pools.clear();
        handles
    }
}
