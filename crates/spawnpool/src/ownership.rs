//! Reverse ownership map: which prefab a managed actor belongs to.

use std::collections::HashMap;

use crate::actor::{ActorHandle, PrefabId};

/// Maps every actor this subsystem ever constructed (and has not torn down)
/// back to the prefab whose pool it belongs to.
///
/// Entries persist while the actor cycles between pooled and in-play; only
/// teardown forgets them. An actor with no entry is foreign: it was
/// produced elsewhere and must never be pooled here.
#[derive(Debug, Default)]
pub(crate) struct OwnershipIndex {
    owners: HashMap<ActorHandle, PrefabId>,
}

impl OwnershipIndex {
    /// Remember that `actor` is an instance of `prefab`
    pub(crate) fn record(&mut self, actor: ActorHandle, prefab: PrefabId) {
        self.owners.insert(actor, prefab);
    }

    /// The prefab `actor` belongs to, if this subsystem produced it
    pub(crate) fn lookup(&self, actor: ActorHandle) -> Option<&PrefabId> {
        self.owners.get(&actor)
    }

    /// Distinct actors currently under management
    pub(crate) fn len(&self) -> usize {
        self.owners.len()
    }

    /// Forget every actor (teardown)
    pub(crate) fn clear(&mut self) {
        self.owners.clear();
    }
}
