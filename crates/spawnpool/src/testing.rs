//! Test-support host: a world that records every call and can inject faults.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::actor::{ActorHandle, Placement, PrefabId};
use crate::world::ActorWorld;

/// Everything [`RecordingWorld`] remembers about one live actor.
#[derive(Debug, Clone)]
pub struct ActorRecord {
    /// Prefab the actor was spawned from; `None` for group actors and
    /// handles minted directly by a test
    pub prefab: Option<PrefabId>,
    /// Scene label, set for group actors
    pub label: Option<String>,
    /// Last placement applied
    pub placement: Placement,
    /// Current scene-graph parent
    pub parent: Option<ActorHandle>,
    pub visible: bool,
    pub collision: bool,
    pub ticking: bool,
    pub components_active: bool,
}

impl ActorRecord {
    fn new(prefab: Option<PrefabId>, label: Option<String>, placement: Placement) -> Self {
        Self {
            prefab,
            label,
            placement,
            parent: None,
            visible: true,
            collision: true,
            ticking: true,
            components_active: true,
        }
    }

    /// Every activation facet is on
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.visible && self.collision && self.ticking && self.components_active
    }

    /// Every activation facet is off.
    ///
    /// Note this is not the negation of [`is_active`](Self::is_active): an
    /// actor with mixed facets is neither, which is exactly what tests
    /// assert never happens.
    #[must_use]
    pub fn is_dormant(&self) -> bool {
        !self.visible && !self.collision && !self.ticking && !self.components_active
    }
}

/// Record of one host call, for order-sensitive assertions
#[derive(Debug, Clone, PartialEq)]
pub enum WorldCall {
    Spawn {
        prefab: PrefabId,
        placement: Placement,
        actor: ActorHandle,
    },
    SpawnGroup {
        label: String,
        actor: ActorHandle,
    },
    Destroy {
        actor: ActorHandle,
    },
    SetPlacement {
        actor: ActorHandle,
        placement: Placement,
    },
    SetVisible {
        actor: ActorHandle,
        visible: bool,
    },
    SetCollision {
        actor: ActorHandle,
        enabled: bool,
    },
    SetTick {
        actor: ActorHandle,
        enabled: bool,
    },
    SetComponentsActive {
        actor: ActorHandle,
        active: bool,
    },
    Attach {
        child: ActorHandle,
        parent: ActorHandle,
        keep_world_placement: bool,
    },
}

#[derive(Debug)]
struct WorldState {
    next_raw: u64,
    actors: HashMap<ActorHandle, ActorRecord>,
    calls: Vec<WorldCall>,
    available: bool,
    refuse_spawns: bool,
    refuse_group_spawns: bool,
}

impl Default for WorldState {
    fn default() -> Self {
        Self {
            next_raw: 0,
            actors: HashMap::new(),
            calls: Vec::new(),
            available: true,
            refuse_spawns: false,
            refuse_group_spawns: false,
        }
    }
}

impl WorldState {
    fn mint(&mut self) -> ActorHandle {
        self.next_raw += 1;
        ActorHandle::from_raw(self.next_raw)
    }
}

/// An [`ActorWorld`] for tests: every call is recorded, every actor's state
/// is inspectable, and faults can be injected at will.
///
/// Clones share the same underlying state, so a test can keep one clone for
/// assertions and fault injection while the manager owns another.
#[derive(Debug, Clone, Default)]
pub struct RecordingWorld {
    state: Arc<Mutex<WorldState>>,
}

impl RecordingWorld {
    pub fn new() -> Self {
        Self::default()
    }

    // --- fault injection -------------------------------------------------

    /// Destroy `actor` host-side, without the pool knowing.
    ///
    /// This is the "level streaming killed it" case: the handle the pool
    /// still holds goes stale.
    pub fn invalidate(&self, actor: ActorHandle) {
        self.state.lock().actors.remove(&actor);
    }

    /// Toggle whether the world services spawn requests at all
    pub fn set_available(&self, available: bool) {
        self.state.lock().available = available;
    }

    /// Make every subsequent construction attempt fail
    pub fn refuse_spawns(&self, refuse: bool) {
        self.state.lock().refuse_spawns = refuse;
    }

    /// Make only group-actor construction fail, leaving ordinary spawns
    /// working. Exercises the pool's unparented fallback.
    pub fn refuse_group_spawns(&self, refuse: bool) {
        self.state.lock().refuse_group_spawns = refuse;
    }

    /// Register a live actor that did not come from any pool call.
    ///
    /// Handy for foreign-actor scenarios and for unit tests that need a
    /// valid handle without driving the full spawn path.
    pub fn mint_actor(&self) -> ActorHandle {
        let mut state = self.state.lock();
        let actor = state.mint();
        state
            .actors
            .insert(actor, ActorRecord::new(None, None, Placement::default()));
        actor
    }

    // --- inspection ------------------------------------------------------

    /// Every host call made so far, in order
    pub fn calls(&self) -> Vec<WorldCall> {
        self.state.lock().calls.clone()
    }

    /// Forget the call history (state of live actors is untouched)
    pub fn clear_calls(&self) {
        self.state.lock().calls.clear();
    }

    /// Snapshot of one live actor, `None` once destroyed
    pub fn record(&self, actor: ActorHandle) -> Option<ActorRecord> {
        self.state.lock().actors.get(&actor).cloned()
    }

    /// Number of actors currently alive host-side
    pub fn live_count(&self) -> usize {
        self.state.lock().actors.len()
    }

    /// How many fresh constructions of `prefab` have happened
    pub fn spawn_count(&self, prefab: &PrefabId) -> usize {
        self.state
            .lock()
            .calls
            .iter()
            .filter(|call| matches!(call, WorldCall::Spawn { prefab: p, .. } if p == prefab))
            .count()
    }

    /// Labels of all group actors ever created, in creation order
    pub fn group_labels(&self) -> Vec<String> {
        self.state
            .lock()
            .calls
            .iter()
            .filter_map(|call| match call {
                WorldCall::SpawnGroup { label, .. } => Some(label.clone()),
                _ => None,
            })
            .collect()
    }

    /// Handles the pool asked us to destroy, in order
    pub fn destroyed(&self) -> Vec<ActorHandle> {
        self.state
            .lock()
            .calls
            .iter()
            .filter_map(|call| match call {
                WorldCall::Destroy { actor } => Some(*actor),
                _ => None,
            })
            .collect()
    }
}

impl ActorWorld for RecordingWorld {
    fn is_available(&self) -> bool {
        self.state.lock().available
    }

    fn spawn(&mut self, prefab: &PrefabId, placement: Placement) -> Option<ActorHandle> {
        let mut state = self.state.lock();
        if state.refuse_spawns {
            return None;
        }
        let actor = state.mint();
        state.actors.insert(
            actor,
            ActorRecord::new(Some(prefab.clone()), None, placement),
        );
        state.calls.push(WorldCall::Spawn {
            prefab: prefab.clone(),
            placement,
            actor,
        });
        Some(actor)
    }

    fn spawn_group(&mut self, label: &str) -> Option<ActorHandle> {
        let mut state = self.state.lock();
        if state.refuse_spawns || state.refuse_group_spawns {
            return None;
        }
        let actor = state.mint();
        state.actors.insert(
            actor,
            ActorRecord::new(None, Some(label.to_string()), Placement::default()),
        );
        state.calls.push(WorldCall::SpawnGroup {
            label: label.to_string(),
            actor,
        });
        Some(actor)
    }

    fn is_valid(&self, actor: ActorHandle) -> bool {
        self.state.lock().actors.contains_key(&actor)
    }

    fn destroy(&mut self, actor: ActorHandle) {
        let mut state = self.state.lock();
        state.calls.push(WorldCall::Destroy { actor });
        state.actors.remove(&actor);
    }

    fn set_placement(&mut self, actor: ActorHandle, placement: Placement) {
        let mut state = self.state.lock();
        state.calls.push(WorldCall::SetPlacement { actor, placement });
        if let Some(record) = state.actors.get_mut(&actor) {
            record.placement = placement;
        }
    }

    fn set_visible(&mut self, actor: ActorHandle, visible: bool) {
        let mut state = self.state.lock();
        state.calls.push(WorldCall::SetVisible { actor, visible });
        if let Some(record) = state.actors.get_mut(&actor) {
            record.visible = visible;
        }
    }

    fn set_collision(&mut self, actor: ActorHandle, enabled: bool) {
        let mut state = self.state.lock();
        state.calls.push(WorldCall::SetCollision { actor, enabled });
        if let Some(record) = state.actors.get_mut(&actor) {
            record.collision = enabled;
        }
    }

    fn set_tick(&mut self, actor: ActorHandle, enabled: bool) {
        let mut state = self.state.lock();
        state.calls.push(WorldCall::SetTick { actor, enabled });
        if let Some(record) = state.actors.get_mut(&actor) {
            record.ticking = enabled;
        }
    }

    fn set_components_active(&mut self, actor: ActorHandle, active: bool) {
        let mut state = self.state.lock();
        state
            .calls
            .push(WorldCall::SetComponentsActive { actor, active });
        if let Some(record) = state.actors.get_mut(&actor) {
            record.components_active = active;
        }
    }

    fn attach(&mut self, child: ActorHandle, parent: ActorHandle, keep_world_placement: bool) {
        let mut state = self.state.lock();
        state.calls.push(WorldCall::Attach {
            child,
            parent,
            keep_world_placement,
        });
        if let Some(record) = state.actors.get_mut(&child) {
            record.parent = Some(parent);
        }
    }
}
