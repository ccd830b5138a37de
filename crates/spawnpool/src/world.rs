//! Host-world abstraction the pool drives.

use crate::actor::{ActorHandle, Placement, PrefabId};

/// The host environment that actually owns actors.
///
/// The pool never creates, destroys or mutates an actor directly; it asks
/// the world to. Production code implements this on top of the engine's
/// scene API, tests use [`crate::testing::RecordingWorld`]. The manager
/// receives its world at construction and keeps it for its whole lifetime,
/// so there is no ambient global to reach for.
///
/// Handle hygiene: the world may destroy actors at any time for its own
/// reasons (level streaming, scripted kills). Every method taking an
/// [`ActorHandle`] must therefore tolerate a stale one: mutators are
/// no-ops on stale handles, and [`is_valid`](ActorWorld::is_valid) is the
/// single source of truth the pool consults first.
pub trait ActorWorld {
    /// Whether the world can currently service spawn requests.
    ///
    /// Defaults to `true`; hosts that tear down mid-frame (level
    /// transitions) return `false` while unavailable.
    fn is_available(&self) -> bool {
        true
    }

    /// Construct a fresh instance of `prefab` at `placement`.
    ///
    /// Contract: placement must never be blocked by overlap; the world
    /// places the actor even when it intersects existing geometry. Returns
    /// `None` only when construction itself fails.
    fn spawn(&mut self, prefab: &PrefabId, placement: Placement) -> Option<ActorHandle>;

    /// Construct an empty, invisible grouping actor carrying `label` in the
    /// scene outliner. Used for the pool's category roots.
    fn spawn_group(&mut self, label: &str) -> Option<ActorHandle>;

    /// Whether `actor` still exists and is not pending destruction
    fn is_valid(&self, actor: ActorHandle) -> bool;

    /// Destroy `actor`. Must be a no-op if the handle is already stale.
    fn destroy(&mut self, actor: ActorHandle);

    /// Move `actor` to `placement`
    fn set_placement(&mut self, actor: ActorHandle, placement: Placement);

    /// Show or hide `actor`
    fn set_visible(&mut self, actor: ActorHandle, visible: bool);

    /// Enable or disable collision on `actor`
    fn set_collision(&mut self, actor: ActorHandle, enabled: bool);

    /// Enable or disable per-frame updates on `actor`
    fn set_tick(&mut self, actor: ActorHandle, enabled: bool);

    /// Activate or deactivate `actor`'s attached components (emitters,
    /// audio, timelines) in one sweep
    fn set_components_active(&mut self, actor: ActorHandle, active: bool);

    /// Re-parent `child` under `parent` in the scene graph.
    ///
    /// With `keep_world_placement` the child stays where it is in world
    /// space; otherwise its current transform is reinterpreted as relative
    /// to the parent.
    fn attach(&mut self, child: ActorHandle, parent: ActorHandle, keep_world_placement: bool);
}
