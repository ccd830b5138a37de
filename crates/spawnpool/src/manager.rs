//! The pooling façade: acquire, release, prewarm, teardown.

use tracing::{debug, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::actor::{ActorHandle, Placement, PoolCategory, Prefab, PrefabId};
use crate::error::{PoolError, PoolResult};
use crate::ownership::OwnershipIndex;
use crate::registry::PoolRegistry;
use crate::roots::CategoryRoots;
use crate::world::ActorWorld;

/// Counters describing what the pool has done over its lifetime.
///
/// All counters are monotonic for as long as the manager lives; even
/// [`PoolManager::teardown`] only adds to them. For point-in-time gauges use
/// [`PoolManager::pooled`] and [`PoolManager::tracked`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PoolStats {
    /// Fresh instances the host constructed for us
    pub spawned: u64,
    /// Acquires served from a pool instead of a fresh construction
    pub reused: u64,
    /// Instances put back into a pool (idempotent re-releases not counted)
    pub released: u64,
    /// Stale pooled handles dropped during acquire scans
    pub discarded_stale: u64,
    /// Foreign actors destroyed because release did not recognize them
    pub destroyed_foreign: u64,
    /// Actors (pooled instances plus group actors) destroyed by teardown
    pub destroyed_at_teardown: u64,
}

/// Instance pooling for game-world actors.
///
/// Spawning an actor is expensive; destroying one, doubly so once the
/// allocator and scene-graph churn is counted. The manager keeps released
/// instances alive but dormant (invisible, collisionless, not ticking) and
/// hands them back out on the next [`acquire`](Self::acquire) for the same
/// prefab instead of constructing a fresh one.
///
/// The manager owns the host world it is given at construction and drives
/// all actor mutation through it; there is no ambient global. Everything is
/// synchronous and single-threaded: each operation completes before
/// returning, and `&mut self` keeps a second caller out by construction.
///
/// The host retains the right to destroy any actor at any time, so every
/// handle the manager stored is re-validated before use and quietly dropped
/// once stale.
///
/// # Example
/// ```
/// use spawnpool::testing::RecordingWorld;
/// use spawnpool::{Placement, PoolCategory, PoolManager, PrefabId};
///
/// let mut pools = PoolManager::new(RecordingWorld::new());
/// let grunt = PrefabId::new("enemy/grunt");
///
/// let actor = pools.acquire(&grunt, Placement::at([0.0, 0.0, 0.0]), PoolCategory::Gameplay)?;
/// pools.release(actor);
///
/// // The released instance is reused, not respawned.
/// let again = pools.acquire(&grunt, Placement::default(), PoolCategory::Gameplay)?;
/// assert_eq!(actor, again);
/// # Ok::<(), spawnpool::PoolError>(())
/// ```
#[derive(Debug)]
pub struct PoolManager<W: ActorWorld> {
    world: W,
    registry: PoolRegistry,
    ownership: OwnershipIndex,
    roots: CategoryRoots,
    stats: PoolStats,
}

impl<W: ActorWorld> PoolManager<W> {
    /// Create a manager driving `world`
    pub fn new(world: W) -> Self {
        Self {
            world,
            registry: PoolRegistry::default(),
            ownership: OwnershipIndex::default(),
            roots: CategoryRoots::default(),
            stats: PoolStats::default(),
        }
    }

    /// Hand out an instance of `prefab`, reusing a pooled one when possible.
    ///
    /// Either way the instance ends up at `placement`, fully activated.
    /// A fresh instance is parented under `category`'s group actor without
    /// being moved by the attachment; a reused instance keeps whatever
    /// parent it was first created under (see [`release`](Self::release)).
    ///
    /// # Errors
    /// [`PoolError::InvalidPrefab`] for an empty prefab id,
    /// [`PoolError::WorldUnavailable`] when the host cannot currently spawn,
    /// [`PoolError::SpawnFailed`] when the host refuses construction. None
    /// of these mutate any pool state.
    pub fn acquire(
        &mut self,
        prefab: &PrefabId,
        placement: Placement,
        category: PoolCategory,
    ) -> PoolResult<ActorHandle> {
        if prefab.is_empty() {
            return Err(PoolError::InvalidPrefab);
        }
        if !self.world.is_available() {
            return Err(PoolError::WorldUnavailable);
        }

        let actor = match self.registry.try_take(&self.world, prefab) {
            Some(actor) => {
                self.stats.reused += 1;
                debug!(actor = %actor, prefab = %prefab, "Reused pooled instance");
                actor
            }
            None => {
                // Pool exhausted; construct a fresh instance.
                let Some(actor) = self.world.spawn(prefab, placement) else {
                    return Err(PoolError::spawn_failed(prefab));
                };
                self.stats.spawned += 1;
                self.ownership.record(actor, prefab.clone());
                if let Some(group) = self.roots.get_or_create(&mut self.world, category) {
                    self.world.attach(actor, group, true);
                }
                debug!(actor = %actor, prefab = %prefab, category = %category, "Spawned fresh instance");
                actor
            }
        };

        self.world.set_placement(actor, placement);
        self.set_active(actor, true);
        Ok(actor)
    }

    /// Typed variant of [`acquire`](Self::acquire): prefab id and category
    /// come from the [`Prefab`] description.
    pub fn acquire_as<P: Prefab>(
        &mut self,
        prefab: &P,
        placement: Placement,
    ) -> PoolResult<ActorHandle> {
        self.acquire(&prefab.prefab_id(), placement, prefab.category())
    }

    /// Take `actor` out of play and pool it for reuse.
    ///
    /// The actor is deactivated in place: it keeps its position and its
    /// scene-graph parent, wherever gameplay moved it. Handles this manager
    /// never produced are *foreign*: they are destroyed, not pooled, since
    /// pooling an unknown kind would hand it out later as something it is
    /// not. Stale handles and double releases are silently tolerated.
    pub fn release(&mut self, actor: ActorHandle) {
        if !self.world.is_valid(actor) {
            // Host already destroyed it; nothing left to pool.
            debug!(actor = %actor, "Ignored release of a stale handle");
            return;
        }

        let Some(prefab) = self.ownership.lookup(actor).cloned() else {
            warn!(actor = %actor, "Released actor was never pooled here; destroying it");
            self.stats.destroyed_foreign += 1;
            self.world.destroy(actor);
            return;
        };

        self.set_active(actor, false);
        if self.registry.return_actor(&prefab, actor) {
            self.stats.released += 1;
            debug!(actor = %actor, prefab = %prefab, "Instance returned to pool");
        } else {
            debug!(actor = %actor, prefab = %prefab, "Instance was already pooled");
        }
    }

    /// Fill `prefab`'s pool with `count` dormant instances ahead of demand.
    ///
    /// Acquires `count` instances first and only then releases them, so the
    /// pool genuinely ends up `count` deep (releasing as it goes would just
    /// re-take the same instance every iteration). Instances already pooled
    /// count toward the target, making this a top-up: the pool ends with at
    /// least `count` instances unless the host refuses constructions along
    /// the way. Returns how many instances were actually pooled.
    ///
    /// # Errors
    /// [`PoolError::InvalidPrefab`] for an empty prefab id. Individual
    /// construction failures are skipped, not surfaced.
    pub fn prewarm(
        &mut self,
        prefab: &PrefabId,
        count: usize,
        category: PoolCategory,
    ) -> PoolResult<usize> {
        if prefab.is_empty() {
            return Err(PoolError::InvalidPrefab);
        }

        let mut staged = Vec::with_capacity(count);
        for _ in 0..count {
            match self.acquire(prefab, Placement::default(), category) {
                Ok(actor) => staged.push(actor),
                Err(error) => {
                    debug!(prefab = %prefab, %error, "Skipped one prewarm construction");
                }
            }
        }

        let pooled = staged.len();
        for actor in staged {
            self.release(actor);
        }
        debug!(prefab = %prefab, requested = count, pooled, "Prewarmed pool");
        Ok(pooled)
    }

    /// Typed variant of [`prewarm`](Self::prewarm)
    pub fn prewarm_as<P: Prefab>(&mut self, prefab: &P, count: usize) -> PoolResult<usize> {
        self.prewarm(&prefab.prefab_id(), count, prefab.category())
    }

    /// Destroy every pooled instance and all grouping actors, and forget
    /// every actor ever tracked.
    ///
    /// Instances currently in play are *not* destroyed (the pool does not
    /// own them at this moment) but they are forgotten: releasing one
    /// afterwards treats it as foreign. After teardown the manager behaves
    /// as if freshly constructed (stats excepted; those keep accumulating).
    pub fn teardown(&mut self) {
        let mut destroyed = 0u64;
        for actor in self.registry.drain_all() {
            if self.world.is_valid(actor) {
                self.world.destroy(actor);
                destroyed += 1;
            }
        }
        self.ownership.clear();
        destroyed += self.roots.teardown(&mut self.world);
        self.stats.destroyed_at_teardown += destroyed;
        debug!(destroyed, "Pool subsystem torn down");
    }

    /// Lifetime counters; see [`PoolStats`]
    pub fn stats(&self) -> PoolStats {
        PoolStats {
            discarded_stale: self.registry.discarded(),
            ..self.stats.clone()
        }
    }

    /// Instances currently pooled (dormant) for `prefab`
    pub fn pooled(&self, prefab: &PrefabId) -> usize {
        self.registry.pooled(prefab)
    }

    /// Distinct actors currently under management, pooled or in play
    pub fn tracked(&self) -> usize {
        self.ownership.len()
    }

    /// The host world
    pub fn world(&self) -> &W {
        &self.world
    }

    /// Mutable access to the host world
    pub fn world_mut(&mut self) -> &mut W {
        &mut self.world
    }

    /// Flip the whole activation bundle at once: visibility, collision,
    /// per-frame updates and component activation always move together, so
    /// a pooled actor can never half-exist.
    fn set_active(&mut self, actor: ActorHandle, active: bool) {
        if !self.world.is_valid(actor) {
            return;
        }
        self.world.set_visible(actor, active);
        self.world.set_collision(actor, active);
        self.world.set_tick(actor, active);
        self.world.set_components_active(actor, active);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingWorld;

    fn grunt() -> PrefabId {
        PrefabId::new("enemy/grunt")
    }

    #[test]
    fn test_empty_prefab_is_rejected_before_world_checks() {
        let world = RecordingWorld::new();
        world.set_available(false);
        let mut pools = PoolManager::new(world);

        // Empty prefab wins over the unavailable world.
        let err = pools
            .acquire(&PrefabId::new(""), Placement::default(), PoolCategory::Gameplay)
            .unwrap_err();
        assert_eq!(err, PoolError::InvalidPrefab);
    }

    #[test]
    fn test_unavailable_world_is_an_error() {
        let world = RecordingWorld::new();
        world.set_available(false);
        let mut pools = PoolManager::new(world);

        let err = pools
            .acquire(&grunt(), Placement::default(), PoolCategory::Gameplay)
            .unwrap_err();
        assert_eq!(err, PoolError::WorldUnavailable);
        assert!(err.is_transient());
    }

    #[test]
    fn test_refused_construction_surfaces_the_prefab() {
        let world = RecordingWorld::new();
        world.refuse_spawns(true);
        let mut pools = PoolManager::new(world);

        let err = pools
            .acquire(&grunt(), Placement::default(), PoolCategory::Gameplay)
            .unwrap_err();
        assert_eq!(err, PoolError::spawn_failed(&grunt()));
        assert_eq!(err.prefab(), Some(&grunt()));
        // The failed attempt left no trace behind.
        assert_eq!(pools.tracked(), 0);
        assert_eq!(pools.stats(), PoolStats::default());
    }

    #[test]
    fn test_acquire_activates_and_release_deactivates() {
        let world = RecordingWorld::new();
        let mut pools = PoolManager::new(world.clone());

        let actor = pools
            .acquire(&grunt(), Placement::at([5.0, 0.0, 1.0]), PoolCategory::Gameplay)
            .unwrap();
        let record = world.record(actor).unwrap();
        assert!(record.is_active());
        assert_eq!(record.placement.position, [5.0, 0.0, 1.0]);

        pools.release(actor);
        let record = world.record(actor).unwrap();
        assert!(record.is_dormant());
        assert_eq!(pools.pooled(&grunt()), 1);
    }

    #[test]
    fn test_typed_wrapper_routes_like_the_stringly_calls() {
        struct Turret;
        impl Prefab for Turret {
            fn prefab_id(&self) -> PrefabId {
                PrefabId::new("defense/turret")
            }
            fn category(&self) -> PoolCategory {
                PoolCategory::Projectiles
            }
        }

        let world = RecordingWorld::new();
        let mut pools = PoolManager::new(world.clone());

        let actor = pools.acquire_as(&Turret, Placement::default()).unwrap();
        pools.release(actor);
        assert_eq!(pools.pooled(&PrefabId::new("defense/turret")), 1);
        assert_eq!(pools.prewarm_as(&Turret, 3).unwrap(), 3);
        assert_eq!(pools.pooled(&PrefabId::new("defense/turret")), 3);

        // The turret group exists under the shared root.
        assert!(
            world
                .group_labels()
                .contains(&PoolCategory::Projectiles.label().to_string())
        );
    }
}
