//! Reuse before construction: the core promise of the pool.

use spawnpool::testing::RecordingWorld;
use spawnpool::{Placement, PoolCategory, PoolManager, PrefabId};

fn manager() -> (RecordingWorld, PoolManager<RecordingWorld>) {
    let world = RecordingWorld::new();
    (world.clone(), PoolManager::new(world))
}

fn grunt() -> PrefabId {
    PrefabId::new("enemy/grunt")
}

#[test]
fn released_instance_is_reused_not_respawned() {
    let (world, mut pools) = manager();

    let first = pools
        .acquire(&grunt(), Placement::at([10.0, 0.0, 0.0]), PoolCategory::Gameplay)
        .unwrap();
    pools.release(first);
    let second = pools
        .acquire(&grunt(), Placement::at([-3.0, 4.0, 0.0]), PoolCategory::Gameplay)
        .unwrap();

    assert_eq!(first, second, "pooled instance should be handed back out");
    assert_eq!(world.spawn_count(&grunt()), 1, "no second construction");

    let stats = pools.stats();
    assert_eq!(stats.spawned, 1);
    assert_eq!(stats.reused, 1);
}

#[test]
fn reused_instance_is_moved_to_the_requested_placement() {
    let (world, mut pools) = manager();

    let actor = pools
        .acquire(&grunt(), Placement::at([10.0, 0.0, 0.0]), PoolCategory::Gameplay)
        .unwrap();
    pools.release(actor);
    let actor = pools
        .acquire(
            &grunt(),
            Placement::new([1.0, 2.0, 3.0], [0.0, 90.0, 0.0]),
            PoolCategory::Gameplay,
        )
        .unwrap();

    let record = world.record(actor).unwrap();
    assert_eq!(record.placement.position, [1.0, 2.0, 3.0]);
    assert_eq!(record.placement.orientation, [0.0, 90.0, 0.0]);
}

#[test]
fn empty_pool_constructs_distinct_instances() {
    let (world, mut pools) = manager();

    let a = pools
        .acquire(&grunt(), Placement::default(), PoolCategory::Gameplay)
        .unwrap();
    let b = pools
        .acquire(&grunt(), Placement::default(), PoolCategory::Gameplay)
        .unwrap();

    assert_ne!(a, b, "two live callers must never share an instance");
    assert_eq!(world.spawn_count(&grunt()), 2);
    assert_eq!(pools.tracked(), 2);
}

#[test]
fn pools_are_keyed_by_prefab() {
    let (world, mut pools) = manager();
    let bolt = PrefabId::new("projectile/bolt");

    let g = pools
        .acquire(&grunt(), Placement::default(), PoolCategory::Gameplay)
        .unwrap();
    pools.release(g);

    // A different prefab must not be served the pooled grunt.
    let b = pools
        .acquire(&bolt, Placement::default(), PoolCategory::Projectiles)
        .unwrap();
    assert_ne!(g, b);
    assert_eq!(world.spawn_count(&bolt), 1);
    assert_eq!(pools.pooled(&grunt()), 1, "grunt stays pooled");

    // While the grunt pool still serves grunts.
    let g2 = pools
        .acquire(&grunt(), Placement::default(), PoolCategory::Gameplay)
        .unwrap();
    assert_eq!(g, g2);
}

#[test]
fn most_recently_released_is_reused_first() {
    let (_world, mut pools) = manager();

    let a = pools
        .acquire(&grunt(), Placement::default(), PoolCategory::Gameplay)
        .unwrap();
    let b = pools
        .acquire(&grunt(), Placement::default(), PoolCategory::Gameplay)
        .unwrap();
    let c = pools
        .acquire(&grunt(), Placement::default(), PoolCategory::Gameplay)
        .unwrap();
    pools.release(a);
    pools.release(b);
    pools.release(c);
    assert_eq!(pools.pooled(&grunt()), 3);

    for expected in [c, b, a] {
        let actual = pools
            .acquire(&grunt(), Placement::default(), PoolCategory::Gameplay)
            .unwrap();
        assert_eq!(actual, expected, "free list should serve newest first");
    }
}

#[test]
fn acquire_recovers_once_the_world_returns() {
    let (world, mut pools) = manager();

    world.set_available(false);
    let err = pools
        .acquire(&grunt(), Placement::default(), PoolCategory::Gameplay)
        .unwrap_err();
    assert!(err.is_transient(), "unavailability should read as transient");

    world.set_available(true);
    assert!(
        pools
            .acquire(&grunt(), Placement::default(), PoolCategory::Gameplay)
            .is_ok()
    );
}
