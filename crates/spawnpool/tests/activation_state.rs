//! Activation is all-or-nothing: an instance is fully active in play and
//! fully dormant in the pool, never something in between.

use spawnpool::testing::{RecordingWorld, WorldCall};
use spawnpool::{Placement, PoolCategory, PoolManager, PrefabId};

fn manager() -> (RecordingWorld, PoolManager<RecordingWorld>) {
    let world = RecordingWorld::new();
    (world.clone(), PoolManager::new(world))
}

fn drone() -> PrefabId {
    PrefabId::new("enemy/drone")
}

#[test]
fn acquired_instances_are_fully_active() {
    let (world, mut pools) = manager();

    let actor = pools
        .acquire(&drone(), Placement::at([3.0, 1.0, 0.0]), PoolCategory::Gameplay)
        .unwrap();

    let record = world.record(actor).unwrap();
    assert!(record.is_active());
    assert!(record.visible && record.collision && record.ticking && record.components_active);
}

#[test]
fn released_instances_are_fully_dormant() {
    let (world, mut pools) = manager();

    let actor = pools
        .acquire(&drone(), Placement::default(), PoolCategory::Gameplay)
        .unwrap();
    pools.release(actor);

    let record = world.record(actor).unwrap();
    assert!(record.is_dormant());
    assert!(!record.visible && !record.collision && !record.ticking && !record.components_active);
}

#[test]
fn repeated_cycles_never_leave_a_half_applied_state() {
    let (world, mut pools) = manager();

    let mut actor = None;
    for cycle in 0..5 {
        let handle = pools
            .acquire(&drone(), Placement::default(), PoolCategory::Gameplay)
            .unwrap();
        assert!(
            world.record(handle).unwrap().is_active(),
            "cycle {cycle}: acquired instance must be fully active"
        );

        pools.release(handle);
        assert!(
            world.record(handle).unwrap().is_dormant(),
            "cycle {cycle}: released instance must be fully dormant"
        );
        actor = Some(handle);
    }

    // All five cycles drove the one pooled instance.
    assert_eq!(world.live_count(), 3, "instance + root + group");
    assert_eq!(pools.pooled(&drone()), 1);
    assert!(world.record(actor.unwrap()).unwrap().is_dormant());
}

#[test]
fn release_applies_the_deactivation_bundle_in_order() {
    let (world, mut pools) = manager();

    let actor = pools
        .acquire(&drone(), Placement::default(), PoolCategory::Gameplay)
        .unwrap();
    world.clear_calls();
    pools.release(actor);

    assert_eq!(
        world.calls(),
        vec![
            WorldCall::SetVisible {
                actor,
                visible: false
            },
            WorldCall::SetCollision {
                actor,
                enabled: false
            },
            WorldCall::SetTick {
                actor,
                enabled: false
            },
            WorldCall::SetComponentsActive {
                actor,
                active: false
            },
        ]
    );
}

#[test]
fn reuse_moves_the_instance_before_reactivating_it() {
    let (world, mut pools) = manager();

    let actor = pools
        .acquire(&drone(), Placement::default(), PoolCategory::Gameplay)
        .unwrap();
    pools.release(actor);
    world.clear_calls();

    let reused = pools
        .acquire(&drone(), Placement::at([9.0, 9.0, 9.0]), PoolCategory::Gameplay)
        .unwrap();
    assert_eq!(reused, actor);

    let calls = world.calls();
    assert_eq!(calls.len(), 5, "placement plus the four activation facets");
    assert_eq!(
        calls[0],
        WorldCall::SetPlacement {
            actor,
            placement: Placement::at([9.0, 9.0, 9.0])
        }
    );
    assert!(matches!(calls[1], WorldCall::SetVisible { visible: true, .. }));
    assert!(matches!(calls[4], WorldCall::SetComponentsActive { active: true, .. }));
}
