//! Basic pooling walkthrough
//!
//! Demonstrates the acquire/release cycle against the recording test world,
//! with debug logging switched on so the pool narrates what it does.

use spawnpool::testing::RecordingWorld;
use spawnpool::{ActorWorld, Placement, PoolCategory, PoolManager, PrefabId};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Basic Pooling Example ===\n");

    let world = RecordingWorld::new();
    let mut pools = PoolManager::new(world.clone());
    let grunt = PrefabId::new("enemy/grunt");

    // First acquire has nothing pooled, so the host constructs an instance.
    println!("Acquiring a grunt...");
    let first = pools.acquire(&grunt, Placement::at([10.0, 0.0, 0.0]), PoolCategory::Gameplay)?;
    println!("  Got {first} (freshly constructed)\n");

    // Releasing parks it dormant instead of destroying it.
    println!("Releasing it...");
    pools.release(first);
    println!(
        "  Pooled instances of {}: {}, still alive host-side: {}\n",
        grunt,
        pools.pooled(&grunt),
        world.is_valid(first),
    );

    // The next acquire reuses the parked instance.
    println!("Acquiring again...");
    let second = pools.acquire(&grunt, Placement::at([-4.0, 2.0, 0.0]), PoolCategory::Gameplay)?;
    println!("  Got {second} (same instance: {})\n", second == first);

    let stats = pools.stats();
    println!("Pool statistics:");
    println!("  - Spawned: {}", stats.spawned);
    println!("  - Reused: {}", stats.reused);
    println!("  - Released: {}", stats.released);

    pools.teardown();
    println!("\nAfter teardown: {} actors alive host-side", world.live_count());

    println!("\n=== Example completed! ===");
    Ok(())
}
