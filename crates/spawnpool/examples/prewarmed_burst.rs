//! Prewarmed projectile burst
//!
//! Demonstrates why pools are prewarmed: the first volley is served without
//! a single mid-combat construction, and later volleys recycle the same
//! instances over and over.

use spawnpool::testing::RecordingWorld;
use spawnpool::{Placement, PoolCategory, PoolManager, Prefab, PrefabId};

/// The one projectile kind this demo fires
struct Bolt;

impl Prefab for Bolt {
    fn prefab_id(&self) -> PrefabId {
        PrefabId::new("weapons/bolt")
    }

    fn category(&self) -> PoolCategory {
        PoolCategory::Projectiles
    }
}

const VOLLEY: usize = 8;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Prewarmed Burst Example ===\n");

    let world = RecordingWorld::new();
    let mut pools = PoolManager::new(world.clone());

    // Loading screen: pay the construction cost up front.
    println!("Prewarming {VOLLEY} bolts...");
    let pooled = pools.prewarm_as(&Bolt, VOLLEY)?;
    println!("  Pooled: {pooled}\n");

    for volley in 1..=3 {
        let mut in_flight = Vec::with_capacity(VOLLEY);
        let mut spread = 0.0_f32;
        for _ in 0..VOLLEY {
            in_flight.push(pools.acquire_as(&Bolt, Placement::at([0.0, spread, 1.0]))?);
            spread += 1.5;
        }
        println!("Volley {volley}: fired {} bolts", in_flight.len());

        // Bolts hit or expire; back to the pool they go.
        for bolt in in_flight {
            pools.release(bolt);
        }
    }

    let stats = pools.stats();
    println!("\nAfter three volleys of {VOLLEY}:");
    println!("  - Constructed: {}", stats.spawned);
    println!("  - Reused: {}", stats.reused);
    println!("  - Host constructions: {}", world.spawn_count(&Bolt.prefab_id()));

    println!("\n=== Example completed! ===");
    Ok(())
}
