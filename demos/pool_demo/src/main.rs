//! Pool demo — two pools sharing one runtime.
//!
//! Creates a fixed bullet pool and a resizable explosion pool on the
//! in-memory reference runtime, fires a wave of bullets, overdraws the
//! explosion pool to trigger a top-up, then releases everything and reports
//! the counts. Run with `RUST_LOG=pool_core=debug` to watch the pool's own
//! tracing output.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pool_core::{PoolConfig, PoolGroup, PoolRegistry, Vec3};
use pool_runtime::{EntityTemplate, test_util::InMemoryRuntime};

const BULLETS: PoolGroup = PoolGroup::from_raw(0);
const EXPLOSIONS: PoolGroup = PoolGroup::from_raw(1);

fn main() -> Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("pool_demo=info".parse()?))
        .init();

    let mut runtime = InMemoryRuntime::new();
    let mut registry = PoolRegistry::new();

    registry.create_pool(
        PoolConfig::new(
            BULLETS,
            EntityTemplate::new("bullet").with_bounds_radius(0.1),
        )
        .with_initial_count(32)
        .fixed(),
        &mut runtime,
    )?;
    registry.create_pool(
        PoolConfig::new(
            EXPLOSIONS,
            EntityTemplate::new("explosion").with_bounds_radius(3.0),
        )
        .with_initial_count(4),
        &mut runtime,
    )?;
    info!(entities = runtime.entity_count(), "pools pre-spawned");

    // Fire a spread of bullets.
    let mut bullets = Vec::new();
    for i in 0..16 {
        let at = Vec3::new(i as f32 * 0.5, 1.0, 0.0);
        bullets.push(registry.acquire(BULLETS, &mut runtime, at)?);
    }

    // Overdraw the explosion pool; the fifth acquire triggers a top-up.
    let mut explosions = Vec::new();
    for i in 0..5 {
        let at = Vec3::new(i as f32 * 4.0, 0.0, 2.0);
        explosions.push(registry.acquire(EXPLOSIONS, &mut runtime, at)?);
    }

    for pool in registry.iter() {
        info!(
            group = %pool.group(),
            in_use = pool.in_use(&runtime),
            available = pool.available(&runtime),
            "after wave"
        );
    }

    // Everything back to the pools.
    for entity in bullets {
        registry.release(BULLETS, &mut runtime, entity)?;
    }
    for entity in explosions {
        registry.release(EXPLOSIONS, &mut runtime, entity)?;
    }

    for pool in registry.iter() {
        info!(
            group = %pool.group(),
            spawned = pool.spawned_count(),
            available = pool.available(&runtime),
            "after release"
        );
    }
    info!(
        entities = runtime.entity_count(),
        barriers = runtime.barrier_count(),
        "demo finished"
    );
    Ok(())
}
