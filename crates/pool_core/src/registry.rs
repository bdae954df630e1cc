//! Pool registry — owns pools and enforces group-index uniqueness.
//!
//! Two pools filtering on the same [`PoolGroup`] would acquire each other's
//! entities, so a duplicate index is refused before any entity is spawned.

use std::collections::HashMap;

use pool_component::{PoolGroup, Vec3};
use pool_runtime::{Entity, HostRuntime};
use tracing::{error, info};

use crate::config::PoolConfig;
use crate::error::PoolError;
use crate::pool::Pool;

/// Registry of all pools sharing one host runtime.
#[derive(Debug, Default)]
pub struct PoolRegistry {
    /// Pools keyed by group.
    pools: HashMap<PoolGroup, Pool>,
}

impl PoolRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pools: HashMap::new(),
        }
    }

    /// Create a pool from the config and pre-spawn its members.
    ///
    /// Fails with [`PoolError::DuplicateGroup`] if a pool already uses the
    /// config's group index — in that case nothing is spawned.
    pub fn create_pool<R: HostRuntime>(
        &mut self,
        config: PoolConfig,
        runtime: &mut R,
    ) -> Result<&mut Pool, PoolError> {
        let group = config.group;
        if self.pools.contains_key(&group) {
            error!(%group, "group index already used by another pool");
            return Err(PoolError::DuplicateGroup(group));
        }

        let pool = Pool::spawn_into(config, runtime)?;
        info!(%group, count = pool.spawned_count(), "registered pool");
        Ok(self.pools.entry(group).or_insert(pool))
    }

    /// Returns the pool for a group, if registered.
    #[must_use]
    pub fn pool(&self, group: PoolGroup) -> Option<&Pool> {
        self.pools.get(&group)
    }

    /// Returns the pool for a group mutably, if registered.
    pub fn pool_mut(&mut self, group: PoolGroup) -> Option<&mut Pool> {
        self.pools.get_mut(&group)
    }

    /// Returns `true` if a pool is registered for the group.
    #[must_use]
    pub fn contains(&self, group: PoolGroup) -> bool {
        self.pools.contains_key(&group)
    }

    /// Returns the number of registered pools.
    #[must_use]
    pub fn pool_count(&self) -> usize {
        self.pools.len()
    }

    /// Returns an iterator over all registered pools.
    pub fn iter(&self) -> impl Iterator<Item = &Pool> {
        self.pools.values()
    }

    /// Acquire an entity from the pool registered for `group`.
    pub fn acquire<R: HostRuntime>(
        &mut self,
        group: PoolGroup,
        runtime: &mut R,
        position: Vec3,
    ) -> Result<Entity, PoolError> {
        self.pools
            .get_mut(&group)
            .ok_or(PoolError::UnknownGroup(group))?
            .acquire(runtime, position)
    }

    /// Release an entity back to the pool registered for `group`.
    pub fn release<R: HostRuntime>(
        &mut self,
        group: PoolGroup,
        runtime: &mut R,
        entity: Entity,
    ) -> Result<(), PoolError> {
        self.pools
            .get_mut(&group)
            .ok_or(PoolError::UnknownGroup(group))?
            .release(runtime, entity)
    }
}
