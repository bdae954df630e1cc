//! The pool itself: batch spawning, acquire, release.
//!
//! A pool owns no entities — it owns two cached tag filters and a spawn
//! counter. Everything else lives in the host runtime: the pool asks for the
//! first `(group, hidden)` match on acquire and flips tags/attributes through
//! the [`HostRuntime`] contract.

use pool_component::{PoolGroup, Position, RenderBounds, TagFilter, Vec3, Visibility};
use pool_runtime::{Entity, HostRuntime};
use tracing::{debug, trace, warn};

use crate::config::{GrowthPolicy, PoolConfig};
use crate::error::PoolError;

/// A pool of pre-spawned, group-tagged entities.
///
/// Create pools through [`PoolRegistry`](crate::PoolRegistry), which enforces
/// group-index uniqueness. [`Pool::spawn_into`] is public for callers that
/// manage a single pool and do not need a registry — group uniqueness is then
/// on them.
#[derive(Debug)]
pub struct Pool {
    config: PoolConfig,
    /// Filter for parked members: `(group, hidden)`.
    hidden: TagFilter,
    /// Filter for checked-out members: `(group, visible)`.
    visible: TagFilter,
    /// Total entities ever spawned into this pool. Never decreases — pool
    /// members are hidden, not destroyed.
    spawned: usize,
}

impl Pool {
    /// Create a pool and pre-spawn its initial batch into the runtime.
    ///
    /// Validates the configuration first; no entity is created if validation
    /// fails.
    pub fn spawn_into<R: HostRuntime>(
        config: PoolConfig,
        runtime: &mut R,
    ) -> Result<Self, PoolError> {
        config.validate()?;
        let hidden = TagFilter::new()
            .with_tag(config.group)
            .with_tag(Visibility::Hidden);
        let visible = TagFilter::new()
            .with_tag(config.group)
            .with_tag(Visibility::Visible);

        let mut pool = Self {
            config,
            hidden,
            visible,
            spawned: 0,
        };
        let initial = pool.config.initial_count;
        pool.spawn_batch(runtime, initial)?;
        Ok(pool)
    }

    /// Returns this pool's group.
    #[must_use]
    pub fn group(&self) -> PoolGroup {
        self.config.group
    }

    /// Returns this pool's configuration.
    #[must_use]
    pub fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Total entities ever spawned into this pool.
    #[must_use]
    pub fn spawned_count(&self) -> usize {
        self.spawned
    }

    /// How many members are currently parked and acquirable.
    #[must_use]
    pub fn available<R: HostRuntime>(&self, runtime: &R) -> usize {
        runtime.match_count(&self.hidden)
    }

    /// How many members are currently checked out.
    #[must_use]
    pub fn in_use<R: HostRuntime>(&self, runtime: &R) -> usize {
        runtime.match_count(&self.visible)
    }

    /// Check an entity out of the pool at the given position.
    ///
    /// Takes the first hidden member of this group, marks it visible, and
    /// attaches a [`Position`] plus [`RenderBounds`] centred on it. When no
    /// hidden member remains, the growth policy decides: fixed pools fail
    /// with [`PoolError::Exhausted`], resizable pools spawn exactly one
    /// top-up batch and retry.
    pub fn acquire<R: HostRuntime>(
        &mut self,
        runtime: &mut R,
        position: Vec3,
    ) -> Result<Entity, PoolError> {
        let entity = match runtime.first_match(&self.hidden) {
            Some(entity) => entity,
            None => self.grow_or_fail(runtime)?,
        };

        runtime.set_tag(entity, Visibility::Visible)?;
        runtime.insert_attribute(entity, Position::new(position))?;
        runtime.insert_attribute(
            entity,
            RenderBounds::centered_at(position, self.config.template.bounds_radius),
        )?;

        trace!(group = %self.config.group, %entity, ?position, "acquired pool entity");
        Ok(entity)
    }

    /// Return an entity to the pool.
    ///
    /// Marks it hidden and strips its spatial attributes, waiting for any
    /// in-flight runtime work to finish before detaching. When the runtime
    /// reports itself unavailable (scene teardown while callers still hold
    /// handles) the release is silently dropped.
    pub fn release<R: HostRuntime>(
        &mut self,
        runtime: &mut R,
        entity: Entity,
    ) -> Result<(), PoolError> {
        if !runtime.is_available() {
            debug!(group = %self.config.group, %entity, "runtime unavailable, dropping release");
            return Ok(());
        }

        // No host job may still be reading the attributes we are about to
        // detach.
        runtime.complete_pending_work();

        runtime.set_tag(entity, Visibility::Hidden)?;
        runtime.remove_attribute::<Position>(entity)?;
        runtime.remove_attribute::<RenderBounds>(entity)?;

        trace!(group = %self.config.group, %entity, "released pool entity");
        Ok(())
    }

    /// Spawn one batch of members: instantiate from the template, then tag
    /// each with this pool's group and `Hidden`.
    fn spawn_batch<R: HostRuntime>(
        &mut self,
        runtime: &mut R,
        count: usize,
    ) -> Result<(), PoolError> {
        let entities = runtime.instantiate(&self.config.template, count)?;
        for &entity in &entities {
            runtime.set_tag(entity, self.config.group)?;
            runtime.set_tag(entity, Visibility::Hidden)?;
        }
        self.spawned += entities.len();
        debug!(
            group = %self.config.group,
            count,
            total = self.spawned,
            "spawned pool batch"
        );
        Ok(())
    }

    /// Handle an exhausted acquire according to the growth policy.
    fn grow_or_fail<R: HostRuntime>(&mut self, runtime: &mut R) -> Result<Entity, PoolError> {
        match self.config.growth {
            GrowthPolicy::Fixed => Err(PoolError::Exhausted {
                group: self.config.group,
                spawned: self.spawned,
            }),
            GrowthPolicy::Resizable { .. } => {
                let batch = self.config.top_up_batch();
                warn!(group = %self.config.group, batch, "pool exhausted, topping up");
                self.spawn_batch(runtime, batch)?;
                runtime
                    .first_match(&self.hidden)
                    .ok_or(PoolError::Exhausted {
                        group: self.config.group,
                        spawned: self.spawned,
                    })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pool_component::Tag;
    use pool_runtime::EntityTemplate;
    use pool_runtime::test_util::InMemoryRuntime;

    use super::*;

    fn pool_with(
        runtime: &mut InMemoryRuntime,
        group: u32,
        count: usize,
        fixed: bool,
    ) -> Pool {
        let mut config = PoolConfig::new(
            PoolGroup::from_raw(group),
            EntityTemplate::new("bullet").with_bounds_radius(0.5),
        )
        .with_initial_count(count);
        if fixed {
            config = config.fixed();
        }
        Pool::spawn_into(config, runtime).unwrap()
    }

    #[test]
    fn test_spawn_parks_everything_hidden() {
        let mut runtime = InMemoryRuntime::new();
        let pool = pool_with(&mut runtime, 0, 4, true);
        assert_eq!(pool.spawned_count(), 4);
        assert_eq!(pool.available(&runtime), 4);
        assert_eq!(pool.in_use(&runtime), 0);
    }

    #[test]
    fn test_acquire_attaches_position_and_bounds() {
        let mut runtime = InMemoryRuntime::new();
        let mut pool = pool_with(&mut runtime, 0, 2, true);

        let at = Vec3::new(3.0, 0.0, -1.0);
        let entity = pool.acquire(&mut runtime, at).unwrap();

        assert_eq!(
            runtime.tag_key::<Visibility>(entity),
            Some(Visibility::Visible.filter_key())
        );
        assert_eq!(runtime.attribute::<Position>(entity), Some(Position::new(at)));
        assert_eq!(
            runtime.attribute::<RenderBounds>(entity),
            Some(RenderBounds::centered_at(at, 0.5))
        );
        assert_eq!(pool.available(&runtime), 1);
        assert_eq!(pool.in_use(&runtime), 1);
    }

    #[test]
    fn test_release_hides_and_strips() {
        let mut runtime = InMemoryRuntime::new();
        let mut pool = pool_with(&mut runtime, 0, 1, true);

        let entity = pool.acquire(&mut runtime, Vec3::ONE).unwrap();
        pool.release(&mut runtime, entity).unwrap();

        assert!(!runtime.has_attribute::<Position>(entity));
        assert!(!runtime.has_attribute::<RenderBounds>(entity));
        assert_eq!(pool.available(&runtime), 1);
        assert_eq!(pool.in_use(&runtime), 0);
        // The completion barrier ran before detaching.
        assert_eq!(runtime.barrier_count(), 1);
    }

    #[test]
    fn test_fixed_pool_fails_when_exhausted() {
        let mut runtime = InMemoryRuntime::new();
        let mut pool = pool_with(&mut runtime, 0, 2, true);

        pool.acquire(&mut runtime, Vec3::ZERO).unwrap();
        pool.acquire(&mut runtime, Vec3::ZERO).unwrap();
        let err = pool.acquire(&mut runtime, Vec3::ZERO).unwrap_err();
        assert!(matches!(err, PoolError::Exhausted { spawned: 2, .. }));
        assert_eq!(runtime.entity_count(), 2);
    }

    #[test]
    fn test_resizable_pool_tops_up_exactly_one_batch() {
        let mut runtime = InMemoryRuntime::new();
        let mut pool = pool_with(&mut runtime, 0, 3, false);

        for _ in 0..3 {
            pool.acquire(&mut runtime, Vec3::ZERO).unwrap();
        }
        assert_eq!(pool.available(&runtime), 0);

        // One more acquire grows the pool by its initial count and succeeds.
        pool.acquire(&mut runtime, Vec3::ZERO).unwrap();
        assert_eq!(pool.spawned_count(), 6);
        assert_eq!(runtime.entity_count(), 6);
        assert_eq!(pool.available(&runtime), 2);
    }

    #[test]
    fn test_resizable_pool_honours_custom_batch() {
        let mut runtime = InMemoryRuntime::new();
        let config = PoolConfig::new(PoolGroup::from_raw(9), EntityTemplate::new("spark"))
            .with_initial_count(2)
            .resizable_by(5);
        let mut pool = Pool::spawn_into(config, &mut runtime).unwrap();

        pool.acquire(&mut runtime, Vec3::ZERO).unwrap();
        pool.acquire(&mut runtime, Vec3::ZERO).unwrap();
        pool.acquire(&mut runtime, Vec3::ZERO).unwrap();
        assert_eq!(pool.spawned_count(), 7);
    }

    #[test]
    fn test_release_is_a_noop_when_runtime_unavailable() {
        let mut runtime = InMemoryRuntime::new();
        let mut pool = pool_with(&mut runtime, 0, 1, true);
        let entity = pool.acquire(&mut runtime, Vec3::ZERO).unwrap();

        runtime.set_available(false);
        pool.release(&mut runtime, entity).unwrap();

        // Nothing was touched: still visible, attributes intact.
        runtime.set_available(true);
        assert!(runtime.has_attribute::<Position>(entity));
        assert_eq!(pool.in_use(&runtime), 1);
    }

    #[test]
    fn test_group_tag_survives_acquire_release_cycles() {
        let mut runtime = InMemoryRuntime::new();
        let mut pool = pool_with(&mut runtime, 7, 1, false);

        let entity = pool.acquire(&mut runtime, Vec3::ZERO).unwrap();
        pool.release(&mut runtime, entity).unwrap();
        let again = pool.acquire(&mut runtime, Vec3::ONE).unwrap();

        assert_eq!(entity, again);
        assert_eq!(runtime.tag_key::<PoolGroup>(entity), Some(7));
    }
}
