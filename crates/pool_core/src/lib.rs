//! # pool_core
//!
//! Entity pooling over a host ECS runtime. Instead of creating and destroying
//! engine entities as gameplay churns, a [`Pool`] pre-spawns a batch, tags
//! every member with its [`PoolGroup`] and [`Visibility::Hidden`], and then
//! recycles them: acquire flips the first hidden member visible and attaches
//! spatial attributes, release flips it back and strips them. Entities are
//! never destroyed, only parked.
//!
//! Pools are created through a [`PoolRegistry`], which enforces that group
//! indices are pairwise distinct — two pools filtering on the same group
//! would steal each other's entities, so a duplicate index is a fatal
//! configuration error.
//!
//! ## Usage
//!
//! ```rust
//! use pool_core::{PoolConfig, PoolRegistry, Vec3};
//! use pool_component::PoolGroup;
//! use pool_runtime::{EntityTemplate, test_util::InMemoryRuntime};
//!
//! let mut runtime = InMemoryRuntime::new();
//! let mut registry = PoolRegistry::new();
//!
//! let config = PoolConfig::new(PoolGroup::from_raw(0), EntityTemplate::new("bullet"))
//!     .with_initial_count(16);
//! registry.create_pool(config, &mut runtime).unwrap();
//!
//! let group = PoolGroup::from_raw(0);
//! let bullet = registry
//!     .acquire(group, &mut runtime, Vec3::new(0.0, 1.0, 0.0))
//!     .unwrap();
//! registry.release(group, &mut runtime, bullet).unwrap();
//! ```

pub mod config;
pub mod error;
pub mod pool;
pub mod registry;

pub use config::{GrowthPolicy, PoolConfig};
pub use error::PoolError;
pub use pool::Pool;
pub use registry::PoolRegistry;

// Re-exports so callers rarely need the component/runtime crates directly.
pub use pool_component::{PoolGroup, Position, RenderBounds, Vec3, Visibility};
pub use pool_runtime::{Entity, EntityTemplate, HostRuntime};
