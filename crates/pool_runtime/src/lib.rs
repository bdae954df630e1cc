//! # pool_runtime
//!
//! The boundary between the pool and the engine runtime that actually owns
//! the entities. The pool never stores entity data itself — it asks the host
//! to create entities in batches, stamps tags and attributes on them, and
//! queries by tag filter. Everything behind [`HostRuntime`] (storage layout,
//! query execution, job scheduling, culling) belongs to the host.
//!
//! This crate provides:
//!
//! - [`Entity`] — the opaque handle the host hands out.
//! - [`EntityAllocator`] — ID allocation utility for runtime implementors.
//! - [`EntityTemplate`] — the prefab analogue entities are instantiated from.
//! - [`HostRuntime`] — the contract the pool calls into.
//! - `test_util` (feature `test-util`) — an in-memory reference runtime for
//!   tests and demos.

pub mod entity;
pub mod runtime;
pub mod template;

#[cfg(any(test, feature = "test-util"))]
pub mod test_util;

pub use entity::{Entity, EntityAllocator};
pub use runtime::{HostRuntime, RuntimeError};
pub use template::EntityTemplate;
