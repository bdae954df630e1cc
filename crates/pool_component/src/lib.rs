//! # pool_component
//!
//! Tag and attribute definitions for entity pooling — what gets stamped onto
//! a pooled entity and how the host runtime filters on it.
//!
//! This crate provides:
//!
//! - [`Tag`] trait — small, copyable marker values used purely for filtering
//!   and grouping, never for unique per-entity state.
//! - [`Attribute`] trait — per-entity data attached while an item is checked
//!   out of a pool (position, culling bounds).
//! - [`PoolGroup`] / [`Visibility`] — the two marker tags every pooled entity
//!   carries.
//! - [`Position`] / [`RenderBounds`] — spatial attributes present only while
//!   an item is visible.
//! - [`TagFilter`] — declarative conjunction of tag values, handed to the
//!   host runtime to select entities.

pub mod attribute;
pub mod filter;
pub mod markers;
pub mod spatial;
pub mod tag;

pub use attribute::{Attribute, AttributeTypeId};
pub use filter::TagFilter;
pub use markers::{PoolGroup, Visibility};
pub use spatial::{Position, RenderBounds};
pub use tag::{Tag, TagTypeId, TagValue};

// Re-export glam types for convenience.
pub use glam::Vec3;
