//! The two marker tags carried by every pooled entity.
//!
//! [`PoolGroup`] partitions entities between pools so a pool only ever
//! filters its own subset. [`Visibility`] records whether an item is checked
//! out (visible) or parked (hidden). Group membership is set once at spawn
//! and never changes; visibility is toggled on every acquire and release.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::tag::Tag;

/// Identifies which pool an entity belongs to.
///
/// Group indices must be pairwise distinct across pools — the registry
/// refuses to create a second pool with an index already in use. The index
/// is immutable for the entity's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PoolGroup(pub u32);

impl PoolGroup {
    /// Create a group from a raw index.
    #[must_use]
    pub const fn from_raw(index: u32) -> Self {
        Self(index)
    }

    /// Returns the raw group index.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Display for PoolGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "group {}", self.0)
    }
}

impl Tag for PoolGroup {
    fn type_name() -> &'static str {
        "PoolGroup"
    }

    fn filter_key(&self) -> u64 {
        u64::from(self.0)
    }
}

/// Whether a pooled entity is currently checked out of its pool.
///
/// Visibility exactly mirrors whether spatial attributes are attached: a
/// visible entity carries [`Position`](crate::Position) and
/// [`RenderBounds`](crate::RenderBounds), a hidden one carries neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Visibility {
    /// Parked in the pool, not rendered, no spatial attributes.
    Hidden,
    /// Checked out, positioned, and renderable.
    Visible,
}

impl Visibility {
    /// Returns `true` for [`Visibility::Visible`].
    #[must_use]
    pub const fn is_visible(self) -> bool {
        matches!(self, Self::Visible)
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hidden => write!(f, "hidden"),
            Self::Visible => write!(f, "visible"),
        }
    }
}

impl Tag for Visibility {
    fn type_name() -> &'static str {
        "Visibility"
    }

    fn filter_key(&self) -> u64 {
        match self {
            Self::Hidden => 0,
            Self::Visible => 1,
        }
    }
}
