//! Spatial attributes attached to visible pool items.
//!
//! A hidden item has no spatial footprint at all. On acquire the pool
//! attaches a [`Position`] at the requested coordinates and a
//! [`RenderBounds`] centred there so the host's culling sees a tight sphere;
//! on release both are removed again.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::attribute::Attribute;

/// World-space position of a visible pool item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Position {
    /// The position value.
    pub value: Vec3,
}

impl Position {
    /// The origin.
    pub const ORIGIN: Self = Self { value: Vec3::ZERO };

    /// Create a position from a vector.
    #[must_use]
    pub const fn new(value: Vec3) -> Self {
        Self { value }
    }

    /// Create a position from individual coordinates.
    #[must_use]
    pub const fn from_xyz(x: f32, y: f32, z: f32) -> Self {
        Self {
            value: Vec3::new(x, y, z),
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl Attribute for Position {
    fn type_name() -> &'static str {
        "Position"
    }
}

/// Bounding sphere used by the host's render culling.
///
/// The centre tracks the item's position at acquire time; the radius comes
/// from the pool's entity template. A proper AABB fit per template mesh would
/// tighten culling further.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RenderBounds {
    /// Centre of the bounding sphere.
    pub center: Vec3,
    /// Radius of the bounding sphere.
    pub radius: f32,
}

impl RenderBounds {
    /// A unit sphere at the origin.
    pub const UNIT: Self = Self {
        center: Vec3::ZERO,
        radius: 1.0,
    };

    /// Create bounds centred at the given point.
    #[must_use]
    pub const fn centered_at(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Move the bounds to a new centre, keeping the radius.
    #[must_use]
    pub const fn recentered(mut self, center: Vec3) -> Self {
        self.center = center;
        self
    }
}

impl Default for RenderBounds {
    fn default() -> Self {
        Self::UNIT
    }
}

impl Attribute for RenderBounds {
    fn type_name() -> &'static str {
        "RenderBounds"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::AttributeTypeId;

    #[test]
    fn test_position_from_xyz() {
        let p = Position::from_xyz(1.0, 2.0, 3.0);
        assert_eq!(p.value, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_position_default_is_origin() {
        assert_eq!(Position::default(), Position::ORIGIN);
    }

    #[test]
    fn test_bounds_recentered_keeps_radius() {
        let bounds = RenderBounds::centered_at(Vec3::ZERO, 2.5);
        let moved = bounds.recentered(Vec3::new(4.0, 0.0, 0.0));
        assert_eq!(moved.radius, 2.5);
        assert_eq!(moved.center, Vec3::new(4.0, 0.0, 0.0));
    }

    #[test]
    fn test_spatial_attribute_ids_differ() {
        assert_ne!(
            AttributeTypeId::of::<Position>(),
            AttributeTypeId::of::<RenderBounds>()
        );
    }

    #[test]
    fn test_position_serialization_roundtrip() {
        let p = Position::from_xyz(0.5, -1.0, 9.0);
        let value = serde_json::to_value(p).unwrap();
        let restored: Position = serde_json::from_value(value).unwrap();
        assert_eq!(p, restored);
    }
}
