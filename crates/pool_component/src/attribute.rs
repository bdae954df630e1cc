//! Core [`Attribute`] trait for per-entity data.
//!
//! Where a [`Tag`](crate::Tag) is a shared filter value, an attribute is data
//! that belongs to one entity: its position, its culling bounds. The pool
//! attaches attributes when an item is acquired and strips them when it is
//! released.

use serde::{Deserialize, Serialize};

use crate::tag::fnv1a_64;

/// A unique identifier for an attribute type, derived from its string name
/// using the same FNV-1a 64-bit scheme as [`TagTypeId`](crate::TagTypeId).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AttributeTypeId(pub u64);

impl AttributeTypeId {
    /// Compute the [`AttributeTypeId`] from an attribute's string name.
    #[must_use]
    pub const fn from_name(name: &str) -> Self {
        Self(fnv1a_64(name))
    }

    /// Compute the [`AttributeTypeId`] for a Rust attribute type `A`.
    #[must_use]
    pub fn of<A: Attribute>() -> Self {
        Self::from_name(A::type_name())
    }
}

/// The core attribute trait.
///
/// Attributes must be serialisable so host runtimes can store them without
/// sharing Rust type information, and `Send + Sync` so runtimes are free to
/// shard their stores across threads.
pub trait Attribute: Send + Sync + 'static + Serialize + for<'de> Deserialize<'de> {
    /// A human-readable name for this attribute type.
    fn type_name() -> &'static str;

    /// Returns the [`AttributeTypeId`] for this attribute type.
    fn attribute_type_id() -> AttributeTypeId {
        AttributeTypeId::from_name(Self::type_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
    struct Health {
        current: f32,
        max: f32,
    }

    impl Attribute for Health {
        fn type_name() -> &'static str {
            "Health"
        }
    }

    #[test]
    fn test_attribute_type_id_matches_from_name() {
        assert_eq!(
            Health::attribute_type_id(),
            AttributeTypeId::from_name("Health")
        );
    }

    #[test]
    fn test_attribute_type_id_differs_between_types() {
        #[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
        struct Armour(f32);
        impl Attribute for Armour {
            fn type_name() -> &'static str {
                "Armour"
            }
        }

        assert_ne!(Health::attribute_type_id(), Armour::attribute_type_id());
    }

    #[test]
    fn test_attribute_serialization_roundtrip() {
        let health = Health {
            current: 80.0,
            max: 100.0,
        };
        let value = serde_json::to_value(&health).unwrap();
        let restored: Health = serde_json::from_value(value).unwrap();
        assert_eq!(restored.current, 80.0);
        assert_eq!(restored.max, 100.0);
    }
}
