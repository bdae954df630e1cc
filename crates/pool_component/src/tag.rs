//! Core [`Tag`] trait and tag type identity.
//!
//! A tag is a small shared value attached to an entity purely so the host
//! runtime can filter on it — the pool never reads a tag back off an entity,
//! it only writes tags and queries by them.
//!
//! ## Type Identity
//!
//! [`TagTypeId`] is derived from the tag's **string name** using the FNV-1a
//! 64-bit hash algorithm. This is deterministic and language-neutral — any
//! host runtime, in any language, can compute the same ID for a given name
//! without sharing Rust type information.

use serde::{Deserialize, Serialize};

/// FNV-1a 64-bit offset basis.
const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;

/// FNV-1a 64-bit prime.
const FNV_PRIME: u64 = 0x0100_0000_01b3;

/// Hash a name with FNV-1a 64-bit.
///
/// ```text
/// hash = 0xcbf29ce484222325          (offset basis)
/// for each byte in name.as_bytes():
///     hash = hash XOR byte
///     hash = hash * 0x00000100000001b3  (prime)
/// return hash
/// ```
pub(crate) const fn fnv1a_64(name: &str) -> u64 {
    let bytes = name.as_bytes();
    let mut hash = FNV_OFFSET_BASIS;
    let mut i = 0;
    while i < bytes.len() {
        hash ^= bytes[i] as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
        i += 1;
    }
    hash
}

/// A unique identifier for a tag type, derived from its string name using
/// the FNV-1a 64-bit hash algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TagTypeId(pub u64);

impl TagTypeId {
    /// Compute the [`TagTypeId`] from a tag's string name.
    #[must_use]
    pub const fn from_name(name: &str) -> Self {
        Self(fnv1a_64(name))
    }

    /// Compute the [`TagTypeId`] for a Rust tag type `T`.
    #[must_use]
    pub fn of<T: Tag>() -> Self {
        Self::from_name(T::type_name())
    }
}

/// The core tag trait.
///
/// Tags are tiny copyable values used for grouping and filtering. Two tags of
/// the same type compare equal for filtering purposes exactly when their
/// [`filter_key`](Tag::filter_key) values are equal.
///
/// # Examples
///
/// ```rust
/// use serde::{Serialize, Deserialize};
/// use pool_component::Tag;
///
/// #[derive(Debug, Clone, Copy, Serialize, Deserialize)]
/// struct Team(u8);
///
/// impl Tag for Team {
///     fn type_name() -> &'static str { "Team" }
///     fn filter_key(&self) -> u64 { u64::from(self.0) }
/// }
/// ```
pub trait Tag: Copy + Send + Sync + 'static + Serialize + for<'de> Deserialize<'de> {
    /// A human-readable name for this tag type.
    fn type_name() -> &'static str;

    /// The value this tag contributes to filtering.
    ///
    /// Filtering is by exact key equality — a [`TagFilter`](crate::TagFilter)
    /// entry matches an entity when the entity carries a tag of the same type
    /// whose key equals the filter's key.
    fn filter_key(&self) -> u64;

    /// Returns the [`TagTypeId`] for this tag type.
    ///
    /// The default implementation hashes [`Tag::type_name()`] with FNV-1a
    /// 64-bit, producing a deterministic, language-neutral ID.
    fn tag_type_id() -> TagTypeId {
        TagTypeId::from_name(Self::type_name())
    }
}

/// A type-erased tag value: the tag's type identity plus its filter key.
///
/// This is the form tags take at the host-runtime boundary — the runtime
/// stores and compares `(type id, key)` pairs without knowing the Rust types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TagValue {
    /// The tag's type identity.
    pub type_id: TagTypeId,
    /// The tag's filter key.
    pub key: u64,
}

impl TagValue {
    /// Erase a typed tag into a [`TagValue`].
    #[must_use]
    pub fn of<T: Tag>(tag: T) -> Self {
        Self {
            type_id: T::tag_type_id(),
            key: tag.filter_key(),
        }
    }
}
