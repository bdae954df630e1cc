//! Tag filters — declarative entity selection.
//!
//! A [`TagFilter`] is a conjunction of tag values handed to the host runtime:
//! an entity matches when, for every entry, it carries a tag of that type
//! whose filter key equals the entry's key. The pool builds two filters per
//! group — `(group, hidden)` and `(group, visible)` — and reuses them for
//! every acquire and count.

use serde::{Deserialize, Serialize};

use crate::tag::{Tag, TagTypeId, TagValue};

/// A conjunction of tag values an entity must carry to match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagFilter {
    /// The tag values, all of which must match.
    tags: Vec<TagValue>,
}

impl TagFilter {
    /// Create a new empty filter. An empty filter matches every entity.
    #[must_use]
    pub fn new() -> Self {
        Self { tags: Vec::new() }
    }

    /// Require the given tag value.
    ///
    /// Adding a second value for the same tag type replaces the first — an
    /// entity carries at most one value per tag type, so requiring two
    /// different values of one type could never match.
    #[must_use]
    pub fn with_tag<T: Tag>(mut self, tag: T) -> Self {
        let value = TagValue::of(tag);
        if let Some(existing) = self.tags.iter_mut().find(|v| v.type_id == value.type_id) {
            *existing = value;
        } else {
            self.tags.push(value);
        }
        self
    }

    /// Returns the tag values in this filter.
    #[must_use]
    pub fn tags(&self) -> &[TagValue] {
        &self.tags
    }

    /// Returns the number of tag requirements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Returns `true` if the filter has no requirements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Evaluate this filter against one entity's tags.
    ///
    /// `lookup` resolves a tag type to the key the entity carries for it, or
    /// `None` if the entity has no tag of that type. Runtime implementations
    /// call this per candidate entity.
    pub fn matches<F>(&self, mut lookup: F) -> bool
    where
        F: FnMut(TagTypeId) -> Option<u64>,
    {
        self.tags
            .iter()
            .all(|value| lookup(value.type_id) == Some(value.key))
    }
}

impl Default for TagFilter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markers::{PoolGroup, Visibility};

    fn lookup_for(entries: &[(TagTypeId, u64)]) -> impl FnMut(TagTypeId) -> Option<u64> + '_ {
        move |type_id| {
            entries
                .iter()
                .find(|(id, _)| *id == type_id)
                .map(|(_, key)| *key)
        }
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = TagFilter::new();
        assert!(filter.is_empty());
        assert!(filter.matches(|_| None));
    }

    #[test]
    fn test_filter_requires_all_tags() {
        let filter = TagFilter::new()
            .with_tag(PoolGroup::from_raw(2))
            .with_tag(Visibility::Hidden);

        let entity = [
            (TagTypeId::of::<PoolGroup>(), 2),
            (TagTypeId::of::<Visibility>(), 0),
        ];
        assert!(filter.matches(lookup_for(&entity)));

        // Same group but visible: no match.
        let visible = [
            (TagTypeId::of::<PoolGroup>(), 2),
            (TagTypeId::of::<Visibility>(), 1),
        ];
        assert!(!filter.matches(lookup_for(&visible)));

        // Missing the group tag entirely: no match.
        let untagged = [(TagTypeId::of::<Visibility>(), 0)];
        assert!(!filter.matches(lookup_for(&untagged)));
    }

    #[test]
    fn test_with_tag_replaces_same_type() {
        let filter = TagFilter::new()
            .with_tag(Visibility::Hidden)
            .with_tag(Visibility::Visible);
        assert_eq!(filter.len(), 1);
        assert_eq!(filter.tags()[0].key, 1);
    }
}
