//! In-memory reference runtime for tests and demos.
//!
//! [`InMemoryRuntime`] is a deliberately flat [`HostRuntime`] double: one
//! `BTreeMap` of entities, tags as `(type id, key)` pairs, attributes as
//! [`serde_json::Value`]. It exists so pool behavior can be exercised and
//! observed without an engine — it is not an entity store anyone should
//! build a game on.

use std::collections::{BTreeMap, HashMap};

use pool_component::{Attribute, AttributeTypeId, Tag, TagFilter, TagTypeId};
use serde_json::Value;

use crate::entity::{Entity, EntityAllocator};
use crate::runtime::{HostRuntime, RuntimeError};
use crate::template::EntityTemplate;

/// One entity's state in the in-memory runtime.
#[derive(Debug, Clone, Default)]
struct EntityRecord {
    /// Name of the template the entity was instantiated from.
    template: String,
    /// Attached tags, keyed by tag type.
    tags: HashMap<TagTypeId, u64>,
    /// Attached attributes, keyed by attribute type.
    attributes: HashMap<AttributeTypeId, Value>,
}

/// A flat, observable [`HostRuntime`] implementation.
///
/// Entities are stored in a `BTreeMap` so first-match queries are
/// deterministic (lowest entity ID wins). The runtime records how many
/// completion barriers were requested and can be toggled unavailable to
/// exercise teardown paths.
#[derive(Debug, Default)]
pub struct InMemoryRuntime {
    allocator: EntityAllocator,
    entities: BTreeMap<Entity, EntityRecord>,
    unavailable: bool,
    barriers: u64,
}

impl InMemoryRuntime {
    /// Create an empty runtime.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the runtime available or unavailable.
    ///
    /// Simulates the host world being torn down while callers still hold
    /// pool handles.
    pub fn set_available(&mut self, available: bool) {
        self.unavailable = !available;
    }

    /// Returns the total number of entities ever instantiated.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Returns how many completion barriers have been requested.
    #[must_use]
    pub fn barrier_count(&self) -> u64 {
        self.barriers
    }

    /// Returns the key an entity carries for tag type `T`, if any.
    #[must_use]
    pub fn tag_key<T: Tag>(&self, entity: Entity) -> Option<u64> {
        self.entities
            .get(&entity)
            .and_then(|record| record.tags.get(&TagTypeId::of::<T>()).copied())
    }

    /// Returns `true` if the entity carries attribute type `A`.
    #[must_use]
    pub fn has_attribute<A: Attribute>(&self, entity: Entity) -> bool {
        self.entities
            .get(&entity)
            .is_some_and(|record| record.attributes.contains_key(&AttributeTypeId::of::<A>()))
    }

    /// Decode the attribute of type `A` attached to an entity, if any.
    #[must_use]
    pub fn attribute<A: Attribute>(&self, entity: Entity) -> Option<A> {
        let record = self.entities.get(&entity)?;
        let value = record.attributes.get(&AttributeTypeId::of::<A>())?;
        serde_json::from_value(value.clone()).ok()
    }

    /// Returns the template name an entity was instantiated from, if any.
    #[must_use]
    pub fn template_of(&self, entity: Entity) -> Option<&str> {
        self.entities
            .get(&entity)
            .map(|record| record.template.as_str())
    }

    fn record_mut(&mut self, entity: Entity) -> Result<&mut EntityRecord, RuntimeError> {
        self.entities
            .get_mut(&entity)
            .ok_or(RuntimeError::UnknownEntity(entity))
    }
}

impl HostRuntime for InMemoryRuntime {
    fn is_available(&self) -> bool {
        !self.unavailable
    }

    fn instantiate(
        &mut self,
        template: &EntityTemplate,
        count: usize,
    ) -> Result<Vec<Entity>, RuntimeError> {
        if self.unavailable {
            return Err(RuntimeError::Unavailable);
        }
        let handles = self.allocator.allocate_batch(count);
        for &entity in &handles {
            self.entities.insert(
                entity,
                EntityRecord {
                    template: template.name.clone(),
                    ..EntityRecord::default()
                },
            );
        }
        Ok(handles)
    }

    fn set_tag<T: Tag>(&mut self, entity: Entity, tag: T) -> Result<(), RuntimeError> {
        let record = self.record_mut(entity)?;
        record.tags.insert(T::tag_type_id(), tag.filter_key());
        Ok(())
    }

    fn insert_attribute<A: Attribute>(
        &mut self,
        entity: Entity,
        attribute: A,
    ) -> Result<(), RuntimeError> {
        let value = serde_json::to_value(&attribute).map_err(|e| RuntimeError::Encode {
            attribute: A::type_name(),
            message: e.to_string(),
        })?;
        let record = self.record_mut(entity)?;
        record.attributes.insert(A::attribute_type_id(), value);
        Ok(())
    }

    fn remove_attribute<A: Attribute>(&mut self, entity: Entity) -> Result<(), RuntimeError> {
        let record = self.record_mut(entity)?;
        record
            .attributes
            .remove(&A::attribute_type_id())
            .ok_or(RuntimeError::MissingAttribute {
                entity,
                attribute: A::type_name(),
            })?;
        Ok(())
    }

    fn first_match(&self, filter: &TagFilter) -> Option<Entity> {
        self.entities
            .iter()
            .find(|(_, record)| filter.matches(|type_id| record.tags.get(&type_id).copied()))
            .map(|(&entity, _)| entity)
    }

    fn match_count(&self, filter: &TagFilter) -> usize {
        self.entities
            .values()
            .filter(|record| filter.matches(|type_id| record.tags.get(&type_id).copied()))
            .count()
    }

    fn complete_pending_work(&mut self) {
        self.barriers += 1;
    }
}

#[cfg(test)]
mod tests {
    use pool_component::{PoolGroup, Position, Visibility};

    use super::*;

    fn spawn_tagged(runtime: &mut InMemoryRuntime, group: PoolGroup, count: usize) -> Vec<Entity> {
        let template = EntityTemplate::new("crate");
        let entities = runtime.instantiate(&template, count).unwrap();
        for &entity in &entities {
            runtime.set_tag(entity, group).unwrap();
            runtime.set_tag(entity, Visibility::Hidden).unwrap();
        }
        entities
    }

    #[test]
    fn test_instantiate_records_template() {
        let mut runtime = InMemoryRuntime::new();
        let entities = spawn_tagged(&mut runtime, PoolGroup::from_raw(0), 2);
        assert_eq!(runtime.entity_count(), 2);
        assert_eq!(runtime.template_of(entities[0]), Some("crate"));
    }

    #[test]
    fn test_first_match_returns_lowest_id() {
        let mut runtime = InMemoryRuntime::new();
        let entities = spawn_tagged(&mut runtime, PoolGroup::from_raw(1), 3);

        let hidden = TagFilter::new()
            .with_tag(PoolGroup::from_raw(1))
            .with_tag(Visibility::Hidden);
        assert_eq!(runtime.first_match(&hidden), Some(entities[0]));

        // Flip the first entity visible; the next hidden one is returned.
        runtime.set_tag(entities[0], Visibility::Visible).unwrap();
        assert_eq!(runtime.first_match(&hidden), Some(entities[1]));
        assert_eq!(runtime.match_count(&hidden), 2);
    }

    #[test]
    fn test_filters_do_not_cross_groups() {
        let mut runtime = InMemoryRuntime::new();
        spawn_tagged(&mut runtime, PoolGroup::from_raw(1), 2);
        spawn_tagged(&mut runtime, PoolGroup::from_raw(2), 5);

        let group_two_hidden = TagFilter::new()
            .with_tag(PoolGroup::from_raw(2))
            .with_tag(Visibility::Hidden);
        assert_eq!(runtime.match_count(&group_two_hidden), 5);
    }

    #[test]
    fn test_attribute_round_trip_and_removal() {
        let mut runtime = InMemoryRuntime::new();
        let entities = spawn_tagged(&mut runtime, PoolGroup::from_raw(0), 1);
        let entity = entities[0];

        let position = Position::from_xyz(1.0, 2.0, 3.0);
        runtime.insert_attribute(entity, position).unwrap();
        assert_eq!(runtime.attribute::<Position>(entity), Some(position));

        runtime.remove_attribute::<Position>(entity).unwrap();
        assert!(!runtime.has_attribute::<Position>(entity));

        // Removing again reports the missing attribute.
        let err = runtime.remove_attribute::<Position>(entity).unwrap_err();
        assert!(matches!(err, RuntimeError::MissingAttribute { .. }));
    }

    #[test]
    fn test_unknown_entity_is_rejected() {
        let mut runtime = InMemoryRuntime::new();
        let err = runtime
            .set_tag(Entity::from_raw(99), Visibility::Hidden)
            .unwrap_err();
        assert!(matches!(err, RuntimeError::UnknownEntity(_)));
    }

    #[test]
    fn test_unavailable_runtime_rejects_instantiation() {
        let mut runtime = InMemoryRuntime::new();
        runtime.set_available(false);
        assert!(!runtime.is_available());
        let err = runtime
            .instantiate(&EntityTemplate::new("crate"), 1)
            .unwrap_err();
        assert!(matches!(err, RuntimeError::Unavailable));
    }

    #[test]
    fn test_barrier_counter_increments() {
        let mut runtime = InMemoryRuntime::new();
        runtime.complete_pending_work();
        runtime.complete_pending_work();
        assert_eq!(runtime.barrier_count(), 2);
    }
}
