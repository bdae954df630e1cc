//! The [`HostRuntime`] contract.
//!
//! Four capabilities are required of the host, and nothing else:
//!
//! 1. Batch entity creation from a template.
//! 2. Attaching / removing typed tags and attributes on an entity.
//! 3. First-match and count queries over a tag filter.
//! 4. A synchronous barrier for outstanding asynchronous runtime work.
//!
//! Calls are synchronous request/response — any job scheduling happens
//! entirely inside the host, behind [`complete_pending_work`](HostRuntime::complete_pending_work).

use pool_component::{Attribute, Tag, TagFilter};

use crate::entity::Entity;
use crate::template::EntityTemplate;

/// Errors surfaced by a host runtime.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    /// The runtime cannot service requests (e.g. the world was torn down).
    #[error("host runtime is unavailable")]
    Unavailable,

    /// The entity handle is not managed by this runtime.
    #[error("{0} is not managed by this runtime")]
    UnknownEntity(Entity),

    /// An attribute removal targeted an entity that does not carry it.
    #[error("{entity} has no '{attribute}' attribute")]
    MissingAttribute {
        /// The entity the removal targeted.
        entity: Entity,
        /// The attribute's type name.
        attribute: &'static str,
    },

    /// An attribute could not be encoded into the host's storage form.
    #[error("failed to encode '{attribute}': {message}")]
    Encode {
        /// The attribute's type name.
        attribute: &'static str,
        /// Host-specific encoder diagnostics.
        message: String,
    },
}

/// The contract between a pool and the engine runtime that owns its entities.
///
/// Implementations decide entity storage, filter evaluation order, and what
/// "pending work" means; the pool only relies on the behaviors documented
/// per method. Query results need not be ordered — the pool takes whichever
/// match the host reports first.
pub trait HostRuntime {
    /// Whether the runtime is currently able to service requests.
    ///
    /// Pools treat release calls against an unavailable runtime as no-ops,
    /// so items being torn down alongside the world do not error.
    fn is_available(&self) -> bool;

    /// Create `count` entities from the template in one batch.
    ///
    /// The returned handles carry whatever the host's template provides, but
    /// no pool tags — the pool stamps those itself.
    fn instantiate(
        &mut self,
        template: &EntityTemplate,
        count: usize,
    ) -> Result<Vec<Entity>, RuntimeError>;

    /// Attach a tag to an entity, replacing any existing tag of the same type.
    fn set_tag<T: Tag>(&mut self, entity: Entity, tag: T) -> Result<(), RuntimeError>;

    /// Attach an attribute to an entity, replacing any existing attribute of
    /// the same type.
    fn insert_attribute<A: Attribute>(
        &mut self,
        entity: Entity,
        attribute: A,
    ) -> Result<(), RuntimeError>;

    /// Remove an attribute from an entity.
    ///
    /// Fails with [`RuntimeError::MissingAttribute`] when the entity does not
    /// carry the attribute.
    fn remove_attribute<A: Attribute>(&mut self, entity: Entity) -> Result<(), RuntimeError>;

    /// Returns the first entity matching the filter, if any.
    fn first_match(&self, filter: &TagFilter) -> Option<Entity>;

    /// Returns how many entities match the filter.
    fn match_count(&self, filter: &TagFilter) -> usize;

    /// Block until all in-flight runtime work has finished.
    ///
    /// Called before detaching components from a released entity so no host
    /// job is still reading them.
    fn complete_pending_work(&mut self);
}
