//! Entity templates — what a pool instantiates from.
//!
//! The template is the prefab analogue: a named description the host uses to
//! build each pooled entity (mesh, materials, whatever the host associates
//! with the name). The pool itself only reads the culling radius, which it
//! stamps into each acquired item's [`RenderBounds`](pool_component::RenderBounds).

use serde::{Deserialize, Serialize};

/// Describes the entities a pool creates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityTemplate {
    /// Host-side template name (e.g. `"bullet"`). The host resolves this to
    /// its own prefab / asset reference.
    pub name: String,
    /// Radius of the culling sphere attached to visible items.
    pub bounds_radius: f32,
}

impl EntityTemplate {
    /// Create a template with the given name and a unit culling radius.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bounds_radius: 1.0,
        }
    }

    /// Override the culling radius.
    #[must_use]
    pub fn with_bounds_radius(mut self, radius: f32) -> Self {
        self.bounds_radius = radius;
        self
    }
}
