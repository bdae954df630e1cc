//! Pool configuration.

use pool_component::PoolGroup;
use pool_runtime::EntityTemplate;
use serde::{Deserialize, Serialize};

use crate::error::PoolError;

/// Default number of entities a pool pre-spawns.
pub const DEFAULT_INITIAL_COUNT: usize = 10;

/// What happens when an acquire finds no hidden entity left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrowthPolicy {
    /// The pool never grows; an exhausted acquire fails with
    /// [`PoolError::Exhausted`](crate::PoolError::Exhausted).
    Fixed,
    /// The pool tops itself up with one batch and retries. `batch` is the
    /// top-up size; `None` means one batch of the initial count.
    Resizable {
        /// Number of entities spawned per top-up, or `None` for the
        /// pool's initial count.
        batch: Option<usize>,
    },
}

impl GrowthPolicy {
    /// The resizable policy with the default top-up batch.
    pub const RESIZABLE: Self = Self::Resizable { batch: None };
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self::RESIZABLE
    }
}

/// Configuration for one entity pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolConfig {
    /// The pool's group index. Must be unique across all pools in a registry.
    pub group: PoolGroup,
    /// Number of entities pre-spawned at pool creation.
    pub initial_count: usize,
    /// Behavior when the pool runs out of hidden entities.
    pub growth: GrowthPolicy,
    /// Template the host instantiates pool members from.
    pub template: EntityTemplate,
}

impl PoolConfig {
    /// Create a config for the given group and template, with
    /// [`DEFAULT_INITIAL_COUNT`] members and the resizable growth policy.
    #[must_use]
    pub fn new(group: PoolGroup, template: EntityTemplate) -> Self {
        Self {
            group,
            initial_count: DEFAULT_INITIAL_COUNT,
            growth: GrowthPolicy::default(),
            template,
        }
    }

    /// Override the initial entity count.
    #[must_use]
    pub fn with_initial_count(mut self, count: usize) -> Self {
        self.initial_count = count;
        self
    }

    /// Use the fixed policy: fail instead of growing when exhausted.
    #[must_use]
    pub fn fixed(mut self) -> Self {
        self.growth = GrowthPolicy::Fixed;
        self
    }

    /// Use the resizable policy with an explicit top-up batch size.
    #[must_use]
    pub fn resizable_by(mut self, batch: usize) -> Self {
        self.growth = GrowthPolicy::Resizable { batch: Some(batch) };
        self
    }

    /// The number of entities spawned per top-up under the resizable policy.
    #[must_use]
    pub fn top_up_batch(&self) -> usize {
        match self.growth {
            GrowthPolicy::Fixed => 0,
            GrowthPolicy::Resizable { batch } => batch.unwrap_or(self.initial_count),
        }
    }

    /// Validate the configuration.
    ///
    /// A pool must start with at least one entity, top-up batches must be
    /// non-empty, and the culling radius cannot be negative.
    pub fn validate(&self) -> Result<(), PoolError> {
        if self.initial_count == 0 {
            return Err(PoolError::InvalidConfig(
                "initial_count must be at least 1".into(),
            ));
        }
        if let GrowthPolicy::Resizable { batch: Some(0) } = self.growth {
            return Err(PoolError::InvalidConfig(
                "top-up batch must be at least 1".into(),
            ));
        }
        if self.template.bounds_radius < 0.0 {
            return Err(PoolError::InvalidConfig(
                "bounds_radius cannot be negative".into(),
            ));
        }
        Ok(())
    }
}
