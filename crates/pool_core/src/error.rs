//! Pool-layer error types.

use pool_component::PoolGroup;
use pool_runtime::RuntimeError;

/// Errors that can occur while creating or operating a pool.
#[derive(Debug, thiserror::Error)]
pub enum PoolError {
    /// A pool was configured with a group index another pool already uses.
    /// This is a developer error: two pools filtering the same group would
    /// hand out each other's entities.
    #[error("{0} is already used by another pool, choose another index")]
    DuplicateGroup(PoolGroup),

    /// A fixed-size pool ran out of hidden entities.
    #[error("pool for {group} is exhausted ({spawned} entities, growth disabled)")]
    Exhausted {
        /// The exhausted pool's group.
        group: PoolGroup,
        /// Total entities the pool has spawned.
        spawned: usize,
    },

    /// No pool is registered for the requested group.
    #[error("no pool registered for {0}")]
    UnknownGroup(PoolGroup),

    /// The configuration failed validation.
    #[error("invalid pool configuration: {0}")]
    InvalidConfig(String),

    /// The host runtime rejected an operation.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
