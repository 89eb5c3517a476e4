//! Error types for pool and registry operations.

use thiserror::Error;

use crate::entity::EntityId;

/// Failures raised by [`EntityPool`](crate::EntityPool) and
/// [`PoolRegistry`](crate::PoolRegistry).
///
/// Every variant is returned before any state is touched, so the pool or
/// registry that produced it is still fully usable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoolError {
    /// `add` was called with an id that is already present.
    #[error("entity with id '{0}' already exists")]
    DuplicateId(EntityId),

    /// `update` was called with an id that is not present.
    #[error("entity with id '{0}' not found")]
    EntityNotFound(String),

    /// An update transform tried to change the key an entity is stored under.
    #[error("update of '{expected}' produced an entity with id '{actual}'")]
    IdentityViolation { expected: String, actual: EntityId },

    /// `register_pool` was called with a name that is already bound.
    #[error("pool '{0}' is already registered")]
    PoolAlreadyRegistered(String),

    /// No pool is bound to the requested name.
    #[error("pool '{0}' not found")]
    PoolNotFound(String),

    /// The pool exists but stores a different entity type.
    #[error("pool '{name}' does not hold entities of type {expected}")]
    PoolTypeMismatch { name: String, expected: &'static str },

    /// Entity ids must contain at least one non-whitespace character.
    #[error("entity id must not be empty")]
    EmptyId,
}
