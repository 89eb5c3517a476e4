//! Entity identity and the capability pools require of stored types.

mod id;

pub use id::*;

/// Capability required of anything stored in an [`EntityPool`](crate::EntityPool).
///
/// The pool keys entities by [`Entity::id`] and treats every other field as
/// opaque payload. `Clone` is needed so [`EntityPool::values`](crate::EntityPool::values)
/// can hand out snapshots that later mutation does not touch.
pub trait Entity: Clone {
    /// The identity this entity is stored under.
    fn id(&self) -> &EntityId;
}
