//! Entity identifiers.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use uuid::Uuid;

use crate::error::PoolError;

/// Unique, non-empty string identity of an entity within its pool.
///
/// An `EntityId` can only be built through validation, so every id a pool
/// sees is non-empty. Lookups accept plain `&str` through [`Borrow`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EntityId(String);

impl EntityId {
    /// Create an id from a string, rejecting empty or whitespace-only input.
    pub fn new(id: impl Into<String>) -> Result<Self, PoolError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(PoolError::EmptyId);
        }
        Ok(Self(id))
    }

    /// Create a fresh random id of the form `<prefix>-<uuid>`.
    pub fn generate(prefix: &str) -> Self {
        if prefix.is_empty() {
            Self(Uuid::new_v4().to_string())
        } else {
            Self(format!("{}-{}", prefix, Uuid::new_v4()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for EntityId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Hash and Eq are derived from the inner String, which agree with str.
impl Borrow<str> for EntityId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for EntityId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for EntityId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl TryFrom<String> for EntityId {
    type Error = PoolError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for EntityId {
    type Error = PoolError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EntityId> for String {
    fn from(id: EntityId) -> Self {
        id.0
    }
}
