//! Entity Pool Registry - named pools and cross-pool diagnostics.
//!
//! Pools of different entity types live side by side. Each pool is stored
//! type-erased and recovered with a checked downcast on access, so a name
//! always resolves to the same pool instance with its original entity type.

mod diagnostics;

pub use diagnostics::*;

use std::any::{type_name, Any};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

use crate::entity::Entity;
use crate::error::PoolError;
use crate::pool::EntityPool;

/// Operations the registry needs on a pool without knowing its entity type.
trait ErasedPool {
    fn size(&self) -> usize;
    fn clear(&mut self);
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Entity + 'static> ErasedPool for EntityPool<T> {
    fn size(&self) -> usize {
        EntityPool::size(self)
    }

    fn clear(&mut self) {
        EntityPool::clear(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

struct RegisteredPool {
    entity_type: &'static str,
    pool: Box<dyn ErasedPool>,
}

/// Owner of named entity pools.
///
/// A name is bound to one pool for the lifetime of the registry; there is no
/// way to unregister or replace it. Pools can still be emptied with
/// [`EntityPool::clear`] or [`PoolRegistry::clear_all`].
#[derive(Default)]
pub struct PoolRegistry {
    pools: HashMap<String, RegisteredPool>,

    /// Pool names in registration order.
    names: Vec<String>,
}

impl PoolRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty pool for entities of type `T` and bind it to `name`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::PoolAlreadyRegistered`] if `name` is already
    /// bound. The existing pool is left as it was.
    pub fn register_pool<T: Entity + 'static>(
        &mut self,
        name: impl Into<String>,
    ) -> Result<&mut EntityPool<T>, PoolError> {
        let name = name.into();
        if self.pools.contains_key(&name) {
            return Err(PoolError::PoolAlreadyRegistered(name));
        }

        debug!(pool = %name, entity_type = type_name::<T>(), "pool registered");
        self.names.push(name.clone());
        self.pools.insert(
            name.clone(),
            RegisteredPool {
                entity_type: type_name::<T>(),
                pool: Box::new(EntityPool::<T>::named(name.clone())),
            },
        );
        self.pool_mut(&name)
    }

    /// Resolve the pool bound to `name`.
    ///
    /// # Errors
    ///
    /// - [`PoolError::PoolNotFound`] if `name` is unbound.
    /// - [`PoolError::PoolTypeMismatch`] if the pool holds another entity type.
    pub fn pool<T: Entity + 'static>(&self, name: &str) -> Result<&EntityPool<T>, PoolError> {
        let entry = self
            .pools
            .get(name)
            .ok_or_else(|| PoolError::PoolNotFound(name.to_string()))?;

        entry
            .pool
            .as_any()
            .downcast_ref::<EntityPool<T>>()
            .ok_or_else(|| PoolError::PoolTypeMismatch {
                name: name.to_string(),
                expected: type_name::<T>(),
            })
    }

    /// Mutable variant of [`pool`](Self::pool).
    pub fn pool_mut<T: Entity + 'static>(
        &mut self,
        name: &str,
    ) -> Result<&mut EntityPool<T>, PoolError> {
        let entry = self
            .pools
            .get_mut(name)
            .ok_or_else(|| PoolError::PoolNotFound(name.to_string()))?;

        entry
            .pool
            .as_any_mut()
            .downcast_mut::<EntityPool<T>>()
            .ok_or_else(|| PoolError::PoolTypeMismatch {
                name: name.to_string(),
                expected: type_name::<T>(),
            })
    }

    /// Check if a pool is bound to `name`.
    pub fn has_pool(&self, name: &str) -> bool {
        self.pools.contains_key(name)
    }

    /// Names of all registered pools, in registration order.
    pub fn pool_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }

    /// Type name of the entities stored in the pool bound to `name`.
    pub fn entity_type(&self, name: &str) -> Option<&'static str> {
        self.pools.get(name).map(|entry| entry.entity_type)
    }

    /// Number of registered pools.
    pub fn len(&self) -> usize {
        self.pools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }

    /// Empty every pool. The pools themselves stay registered.
    pub fn clear_all(&mut self) {
        for entry in self.pools.values_mut() {
            entry.pool.clear();
        }
    }

    /// Recompute per-pool entity counts and their total.
    pub fn diagnostics(&self) -> Diagnostics {
        let counts: BTreeMap<String, usize> = self
            .pools
            .iter()
            .map(|(name, entry)| (name.clone(), entry.pool.size()))
            .collect();
        Diagnostics::from_counts(counts)
    }
}

impl std::fmt::Debug for PoolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PoolRegistry")
            .field("pools", &self.names)
            .field("diagnostics", &self.diagnostics())
            .finish()
    }
}
