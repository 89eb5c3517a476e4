//! Entity Pool - identity-keyed storage for one category of entities.

use std::collections::{BTreeMap, HashMap};
use tracing::{debug, trace};

use crate::entity::{Entity, EntityId};
use crate::error::PoolError;

/// A stored entity together with its position in enumeration order.
#[derive(Debug, Clone)]
struct Slot<T> {
    seq: u64,
    entity: T,
}

/// An identity-keyed collection of entities belonging to one category.
///
/// At most one entity exists per [`EntityId`]. Enumeration follows the order
/// in which the present ids were most recently inserted: replacing an entity
/// through [`update`](Self::update) or [`upsert`](Self::upsert) keeps its
/// position, while removing and re-adding it moves it to the end.
#[derive(Debug, Clone)]
pub struct EntityPool<T> {
    /// Name used in log output; empty for pools created outside a registry.
    name: String,

    /// All entities stored by ID.
    entities: HashMap<EntityId, Slot<T>>,

    /// Insertion sequence -> id, for ordered enumeration.
    order: BTreeMap<u64, EntityId>,

    next_seq: u64,
}

impl<T: Entity> EntityPool<T> {
    /// Create a new empty pool.
    pub fn new() -> Self {
        Self::named("")
    }

    /// Create a new empty pool labelled with `name` in log output.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entities: HashMap::new(),
            order: BTreeMap::new(),
            next_seq: 0,
        }
    }

    /// The label this pool was created with.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Insert an entity whose id is not yet present.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::DuplicateId`] if an entity with the same id is
    /// already stored. The pool is left unchanged.
    pub fn add(&mut self, entity: T) -> Result<(), PoolError> {
        if self.entities.contains_key(entity.id()) {
            debug!(pool = %self.name, id = %entity.id(), "rejected duplicate entity");
            return Err(PoolError::DuplicateId(entity.id().clone()));
        }
        self.insert_new(entity);
        Ok(())
    }

    /// Insert the entity, or replace the one stored under the same id.
    ///
    /// Returns the replaced entity, if any. A replaced entity keeps its
    /// position in enumeration order.
    pub fn upsert(&mut self, entity: T) -> Option<T> {
        match self.entities.get_mut(entity.id()) {
            Some(slot) => Some(std::mem::replace(&mut slot.entity, entity)),
            None => {
                self.insert_new(entity);
                None
            }
        }
    }

    /// Replace the entity at `id` with `transform` applied to it.
    ///
    /// The transform only sees an immutable view of the stored entity; the
    /// candidate it returns is written back only if its id equals `id`.
    ///
    /// # Errors
    ///
    /// - [`PoolError::EntityNotFound`] if no entity is stored at `id`.
    /// - [`PoolError::IdentityViolation`] if the candidate has a different id.
    ///
    /// On either error the stored entity is unchanged.
    pub fn update<F>(&mut self, id: &str, transform: F) -> Result<(), PoolError>
    where
        F: FnOnce(&T) -> T,
    {
        let slot = self
            .entities
            .get_mut(id)
            .ok_or_else(|| PoolError::EntityNotFound(id.to_string()))?;

        let candidate = transform(&slot.entity);
        if candidate.id().as_str() != id {
            debug!(pool = %self.name, id, actual = %candidate.id(), "rejected identity change");
            return Err(PoolError::IdentityViolation {
                expected: id.to_string(),
                actual: candidate.id().clone(),
            });
        }

        slot.entity = candidate;
        Ok(())
    }

    /// Get entity by ID.
    pub fn get(&self, id: &str) -> Option<&T> {
        self.entities.get(id).map(|slot| &slot.entity)
    }

    /// Check if an entity with this ID is present.
    pub fn has(&self, id: &str) -> bool {
        self.entities.contains_key(id)
    }

    /// Remove the entity at `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        self.take(id).is_some()
    }

    /// Remove the entity at `id` and hand it back to the caller.
    pub fn take(&mut self, id: &str) -> Option<T> {
        let slot = self.entities.remove(id)?;
        self.order.remove(&slot.seq);
        Some(slot.entity)
    }

    /// Remove every entity. The pool itself stays usable.
    pub fn clear(&mut self) {
        trace!(pool = %self.name, dropped = self.entities.len(), "pool cleared");
        self.entities.clear();
        self.order.clear();
    }

    /// Snapshot of all entities in enumeration order.
    ///
    /// The returned vector owns its entities, so later changes to the pool
    /// are not reflected in it.
    pub fn values(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    /// Snapshot of all ids in enumeration order.
    pub fn ids(&self) -> Vec<EntityId> {
        self.order.values().cloned().collect()
    }

    /// Borrowing iterator over entities in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.order
            .values()
            .filter_map(|id| self.entities.get(id))
            .map(|slot| &slot.entity)
    }

    /// Number of entities currently present.
    pub fn size(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    fn insert_new(&mut self, entity: T) {
        let id = entity.id().clone();
        let seq = self.next_seq;
        self.next_seq += 1;
        self.order.insert(seq, id.clone());
        self.entities.insert(id, Slot { seq, entity });
    }
}

impl<T: Entity> Default for EntityPool<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Creature {
        id: EntityId,
        hp: i32,
    }

    impl Creature {
        fn new(id: &str, hp: i32) -> Self {
            Self {
                id: EntityId::new(id).unwrap(),
                hp,
            }
        }

        fn with_hp(&self, hp: i32) -> Self {
            Self {
                hp,
                ..self.clone()
            }
        }
    }

    impl Entity for Creature {
        fn id(&self) -> &EntityId {
            &self.id
        }
    }

    fn hp_of(pool: &EntityPool<Creature>, id: &str) -> i32 {
        pool.get(id).unwrap().hp
    }

    fn ids_of(pool: &EntityPool<Creature>) -> Vec<String> {
        pool.ids().into_iter().map(EntityId::into_string).collect()
    }

    #[test]
    fn test_add_and_get() {
        let mut pool = EntityPool::new();
        pool.add(Creature::new("mob-1", 100)).unwrap();

        assert_eq!(pool.size(), 1);
        assert!(pool.has("mob-1"));
        assert_eq!(hp_of(&pool, "mob-1"), 100);
        assert!(pool.get("mob-2").is_none());
    }

    #[test]
    fn test_add_duplicate_keeps_original() {
        let mut pool = EntityPool::new();
        pool.add(Creature::new("npc-1", 10)).unwrap();

        let result = pool.add(Creature::new("npc-1", 99));
        assert!(matches!(result, Err(PoolError::DuplicateId(id)) if id == "npc-1"));
        assert_eq!(pool.size(), 1);
        assert_eq!(hp_of(&pool, "npc-1"), 10);
    }

    #[test]
    fn test_upsert_inserts_then_replaces() {
        let mut pool = EntityPool::new();

        assert!(pool.upsert(Creature::new("mob-1", 50)).is_none());
        let replaced = pool.upsert(Creature::new("mob-1", 70));

        assert_eq!(replaced, Some(Creature::new("mob-1", 50)));
        assert_eq!(pool.size(), 1);
        assert_eq!(hp_of(&pool, "mob-1"), 70);
    }

    #[test]
    fn test_upsert_is_idempotent() {
        let mut once = EntityPool::new();
        once.upsert(Creature::new("mob-1", 5));
        once.upsert(Creature::new("mob-2", 6));

        let mut many = EntityPool::new();
        for _ in 0..5 {
            many.upsert(Creature::new("mob-1", 5));
            many.upsert(Creature::new("mob-2", 6));
        }

        assert_eq!(once.values(), many.values());
        assert_eq!(many.size(), 2);
    }

    #[test]
    fn test_update_applies_transform() {
        let mut pool = EntityPool::new();
        pool.add(Creature::new("mob-1", 100)).unwrap();

        pool.update("mob-1", |c| c.with_hp(80)).unwrap();
        assert_eq!(hp_of(&pool, "mob-1"), 80);
    }

    #[test]
    fn test_update_missing_entity() {
        let mut pool: EntityPool<Creature> = EntityPool::new();
        let result = pool.update("ghost", |c| c.clone());
        assert_eq!(result, Err(PoolError::EntityNotFound("ghost".to_string())));
        assert!(pool.is_empty());
    }

    #[test]
    fn test_update_rejects_identity_change() {
        let mut pool = EntityPool::new();
        pool.add(Creature::new("drop-1", 10)).unwrap();

        let result = pool.update("drop-1", |_| Creature::new("drop-2", 11));
        assert!(matches!(
            result,
            Err(PoolError::IdentityViolation { ref expected, ref actual })
                if expected == "drop-1" && actual == "drop-2"
        ));
        assert_eq!(hp_of(&pool, "drop-1"), 10);
        assert!(!pool.has("drop-2"));
        assert_eq!(pool.size(), 1);
    }

    #[test]
    fn test_remove() {
        let mut pool = EntityPool::new();
        pool.add(Creature::new("mob-1", 1)).unwrap();

        assert!(pool.remove("mob-1"));
        assert!(!pool.remove("mob-1"));
        assert_eq!(pool.size(), 0);
    }

    #[test]
    fn test_take_returns_entity() {
        let mut pool = EntityPool::new();
        pool.add(Creature::new("mob-1", 42)).unwrap();

        assert_eq!(pool.take("mob-1"), Some(Creature::new("mob-1", 42)));
        assert_eq!(pool.take("mob-1"), None);
    }

    #[test]
    fn test_clear() {
        let mut pool = EntityPool::new();
        for i in 0..10 {
            pool.add(Creature::new(&format!("mob-{i}"), i)).unwrap();
        }

        pool.clear();
        assert_eq!(pool.size(), 0);
        assert!(pool.values().is_empty());

        // Pool stays usable after clearing
        pool.add(Creature::new("mob-0", 0)).unwrap();
        assert_eq!(pool.size(), 1);
    }

    #[test]
    fn test_enumeration_order() {
        let mut pool = EntityPool::new();
        pool.add(Creature::new("a", 1)).unwrap();
        pool.add(Creature::new("b", 2)).unwrap();
        pool.add(Creature::new("c", 3)).unwrap();
        assert_eq!(ids_of(&pool), ["a", "b", "c"]);

        // Replacement keeps position
        pool.update("a", |c| c.with_hp(10)).unwrap();
        pool.upsert(Creature::new("b", 20));
        assert_eq!(ids_of(&pool), ["a", "b", "c"]);

        // Removal and reinsertion moves to the end
        pool.remove("a");
        pool.add(Creature::new("a", 1)).unwrap();
        assert_eq!(ids_of(&pool), ["b", "c", "a"]);

        let hps: Vec<i32> = pool.iter().map(|c| c.hp).collect();
        assert_eq!(hps, [20, 3, 1]);
    }

    #[test]
    fn test_values_is_a_snapshot() {
        let mut pool = EntityPool::new();
        pool.add(Creature::new("mob-1", 100)).unwrap();

        let snapshot = pool.values();
        pool.update("mob-1", |c| c.with_hp(1)).unwrap();
        pool.add(Creature::new("mob-2", 5)).unwrap();
        pool.remove("mob-1");

        assert_eq!(snapshot, vec![Creature::new("mob-1", 100)]);
    }

    #[test]
    fn test_size_tracks_distinct_ids() {
        let mut pool = EntityPool::new();
        for round in 0..3 {
            for i in 0..8 {
                pool.upsert(Creature::new(&format!("e-{i}"), round));
            }
            let _ = pool.add(Creature::new("e-0", 0));
            pool.remove("e-3");
            pool.remove("missing");
            assert_eq!(pool.size(), 7);
            assert_eq!(pool.size(), pool.values().len());
            assert_eq!(pool.size(), pool.ids().len());
        }
    }

    #[test]
    fn test_named_pool() {
        let pool: EntityPool<Creature> = EntityPool::named("mobs");
        assert_eq!(pool.name(), "mobs");
        assert_eq!(EntityPool::<Creature>::default().name(), "");
    }
}
