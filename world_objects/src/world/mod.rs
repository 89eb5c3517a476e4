//! World objects facade - the registry of live pools a client session uses.

use entity_pool::{Diagnostics, EntityId, EntityPool, PoolError, PoolRegistry};
use std::collections::HashMap;
use tracing::{debug, info};

use crate::config::{PoolKind, WorldConfig};
use crate::objects::{DroppedItem, Mob, Player, Position};

/// All live game objects known to the client, grouped by pool.
#[derive(Debug)]
pub struct WorldObjects {
    registry: PoolRegistry,

    /// Kind -> name of the first pool configured for it.
    defaults: HashMap<PoolKind, String>,
}

fn default_pool(defaults: &HashMap<PoolKind, String>, kind: PoolKind) -> Result<&str, PoolError> {
    defaults
        .get(&kind)
        .map(String::as_str)
        .ok_or_else(|| PoolError::PoolNotFound(kind.to_string()))
}

impl WorldObjects {
    /// Register every pool named in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::PoolAlreadyRegistered`] if the config names the
    /// same pool twice.
    pub fn from_config(config: &WorldConfig) -> Result<Self, PoolError> {
        let mut registry = PoolRegistry::new();
        let mut defaults = HashMap::new();

        for spec in &config.pools {
            match spec.kind {
                PoolKind::Mob => {
                    registry.register_pool::<Mob>(spec.name.as_str())?;
                }
                PoolKind::Player => {
                    registry.register_pool::<Player>(spec.name.as_str())?;
                }
                PoolKind::DroppedItem => {
                    registry.register_pool::<DroppedItem>(spec.name.as_str())?;
                }
            }
            defaults.entry(spec.kind).or_insert_with(|| spec.name.clone());
        }

        info!(pools = registry.len(), "world objects ready");
        Ok(Self { registry, defaults })
    }

    /// The underlying registry, for pools beyond the default ones.
    pub fn registry(&self) -> &PoolRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut PoolRegistry {
        &mut self.registry
    }

    pub fn mobs(&self) -> Result<&EntityPool<Mob>, PoolError> {
        self.registry.pool(default_pool(&self.defaults, PoolKind::Mob)?)
    }

    pub fn mobs_mut(&mut self) -> Result<&mut EntityPool<Mob>, PoolError> {
        let name = default_pool(&self.defaults, PoolKind::Mob)?;
        self.registry.pool_mut(name)
    }

    pub fn players(&self) -> Result<&EntityPool<Player>, PoolError> {
        self.registry.pool(default_pool(&self.defaults, PoolKind::Player)?)
    }

    pub fn players_mut(&mut self) -> Result<&mut EntityPool<Player>, PoolError> {
        let name = default_pool(&self.defaults, PoolKind::Player)?;
        self.registry.pool_mut(name)
    }

    pub fn drops(&self) -> Result<&EntityPool<DroppedItem>, PoolError> {
        self.registry.pool(default_pool(&self.defaults, PoolKind::DroppedItem)?)
    }

    pub fn drops_mut(&mut self) -> Result<&mut EntityPool<DroppedItem>, PoolError> {
        let name = default_pool(&self.defaults, PoolKind::DroppedItem)?;
        self.registry.pool_mut(name)
    }

    /// Put a new item on the ground under a freshly generated id.
    pub fn spawn_drop(
        &mut self,
        item_code: impl Into<String>,
        amount: u32,
        position: Position,
    ) -> Result<EntityId, PoolError> {
        let id = EntityId::generate("drop");
        self.drops_mut()?
            .add(DroppedItem::new(id.clone(), item_code, amount, position))?;
        Ok(id)
    }

    /// Apply damage to a mob. Returns whether the mob is still alive.
    pub fn apply_damage(&mut self, id: &str, amount: i32) -> Result<bool, PoolError> {
        let mobs = self.mobs_mut()?;
        mobs.update(id, |mob| mob.damaged(amount))?;
        Ok(mobs.get(id).is_some_and(Mob::is_alive))
    }

    /// Remove every mob at zero hp. Returns how many were removed.
    pub fn despawn_dead_mobs(&mut self) -> Result<usize, PoolError> {
        let mobs = self.mobs_mut()?;
        let dead: Vec<EntityId> = mobs
            .iter()
            .filter(|mob| !mob.is_alive())
            .map(|mob| mob.id.clone())
            .collect();

        for id in &dead {
            mobs.remove(id.as_str());
        }
        debug!(count = dead.len(), "despawned dead mobs");
        Ok(dead.len())
    }

    /// Empty every pool, e.g. when leaving a zone.
    pub fn reset(&mut self) {
        self.registry.clear_all();
    }

    pub fn diagnostics(&self) -> Diagnostics {
        self.registry.diagnostics()
    }
}
