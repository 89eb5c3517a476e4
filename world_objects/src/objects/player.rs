//! Player definitions.

use entity_pool::{Entity, EntityId};
use serde::{Deserialize, Serialize};

use super::Position;

/// Another player visible to this client (or the local player itself).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: EntityId,
    pub name: String,
    pub level: u32,
    pub hp: i32,
    pub position: Position,
}

impl Player {
    /// Create a new level 1 player with the given name.
    pub fn new(id: EntityId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            level: 1,
            hp: 10,
            position: Position::default(),
        }
    }

    /// Check if the player is alive.
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }
}

impl Entity for Player {
    fn id(&self) -> &EntityId {
        &self.id
    }
}
