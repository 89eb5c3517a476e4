//! Mob definitions.

use entity_pool::{Entity, EntityId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::Position;

/// A hostile or neutral creature the server has told us about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mob {
    pub id: EntityId,
    /// Template the server spawned this mob from (e.g. "wolf").
    pub kind: String,
    pub hp: i32,
    pub max_hp: i32,
    pub position: Position,

    /// Server-provided fields the client does not interpret.
    #[serde(default)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl Mob {
    /// Create a new mob at full health.
    pub fn new(id: EntityId, kind: impl Into<String>, max_hp: i32) -> Self {
        Self {
            id,
            kind: kind.into(),
            hp: max_hp,
            max_hp,
            position: Position::default(),
            extra: HashMap::new(),
        }
    }

    /// Set the position.
    pub fn at(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Check if the mob is alive.
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// A copy of this mob after taking `amount` damage, floored at zero hp.
    pub fn damaged(&self, amount: i32) -> Self {
        Self {
            hp: self.hp.saturating_sub(amount.max(0)).max(0),
            ..self.clone()
        }
    }
}

impl Entity for Mob {
    fn id(&self) -> &EntityId {
        &self.id
    }
}
