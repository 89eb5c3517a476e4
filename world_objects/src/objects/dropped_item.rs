//! Items lying on the ground.

use entity_pool::{Entity, EntityId};
use serde::{Deserialize, Serialize};

use super::Position;

/// A stack of items dropped into the world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DroppedItem {
    pub id: EntityId,
    pub item_code: String,
    pub amount: u32,
    pub position: Position,
    /// Player allowed to pick this up first; `None` = anyone.
    pub owner: Option<EntityId>,
}

impl DroppedItem {
    pub fn new(id: EntityId, item_code: impl Into<String>, amount: u32, position: Position) -> Self {
        Self {
            id,
            item_code: item_code.into(),
            amount,
            position,
            owner: None,
        }
    }

    /// Reserve this drop for a player.
    pub fn owned_by(mut self, owner: EntityId) -> Self {
        self.owner = Some(owner);
        self
    }

    /// Check if `player` may pick up this drop.
    pub fn can_pick_up(&self, player: &EntityId) -> bool {
        self.owner.as_ref().map_or(true, |owner| owner == player)
    }
}

impl Entity for DroppedItem {
    fn id(&self) -> &EntityId {
        &self.id
    }
}
