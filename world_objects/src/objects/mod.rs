//! Entity types tracked by the client runtime.

mod dropped_item;
mod mob;
mod player;

pub use dropped_item::*;
pub use mob::*;
pub use player::*;

use serde::{Deserialize, Serialize};

/// World-space position of an object.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to another position.
    pub fn distance(&self, other: &Position) -> f32 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}
