//! Pool layout configuration, loaded from TOML.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Category of entity a configured pool stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoolKind {
    Mob,
    Player,
    DroppedItem,
}

impl std::fmt::Display for PoolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PoolKind::Mob => "mob",
            PoolKind::Player => "player",
            PoolKind::DroppedItem => "dropped_item",
        };
        write!(f, "{}", name)
    }
}

/// One pool to register at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolSpec {
    pub name: String,
    pub kind: PoolKind,
}

impl PoolSpec {
    pub fn new(name: impl Into<String>, kind: PoolKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// Which pools a [`WorldObjects`](crate::WorldObjects) starts with.
///
/// The first pool of each kind backs the typed accessors such as
/// [`WorldObjects::mobs`](crate::WorldObjects::mobs).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldConfig {
    #[serde(default)]
    pub pools: Vec<PoolSpec>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            pools: vec![
                PoolSpec::new("mobs", PoolKind::Mob),
                PoolSpec::new("players", PoolKind::Player),
                PoolSpec::new("drops", PoolKind::DroppedItem),
            ],
        }
    }
}

/// Errors raised while loading a [`WorldConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl WorldConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Read and parse a TOML config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }
}
