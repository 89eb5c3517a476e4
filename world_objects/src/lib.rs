//! # World Objects
//!
//! Client-side tracking of the live objects a game session knows about:
//! mobs, players, and dropped items. Each category lives in its own
//! [`entity_pool::EntityPool`], all owned by one [`entity_pool::PoolRegistry`].
//!
//! ## Core Components
//!
//! - **objects**: Entity types stored in the pools
//! - **config**: TOML-driven pool layout
//! - **world**: The `WorldObjects` facade the runtime talks to

pub mod config;
pub mod objects;
pub mod world;

pub use config::*;
pub use objects::*;
pub use world::*;
