//! # Entity Pool
//!
//! In-memory registry of live game objects (mobs, players, dropped items)
//! grouped into independently managed pools. Each pool guarantees identity
//! uniqueness; the registry owns named pools and aggregates occupancy
//! statistics across them.
//!
//! ## Core Components
//!
//! - **entity**: The `Entity` capability and the validated `EntityId` key
//! - **pool**: `EntityPool<T>`, the identity-keyed container for one category
//! - **registry**: `PoolRegistry`, named pools plus live `Diagnostics`
//!
//! Everything here is single-threaded and synchronous: every operation runs
//! to completion and a failing operation leaves all state untouched.

pub mod entity;
pub mod error;
pub mod pool;
pub mod registry;

pub use entity::*;
pub use error::*;
pub use pool::*;
pub use registry::*;
