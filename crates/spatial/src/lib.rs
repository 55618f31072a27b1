//! Line-of-sight queries with Rapier3D for Watchpost.

pub mod raycast;
pub mod sight_world;

pub use raycast::*;
pub use sight_world::*;

// Re-export Rapier for downstream crates
pub use rapier3d;

// Re-export common Rapier types
pub use rapier3d::prelude::ColliderHandle;
