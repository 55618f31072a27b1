//! Core simulation types for Watchpost.
//!
//! This crate provides the foundational pieces shared by every system:
//! - Transform and spatial marker components
//! - Frame/fixed-step clock
//! - Quaternion and vector helpers for facing and steering

pub mod clock;
pub mod components;
pub mod math;
pub mod transform;

pub use clock::*;
pub use components::*;
pub use math::*;
pub use transform::*;

// Re-export commonly used types
pub use glam::{Quat, Vec2, Vec3};
pub use hecs::{Entity, World};
