//! Shared marker components for scene entities.
//!
//! The hecs [`World`](crate::World) doubles as the pose registry: any system
//! that tracks another entity holds its [`Entity`](crate::Entity) id and
//! re-resolves the [`Transform`](crate::Transform) each tick. A failed
//! lookup (despawned entity) is an explicit "not found", never a fault.

/// Tag component for the tracked player entity.
#[derive(Debug, Clone, Copy, Default)]
pub struct Player;

/// Tag component for static scenery that can block line of sight.
#[derive(Debug, Clone, Copy, Default)]
pub struct Obstacle;
