//! Sight-query world management with Rapier3D.
//!
//! Holds static occluders and per-entity agent colliders for ray queries
//! only. Nothing here is stepped; bodies never move on their own, so the
//! rigid body set stays empty and callers re-seat agent colliders as the
//! registry poses change.

use std::collections::HashMap;

use rapier3d::prelude::*;
use sim_core::{Entity, Vec3};

/// Collider world for line-of-sight queries.
pub struct SightWorld {
    pub rigid_body_set: RigidBodySet,
    pub collider_set: ColliderSet,
    pub query_pipeline: QueryPipeline,
    agents: HashMap<Entity, ColliderHandle>,
}

impl Default for SightWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl SightWorld {
    /// Create an empty sight world.
    pub fn new() -> Self {
        Self {
            rigid_body_set: RigidBodySet::new(),
            collider_set: ColliderSet::new(),
            query_pipeline: QueryPipeline::new(),
            agents: HashMap::new(),
        }
    }

    /// Add a fixed cuboid occluder (walls, crates, cover). Occluders carry
    /// no entity tag; a ray ending on one reports no entity.
    pub fn add_obstacle(&mut self, center: Vec3, half_extents: Vec3) -> ColliderHandle {
        let collider = ColliderBuilder::cuboid(half_extents.x, half_extents.y, half_extents.z)
            .translation(vector![center.x, center.y, center.z])
            .build();
        self.collider_set.insert(collider)
    }

    /// Add a capsule collider tagged with a registry entity. The tag rides
    /// in the collider's `user_data` so ray hits can be mapped back.
    pub fn add_agent(
        &mut self,
        entity: Entity,
        position: Vec3,
        half_height: f32,
        radius: f32,
    ) -> ColliderHandle {
        let collider = ColliderBuilder::capsule_y(half_height, radius)
            .translation(vector![position.x, position.y, position.z])
            .user_data(entity.to_bits().get() as u128)
            .build();
        let handle = self.collider_set.insert(collider);
        self.agents.insert(entity, handle);
        handle
    }

    /// Re-seat an agent collider at a new position. Call `refresh` after a
    /// batch of moves before querying.
    pub fn set_agent_position(&mut self, entity: Entity, position: Vec3) {
        let Some(&handle) = self.agents.get(&entity) else {
            log::warn!("no sight collider registered for {:?}", entity);
            return;
        };
        if let Some(collider) = self.collider_set.get_mut(handle) {
            collider.set_translation(vector![position.x, position.y, position.z]);
        }
    }

    /// Rebuild the query acceleration structure after colliders moved.
    pub fn refresh(&mut self) {
        self.query_pipeline.update(&self.collider_set);
    }

    /// Look up the collider handle backing an agent entity.
    pub fn handle_of(&self, entity: Entity) -> Option<ColliderHandle> {
        self.agents.get(&entity).copied()
    }
}
