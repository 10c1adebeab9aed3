use hecs::World;

use crate::components::{CollisionEvent, MeshStore};
use crate::config::PhysicsConfig;

use super::boundary::{agent_boundary_system, consumable_bounce_system};
use super::collision::collision_system;
use super::debug_overlay::{debug_overlay_system, DebugDraw};
use super::impulse::impulse_system;
use super::integrate::integrate_system;

/// Per-frame motion and collision pipeline.
///
/// Owns the collision-event list for the frame just stepped. The game layer
/// reads it through [`collision_events`](Self::collision_events) and must
/// clear it (or [`drain_collisions`](Self::drain_collisions)) before the next
/// step.
pub struct PhysicsSystem {
    pub config: PhysicsConfig,
    events: Vec<CollisionEvent>,
}

impl PhysicsSystem {
    pub fn new(config: PhysicsConfig) -> Self {
        Self {
            config,
            events: Vec::new(),
        }
    }

    /// Run one frame: integrate, bounce consumables, detect, resolve
    /// impulses, then recompute the agent's wall contact for the next frame.
    pub fn step(
        &mut self,
        world: &mut World,
        meshes: &MeshStore,
        elapsed_ms: f32,
        view_width: f32,
        view_height: f32,
        debug: &mut dyn DebugDraw,
    ) {
        if !self.events.is_empty() {
            tracing::warn!(
                stale = self.events.len(),
                "collision events were not cleared before the next step; dropping them"
            );
            self.events.clear();
        }

        // Positions must be fully integrated before any pair is tested.
        integrate_system(world, elapsed_ms, view_height);
        consumable_bounce_system(world, view_height, &self.config);

        let pairs = collision_system(world, meshes, &mut self.events);
        let resolved = impulse_system(world, &self.events, self.config.degenerate_distance_sq);

        // Flags written here are read by the integrator next frame.
        let contact = agent_boundary_system(world, meshes, elapsed_ms, view_height, &self.config);

        if self.config.debug {
            debug_overlay_system(world, meshes, debug, self.config.debug_marker_size);
        }

        tracing::debug!(
            elapsed_ms,
            view_width,
            view_height,
            pairs,
            resolved,
            ?contact,
            "physics step"
        );
    }

    /// Events of the last step, two per contact pair.
    pub fn collision_events(&self) -> &[CollisionEvent] {
        &self.events
    }

    pub fn clear_collisions(&mut self) {
        self.events.clear();
    }

    /// Hand the events of the last step to the caller and clear the list.
    pub fn drain_collisions(&mut self) -> std::vec::Drain<'_, CollisionEvent> {
        self.events.drain(..)
    }
}

impl Default for PhysicsSystem {
    fn default() -> Self {
        Self::new(PhysicsConfig::default())
    }
}
