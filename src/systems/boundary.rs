use glam::Vec2;
use hecs::World;

use crate::components::{find_agent, Agent, AgentMode, BoundaryContact, Consumable, MeshStore, Motion};
use crate::config::PhysicsConfig;
use crate::geometry::motion_radius;

use super::collision::agent_outline;

/// Bounce consumables off the top and bottom walls.
///
/// Penetration is measured with half the enclosing radius as margin. Each
/// wall test flips the vertical velocity on its own, whatever its direction.
pub fn consumable_bounce_system(world: &mut World, view_height: f32, config: &PhysicsConfig) {
    let eps = config.consumable_wall_epsilon;
    for (_entity, motion) in world
        .query_mut::<&mut Motion>()
        .with::<&Consumable>()
        .without::<&Agent>()
    {
        let half_radius = motion_radius(motion) / 2.0;
        let upper_edge = motion.position.y - half_radius;
        let lower_edge = motion.position.y + half_radius;

        if upper_edge < eps {
            motion.velocity.y = -motion.velocity.y;
        }
        if lower_edge >= view_height - eps {
            motion.velocity.y = -motion.velocity.y;
        }
    }
}

/// Contact implied by the agent's world-space outline. The first vertex
/// within `eps` of either wall decides.
pub fn outline_contact(outline: &[Vec2], view_height: f32, eps: f32) -> BoundaryContact {
    for vertex in outline {
        if vertex.y <= eps {
            return BoundaryContact::TouchingTop;
        }
        if vertex.y >= view_height - eps {
            return BoundaryContact::TouchingBottom;
        }
    }
    BoundaryContact::Free
}

/// Recompute the agent's wall contact for the next integration step.
///
/// The enclosing circle gates the test; only an agent whose circle reaches
/// a wall has its mesh transformed and checked vertex by vertex.
pub fn agent_boundary_system(
    world: &mut World,
    meshes: &MeshStore,
    elapsed_ms: f32,
    view_height: f32,
    config: &PhysicsConfig,
) -> Option<BoundaryContact> {
    let agent = find_agent(world)?;
    let motion = *world.get::<&Motion>(agent).ok()?;

    let radius = motion_radius(&motion);
    let margin = config.wall_precheck_margin;
    let near_top = motion.position.y - radius < margin;
    let near_bottom = motion.position.y + radius >= view_height - margin;

    let contact = if near_top || near_bottom {
        match agent_outline(world, meshes, agent, &motion) {
            Ok(outline) => outline_contact(&outline, view_height, config.wall_epsilon),
            Err(err) => {
                err.report();
                BoundaryContact::Free
            }
        }
    } else {
        BoundaryContact::Free
    };

    let Ok(mut mode) = world.get::<&mut AgentMode>(agent) else {
        return Some(contact);
    };
    mode.boundary.tick(elapsed_ms);
    let held_ms = mode.boundary.elapsed_ms;
    if mode.boundary.go(contact) {
        tracing::debug!(
            ?agent,
            from = ?mode.boundary.previous,
            to = ?contact,
            held_ms,
            "agent boundary contact changed"
        );
    }
    Some(contact)
}
