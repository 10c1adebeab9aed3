use hecs::World;

use crate::components::{Agent, AgentMode, BoundaryContact, Motion, Physics};
use crate::geometry::motion_radius;

/// Advance every moving entity by `elapsed_ms`.
///
/// An agent flagged as touching a wall during the previous step is pinned so
/// that its enclosing circle just touches that wall, instead of moving.
pub fn integrate_system(world: &mut World, elapsed_ms: f32, view_height: f32) {
    let step_seconds = elapsed_ms / 1000.0;

    for (_entity, (motion, physics, agent, mode)) in world.query_mut::<(
        &mut Motion,
        Option<&Physics>,
        Option<&Agent>,
        Option<&AgentMode>,
    )>() {
        let contact = match (agent, mode) {
            (Some(_), Some(mode)) => mode.boundary.state,
            _ => BoundaryContact::Free,
        };

        match contact {
            BoundaryContact::TouchingTop => {
                motion.position.y = motion_radius(motion);
            }
            BoundaryContact::TouchingBottom => {
                motion.position.y = view_height - motion_radius(motion);
            }
            BoundaryContact::Free => {
                if let Some(physics) = physics.filter(|p| p.affected_by_gravity) {
                    motion.velocity.y += physics.gravity * elapsed_ms;
                }
                motion.position += motion.velocity * step_seconds;
            }
        }
    }
}
