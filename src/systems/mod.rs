mod boundary;
mod collision;
mod debug_overlay;
mod impulse;
mod integrate;
mod physics;

pub use boundary::{agent_boundary_system, consumable_bounce_system, outline_contact};
pub use collision::{circles_overlap, collision_system, outline_hits_box};
pub use debug_overlay::{debug_overlay_system, DebugDraw, DebugLine, LineRecorder, NoDebugDraw};
pub use impulse::{elastic_velocity_delta, impulse_system, Body};
pub use integrate::integrate_system;
pub use physics::PhysicsSystem;
