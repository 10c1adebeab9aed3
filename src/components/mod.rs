pub mod mesh;
pub mod physics;

use glam::{Affine2, Vec2};
use hecs::{Entity, World};

use crate::fsm::StateMachine;

pub use mesh::{Mesh, MeshHandle, MeshStore};
pub use physics::{CollisionEvent, ContactKind, Physics};

/// Position, velocity, facing and footprint of a moving entity.
///
/// `scale` doubles as the bounding-box extent: its sign encodes the facing
/// direction, its magnitude the box size. Neither component may be zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Rotation in radians.
    pub angle: f32,
    pub scale: Vec2,
}

impl Motion {
    pub fn new(position: Vec2, scale: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            angle: 0.0,
            scale,
        }
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_angle(mut self, angle: f32) -> Self {
        self.angle = angle;
        self
    }

    /// Local-to-world transform: translate, then rotate, then scale.
    pub fn transform(&self) -> Affine2 {
        Affine2::from_scale_angle_translation(self.scale, self.angle, self.position)
    }
}

/// Marker: the user-controlled entity. At most one is alive at a time.
pub struct Agent;

/// Marker: lethal obstacle roaming across the screen.
pub struct HazardWall;

/// Marker: item the agent can eat. Bounces off the top and bottom walls.
pub struct Consumable;

/// Marker: rotating vortex that swallows whatever it touches.
pub struct HazardZone;

/// Marker: small mass-bearing particle.
pub struct Debris;

/// Contact state of the agent against the top/bottom screen edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryContact {
    Free,
    TouchingTop,
    TouchingBottom,
}

/// FSM tracking the agent's boundary contact across frames.
pub type BoundaryFsm = StateMachine<BoundaryContact>;

/// Per-agent mode record.
///
/// The boundary state is written at the end of a physics step and read by
/// the integrator at the start of the next one.
pub struct AgentMode {
    pub boundary: BoundaryFsm,
    /// Slow gameplay mode (no hazard zones spawn).
    pub basic_mode: bool,
}

impl AgentMode {
    pub fn new() -> Self {
        Self {
            boundary: StateMachine::new(BoundaryContact::Free),
            basic_mode: true,
        }
    }

    pub fn touches_top_wall(&self) -> bool {
        self.boundary.state == BoundaryContact::TouchingTop
    }

    pub fn touches_bottom_wall(&self) -> bool {
        self.boundary.state == BoundaryContact::TouchingBottom
    }
}

impl Default for AgentMode {
    fn default() -> Self {
        Self::new()
    }
}

/// Return the first (and only) live agent, if any.
pub fn find_agent(world: &World) -> Option<Entity> {
    world
        .query::<&Agent>()
        .with::<&Motion>()
        .iter()
        .next()
        .map(|(entity, _)| entity)
}
