/// Agent vertices closer than this to a horizontal wall count as touching it.
pub const WALL_EPSILON: f32 = 0.2;
/// Enclosing-circle margin that gates the per-vertex wall test.
pub const WALL_PRECHECK_MARGIN: f32 = 0.5;
/// Margin used when bouncing consumables off the horizontal walls.
pub const CONSUMABLE_WALL_EPSILON: f32 = 0.2;
/// Squared center distance below which an impulse pair is skipped.
pub const DEGENERATE_DISTANCE_SQ: f32 = 1e-6;
/// Side length of the debug markers placed on mesh vertices.
pub const DEBUG_MARKER_SIZE: f32 = 6.0;

/// Tunables for [`PhysicsSystem`](crate::systems::PhysicsSystem).
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicsConfig {
    pub wall_epsilon: f32,
    pub wall_precheck_margin: f32,
    pub consumable_wall_epsilon: f32,
    pub degenerate_distance_sq: f32,
    pub debug_marker_size: f32,
    /// Emit bounding-circle and mesh-vertex debug lines each step.
    pub debug: bool,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            wall_epsilon: WALL_EPSILON,
            wall_precheck_margin: WALL_PRECHECK_MARGIN,
            consumable_wall_epsilon: CONSUMABLE_WALL_EPSILON,
            degenerate_distance_sq: DEGENERATE_DISTANCE_SQ,
            debug_marker_size: DEBUG_MARKER_SIZE,
            debug: false,
        }
    }
}

impl PhysicsConfig {
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}
