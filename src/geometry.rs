use glam::Vec2;

use crate::components::{Mesh, Motion};

/// Footprint of a motion's box, with the facing sign stripped.
pub fn bounding_box(motion: &Motion) -> Vec2 {
    motion.scale.abs()
}

/// Half-diagonal of `bbox`: the radius of a circle enclosing the whole box.
pub fn approximation_radius(bbox: Vec2) -> f32 {
    let half = bbox / 2.0;
    half.dot(half).sqrt()
}

/// Enclosing-circle radius of a motion's bounding box.
pub fn motion_radius(motion: &Motion) -> f32 {
    approximation_radius(bounding_box(motion))
}

/// Map a local mesh vertex to world space.
pub fn world_vertex(local: Vec2, motion: &Motion) -> Vec2 {
    motion.transform().transform_point2(local)
}

/// All vertices of `mesh` placed at `motion`, in mesh order.
pub fn world_vertices<'a>(mesh: &'a Mesh, motion: &Motion) -> impl Iterator<Item = Vec2> + 'a {
    let transform = motion.transform();
    mesh.vertices
        .iter()
        .map(move |&v| transform.transform_point2(v))
}

/// Axis-aligned box given by its top-left corner and size (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    /// Box of `bounding_box(motion)` centered on the motion's position.
    pub fn from_motion(motion: &Motion) -> Self {
        let size = bounding_box(motion);
        Self {
            min: motion.position - size / 2.0,
            size,
        }
    }

    /// Inclusive on every edge.
    pub fn contains(&self, p: Vec2) -> bool {
        let max = self.min + self.size;
        self.min.x <= p.x && p.x <= max.x && self.min.y <= p.y && p.y <= max.y
    }

    pub fn is_degenerate(&self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }
}
