use glam::Vec2;
use hecs::World;

use crate::components::{MeshHandle, MeshStore, Motion};
use crate::geometry::{motion_radius, world_vertices};

/// Receives line requests from the physics core. Rendering is up to the
/// implementor; nothing drawn here feeds back into the simulation.
pub trait DebugDraw {
    /// Request an axis-aligned line (a thin box) centered at `position`.
    fn line(&mut self, position: Vec2, scale: Vec2);
}

/// Discards every request.
pub struct NoDebugDraw;

impl DebugDraw for NoDebugDraw {
    fn line(&mut self, _position: Vec2, _scale: Vec2) {}
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebugLine {
    pub position: Vec2,
    pub scale: Vec2,
}

/// Keeps requests around so a renderer (or a test) can pick them up later.
#[derive(Debug, Default)]
pub struct LineRecorder {
    pub lines: Vec<DebugLine>,
}

impl DebugDraw for LineRecorder {
    fn line(&mut self, position: Vec2, scale: Vec2) {
        self.lines.push(DebugLine { position, scale });
    }
}

/// Frame every moving entity's enclosing circle with four lines and mark
/// each world-space vertex of its mesh.
pub fn debug_overlay_system(
    world: &World,
    meshes: &MeshStore,
    draw: &mut dyn DebugDraw,
    marker_size: f32,
) {
    for (_entity, (motion, mesh)) in world.query::<(&Motion, Option<&MeshHandle>)>().iter() {
        let radius = motion_radius(motion);
        // Mirrored bodies keep a positive line width.
        let thickness = motion.scale.x.abs() / 20.0;
        let vertical = Vec2::new(thickness, 2.0 * radius);
        let horizontal = Vec2::new(2.0 * radius, thickness);
        let p = motion.position;

        draw.line(Vec2::new(p.x, p.y + radius), horizontal);
        draw.line(Vec2::new(p.x, p.y - radius), horizontal);
        draw.line(Vec2::new(p.x + radius, p.y), vertical);
        draw.line(Vec2::new(p.x - radius, p.y), vertical);

        let Some(mesh) = mesh.and_then(|&handle| meshes.get(handle).ok()) else {
            continue;
        };
        for vertex in world_vertices(mesh, motion) {
            draw.line(vertex, Vec2::splat(marker_size));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Mesh;

    #[test]
    fn four_lines_per_body_plus_one_marker_per_vertex() {
        let mut world = World::new();
        let mut meshes = MeshStore::new();
        let tri = meshes.add(Mesh::new(vec![Vec2::ZERO, Vec2::X, Vec2::Y]));
        world.spawn((Motion::new(Vec2::new(50.0, 50.0), Vec2::new(60.0, 80.0)),));
        world.spawn((Motion::new(Vec2::new(200.0, 50.0), Vec2::splat(10.0)), tri));

        let mut recorder = LineRecorder::default();
        debug_overlay_system(&world, &meshes, &mut recorder, 6.0);

        assert_eq!(recorder.lines.len(), 4 + 4 + 3);
        let markers = recorder
            .lines
            .iter()
            .filter(|l| l.scale == Vec2::splat(6.0))
            .count();
        assert_eq!(markers, 3);
    }

    #[test]
    fn circle_frame_sits_on_the_radius() {
        let mut world = World::new();
        world.spawn((Motion::new(Vec2::new(50.0, 50.0), Vec2::new(60.0, 80.0)),));

        let mut recorder = LineRecorder::default();
        debug_overlay_system(&world, &MeshStore::new(), &mut recorder, 6.0);

        let positions: Vec<Vec2> = recorder.lines.iter().map(|l| l.position).collect();
        assert_eq!(
            positions,
            vec![
                Vec2::new(50.0, 100.0),
                Vec2::new(50.0, 0.0),
                Vec2::new(100.0, 50.0),
                Vec2::new(0.0, 50.0),
            ]
        );
        assert_eq!(recorder.lines[0].scale, Vec2::new(100.0, 3.0));
    }

    #[test]
    fn mirrored_body_gets_the_same_frame_width() {
        let mut world = World::new();
        world.spawn((Motion::new(Vec2::new(50.0, 50.0), Vec2::new(-60.0, 80.0)),));

        let mut recorder = LineRecorder::default();
        debug_overlay_system(&world, &MeshStore::new(), &mut recorder, 6.0);

        assert_eq!(recorder.lines[0].scale, Vec2::new(100.0, 3.0));
        assert_eq!(recorder.lines[2].scale, Vec2::new(3.0, 100.0));
    }
}
