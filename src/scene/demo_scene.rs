use glam::Vec2;
use hecs::{Entity, World};

use crate::components::MeshStore;
use crate::scene::prefabs::{
    spawn_agent, spawn_consumable, spawn_debris, spawn_hazard_wall, spawn_hazard_zone,
};

/// Build and populate the demo scene for a `width` x `height` view.
/// Returns the mesh store (owns all outline data) and the agent entity.
pub fn load_demo_scene(world: &mut World, width: f32, height: f32) -> (MeshStore, Entity) {
    let mut meshes = MeshStore::new();

    let agent = spawn_agent(world, &mut meshes, Vec2::new(100.0, 200.0));

    // Hazards stream in from the right edge.
    for (i, y) in [0.2_f32, 0.5, 0.8].iter().enumerate() {
        spawn_hazard_wall(
            world,
            Vec2::new(width + 50.0 + i as f32 * 300.0, height * y),
            Vec2::new(-100.0, 0.0),
        );
    }

    for &(y, vy) in &[(0.3_f32, -120.0_f32), (0.6, 150.0)] {
        spawn_consumable(world, Vec2::new(width * 0.7, height * y), Vec2::new(-200.0, vy));
    }

    spawn_hazard_zone(world, Vec2::new(width + 400.0, height * 0.5), Vec2::new(-60.0, 0.0));

    // A small cloud of debris drifting toward each other around the agent.
    for &(x, y, r, vx, vy) in &[
        (140.0_f32, 220.0_f32, 12.0_f32, -60.0_f32, 10.0_f32),
        (120.0, 180.0, 20.0, 40.0, 35.0),
        (300.0, 400.0, 25.0, -80.0, -20.0),
        (260.0, 390.0, 15.0, 90.0, 0.0),
    ] {
        spawn_debris(world, Vec2::new(x, y), r, Vec2::new(vx, vy), false);
    }
    spawn_debris(world, Vec2::new(width * 0.5, 40.0), 18.0, Vec2::new(0.0, 0.0), true);

    (meshes, agent)
}
