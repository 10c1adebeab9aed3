use glam::Vec2;
use hecs::{Entity, World};

use crate::components::*;

const AGENT_SCALE: Vec2 = Vec2::new(-70.0, 42.0);
const HAZARD_WALL_SCALE: Vec2 = Vec2::new(-90.0, 90.0);
const CONSUMABLE_SCALE: Vec2 = Vec2::new(-50.0, 30.0);
const HAZARD_ZONE_SCALE: Vec2 = Vec2::new(120.0, 120.0);
const DEBRIS_BASE_MASS: f32 = 1.0;
const DEBRIS_GRAVITY: f32 = 0.01;

/// Fish-shaped outline in unit space, nose pointing along +x.
fn agent_outline() -> Mesh {
    Mesh::new(vec![
        Vec2::new(0.5, 0.0),
        Vec2::new(0.3, -0.3),
        Vec2::new(0.0, -0.45),
        Vec2::new(-0.3, -0.25),
        Vec2::new(-0.5, -0.4),
        Vec2::new(-0.45, 0.0),
        Vec2::new(-0.5, 0.4),
        Vec2::new(-0.3, 0.25),
        Vec2::new(0.0, 0.45),
        Vec2::new(0.3, 0.3),
    ])
}

/// Spawn the agent with its outline mesh and a fresh mode record.
pub fn spawn_agent(world: &mut World, meshes: &mut MeshStore, position: Vec2) -> Entity {
    let outline = meshes.add(agent_outline());
    world.spawn((
        Agent,
        AgentMode::new(),
        outline,
        Motion::new(position, AGENT_SCALE),
    ))
}

pub fn spawn_hazard_wall(world: &mut World, position: Vec2, velocity: Vec2) -> Entity {
    world.spawn((
        HazardWall,
        Motion::new(position, HAZARD_WALL_SCALE).with_velocity(velocity),
    ))
}

pub fn spawn_consumable(world: &mut World, position: Vec2, velocity: Vec2) -> Entity {
    world.spawn((
        Consumable,
        Motion::new(position, CONSUMABLE_SCALE).with_velocity(velocity),
    ))
}

pub fn spawn_hazard_zone(world: &mut World, position: Vec2, velocity: Vec2) -> Entity {
    world.spawn((
        HazardZone,
        Motion::new(position, HAZARD_ZONE_SCALE).with_velocity(velocity),
    ))
}

/// Spawn a round debris particle. Heavier debris is larger: mass scales with
/// a tenth of the radius.
pub fn spawn_debris(
    world: &mut World,
    position: Vec2,
    radius: f32,
    velocity: Vec2,
    falling: bool,
) -> Entity {
    let mut physics = Physics::new(DEBRIS_BASE_MASS * 0.1 * radius);
    if falling {
        physics = physics.with_gravity(DEBRIS_GRAVITY);
    }
    world.spawn((
        Debris,
        physics,
        Motion::new(position, Vec2::splat(radius)).with_velocity(velocity),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debris_mass_scales_with_radius() {
        let mut world = World::new();
        let small = spawn_debris(&mut world, Vec2::ZERO, 10.0, Vec2::ZERO, false);
        let large = spawn_debris(&mut world, Vec2::ZERO, 30.0, Vec2::ZERO, true);

        let small = *world.get::<&Physics>(small).unwrap();
        let large = *world.get::<&Physics>(large).unwrap();
        assert!((small.mass - 1.0).abs() < 1e-6);
        assert!((large.mass - 3.0).abs() < 1e-5);
        assert!(!small.affected_by_gravity);
        assert!(large.affected_by_gravity);
    }

    #[test]
    fn agent_is_found_and_carries_its_mesh() {
        let mut world = World::new();
        let mut meshes = MeshStore::new();
        let agent = spawn_agent(&mut world, &mut meshes, Vec2::new(100.0, 200.0));

        assert_eq!(find_agent(&world), Some(agent));
        let handle = *world.get::<&MeshHandle>(agent).unwrap();
        assert_eq!(meshes.get(handle).unwrap().vertices.len(), 10);
    }
}
