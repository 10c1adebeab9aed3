use std::collections::HashMap;

use glam::Vec2;
use hecs::{Entity, World};

use crate::components::{CollisionEvent, Motion, Physics};
use crate::error::PhysicsError;

/// One side of a mass-bearing contact.
#[derive(Debug, Clone, Copy)]
pub struct Body {
    pub position: Vec2,
    pub velocity: Vec2,
    pub mass: f32,
}

/// Velocity change of `body` after an elastic collision with `other`,
/// restricted to the line through both centers.
///
/// Applied to every overlapping pair, approaching or not.
pub fn elastic_velocity_delta(
    body: &Body,
    other: &Body,
    min_distance_sq: f32,
) -> Result<Vec2, &'static str> {
    let d = body.position - other.position;
    let dist_sq = d.dot(d);
    if dist_sq <= min_distance_sq {
        return Err("coincident centers");
    }
    let total_mass = body.mass + other.mass;
    if total_mass <= 0.0 || !total_mass.is_finite() {
        return Err("non-positive mass");
    }

    let rel_v = body.velocity - other.velocity;
    let impulse_dir = (rel_v.dot(d) / dist_sq) * d;
    let coeff = 2.0 * other.mass / total_mass;
    Ok(-coeff * impulse_dir)
}

fn body(world: &World, entity: Entity) -> Option<Body> {
    let motion = world.get::<&Motion>(entity).ok()?;
    let physics = world.get::<&Physics>(entity).ok()?;
    Some(Body {
        position: motion.position,
        velocity: motion.velocity,
        mass: physics.mass,
    })
}

/// Apply elastic responses for every event whose sides both carry
/// [`Physics`]. Only `event.entity` is updated by each record; the mirrored
/// record updates the other side.
///
/// All deltas are computed from the velocities at the start of the pass, so
/// the order of events does not matter. A body touching several others
/// receives the sum of the individual deltas. Returns the number of
/// velocities changed.
pub fn impulse_system(world: &mut World, events: &[CollisionEvent], min_distance_sq: f32) -> usize {
    let mut deltas: HashMap<Entity, Vec2> = HashMap::new();

    for event in events {
        let (Some(a), Some(b)) = (body(world, event.entity), body(world, event.other)) else {
            continue;
        };
        match elastic_velocity_delta(&a, &b, min_distance_sq) {
            Ok(delta) => *deltas.entry(event.entity).or_insert(Vec2::ZERO) += delta,
            Err(reason) => PhysicsError::DegenerateContact {
                entity: event.entity,
                other: event.other,
                reason,
            }
            .report(),
        }
    }

    let changed = deltas.len();
    for (entity, delta) in deltas {
        if let Ok(mut motion) = world.get::<&mut Motion>(entity) {
            motion.velocity += delta;
        }
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn pair(world: &mut World, a: (Vec2, Vec2, f32), b: (Vec2, Vec2, f32)) -> (Entity, Entity) {
        let ea = world.spawn((Motion::new(a.0, Vec2::splat(10.0)).with_velocity(a.1), Physics::new(a.2)));
        let eb = world.spawn((Motion::new(b.0, Vec2::splat(10.0)).with_velocity(b.1), Physics::new(b.2)));
        (ea, eb)
    }

    fn both_ways(a: Entity, b: Entity) -> Vec<CollisionEvent> {
        let event = CollisionEvent::new(a, b);
        vec![event, event.mirrored()]
    }

    #[test]
    fn equal_masses_exchange_velocities_head_on() {
        let mut world = World::new();
        let (a, b) = pair(
            &mut world,
            (Vec2::new(0.0, 0.0), Vec2::new(30.0, 0.0), 2.0),
            (Vec2::new(8.0, 0.0), Vec2::new(-30.0, 0.0), 2.0),
        );

        assert_eq!(impulse_system(&mut world, &both_ways(a, b), 1e-6), 2);

        let va = world.get::<&Motion>(a).unwrap().velocity;
        let vb = world.get::<&Motion>(b).unwrap().velocity;
        assert!((va - Vec2::new(-30.0, 0.0)).length() < EPS);
        assert!((vb - Vec2::new(30.0, 0.0)).length() < EPS);
    }

    #[test]
    fn event_order_does_not_change_result() {
        let setup = |world: &mut World| {
            pair(
                world,
                (Vec2::new(0.0, 0.0), Vec2::new(10.0, 5.0), 1.0),
                (Vec2::new(6.0, 3.0), Vec2::new(-20.0, 0.0), 3.0),
            )
        };
        let mut w1 = World::new();
        let (a1, b1) = setup(&mut w1);
        let mut w2 = World::new();
        let (a2, b2) = setup(&mut w2);

        let events = both_ways(a1, b1);
        impulse_system(&mut w1, &events, 1e-6);
        let reversed: Vec<_> = both_ways(a2, b2).into_iter().rev().collect();
        impulse_system(&mut w2, &reversed, 1e-6);

        let v1 = w1.get::<&Motion>(a1).unwrap().velocity;
        let v2 = w2.get::<&Motion>(a2).unwrap().velocity;
        assert!((v1 - v2).length() < EPS);
    }

    #[test]
    fn momentum_is_conserved() {
        let a = Body { position: Vec2::new(0.0, 0.0), velocity: Vec2::new(10.0, 5.0), mass: 1.0 };
        let b = Body { position: Vec2::new(6.0, 3.0), velocity: Vec2::new(-20.0, 0.0), mass: 3.0 };
        let da = elastic_velocity_delta(&a, &b, 1e-6).unwrap();
        let db = elastic_velocity_delta(&b, &a, 1e-6).unwrap();
        let before = a.velocity * a.mass + b.velocity * b.mass;
        let after = (a.velocity + da) * a.mass + (b.velocity + db) * b.mass;
        assert!((before - after).length() < 1e-3);
    }

    #[test]
    fn separating_overlap_still_exchanges_velocities() {
        let mut world = World::new();
        let (a, b) = pair(
            &mut world,
            (Vec2::new(100.0, 100.0), Vec2::new(-5.0, 0.0), 1.0),
            (Vec2::new(104.0, 100.0), Vec2::new(5.0, 0.0), 1.0),
        );

        assert_eq!(impulse_system(&mut world, &both_ways(a, b), 1e-6), 2);

        let va = world.get::<&Motion>(a).unwrap().velocity;
        let vb = world.get::<&Motion>(b).unwrap().velocity;
        assert!((va - Vec2::new(5.0, 0.0)).length() < EPS);
        assert!((vb - Vec2::new(-5.0, 0.0)).length() < EPS);
    }

    #[test]
    fn body_in_several_contacts_sums_its_deltas() {
        let mut world = World::new();
        let a = world.spawn((
            Motion::new(Vec2::new(0.0, 0.0), Vec2::splat(20.0)).with_velocity(Vec2::new(10.0, 10.0)),
            Physics::new(1.0),
        ));
        let b = world.spawn((Motion::new(Vec2::new(8.0, 0.0), Vec2::splat(20.0)), Physics::new(1.0)));
        let c = world.spawn((Motion::new(Vec2::new(0.0, 8.0), Vec2::splat(20.0)), Physics::new(1.0)));
        let mut events = both_ways(a, b);
        events.extend(both_ways(a, c));
        events.extend(both_ways(b, c));

        assert_eq!(impulse_system(&mut world, &events, 1e-6), 3);

        // `a` hands its x motion to `b` and its y motion to `c` in one pass.
        let va = world.get::<&Motion>(a).unwrap().velocity;
        let vb = world.get::<&Motion>(b).unwrap().velocity;
        let vc = world.get::<&Motion>(c).unwrap().velocity;
        assert!(va.length() < EPS);
        assert!((vb - Vec2::new(10.0, 0.0)).length() < EPS);
        assert!((vc - Vec2::new(0.0, 10.0)).length() < EPS);
        assert!((va + vb + vc - Vec2::new(10.0, 10.0)).length() < EPS);
    }

    #[test]
    fn coincident_centers_are_skipped() {
        let mut world = World::new();
        let (a, b) = pair(
            &mut world,
            (Vec2::new(5.0, 5.0), Vec2::new(1.0, 0.0), 1.0),
            (Vec2::new(5.0, 5.0), Vec2::new(-1.0, 0.0), 1.0),
        );

        assert_eq!(impulse_system(&mut world, &both_ways(a, b), 1e-6), 0);
        let va = world.get::<&Motion>(a).unwrap().velocity;
        assert_eq!(va, Vec2::new(1.0, 0.0));
        assert!(va.is_finite());
    }

    #[test]
    fn pairs_without_mass_on_both_sides_are_ignored() {
        let mut world = World::new();
        let a = world.spawn((Motion::new(Vec2::ZERO, Vec2::ONE).with_velocity(Vec2::X),));
        let b = world.spawn((
            Motion::new(Vec2::new(1.0, 0.0), Vec2::ONE).with_velocity(Vec2::NEG_X),
            Physics::new(1.0),
        ));

        assert_eq!(impulse_system(&mut world, &both_ways(a, b), 1e-6), 0);
        assert_eq!(world.get::<&Motion>(b).unwrap().velocity, Vec2::NEG_X);
    }
}
