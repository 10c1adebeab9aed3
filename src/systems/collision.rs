use glam::Vec2;
use hecs::{Entity, World};

use crate::components::{Agent, CollisionEvent, MeshHandle, MeshStore, Motion, Physics};
use crate::error::PhysicsError;
use crate::geometry::{motion_radius, world_vertices, Aabb};

struct ColliderEntry {
    entity: Entity,
    motion: Motion,
    is_agent: bool,
    /// Gravity-affected bodies are never refined against the agent mesh.
    falling: bool,
}

/// How a broad-phase hit between two entries is confirmed.
enum PairKind {
    /// The agent's outline decides; indices into the entry list.
    Agent { agent: usize, other: usize },
    /// The circle test alone decides.
    Plain,
}

fn pair_kind(entries: &[ColliderEntry], i: usize, j: usize) -> PairKind {
    let (agent, other) = match (entries[i].is_agent, entries[j].is_agent) {
        (true, false) => (i, j),
        (false, true) => (j, i),
        _ => return PairKind::Plain,
    };
    if entries[other].falling {
        PairKind::Plain
    } else {
        PairKind::Agent { agent, other }
    }
}

/// Circle-circle overlap. Touching circles collide.
pub fn circles_overlap(a: &Motion, b: &Motion) -> bool {
    a.position.distance(b.position) <= motion_radius(a) + motion_radius(b)
}

/// True if any of `outline` lies inside `other`'s box.
///
/// Only vertices are tested: an edge crossing the box with every vertex
/// outside it is not reported.
pub fn outline_hits_box(outline: &[Vec2], other: &Motion) -> bool {
    let bbox = Aabb::from_motion(other);
    outline.iter().any(|&p| bbox.contains(p))
}

/// World-space outline of the agent's mesh.
pub(crate) fn agent_outline(
    world: &World,
    meshes: &MeshStore,
    agent: Entity,
    motion: &Motion,
) -> Result<Vec<Vec2>, PhysicsError> {
    let handle = *world
        .get::<&MeshHandle>(agent)
        .map_err(|_| PhysicsError::missing::<MeshHandle>(agent))?;
    let mesh = meshes.get(handle)?;
    Ok(world_vertices(mesh, motion).collect())
}

/// Detect every overlapping pair of moving entities and append two events
/// per pair, one in each direction. Returns the number of pairs found.
///
/// Pairs with exactly one agent side are confirmed by testing the agent's
/// mesh vertices against the other side's box; a failed test vetoes the
/// circle hit. If the agent's mesh is unavailable the circle hit stands.
pub fn collision_system(
    world: &World,
    meshes: &MeshStore,
    events: &mut Vec<CollisionEvent>,
) -> usize {
    let entries: Vec<ColliderEntry> = world
        .query::<(&Motion, Option<&Agent>, Option<&Physics>)>()
        .iter()
        .map(|(entity, (motion, agent, physics))| ColliderEntry {
            entity,
            motion: *motion,
            is_agent: agent.is_some(),
            falling: physics.is_some_and(|p| p.affected_by_gravity),
        })
        .collect();

    let mut outlines: Vec<Option<Vec<Vec2>>> = vec![None; entries.len()];
    for (idx, entry) in entries.iter().enumerate().filter(|(_, e)| e.is_agent) {
        match agent_outline(world, meshes, entry.entity, &entry.motion) {
            Ok(outline) => outlines[idx] = Some(outline),
            Err(err) => err.report(),
        }
    }

    // Broadphase: brute force O(n²)
    let mut pairs = 0;
    for i in 0..entries.len() {
        for j in (i + 1)..entries.len() {
            let (a, b) = (&entries[i], &entries[j]);
            if !circles_overlap(&a.motion, &b.motion) {
                continue;
            }

            let confirmed = match pair_kind(&entries, i, j) {
                PairKind::Plain => true,
                PairKind::Agent { agent, other } => match &outlines[agent] {
                    Some(outline) => {
                        let target = &entries[other];
                        if Aabb::from_motion(&target.motion).is_degenerate() {
                            PhysicsError::DegenerateContact {
                                entity: entries[agent].entity,
                                other: target.entity,
                                reason: "zero-area box",
                            }
                            .report();
                            false
                        } else {
                            outline_hits_box(outline, &target.motion)
                        }
                    }
                    None => true,
                },
            };

            if confirmed {
                let event = CollisionEvent::new(a.entity, b.entity);
                events.push(event);
                events.push(event.mirrored());
                pairs += 1;
            }
        }
    }

    tracing::trace!(entities = entries.len(), pairs, "collision detection");
    pairs
}
