use hecs::{Entity, World};

use super::{Agent, Consumable, HazardWall, HazardZone};

/// Mass record for bodies that take part in elastic collisions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Physics {
    /// Must be positive; used as a divisor by the impulse resolver.
    pub mass: f32,
    pub affected_by_gravity: bool,
    /// Added to `velocity.y` once per elapsed millisecond.
    pub gravity: f32,
}

impl Physics {
    pub fn new(mass: f32) -> Self {
        Self {
            mass,
            affected_by_gravity: false,
            gravity: 0.0,
        }
    }

    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.affected_by_gravity = true;
        self.gravity = gravity;
        self
    }
}

/// Contact between `entity` and `other` detected during the current frame.
///
/// Every overlapping pair is recorded twice, once per direction, so that a
/// consumer only has to look at `entity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionEvent {
    pub entity: Entity,
    pub other: Entity,
}

/// What the game-state layer should make of a collision event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    /// The agent ran into a hazard wall.
    AgentHazard,
    /// The agent reached a consumable.
    AgentConsumable,
    /// The agent fell into a hazard zone.
    AgentHazardZone,
    /// A hazard zone touched something other than the agent.
    ZoneSwallow { zone: Entity, victim: Entity },
    /// Anything else (debris on debris, wall on consumable, ...).
    Bodies,
}

impl CollisionEvent {
    pub fn new(entity: Entity, other: Entity) -> Self {
        Self { entity, other }
    }

    /// The same contact seen from `other`'s side.
    pub fn mirrored(&self) -> Self {
        Self {
            entity: self.other,
            other: self.entity,
        }
    }

    /// Classify this event by the role tags on both sides.
    pub fn classify(&self, world: &World) -> ContactKind {
        let (entity, other) = (self.entity, self.other);
        if tagged::<Agent>(world, entity) {
            return if tagged::<HazardWall>(world, other) {
                ContactKind::AgentHazard
            } else if tagged::<Consumable>(world, other) {
                ContactKind::AgentConsumable
            } else if tagged::<HazardZone>(world, other) {
                ContactKind::AgentHazardZone
            } else {
                ContactKind::Bodies
            };
        }
        // The mirrored record already reports agent contacts.
        if tagged::<Agent>(world, other) {
            return ContactKind::Bodies;
        }
        if tagged::<HazardZone>(world, entity) {
            return ContactKind::ZoneSwallow { zone: entity, victim: other };
        }
        if tagged::<HazardZone>(world, other) {
            return ContactKind::ZoneSwallow { zone: other, victim: entity };
        }
        ContactKind::Bodies
    }
}

fn tagged<T: hecs::Component>(world: &World, entity: Entity) -> bool {
    world.get::<&T>(entity).is_ok()
}
