//! Collision detection and scoring
//!
//! Everything is an axis-aligned box. Within a tick, collectibles resolve
//! before obstacles so that a simultaneous pickup-and-crash still credits the
//! pickup before the session ends.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Actor, SpawnedEntity};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Overlap test; touching edges do not count
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// What one tick of collision resolution produced
#[derive(Debug, Clone, Default)]
pub struct CollisionOutcome {
    /// Points earned from pickups this tick
    pub points: u64,
    /// Kinds collected this tick (for sound/FX hooks)
    pub collected: Vec<SpawnedEntity>,
    /// True if a treasure was among the pickups
    pub treasure: bool,
    /// True if the actor struck an obstacle; the session must end
    pub fatal: bool,
}

/// Resolve all actor/entity overlaps for this tick.
///
/// Collected entities are marked and removed; the colliding obstacle (if any)
/// is left in place since the session is over anyway.
pub fn resolve(actor: &Actor, entities: &mut Vec<SpawnedEntity>) -> CollisionOutcome {
    let actor_box = actor.aabb();
    let mut outcome = CollisionOutcome::default();

    // Collectibles first
    for entity in entities.iter_mut() {
        if !entity.kind.is_collectible() || entity.collected {
            continue;
        }
        if actor_box.overlaps(&entity.aabb()) {
            entity.collected = true;
            // Collectibles always carry a value; enforced by the kind table
            outcome.points += entity.kind.point_value().unwrap_or(0);
            if entity.kind == super::entity::EntityKind::Treasure {
                outcome.treasure = true;
            }
            outcome.collected.push(*entity);
        }
    }
    entities.retain(|e| !e.collected);

    // Then obstacles
    outcome.fatal = entities
        .iter()
        .any(|e| !e.kind.is_collectible() && actor_box.overlaps(&e.aabb()));

    outcome
}
