//! Entity model: the player craft and everything the spawner throws at it
//!
//! Plain data holders; all mutation happens in the physics, spawner and
//! collision modules. Kind is fixed at creation and fully determines size and
//! point value, so no invalid entity is constructible.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;

/// What a spawned entity is. Pearl/Coin/Treasure are collectibles,
/// Mine/Jellyfish/Coral are obstacles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Pearl,
    Coin,
    Treasure,
    Mine,
    Jellyfish,
    Coral,
}

impl EntityKind {
    pub const COLLECTIBLES: [EntityKind; 3] =
        [EntityKind::Pearl, EntityKind::Coin, EntityKind::Treasure];
    pub const OBSTACLES: [EntityKind; 3] =
        [EntityKind::Mine, EntityKind::Jellyfish, EntityKind::Coral];

    pub fn is_collectible(&self) -> bool {
        matches!(
            self,
            EntityKind::Pearl | EntityKind::Coin | EntityKind::Treasure
        )
    }

    /// Bounding box size (pixels)
    pub fn size(&self) -> Vec2 {
        match self {
            EntityKind::Pearl => Vec2::new(30.0, 30.0),
            EntityKind::Coin => Vec2::new(24.0, 24.0),
            EntityKind::Treasure => Vec2::new(40.0, 40.0),
            EntityKind::Mine => Vec2::new(50.0, 50.0),
            EntityKind::Jellyfish => Vec2::new(60.0, 60.0),
            EntityKind::Coral => Vec2::new(70.0, 70.0),
        }
    }

    /// Points awarded on pickup; obstacles score nothing
    pub fn point_value(&self) -> Option<u64> {
        match self {
            EntityKind::Pearl => Some(10),
            EntityKind::Coin => Some(5),
            EntityKind::Treasure => Some(50),
            _ => None,
        }
    }

    /// Tallest bounding box across all kinds; spawn geometry checks need it
    pub fn max_height() -> f32 {
        Self::COLLECTIBLES
            .iter()
            .chain(Self::OBSTACLES.iter())
            .map(|k| k.size().y)
            .fold(0.0, f32::max)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Pearl => "pearl",
            EntityKind::Coin => "coin",
            EntityKind::Treasure => "treasure",
            EntityKind::Mine => "mine",
            EntityKind::Jellyfish => "jellyfish",
            EntityKind::Coral => "coral",
        }
    }
}

/// A drifting collectible or obstacle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnedEntity {
    pub id: u32,
    pub kind: EntityKind,
    /// Top-left corner (pixels)
    pub pos: Vec2,
    /// Horizontal velocity (px/s); refreshed from the current scroll speed
    /// each tick, always negative while the entity is alive
    pub vel_x: f32,
    /// Set on pickup, guards against double-counting within a tick
    pub collected: bool,
}

impl SpawnedEntity {
    pub fn new(id: u32, kind: EntityKind, pos: Vec2) -> Self {
        Self {
            id,
            kind,
            pos,
            vel_x: 0.0,
            collected: false,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.pos + self.kind.size())
    }

    /// True once the entity has fully scrolled past the left boundary
    pub fn off_left_edge(&self) -> bool {
        self.pos.x + self.kind.size().x < 0.0
    }
}

/// The player-controlled craft
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    /// Top-left corner (pixels)
    pub pos: Vec2,
    /// Vertical velocity (px/s, positive = down)
    pub vel_y: f32,
    /// Bounding box (pixels)
    pub size: Vec2,
}

impl Actor {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            vel_y: 0.0,
            size,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.pos + self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_partition_is_total() {
        for kind in EntityKind::COLLECTIBLES {
            assert!(kind.is_collectible());
            assert!(kind.point_value().is_some());
        }
        for kind in EntityKind::OBSTACLES {
            assert!(!kind.is_collectible());
            assert_eq!(kind.point_value(), None);
        }
    }

    #[test]
    fn treasure_outscores_pearl_outscores_coin() {
        assert!(EntityKind::Treasure.point_value() > EntityKind::Pearl.point_value());
        assert!(EntityKind::Pearl.point_value() > EntityKind::Coin.point_value());
    }

    #[test]
    fn off_left_edge_accounts_for_width() {
        let mut entity = SpawnedEntity::new(1, EntityKind::Pearl, Vec2::new(-10.0, 100.0));
        assert!(!entity.off_left_edge());
        entity.pos.x = -31.0;
        assert!(entity.off_left_edge());
    }
}
