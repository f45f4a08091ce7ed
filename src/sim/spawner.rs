//! Procedural spawning: two independent streams with exponential rates
//!
//! Collectibles and obstacles each draw one uniform value per tick against a
//! time-dependent probability. Obstacles are additionally scaled by the
//! difficulty multiplier, so the field gets hostile faster than it gets
//! generous. Kind selection goes through an explicit weighted table.

use glam::Vec2;
use rand::Rng;

use crate::tuning::Tuning;

use super::difficulty;
use super::entity::EntityKind;

/// Explicit weighted-choice table
#[derive(Debug, Clone)]
pub struct WeightedTable<T: Copy> {
    entries: Vec<(T, u32)>,
    total: u32,
}

impl<T: Copy> WeightedTable<T> {
    /// Build a table from (value, weight) pairs. Zero-weight entries are
    /// allowed; a zero total is a programmer error.
    pub fn new(entries: Vec<(T, u32)>) -> Self {
        let total: u32 = entries.iter().map(|(_, w)| w).sum();
        assert!(total > 0, "weighted table needs a positive total weight");
        Self { entries, total }
    }

    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        let mut roll = rng.random_range(0..self.total);
        for &(value, weight) in &self.entries {
            if roll < weight {
                return value;
            }
            roll -= weight;
        }
        // total > 0 guarantees the loop returned
        unreachable!("roll exceeded table total")
    }
}

/// Decides, each tick, whether to introduce new entities
#[derive(Debug, Clone)]
pub struct Spawner {
    collectibles: WeightedTable<EntityKind>,
    obstacles: WeightedTable<EntityKind>,
}

impl Default for Spawner {
    fn default() -> Self {
        Self {
            // Treasure is the rare one: pearl:coin:treasure = 2:3:1
            collectibles: WeightedTable::new(vec![
                (EntityKind::Pearl, 2),
                (EntityKind::Coin, 3),
                (EntityKind::Treasure, 1),
            ]),
            obstacles: WeightedTable::new(vec![
                (EntityKind::Mine, 1),
                (EntityKind::Jellyfish, 1),
                (EntityKind::Coral, 1),
            ]),
        }
    }
}

impl Spawner {
    /// Roll the collectible stream for this tick
    pub fn maybe_spawn_collectible<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        elapsed: f32,
        dt: f32,
        tuning: &Tuning,
    ) -> Option<(EntityKind, Vec2)> {
        let p = difficulty::spawn_rate(elapsed, tuning) * tuning.collectible_share;
        self.roll(rng, p, dt, tuning, &self.collectibles)
    }

    /// Roll the obstacle stream for this tick; intensifies with difficulty
    pub fn maybe_spawn_obstacle<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        elapsed: f32,
        dt: f32,
        tuning: &Tuning,
    ) -> Option<(EntityKind, Vec2)> {
        let p = difficulty::spawn_rate(elapsed, tuning)
            * difficulty::difficulty(elapsed, tuning)
            * tuning.obstacle_share;
        self.roll(rng, p, dt, tuning, &self.obstacles)
    }

    fn roll<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        p_per_reference_tick: f32,
        dt: f32,
        tuning: &Tuning,
        table: &WeightedTable<EntityKind>,
    ) -> Option<(EntityKind, Vec2)> {
        // Scale to the actual tick length, then clamp: a probability past 1.0
        // just means "spawn every tick" at extreme session lengths.
        let p = (p_per_reference_tick * dt / Tuning::REFERENCE_DT).min(1.0);
        if rng.random::<f32>() >= p {
            return None;
        }

        let kind = table.pick(rng);
        let y_max = tuning.playfield.y - tuning.spawn_margin - kind.size().y;
        let y = rng.random_range(tuning.spawn_margin..y_max);
        Some((kind, Vec2::new(tuning.playfield.x, y)))
    }
}
