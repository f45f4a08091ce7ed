//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod entity;
pub mod physics;
pub mod progression;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{Aabb, CollisionOutcome, resolve};
pub use entity::{Actor, EntityKind, SpawnedEntity};
pub use progression::{
    AchievementKey, AchievementSet, FatigueLevel, Notification, SkillLevel, fatigue_level,
    skill_level,
};
pub use spawner::{Spawner, WeightedTable};
pub use state::{FrameResult, Phase, Session};
pub use tick::{Command, TickInput, tick};
