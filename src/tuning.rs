//! Game balance parameters
//!
//! All rate constants are expressed in per-second units so the simulation is
//! frame-rate independent; the defaults reproduce the original 60 tick/s feel.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};
use crate::sim::entity::EntityKind;

/// Rejected tuning parameters. Construction fails fast rather than clamping.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TuningError {
    #[error("playfield {playfield} cannot contain actor {actor}")]
    PlayfieldTooSmall { playfield: Vec2, actor: Vec2 },
    #[error("gravity must be positive and finite, got {0}")]
    BadGravity(f32),
    #[error("impulse velocity must point upward (negative), got {0}")]
    BadImpulse(f32),
    #[error("base spawn rate must be in (0, 1], got {0}")]
    BadSpawnRate(f32),
    #[error("spawn margin {margin} leaves no vertical room in playfield height {playfield}")]
    BadSpawnMargin { margin: f32, playfield: f32 },
    #[error("spawn shares must be in (0, 1], got {0}")]
    BadShare(f32),
    #[error("growth factors must be >= 1, got {0}")]
    BadGrowth(f32),
    #[error("speed range invalid: base {base} max {max}")]
    BadSpeedRange { base: f32, max: f32 },
    #[error("fatigue thresholds must be positive and ascending: {0} / {1} / {2}")]
    BadFatigueThresholds(f32, f32, f32),
    #[error("duration must be positive, got {0}")]
    BadDuration(f32),
    #[error("quiz ease multiplier must be in (0, 1], got {0}")]
    BadEase(f32),
}

/// Game balance knobs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tuning {
    /// Playfield dimensions (pixels)
    pub playfield: Vec2,

    // === Actor physics ===
    /// Downward acceleration (px/s^2)
    pub gravity: f32,
    /// Velocity set by an upward impulse (px/s, negative = up)
    pub impulse_velocity: f32,
    /// Actor bounding box (pixels)
    pub actor_size: Vec2,
    /// Actor spawn position (top-left, pixels)
    pub actor_start: Vec2,

    // === Difficulty curve ===
    /// Horizontal scroll speed at t=0 (px/s)
    pub base_speed: f32,
    /// Hard cap on scroll speed (px/s)
    pub max_speed: f32,
    /// Exponential difficulty growth per second of play
    pub difficulty_growth: f32,

    // === Spawning ===
    /// Spawn probability per reference tick at t=0
    pub base_spawn_rate: f32,
    /// Exponential spawn-rate growth per second of play
    pub spawn_growth: f32,
    /// Fraction of the spawn budget going to collectibles
    pub collectible_share: f32,
    /// Fraction of the spawn budget going to obstacles (also scaled by difficulty)
    pub obstacle_share: f32,
    /// Keep-out distance from the top/bottom edges for spawn positions (pixels)
    pub spawn_margin: f32,

    // === Fatigue thresholds (seconds of play) ===
    pub fatigue_mild: f32,
    pub fatigue_moderate: f32,
    pub fatigue_severe: f32,

    // === Engagement / break mechanic ===
    /// Play time before the break prompt appears; None disables the mechanic
    pub engagement_period: Option<f32>,
    /// Speed multiplier applied after passing the break quiz
    pub quiz_ease: f32,

    /// How long an achievement toast stays visible (seconds of play time)
    pub notification_secs: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            playfield: Vec2::new(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT),

            // Original per-frame constants at 60 ticks/s: 0.3 px/f^2, -6 px/f
            gravity: 0.3 * 60.0 * 60.0,
            impulse_velocity: -6.0 * 60.0,
            actor_size: Vec2::new(60.0, 30.0),
            actor_start: Vec2::new(100.0, PLAYFIELD_HEIGHT / 2.0),

            // 3 px/f base, 15 px/f cap
            base_speed: 3.0 * 60.0,
            max_speed: 15.0 * 60.0,
            difficulty_growth: 1.02,

            base_spawn_rate: 0.02,
            spawn_growth: 1.015,
            collectible_share: 0.6,
            obstacle_share: 0.4,
            spawn_margin: 50.0,

            fatigue_mild: 90.0,
            fatigue_moderate: 120.0,
            fatigue_severe: 180.0,

            engagement_period: None,
            quiz_ease: 0.6,

            notification_secs: 3.0,
        }
    }
}

impl Tuning {
    /// Reference tick duration the spawn probabilities are calibrated against
    pub const REFERENCE_DT: f32 = 1.0 / 60.0;

    /// Default tuning with the break-prompt mechanic enabled (60 s period)
    pub fn with_breaks() -> Self {
        Self {
            engagement_period: Some(60.0),
            ..Self::default()
        }
    }

    /// Validate all parameters, rejecting anything out of range
    pub fn validate(&self) -> Result<(), TuningError> {
        if self.playfield.x <= self.actor_size.x
            || self.playfield.y <= self.actor_size.y
            || self.actor_size.min_element() <= 0.0
        {
            return Err(TuningError::PlayfieldTooSmall {
                playfield: self.playfield,
                actor: self.actor_size,
            });
        }
        if !(self.gravity > 0.0 && self.gravity.is_finite()) {
            return Err(TuningError::BadGravity(self.gravity));
        }
        if self.impulse_velocity >= 0.0 {
            return Err(TuningError::BadImpulse(self.impulse_velocity));
        }
        if !(self.base_spawn_rate > 0.0 && self.base_spawn_rate <= 1.0) {
            return Err(TuningError::BadSpawnRate(self.base_spawn_rate));
        }
        // Even the tallest kind must have a non-empty vertical spawn band
        if !(self.spawn_margin >= 0.0
            && 2.0 * self.spawn_margin + EntityKind::max_height() < self.playfield.y)
        {
            return Err(TuningError::BadSpawnMargin {
                margin: self.spawn_margin,
                playfield: self.playfield.y,
            });
        }
        for share in [self.collectible_share, self.obstacle_share] {
            if !(share > 0.0 && share <= 1.0) {
                return Err(TuningError::BadShare(share));
            }
        }
        for growth in [self.difficulty_growth, self.spawn_growth] {
            if !(growth >= 1.0 && growth.is_finite()) {
                return Err(TuningError::BadGrowth(growth));
            }
        }
        if self.base_speed <= 0.0 || self.max_speed < self.base_speed {
            return Err(TuningError::BadSpeedRange {
                base: self.base_speed,
                max: self.max_speed,
            });
        }
        if !(self.fatigue_mild > 0.0
            && self.fatigue_mild < self.fatigue_moderate
            && self.fatigue_moderate < self.fatigue_severe)
        {
            return Err(TuningError::BadFatigueThresholds(
                self.fatigue_mild,
                self.fatigue_moderate,
                self.fatigue_severe,
            ));
        }
        if let Some(period) = self.engagement_period
            && period <= 0.0
        {
            return Err(TuningError::BadDuration(period));
        }
        if self.notification_secs <= 0.0 {
            return Err(TuningError::BadDuration(self.notification_secs));
        }
        if !(self.quiz_ease > 0.0 && self.quiz_ease <= 1.0) {
            return Err(TuningError::BadEase(self.quiz_ease));
        }
        Ok(())
    }

    /// Load tuning overrides from a JSON document
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
