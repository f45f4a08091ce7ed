//! Session state and the per-frame snapshot
//!
//! `Session` is the single owner of every piece of mutable game state; only
//! `tick` mutates it. The renderer gets a read-only `FrameResult` value.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::highscores::HighScores;
use crate::tuning::{Tuning, TuningError};

use super::difficulty;
use super::entity::{Actor, SpawnedEntity};
use super::progression::{
    AchievementSet, FatigueLevel, Notification, SkillLevel, fatigue_level, skill_level,
};
use super::spawner::Spawner;

/// Current screen of the session state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Title screen, waiting for the first dive
    Start,
    /// Active gameplay
    Playing,
    /// Frozen; elapsed time does not advance
    Paused,
    /// Engagement period reached: offering a voluntary break
    BreakPrompt,
    /// Declined the break; one question stands between player and resuming
    Quiz,
    /// Run ended
    GameOver,
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG driving both spawn streams
    pub rng: Pcg32,
    /// Balance parameters, validated at construction
    pub tuning: Tuning,
    /// Current phase
    pub phase: Phase,
    /// Play time in seconds; accumulates only while Playing
    pub elapsed: f32,
    /// Score of the current run; never decreases within a run
    pub score: u64,
    /// Best score seen this process run
    pub high_score: u64,
    /// Top-10 leaderboard (process lifetime)
    pub high_scores: HighScores,
    /// The player craft
    pub actor: Actor,
    /// Live collectibles and obstacles
    pub entities: Vec<SpawnedEntity>,
    /// Sticky unlock flags; survive restarts
    pub achievements: AchievementSet,
    /// Active unlock toasts
    pub notifications: Vec<Notification>,
    /// Whether a treasure has been collected this run
    pub treasure_collected: bool,
    /// Speed multiplier <= 1 granted by passing the break quiz
    pub ease_multiplier: f32,
    /// Next elapsed-time threshold that triggers the break prompt
    pub(super) next_break_at: Option<f32>,
    /// Expected quiz answer (minutes played), set when the prompt opens
    pub(super) quiz_expected: u32,
    /// Kind tables for the two spawn streams
    #[serde(skip, default)]
    pub(super) spawner: Spawner,
    /// Next entity ID
    next_id: u32,
}

impl Session {
    /// Create a new session on the start screen. Rejects invalid tuning.
    pub fn new(seed: u64, tuning: Tuning) -> Result<Self, TuningError> {
        tuning.validate()?;
        let actor = Actor::new(tuning.actor_start, tuning.actor_size);
        Ok(Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: Phase::Start,
            elapsed: 0.0,
            score: 0,
            high_score: 0,
            high_scores: HighScores::new(),
            actor,
            entities: Vec::new(),
            achievements: AchievementSet::new(),
            notifications: Vec::new(),
            treasure_collected: false,
            ease_multiplier: 1.0,
            next_break_at: tuning.engagement_period,
            quiz_expected: 0,
            spawner: Spawner::default(),
            next_id: 1,
            tuning,
        })
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Reset per-run state and enter Playing. High score, leaderboard and
    /// unlocked achievements deliberately survive.
    pub(super) fn begin_run(&mut self) {
        self.actor = Actor::new(self.tuning.actor_start, self.tuning.actor_size);
        self.entities.clear();
        self.notifications.clear();
        self.score = 0;
        self.elapsed = 0.0;
        self.treasure_collected = false;
        self.ease_multiplier = 1.0;
        self.next_break_at = self.tuning.engagement_period;
        self.quiz_expected = 0;
        self.phase = Phase::Playing;
        log::info!("run started (seed {})", self.seed);
    }

    /// End the run: fold the score into the high score and leaderboard.
    pub(super) fn end_run(&mut self, reason: &str) {
        let skill = skill_level(self.score, self.elapsed);
        if self.score > self.high_score {
            self.high_score = self.score;
        }
        self.high_scores
            .add_score(self.score, self.elapsed, skill.rank);
        self.phase = Phase::GameOver;
        log::info!(
            "run over ({reason}): score {} after {:.1}s, best {}",
            self.score,
            self.elapsed,
            self.high_score
        );
    }

    /// Scroll speed for the current instant, with any quiz easing applied
    pub fn current_speed(&self) -> f32 {
        difficulty::speed(self.elapsed, &self.tuning) * self.ease_multiplier
    }

    /// Snapshot the frame for the renderer
    pub fn frame(&self) -> FrameResult {
        FrameResult {
            phase: self.phase,
            score: self.score,
            high_score: self.high_score,
            elapsed: self.elapsed,
            speed: self.current_speed(),
            difficulty: difficulty::difficulty(self.elapsed, &self.tuning),
            fatigue: fatigue_level(self.elapsed, &self.tuning),
            skill: skill_level(self.score, self.elapsed),
            notifications: self.notifications.clone(),
            actor: self.actor,
            entities: self.entities.clone(),
        }
    }
}

/// Read-only view of one frame, handed to the renderer
#[derive(Debug, Clone, Serialize)]
pub struct FrameResult {
    pub phase: Phase,
    pub score: u64,
    pub high_score: u64,
    /// Seconds of play time
    pub elapsed: f32,
    /// Current scroll speed (px/s)
    pub speed: f32,
    /// Current difficulty multiplier
    pub difficulty: f32,
    pub fatigue: FatigueLevel,
    pub skill: SkillLevel,
    /// Unlock toasts still within their display window
    pub notifications: Vec<Notification>,
    pub actor: Actor,
    pub entities: Vec<SpawnedEntity>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_starts_on_the_title_screen() {
        let session = Session::new(7, Tuning::default()).unwrap();
        assert_eq!(session.phase, Phase::Start);
        assert_eq!(session.score, 0);
        assert!(session.entities.is_empty());
        assert_eq!(session.actor.pos, session.tuning.actor_start);
    }

    #[test]
    fn invalid_tuning_is_rejected() {
        let tuning = Tuning {
            base_spawn_rate: 2.0,
            ..Tuning::default()
        };
        assert!(Session::new(7, tuning).is_err());
    }

    #[test]
    fn end_run_updates_high_score_and_leaderboard() {
        let mut session = Session::new(7, Tuning::default()).unwrap();
        session.begin_run();
        session.score = 120;
        session.elapsed = 40.0;
        session.end_run("test");

        assert_eq!(session.phase, Phase::GameOver);
        assert_eq!(session.high_score, 120);
        assert_eq!(session.high_scores.top_score(), Some(120));

        // A worse second run leaves the high score alone
        session.begin_run();
        session.score = 30;
        session.end_run("test");
        assert_eq!(session.high_score, 120);
    }

    #[test]
    fn entity_ids_are_unique_and_increasing() {
        let mut session = Session::new(7, Tuning::default()).unwrap();
        let a = session.next_entity_id();
        let b = session.next_entity_id();
        assert!(b > a);
    }
}
