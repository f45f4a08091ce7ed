//! Subdrift - a side-scrolling deep-sea arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, session state)
//! - `tuning`: Data-driven game balance
//! - `highscores`: Process-lifetime leaderboard
//!
//! Rendering, input bindings and audio live outside this crate; the sim
//! exposes a per-frame snapshot (`FrameResult`) and consumes discrete
//! commands, nothing else.

pub mod highscores;
pub mod sim;
pub mod tuning;

pub use highscores::HighScores;
pub use sim::{Command, FrameResult, Phase, Session, TickInput, tick};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, matching the original arcade feel)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Playfield dimensions (pixels)
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;
}
