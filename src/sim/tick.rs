//! Fixed-timestep simulation step
//!
//! `tick` is the only mutation path for a `Session`. One call advances the
//! world by `dt` seconds and returns the frame snapshot; all player intent
//! arrives through `TickInput`, so the simulation never touches the
//! windowing layer. Same seed, same inputs, same dt sequence: same run.

use super::collision;
use super::entity::SpawnedEntity;
use super::physics;
use super::progression::Notification;
use super::state::{FrameResult, Phase, Session};

/// A single player action, as decoded by the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Rise against gravity
    Impulse,
    /// Toggle between Playing and Paused
    PauseToggle,
    /// Start (or restart) a run
    Restart,
    /// Answer the break prompt; true = take the break
    BreakChoice(bool),
    /// Answer the break quiz
    QuizAnswer(u32),
}

/// One-shot input flags consumed by a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    pub impulse: bool,
    pub pause: bool,
    pub restart: bool,
    pub break_choice: Option<bool>,
    pub quiz_answer: Option<u32>,
    /// Let the built-in pilot play this tick
    pub demo: bool,
}

impl TickInput {
    /// Fold a decoded command into this tick's flags
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Impulse => self.impulse = true,
            Command::PauseToggle => self.pause = true,
            Command::Restart => self.restart = true,
            Command::BreakChoice(take) => self.break_choice = Some(take),
            Command::QuizAnswer(answer) => self.quiz_answer = Some(answer),
        }
    }
}

/// Advance the session by `dt` seconds
pub fn tick(session: &mut Session, input: &TickInput, dt: f32) -> FrameResult {
    assert!(dt.is_finite() && dt > 0.0, "tick needs a positive dt");

    let input = if input.demo {
        demo_input(session, input)
    } else {
        *input
    };

    match session.phase {
        Phase::Start | Phase::GameOver => {
            if input.restart {
                session.begin_run();
            }
        }
        Phase::Paused => {
            if input.pause {
                session.phase = Phase::Playing;
            } else if input.restart {
                session.begin_run();
            }
        }
        Phase::BreakPrompt => {
            if let Some(take_break) = input.break_choice {
                if take_break {
                    session.end_run("break taken");
                } else {
                    session.phase = Phase::Quiz;
                }
            }
        }
        Phase::Quiz => {
            if let Some(answer) = input.quiz_answer {
                if answer == session.quiz_expected {
                    session.ease_multiplier = session.tuning.quiz_ease;
                    if let Some(period) = session.tuning.engagement_period {
                        session.next_break_at = Some(session.elapsed + period);
                    }
                    session.phase = Phase::Playing;
                    log::info!("quiz passed, easing speed to {}", session.ease_multiplier);
                } else {
                    session.end_run("quiz failed");
                }
            }
        }
        Phase::Playing => {
            if input.pause {
                session.phase = Phase::Paused;
            } else {
                play_tick(session, &input, dt);
            }
        }
    }

    session.frame()
}

/// One tick of active gameplay
fn play_tick(session: &mut Session, input: &TickInput, dt: f32) {
    session.elapsed += dt;

    // Engagement gate: the world freezes until the prompt is answered
    if let Some(at) = session.next_break_at
        && session.elapsed >= at
    {
        session.quiz_expected = ((session.elapsed / 60.0).round() as u32).max(1);
        session.phase = Phase::BreakPrompt;
        log::info!("break prompt at {:.1}s of play", session.elapsed);
        return;
    }

    physics::advance(&mut session.actor, input.impulse, dt, &session.tuning);

    let speed = session.current_speed();
    spawn_entities(session, dt);

    // Drift left at the current scroll speed; older entities speed up too
    for entity in &mut session.entities {
        entity.vel_x = -speed;
        entity.pos.x += entity.vel_x * dt;
    }
    session.entities.retain(|e| !e.off_left_edge());

    let outcome = collision::resolve(&session.actor, &mut session.entities);
    session.score += outcome.points;
    session.treasure_collected |= outcome.treasure;
    for picked in &outcome.collected {
        log::debug!("collected {} at {}", picked.kind.as_str(), picked.pos);
    }

    let unlocked =
        session
            .achievements
            .check(session.score, session.elapsed, session.treasure_collected);
    for key in unlocked {
        log::info!("achievement unlocked: {}", key.name());
        session.notifications.push(Notification {
            key,
            unlocked_at: session.elapsed,
        });
    }
    let cutoff = session.elapsed - session.tuning.notification_secs;
    session.notifications.retain(|n| n.unlocked_at > cutoff);

    if outcome.fatal {
        session.end_run("obstacle collision");
    }
}

/// Roll both spawn streams and materialize any results at the right edge
fn spawn_entities(session: &mut Session, dt: f32) {
    let speed = session.current_speed();

    if let Some((kind, pos)) = session.spawner.maybe_spawn_collectible(
        &mut session.rng,
        session.elapsed,
        dt,
        &session.tuning,
    ) {
        let id = session.next_entity_id();
        log::trace!("spawn {} #{id} at {pos}", kind.as_str());
        let mut entity = SpawnedEntity::new(id, kind, pos);
        entity.vel_x = -speed;
        session.entities.push(entity);
    }
    if let Some((kind, pos)) = session.spawner.maybe_spawn_obstacle(
        &mut session.rng,
        session.elapsed,
        dt,
        &session.tuning,
    ) {
        let id = session.next_entity_id();
        log::trace!("spawn {} #{id} at {pos}", kind.as_str());
        let mut entity = SpawnedEntity::new(id, kind, pos);
        entity.vel_x = -speed;
        session.entities.push(entity);
    }
}

/// The attract-mode pilot: restarts runs, chases the nearest collectible,
/// waves the break prompt away and answers the quiz honestly.
fn demo_input(session: &Session, input: &TickInput) -> TickInput {
    let mut derived = *input;
    match session.phase {
        Phase::Start | Phase::GameOver => derived.restart = true,
        Phase::Paused => derived.pause = true,
        Phase::BreakPrompt => derived.break_choice = Some(false),
        Phase::Quiz => derived.quiz_answer = Some(session.quiz_expected),
        Phase::Playing => {
            let actor_center = session.actor.pos.y + session.actor.size.y / 2.0;
            let target = session
                .entities
                .iter()
                .filter(|e| e.kind.is_collectible())
                .min_by(|a, b| a.pos.x.total_cmp(&b.pos.x))
                .map(|e| e.pos.y + e.kind.size().y / 2.0)
                .unwrap_or(session.tuning.playfield.y / 2.0);
            derived.impulse = actor_center > target;
        }
    }
    derived
}
