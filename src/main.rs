//! Headless entry point
//!
//! Runs the simulation with the attract-mode pilot at a fixed timestep.
//! Useful for balance tuning and soak-testing the tick loop without a
//! renderer attached. Usage: `subdrift [seed] [seconds]`.

use std::time::{SystemTime, UNIX_EPOCH};

use subdrift::consts::SIM_DT;
use subdrift::sim::{Phase, Session, TickInput, tick};
use subdrift::tuning::Tuning;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });
    let seconds: f32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(120.0);

    log::info!("subdrift headless run: seed {seed}, {seconds}s at {} Hz", 1.0 / SIM_DT);

    let mut session = match Session::new(seed, Tuning::with_breaks()) {
        Ok(session) => session,
        Err(err) => {
            log::error!("bad tuning: {err}");
            std::process::exit(1);
        }
    };

    let demo = TickInput {
        demo: true,
        ..TickInput::default()
    };

    let ticks = (seconds / SIM_DT) as u64;
    let mut runs = 0u64;
    let mut last_phase = Phase::Start;
    for i in 0..ticks {
        let frame = tick(&mut session, &demo, SIM_DT);
        if frame.phase == Phase::Playing && last_phase != Phase::Playing {
            runs += 1;
        }
        last_phase = frame.phase;

        // One status line per simulated second
        if i % 60 == 0 {
            log::debug!(
                "t={:.0}s score={} speed={:.0} entities={} fatigue={:?}",
                frame.elapsed,
                frame.score,
                frame.speed,
                frame.entities.len(),
                frame.fatigue
            );
        }
    }

    let frame = session.frame();
    println!("runs played:   {runs}");
    println!("high score:    {}", frame.high_score);
    println!("last score:    {}", frame.score);
    println!("last run time: {:.1}s", frame.elapsed);
    println!("skill rating:  {}", frame.skill.title);
    println!("achievements:  {}/5", session.achievements.unlocked_count());
}
