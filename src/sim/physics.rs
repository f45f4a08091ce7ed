//! Actor physics: gravity integration and playfield clamping
//!
//! An upward impulse overrides the current velocity outright rather than
//! adding to it; hitting the floor or ceiling kills all vertical momentum.
//! Both are arcade-feel choices carried over from the original game.

use crate::tuning::Tuning;

use super::entity::Actor;

/// Advance the actor by one tick. `impulse` is the one-shot rise command.
pub fn advance(actor: &mut Actor, impulse: bool, dt: f32, tuning: &Tuning) {
    if impulse {
        actor.vel_y = tuning.impulse_velocity;
    }

    actor.vel_y += tuning.gravity * dt;
    actor.pos.y += actor.vel_y * dt;

    let floor = tuning.playfield.y - actor.size.y;
    if actor.pos.y < 0.0 {
        actor.pos.y = 0.0;
        actor.vel_y = 0.0;
    } else if actor.pos.y > floor {
        actor.pos.y = floor;
        actor.vel_y = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use glam::Vec2;
    use proptest::prelude::*;

    fn test_actor(tuning: &Tuning) -> Actor {
        Actor::new(tuning.actor_start, tuning.actor_size)
    }

    #[test]
    fn gravity_pulls_the_actor_down() {
        let tuning = Tuning::default();
        let mut actor = test_actor(&tuning);
        let start_y = actor.pos.y;

        advance(&mut actor, false, SIM_DT, &tuning);
        advance(&mut actor, false, SIM_DT, &tuning);
        assert!(actor.pos.y > start_y);
        assert!(actor.vel_y > 0.0);
    }

    #[test]
    fn impulse_overrides_downward_momentum() {
        let tuning = Tuning::default();
        let mut actor = test_actor(&tuning);
        actor.vel_y = 500.0;

        advance(&mut actor, true, SIM_DT, &tuning);
        // Velocity was replaced, then one tick of gravity applied
        assert!(actor.vel_y < 0.0);
        let expected = tuning.impulse_velocity + tuning.gravity * SIM_DT;
        assert!((actor.vel_y - expected).abs() < 1e-3);
    }

    #[test]
    fn floor_clamp_zeroes_velocity_and_holds() {
        let tuning = Tuning::default();
        let mut actor = test_actor(&tuning);
        let floor = tuning.playfield.y - actor.size.y;

        // Constant downward drift, no impulses: the actor must settle on the
        // floor with exactly zero velocity and stay there.
        for _ in 0..600 {
            advance(&mut actor, false, SIM_DT, &tuning);
        }
        assert_eq!(actor.pos.y, floor);
        assert_eq!(actor.vel_y, 0.0);

        for _ in 0..60 {
            advance(&mut actor, false, SIM_DT, &tuning);
            assert_eq!(actor.pos.y, floor);
            assert_eq!(actor.vel_y, 0.0);
        }
    }

    #[test]
    fn ceiling_clamp_zeroes_velocity() {
        let tuning = Tuning::default();
        let mut actor = test_actor(&tuning);
        actor.pos.y = 5.0;
        actor.vel_y = tuning.impulse_velocity;

        advance(&mut actor, false, SIM_DT, &tuning);
        assert_eq!(actor.pos.y, 0.0);
        assert_eq!(actor.vel_y, 0.0);
    }

    proptest! {
        #[test]
        fn actor_never_leaves_the_playfield(
            start_y in 0.0f32..570.0,
            impulses in proptest::collection::vec(any::<bool>(), 1..400),
        ) {
            let tuning = Tuning::default();
            let mut actor = test_actor(&tuning);
            actor.pos.y = start_y;
            let floor = tuning.playfield.y - actor.size.y;

            for impulse in impulses {
                advance(&mut actor, impulse, SIM_DT, &tuning);
                prop_assert!(actor.pos.y >= 0.0);
                prop_assert!(actor.pos.y <= floor);
                // On a clamp tick the residual momentum must be gone
                if actor.pos.y == 0.0 || actor.pos.y == floor {
                    prop_assert_eq!(actor.vel_y, 0.0);
                }
            }
        }
    }
}
