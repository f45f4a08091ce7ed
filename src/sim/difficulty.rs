//! Difficulty scaling: pure functions of elapsed play time
//!
//! The difficulty multiplier grows exponentially and is unbounded; scroll
//! speed derives from it but is hard-capped, spawn rate is not (the sampling
//! site clamps the resulting probability instead).

use crate::tuning::Tuning;

/// Exponential difficulty multiplier, >= 1 for all t >= 0
pub fn difficulty(t: f32, tuning: &Tuning) -> f32 {
    debug_assert!(t >= 0.0, "negative elapsed time");
    tuning.difficulty_growth.powf(t)
}

/// Horizontal scroll speed (px/s), capped exponential
pub fn speed(t: f32, tuning: &Tuning) -> f32 {
    (tuning.base_speed * difficulty(t, tuning)).min(tuning.max_speed)
}

/// Spawn probability per reference tick, uncapped exponential
pub fn spawn_rate(t: f32, tuning: &Tuning) -> f32 {
    tuning.base_spawn_rate * tuning.spawn_growth.powf(t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn difficulty_starts_at_one_and_grows() {
        let tuning = Tuning::default();
        assert_eq!(difficulty(0.0, &tuning), 1.0);
        assert!(difficulty(60.0, &tuning) > difficulty(30.0, &tuning));
        // 1.02^60 ~ 3.28
        assert!((difficulty(60.0, &tuning) - 3.281).abs() < 0.01);
    }

    #[test]
    fn speed_hits_the_cap_and_stays_there() {
        let tuning = Tuning::default();
        assert_eq!(speed(0.0, &tuning), tuning.base_speed);
        // log_1.02(5) ~ 81 s to reach a 5x multiplier (= max/base)
        assert_eq!(speed(120.0, &tuning), tuning.max_speed);
        assert_eq!(speed(10_000.0, &tuning), tuning.max_speed);
    }

    #[test]
    fn spawn_rate_is_uncapped() {
        let tuning = Tuning::default();
        assert_eq!(spawn_rate(0.0, &tuning), tuning.base_spawn_rate);
        // Past ~263 s the raw rate exceeds 1.0 per reference tick
        assert!(spawn_rate(300.0, &tuning) > 1.0);
    }

    proptest! {
        #[test]
        fn speed_is_nondecreasing_and_bounded(t in 0.0f32..4000.0, dt in 0.0f32..10.0) {
            let tuning = Tuning::default();
            let a = speed(t, &tuning);
            let b = speed(t + dt, &tuning);
            prop_assert!(b >= a);
            prop_assert!(b <= tuning.max_speed);
            prop_assert!(a >= tuning.base_speed);
        }

        #[test]
        fn difficulty_never_dips_below_one(t in 0.0f32..4000.0) {
            let tuning = Tuning::default();
            prop_assert!(difficulty(t, &tuning) >= 1.0);
        }
    }
}
