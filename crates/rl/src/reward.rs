//! Dense shaping plus a sparse landing bonus.
//!
//! The weights are part of the environment's observable behaviour; changing
//! them changes every return an agent has ever been trained on.

use crate::state::EpisodeState;

pub const SPEED_PENALTY: f64 = 0.1;
pub const DISTANCE_PENALTY: f64 = 0.01;
pub const LANDING_BONUS: f64 = 100.0;
/// Landing counts within this distance of the target (exclusive).
pub const LANDING_RADIUS: f64 = 10.0;
/// Per-axis speed limit for a landing (exclusive).
pub const LANDING_SPEED_LIMIT: f64 = 2.0;

/// Close enough and slow enough on both axes. Shared by the reward and the
/// termination check.
#[must_use]
pub fn at_target(state: &EpisodeState) -> bool {
    state.distance_to_target() < LANDING_RADIUS
        && state.velocity.x.abs() < LANDING_SPEED_LIMIT
        && state.velocity.y.abs() < LANDING_SPEED_LIMIT
}

/// Shaping terms only, without the landing bonus.
#[must_use]
pub fn shaping(state: &EpisodeState) -> f64 {
    -SPEED_PENALTY * state.speed() - DISTANCE_PENALTY * state.distance_to_target()
}

#[must_use]
pub fn reward(state: &EpisodeState) -> f64 {
    let bonus = if at_target(state) { LANDING_BONUS } else { 0.0 };
    shaping(state) + bonus
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use physics::Vec2;

    fn state_at(pos: Vec2, vel: Vec2) -> EpisodeState {
        let mut s = EpisodeState::new(pos, Vec2::new(300.0, 120.0), 100.0);
        s.velocity = vel;
        s
    }

    #[test]
    fn penalties_use_euclidean_norms() {
        let s = state_at(Vec2::new(0.0, 0.0), Vec2::new(3.0, 4.0));
        let dist = 300.0_f64.hypot(120.0);
        assert_relative_eq!(reward(&s), -0.1 * 5.0 - 0.01 * dist, epsilon = 1e-12);
    }

    #[test]
    fn landing_adds_bonus() {
        let s = state_at(Vec2::new(305.0, 118.0), Vec2::new(1.0, -1.0));
        assert!(at_target(&s));
        let expected = 100.0 - 0.1 * 2.0_f64.sqrt() - 0.01 * 29.0_f64.sqrt();
        assert_relative_eq!(reward(&s), expected, epsilon = 1e-9);
        assert!(reward(&s) >= LANDING_BONUS - 1.0);
    }

    #[test]
    fn bonus_beats_same_state_without_it() {
        let s = state_at(Vec2::new(301.0, 121.0), Vec2::new(0.5, 0.5));
        assert!(reward(&s) > shaping(&s));
        assert_relative_eq!(reward(&s) - shaping(&s), LANDING_BONUS, epsilon = 1e-9);
    }

    #[test]
    fn thresholds_are_exclusive() {
        // exactly on the radius
        let s = state_at(Vec2::new(310.0, 120.0), Vec2::ZERO);
        assert!(!at_target(&s));
        // exactly on the speed limit
        let s = state_at(Vec2::new(300.0, 120.0), Vec2::new(2.0, 0.0));
        assert!(!at_target(&s));
        let s = state_at(Vec2::new(300.0, 120.0), Vec2::new(0.0, -2.0));
        assert!(!at_target(&s));
    }

    #[test]
    fn fast_pass_over_target_gets_no_bonus() {
        let s = state_at(Vec2::new(300.0, 120.0), Vec2::new(5.0, 0.0));
        assert!(!at_target(&s));
        assert_relative_eq!(reward(&s), -0.5);
    }
}
