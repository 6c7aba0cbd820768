use crate::thrusters::Action;

/// Fuel left after burning `action` for `dt`.
///
/// The result is not floored; it may dip below zero on the step that empties
/// the tank. Storing it clamped is up to the caller.
#[must_use]
pub fn consume(fuel: f64, action: &Action, dt: f64) -> f64 {
    fuel - action.total() * dt
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn idle_burns_nothing() {
        assert_eq!(consume(500.0, &Action::IDLE, 0.05), 500.0);
    }

    #[test]
    fn burn_is_proportional_to_total_command() {
        assert_relative_eq!(consume(100.0, &Action::new([1.0, 1.0, 0.0, 0.0]), 0.05), 99.9);
        assert_relative_eq!(consume(100.0, &Action::new([0.5; 4]), 0.1), 99.8);
    }

    #[test]
    fn may_go_negative() {
        assert!(consume(0.01, &Action::new([1.0; 4]), 0.05) < 0.0);
    }
}
