use physics::{integrate, Action, KinematicParams, Vec2};
use approx::assert_relative_eq;

#[test]
fn probe_free_fall_matches_discrete_sum() {
    let params = KinematicParams::new(0.05, 1.62, 2.0).unwrap();
    let start = Vec2::new(300.0, 120.0);
    let (mut pos, mut vel) = (start, Vec2::ZERO);
    let steps = 40_u32;

    let mut expected_y = start.y;
    for k in 1..=steps {
        (pos, vel) = integrate(pos, vel, &Action::IDLE, &params);
        // semi-implicit Euler: y(N) = y0 + sum_{k=1..N} vy(k) * dt
        expected_y += f64::from(k) * params.gravity * params.dt * params.dt;
    }

    assert_relative_eq!(vel.y, f64::from(steps) * params.gravity * params.dt, epsilon = 1e-12);
    assert_relative_eq!(pos.y, expected_y, epsilon = 1e-9);
    assert_relative_eq!(pos.x, start.x);
    assert_relative_eq!(vel.x, 0.0);
}

#[test]
fn free_fall_is_slower_than_continuous_only_by_half_step() {
    // y_euler - y_exact = g * dt * t / 2 for the semi-implicit scheme
    let params = KinematicParams::new(0.01, 9.81, 0.0).unwrap();
    let (mut pos, mut vel) = (Vec2::ZERO, Vec2::ZERO);
    for _ in 0..100 {
        (pos, vel) = integrate(pos, vel, &Action::IDLE, &params);
    }
    let t = 1.0;
    let exact = 0.5 * 9.81 * t * t;
    assert_relative_eq!(pos.y - exact, 0.5 * 9.81 * 0.01 * t, epsilon = 1e-9);
    assert_relative_eq!(vel.y, 9.81 * t, epsilon = 1e-9);
}
