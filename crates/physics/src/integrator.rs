//! # Probe Integration
//!
//! Semi-implicit Euler stepping for the probe: velocity is advanced first
//! from thrust plus gravity, then position from the new velocity. One `dt`
//! per call, no substepping and no clamping.

use crate::error::PhysicsError;
use crate::thrusters::{net_force, Action};
use crate::types::Vec2;

/// Fixed parameters of the integration step.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct KinematicParams {
    pub dt: f64,
    /// Downward acceleration, applied on the vertical axis only.
    pub gravity: f64,
    /// Force per unit thruster command.
    pub thrust_force: f64,
}

impl KinematicParams {
    /// # Errors
    ///
    /// Fails when `dt` is not a positive finite number or when gravity or
    /// thrust force are not finite.
    pub fn new(dt: f64, gravity: f64, thrust_force: f64) -> Result<Self, PhysicsError> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(PhysicsError::NonPositiveTimestep(dt));
        }
        if !gravity.is_finite() {
            return Err(PhysicsError::NonFiniteParameter {
                name: "gravity",
                value: gravity,
            });
        }
        if !thrust_force.is_finite() {
            return Err(PhysicsError::NonFiniteParameter {
                name: "thrust_force",
                value: thrust_force,
            });
        }
        Ok(Self {
            dt,
            gravity,
            thrust_force,
        })
    }

    #[must_use]
    pub fn gravity_vector(&self) -> Vec2 {
        Vec2::new(0.0, self.gravity)
    }
}

/// Advance `(position, velocity)` by one step under `action`.
///
/// The thruster force is treated as an acceleration (unit probe mass).
#[must_use]
pub fn integrate(
    position: Vec2,
    velocity: Vec2,
    action: &Action,
    params: &KinematicParams,
) -> (Vec2, Vec2) {
    let acceleration = net_force(action, params.thrust_force) + params.gravity_vector();
    let velocity = velocity + acceleration * params.dt;
    let position = position + velocity * params.dt;
    (position, velocity)
}
