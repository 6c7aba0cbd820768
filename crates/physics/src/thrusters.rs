//! Thruster layout of the probe.
//!
//! The probe carries four corner thrusters. Each one pushes along both axes,
//! so firing an opposing pair cancels on the shared axis while the other axis
//! adds up. That cancellation is part of the model and callers rely on it.

use serde::{Deserialize, Serialize};

use crate::types::Vec2;

/// Number of independently commandable thrusters.
pub const THRUSTER_COUNT: usize = 4;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Thruster {
    TopLeft = 0,
    TopRight = 1,
    BottomLeft = 2,
    BottomRight = 3,
}

impl Thruster {
    pub const ALL: [Self; THRUSTER_COUNT] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Unit force direction of this thruster, `(x, y)` with `y` pointing down.
    #[must_use]
    pub const fn direction(self) -> (f64, f64) {
        THRUSTER_MATRIX[self as usize]
    }
}

/// Row `i` is the signed unit contribution of thruster `i` to `(x, y)`.
pub const THRUSTER_MATRIX: [(f64, f64); THRUSTER_COUNT] = [
    (-1.0, 1.0),
    (1.0, 1.0),
    (-1.0, -1.0),
    (1.0, -1.0),
];

/// One command per thruster, nominally in `[0, 1]`. No clamping is applied.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Action(pub [f64; THRUSTER_COUNT]);

impl Action {
    pub const IDLE: Self = Self([0.0; THRUSTER_COUNT]);

    #[must_use]
    pub const fn new(commands: [f64; THRUSTER_COUNT]) -> Self {
        Self(commands)
    }

    #[must_use]
    pub fn get(&self, thruster: Thruster) -> f64 {
        self.0[thruster.index()]
    }

    pub fn set(&mut self, thruster: Thruster, command: f64) {
        self.0[thruster.index()] = command;
    }

    /// Total commanded thrust, which is what the fuel model bills.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

impl From<[f64; THRUSTER_COUNT]> for Action {
    fn from(commands: [f64; THRUSTER_COUNT]) -> Self {
        Self(commands)
    }
}

/// Net planar force produced by `action` with `thrust_force` per unit command.
#[must_use]
pub fn net_force(action: &Action, thrust_force: f64) -> Vec2 {
    let mut force = Vec2::ZERO;
    for thruster in Thruster::ALL {
        let (dx, dy) = thruster.direction();
        let command = action.get(thruster);
        force.x += dx * command;
        force.y += dy * command;
    }
    force * thrust_force
}
