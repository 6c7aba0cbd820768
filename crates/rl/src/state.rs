use physics::{Action, Vec2};
use serde::{Deserialize, Serialize};

use crate::termination::TerminalCause;

/// Length of the observation vector.
pub const OBS_SIZE: usize = 7;

/// Everything that changes during an episode. Created by `reset`, mutated by
/// `step`, replaced by the next `reset`.
#[derive(Clone, Debug, PartialEq)]
pub struct EpisodeState {
    pub position: Vec2,
    pub velocity: Vec2,
    pub fuel: f64,
    pub target: Vec2,
    pub last_action: Action,
    pub steps: u64,
    pub cause: Option<TerminalCause>,
}

impl EpisodeState {
    #[must_use]
    pub fn new(start: Vec2, target: Vec2, fuel: f64) -> Self {
        Self {
            position: start,
            velocity: Vec2::ZERO,
            fuel,
            target,
            last_action: Action::IDLE,
            steps: 0,
            cause: None,
        }
    }

    #[must_use]
    pub fn distance_to_target(&self) -> f64 {
        self.position.distance(self.target)
    }

    #[must_use]
    pub fn speed(&self) -> f64 {
        self.velocity.length()
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.cause.is_some()
    }

    #[must_use]
    pub fn observation(&self) -> Observation {
        Observation {
            x: self.position.x,
            y: self.position.y,
            fuel: self.fuel,
            vx: self.velocity.x,
            vy: self.velocity.y,
            target_x: self.target.x,
            target_y: self.target.y,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            position: self.position,
            velocity: self.velocity,
            fuel: self.fuel,
            target: self.target,
            last_action: self.last_action,
            steps: self.steps,
            cause: self.cause,
        }
    }
}

/// What an agent sees: `(x, y, fuel, vx, vy, target_x, target_y)`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub x: f64,
    pub y: f64,
    pub fuel: f64,
    pub vx: f64,
    pub vy: f64,
    pub target_x: f64,
    pub target_y: f64,
}

impl Observation {
    #[must_use]
    pub fn to_array(&self) -> [f64; OBS_SIZE] {
        [
            self.x,
            self.y,
            self.fuel,
            self.vx,
            self.vy,
            self.target_x,
            self.target_y,
        ]
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<f64> {
        self.to_array().to_vec()
    }

    #[must_use]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        Vec2::new(self.vx, self.vy)
    }

    #[must_use]
    pub fn target(&self) -> Vec2 {
        Vec2::new(self.target_x, self.target_y)
    }
}

/// Read-only copy of the episode handed to renderers once per step.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub position: Vec2,
    pub velocity: Vec2,
    pub fuel: f64,
    pub target: Vec2,
    pub last_action: Action,
    pub steps: u64,
    pub cause: Option<TerminalCause>,
}
