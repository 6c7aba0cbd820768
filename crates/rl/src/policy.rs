//! Action sources for the lunar environment.
//!
//! The environment does not care where commands come from; anything that
//! maps an [`Observation`] to an [`Action`] can fly the probe. Learned
//! policies live outside this crate and plug in through [`Policy`].

use physics::{Action, Thruster, THRUSTER_COUNT};
use serde::{Deserialize, Serialize};

use crate::state::Observation;

pub trait Policy {
    fn select_action(&mut self, observation: &Observation) -> Action;
}

impl<F> Policy for F
where
    F: FnMut(&Observation) -> Action,
{
    fn select_action(&mut self, observation: &Observation) -> Action {
        self(observation)
    }
}

/// All thrusters off; the probe free-falls.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdlePolicy;

impl Policy for IdlePolicy {
    fn select_action(&mut self, _observation: &Observation) -> Action {
        Action::IDLE
    }
}

/// Independent uniform `[0, 1)` commands from a seeded generator.
pub struct RandomPolicy {
    rng: fastrand::Rng,
}

impl RandomPolicy {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl Policy for RandomPolicy {
    fn select_action(&mut self, _observation: &Observation) -> Action {
        let mut commands = [0.0; THRUSTER_COUNT];
        for c in &mut commands {
            *c = self.rng.f64();
        }
        Action::new(commands)
    }
}

/// Proportional-derivative hover controller.
///
/// Picks a desired acceleration towards the target, adds a gravity
/// feed-forward and splits it onto the thruster pairs that push purely along
/// each axis. Every command is clamped to `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverController {
    pub kp: f64,
    pub kd: f64,
    pub gravity: f64,
    pub thrust_force: f64,
}

impl HoverController {
    #[must_use]
    pub fn new(gravity: f64, thrust_force: f64) -> Self {
        Self {
            kp: 0.05,
            kd: 0.6,
            gravity,
            thrust_force,
        }
    }
}

impl Policy for HoverController {
    fn select_action(&mut self, obs: &Observation) -> Action {
        let error = obs.target() - obs.position();
        let velocity = obs.velocity();
        let ax = self.kp * error.x - self.kd * velocity.x;
        let ay = self.kp * error.y - self.kd * velocity.y - self.gravity;

        // a matched pair on one side produces 2 * thrust_force on one axis
        let pair_force = 2.0 * self.thrust_force;
        let ux = ax / pair_force;
        let uy = ay / pair_force;

        let mut action = Action::IDLE;
        let fire = |a: &mut Action, pair: [Thruster; 2], amount: f64| {
            for t in pair {
                a.set(t, a.get(t) + amount);
            }
        };
        if ux > 0.0 {
            fire(&mut action, [Thruster::TopRight, Thruster::BottomRight], ux);
        } else {
            fire(&mut action, [Thruster::TopLeft, Thruster::BottomLeft], -ux);
        }
        if uy > 0.0 {
            fire(&mut action, [Thruster::TopLeft, Thruster::TopRight], uy);
        } else {
            fire(&mut action, [Thruster::BottomLeft, Thruster::BottomRight], -uy);
        }

        for c in &mut action.0 {
            *c = c.clamp(0.0, 1.0);
        }
        action
    }
}

/// Direction keys of a manual controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
}

/// Maps held direction keys to thruster commands, one thruster per key, all
/// at the same power.
///
/// This is the keyboard layout of the reference manual-control tool; the
/// power is deliberately allowed above 1.
#[derive(Clone, Debug, PartialEq)]
pub struct ManualThrust {
    pub power: f64,
    held: Vec<Key>,
}

impl Default for ManualThrust {
    fn default() -> Self {
        Self::new(3.0)
    }
}

impl ManualThrust {
    #[must_use]
    pub fn new(power: f64) -> Self {
        Self {
            power,
            held: Vec::new(),
        }
    }

    /// Thruster fired while `key` is held.
    #[must_use]
    pub const fn thruster_for(key: Key) -> Thruster {
        match key {
            Key::Left => Thruster::TopRight,
            Key::Right => Thruster::TopLeft,
            Key::Up => Thruster::BottomRight,
            Key::Down => Thruster::BottomLeft,
        }
    }

    /// Replace the set of currently held keys.
    pub fn set_held(&mut self, keys: &[Key]) {
        self.held.clear();
        self.held.extend_from_slice(keys);
    }

    #[must_use]
    pub fn command(&self) -> Action {
        let mut action = Action::IDLE;
        for &key in &self.held {
            action.set(Self::thruster_for(key), self.power);
        }
        action
    }
}

impl Policy for ManualThrust {
    fn select_action(&mut self, _observation: &Observation) -> Action {
        self.command()
    }
}
