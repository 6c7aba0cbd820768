//! A row of independent environments stepped in lock-step.
//!
//! Each member owns its own state and pad picker; member `i` is seeded with
//! `seed + i`. Finished members are reset automatically on the next step so
//! callers always get one transition per member.

use crate::config::EnvConfig;
use crate::env::{Env, Step};
use crate::error::{ConfigError, EnvError};
use crate::lunar::LunarEnv;
use crate::state::Observation;

pub struct VecEnv {
    envs: Vec<LunarEnv>,
}

impl VecEnv {
    /// # Errors
    ///
    /// Fails when `config` is invalid.
    pub fn new(config: &EnvConfig, count: usize) -> Result<Self, ConfigError> {
        let envs = (0..count as u64)
            .map(|i| LunarEnv::new(config.clone().with_seed(config.seed.wrapping_add(i))))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { envs })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.envs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.envs.is_empty()
    }

    #[must_use]
    pub fn envs(&self) -> &[LunarEnv] {
        &self.envs
    }

    pub fn reset_all(&mut self) -> Vec<Observation> {
        self.envs.iter_mut().map(Env::reset).collect()
    }

    /// Step every member with its own action. Members that finished on the
    /// previous call are reset first; the returned observation for such a
    /// member is the first one of its new episode after stepping.
    ///
    /// # Errors
    ///
    /// Fails when the number of actions differs from the number of members,
    /// or when any action is malformed. Every action is checked before any
    /// member is stepped.
    pub fn step(&mut self, actions: &[Vec<f64>]) -> Result<Vec<Step<Observation>>, EnvError> {
        if actions.len() != self.envs.len() {
            return Err(EnvError::ActionArity {
                expected: self.envs.len(),
                got: actions.len(),
            });
        }
        for action in actions {
            LunarEnv::check_action(action)?;
        }
        self.envs
            .iter_mut()
            .zip(actions)
            .map(|(env, action)| {
                if env.state().is_none() || env.is_done() {
                    env.reset();
                }
                env.step(action)
            })
            .collect()
    }
}
