//! # Lunar Probe Environment
//!
//! Ties the scene layout, kinematics, fuel, reward and termination together
//! behind the [`Env`] interface.
//!
//! Each [`LunarEnv`] owns its episode state and its random generator, so
//! several instances can be stepped side by side without sharing anything.

use physics::{fuel, integrate, Action, Arena, KinematicParams, Vec2, THRUSTER_COUNT};
use tracing::{debug, info};

use crate::config::EnvConfig;
use crate::env::{Env, Step};
use crate::error::{ConfigError, EnvError};
use crate::reward;
use crate::scene::SceneLayoutGenerator;
use crate::state::{EpisodeState, Observation, Snapshot, OBS_SIZE};
use crate::termination::{self, TerminalCause};

pub struct LunarEnv {
    config: EnvConfig,
    arena: Arena,
    kinematics: KinematicParams,
    scene: SceneLayoutGenerator,
    state: Option<EpisodeState>,
    episodes: u64,
}

impl LunarEnv {
    /// Build an environment, rejecting any degenerate configuration here so
    /// that stepping can never fail on configuration grounds.
    ///
    /// # Errors
    ///
    /// Returns the first constraint `config` violates.
    pub fn new(config: EnvConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let arena = config.arena()?;
        let kinematics = config.kinematics()?;
        let scene = SceneLayoutGenerator::new(config.pad_stride, config.pad_count, config.seed)?;
        Ok(Self {
            config,
            arena,
            kinematics,
            scene,
            state: None,
            episodes: 0,
        })
    }

    #[must_use]
    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    #[must_use]
    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    #[must_use]
    pub fn pads(&self) -> &[f64] {
        self.scene.pads()
    }

    /// Commands are nominally in this range; the core does not clamp.
    #[must_use]
    pub const fn action_bounds(&self) -> (f64, f64) {
        (0.0, 1.0)
    }

    /// Number of resets so far.
    #[must_use]
    pub fn episodes(&self) -> u64 {
        self.episodes
    }

    /// Restart the pad picker from `seed`. The stored configuration follows,
    /// so `config().seed` always names the seed currently in use.
    pub fn seed(&mut self, seed: u64) {
        self.config.seed = seed;
        self.scene.reseed(seed);
    }

    /// Current episode, if `reset` has been called.
    #[must_use]
    pub fn state(&self) -> Option<&EpisodeState> {
        self.state.as_ref()
    }

    #[must_use]
    pub fn snapshot(&self) -> Option<Snapshot> {
        self.state.as_ref().map(EpisodeState::snapshot)
    }

    #[must_use]
    pub fn terminal_cause(&self) -> Option<TerminalCause> {
        self.state.as_ref().and_then(|s| s.cause)
    }

    /// Start an episode on explicitly chosen pads instead of random ones.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::InvalidPad`] when either index is out of range or
    /// both name the same pad.
    pub fn reset_with_pads(&mut self, start: usize, target: usize) -> Result<Observation, EnvError> {
        let count = self.scene.pads().len();
        if start == target || start >= count || target >= count {
            return Err(EnvError::InvalidPad {
                start,
                target,
                count,
            });
        }
        Ok(self.begin_episode(start, target))
    }

    fn begin_episode(&mut self, start: usize, target: usize) -> Observation {
        let altitude = self.config.start_y();
        let pads = self.scene.pads();
        let state = EpisodeState::new(
            Vec2::new(pads[start], altitude),
            Vec2::new(pads[target], altitude),
            self.config.start_fuel,
        );
        self.episodes += 1;
        debug!(
            episode = self.episodes,
            start_pad = start,
            target_pad = target,
            start_x = state.position.x,
            target_x = state.target.x,
            "episode reset"
        );
        let obs = state.observation();
        self.state = Some(state);
        obs
    }

    pub(crate) fn check_action(action: &[f64]) -> Result<Action, EnvError> {
        let commands: [f64; THRUSTER_COUNT] =
            action.try_into().map_err(|_| EnvError::ActionArity {
                expected: THRUSTER_COUNT,
                got: action.len(),
            })?;
        if let Some((index, &value)) = commands.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(EnvError::NonFiniteAction { index, value });
        }
        Ok(Action::new(commands))
    }
}

impl Env for LunarEnv {
    type Observation = Observation;

    fn step(&mut self, action: &[f64]) -> Result<Step<Observation>, EnvError> {
        let action = Self::check_action(action)?;
        let state = self.state.as_mut().ok_or(EnvError::NotReset)?;
        if let Some(cause) = state.cause {
            return Err(EnvError::EpisodeFinished(cause));
        }

        let (position, velocity) =
            integrate(state.position, state.velocity, &action, &self.kinematics);
        state.position = position;
        state.velocity = velocity;
        state.fuel = fuel::consume(state.fuel, &action, self.kinematics.dt).max(0.0);
        state.last_action = action;
        state.steps += 1;

        let reward = reward::reward(state);
        let cause = termination::judge(state, &self.arena);
        if let Some(cause) = cause {
            info!(
                episode = self.episodes,
                steps = state.steps,
                %cause,
                "episode finished"
            );
        }

        Ok(Step {
            observation: state.observation(),
            reward,
            done: cause.is_some(),
            cause,
        })
    }

    fn reset(&mut self) -> Observation {
        let (start, target) = self.scene.pick_indices();
        self.begin_episode(start, target)
    }

    fn is_done(&self) -> bool {
        self.state.as_ref().is_some_and(EpisodeState::is_done)
    }

    fn obs_size(&self) -> usize {
        OBS_SIZE
    }

    fn action_size(&self) -> usize {
        THRUSTER_COUNT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn env() -> LunarEnv {
        LunarEnv::new(EnvConfig::default()).unwrap()
    }

    #[test]
    fn step_before_reset_is_rejected() {
        let mut env = env();
        assert_eq!(env.step(&[0.0; 4]), Err(EnvError::NotReset));
        assert!(!env.is_done());
    }

    #[test]
    fn reset_places_probe_on_launch_altitude() {
        let mut env = env();
        let obs = env.reset();
        assert_relative_eq!(obs.y, 120.0);
        assert_relative_eq!(obs.target_y, 120.0);
        assert_relative_eq!(obs.fuel, 100.0);
        assert_eq!(obs.velocity(), Vec2::ZERO);
        assert_ne!(obs.x, obs.target_x);
        assert!(env.pads().contains(&obs.x));
        assert!(env.pads().contains(&obs.target_x));
    }

    #[test]
    fn wrong_arity_leaves_state_untouched() {
        let mut env = env();
        env.reset();
        let before = env.state().cloned();
        assert_eq!(
            env.step(&[0.0; 3]),
            Err(EnvError::ActionArity {
                expected: 4,
                got: 3
            })
        );
        assert_eq!(
            env.step(&[0.0; 5]),
            Err(EnvError::ActionArity {
                expected: 4,
                got: 5
            })
        );
        assert_eq!(env.state().cloned(), before);
    }

    #[test]
    fn non_finite_action_is_rejected() {
        let mut env = env();
        env.reset();
        let before = env.state().cloned();
        let err = env.step(&[0.0, f64::NAN, 0.0, 0.0]).unwrap_err();
        assert!(matches!(err, EnvError::NonFiniteAction { index: 1, .. }));
        let err = env.step(&[0.0, 0.0, 0.0, f64::INFINITY]).unwrap_err();
        assert!(matches!(err, EnvError::NonFiniteAction { index: 3, .. }));
        assert_eq!(env.state().cloned(), before);
    }

    #[test]
    fn invalid_pad_selection_is_rejected() {
        let mut env = env();
        assert!(matches!(
            env.reset_with_pads(2, 2),
            Err(EnvError::InvalidPad { .. })
        ));
        assert!(matches!(
            env.reset_with_pads(0, 6),
            Err(EnvError::InvalidPad { count: 6, .. })
        ));
        assert!(env.state().is_none());
    }

    #[test]
    fn reseeding_updates_config_and_replays_picks() {
        let mut env = env();
        let first = env.reset();
        env.reset();
        assert_eq!(env.episodes(), 2);

        env.seed(17);
        assert_eq!(env.config().seed, 17);
        let mut fresh = LunarEnv::new(EnvConfig::default().with_seed(17)).unwrap();
        assert_eq!(env.reset(), fresh.reset());
        assert_eq!(env.episodes(), 3);

        env.seed(0);
        assert_eq!(env.config().seed, 0);
        assert_eq!(env.reset(), first);
    }

    #[test]
    fn sizes_match_interface() {
        let env = env();
        assert_eq!(env.obs_size(), 7);
        assert_eq!(env.action_size(), 4);
        assert_eq!(env.action_bounds(), (0.0, 1.0));
    }
}
