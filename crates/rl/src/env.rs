use crate::error::EnvError;
use crate::termination::TerminalCause;

/// Outcome of one call to [`Env::step`].
#[derive(Clone, Debug, PartialEq)]
pub struct Step<O> {
    pub observation: O,
    pub reward: f64,
    pub done: bool,
    /// Why the episode ended; `Some` exactly when `done` is set.
    pub cause: Option<TerminalCause>,
}

/// Reinforcement learning environment trait.
///
/// Modeled on the classic Gym interface. Each call to [`step`] advances the
/// simulation by one action and returns the new observation, a reward signal
/// and whether the episode has terminated. After a terminal step the
/// environment refuses further steps until [`reset`] is called.
///
/// [`step`]: Env::step
/// [`reset`]: Env::reset
pub trait Env {
    type Observation;

    /// Advance the environment by one action.
    ///
    /// # Errors
    ///
    /// Malformed actions and lifecycle misuse are reported without touching
    /// the episode state.
    fn step(&mut self, action: &[f64]) -> Result<Step<Self::Observation>, EnvError>;

    /// Start a new episode and return its first observation.
    fn reset(&mut self) -> Self::Observation;

    /// True from the terminal step until the next reset.
    fn is_done(&self) -> bool;

    /// Size of the observation vector.
    fn obs_size(&self) -> usize;

    /// Size of the action vector.
    fn action_size(&self) -> usize;
}
