//! Episode driver: reset, then feed policy actions until the episode ends.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::env::Env;
use crate::error::EnvError;
use crate::lunar::LunarEnv;
use crate::policy::Policy;
use crate::render::Renderer;
use crate::termination::TerminalCause;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EpisodeSummary {
    pub steps: u64,
    pub total_reward: f64,
    /// `None` when the driver's step cap cut the episode short.
    pub cause: Option<TerminalCause>,
}

impl EpisodeSummary {
    #[must_use]
    pub fn landed(&self) -> bool {
        self.cause.is_some_and(TerminalCause::is_success)
    }

    #[must_use]
    pub fn truncated(&self) -> bool {
        self.cause.is_none()
    }
}

/// Run one full episode of `env` under `policy`.
///
/// The renderer, when given, sees the initial state and then one snapshot
/// per step. `max_steps` caps the episode length on the driver side; the
/// environment itself never truncates.
///
/// # Errors
///
/// Propagates environment errors, which for a well-behaved policy means a
/// non-finite action.
pub fn run_episode(
    env: &mut LunarEnv,
    policy: &mut dyn Policy,
    mut renderer: Option<&mut dyn Renderer>,
    max_steps: Option<u64>,
) -> Result<EpisodeSummary, EnvError> {
    let mut observation = env.reset();
    if let (Some(r), Some(snap)) = (renderer.as_deref_mut(), env.snapshot()) {
        r.draw(&snap);
    }

    let mut summary = EpisodeSummary {
        steps: 0,
        total_reward: 0.0,
        cause: None,
    };

    while max_steps.is_none_or(|cap| summary.steps < cap) {
        let action = policy.select_action(&observation);
        let step = env.step(action.as_slice())?;
        summary.steps += 1;
        summary.total_reward += step.reward;
        trace!(step = summary.steps, reward = step.reward, ?action, "step");

        if let (Some(r), Some(snap)) = (renderer.as_deref_mut(), env.snapshot()) {
            r.draw(&snap);
        }

        observation = step.observation;
        if step.done {
            summary.cause = step.cause;
            break;
        }
    }
    Ok(summary)
}
