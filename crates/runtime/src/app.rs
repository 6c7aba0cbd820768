//! # Lander Application Logic
//!
//! [`run`] builds a [`LunarEnv`] from the command line, flies the requested
//! number of episodes with the chosen policy and collects an [`RunReport`].
//! Progress goes through `tracing`; the optional reward history is written
//! as pretty JSON so it can be plotted elsewhere.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rl::{
    run_episode, EnvConfig, EpisodeSummary, HoverController, IdlePolicy, LunarEnv, Policy,
    RandomPolicy, TerminalCause,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::render::LogRenderer;

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "lander", about = "Fly the lunar probe environment headlessly")]
pub struct Cli {
    /// JSON environment configuration; missing fields take their defaults.
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, default_value_t = 10)]
    pub episodes: u32,

    #[arg(long, value_enum, default_value_t = PolicyKind::Hover)]
    pub policy: PolicyKind,

    /// Overrides the seed from the configuration file.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Episodes still running after this many steps are cut short.
    #[arg(long, default_value_t = 5_000)]
    pub max_steps: u64,

    /// Where to write the per-episode reward history.
    #[arg(long)]
    pub history_out: Option<PathBuf>,

    /// Log the probe every N steps at debug level; 0 disables it.
    #[arg(long, default_value_t = 0)]
    pub log_every: u64,
}

#[derive(ValueEnum, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    Idle,
    Random,
    Hover,
}

impl PolicyKind {
    fn build(self, config: &EnvConfig) -> Box<dyn Policy> {
        match self {
            Self::Idle => Box::new(IdlePolicy),
            Self::Random => Box::new(RandomPolicy::new(config.seed)),
            Self::Hover => Box::new(HoverController::new(config.gravity, config.thrust_force)),
        }
    }
}

/// Outcome of a whole run.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RunReport {
    pub policy: PolicyKind,
    pub seed: u64,
    /// Total reward per episode, in order.
    pub rewards: Vec<f64>,
    pub episodes: Vec<EpisodeSummary>,
}

impl RunReport {
    #[must_use]
    pub fn landed(&self) -> usize {
        self.episodes.iter().filter(|e| e.landed()).count()
    }

    #[must_use]
    pub fn count(&self, cause: Option<TerminalCause>) -> usize {
        self.episodes.iter().filter(|e| e.cause == cause).count()
    }

    #[must_use]
    pub fn mean_reward(&self) -> f64 {
        if self.rewards.is_empty() {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let n = self.rewards.len() as f64;
        self.rewards.iter().sum::<f64>() / n
    }

    /// Write the report as pretty JSON.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be created or written.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file =
            File::create(path).with_context(|| format!("creating {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)
            .with_context(|| format!("writing reward history to {}", path.display()))?;
        Ok(())
    }
}

/// Load the configuration named on the command line, or the defaults.
///
/// # Errors
///
/// Fails when the file cannot be read or parsed.
pub fn load_config(cli: &Cli) -> Result<EnvConfig> {
    let mut config = match &cli.config {
        Some(path) => EnvConfig::from_json_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => EnvConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    Ok(config)
}

/// Fly `cli.episodes` episodes and report how they ended.
///
/// # Errors
///
/// Returns configuration, environment and I/O errors with context attached.
pub fn run(cli: &Cli) -> Result<RunReport> {
    let config = load_config(cli)?;
    let seed = config.seed;
    let mut policy = cli.policy.build(&config);
    let mut env = LunarEnv::new(config).context("invalid environment configuration")?;
    let mut renderer = LogRenderer::new(cli.log_every);

    info!(
        policy = ?cli.policy,
        episodes = cli.episodes,
        seed,
        pads = env.pads().len(),
        "starting run"
    );

    let mut report = RunReport {
        policy: cli.policy,
        seed,
        rewards: Vec::with_capacity(cli.episodes as usize),
        episodes: Vec::with_capacity(cli.episodes as usize),
    };
    for episode in 1..=cli.episodes {
        let summary = run_episode(
            &mut env,
            policy.as_mut(),
            Some(&mut renderer),
            Some(cli.max_steps),
        )
        .with_context(|| format!("episode {episode}"))?;
        info!(
            episode,
            steps = summary.steps,
            reward = summary.total_reward,
            outcome = summary.cause.map_or("truncated", TerminalCause::as_str),
            "episode summary"
        );
        report.rewards.push(summary.total_reward);
        report.episodes.push(summary);
    }

    info!(
        landed = report.landed(),
        crashed = report.count(Some(TerminalCause::Crashed)),
        exited = report.count(Some(TerminalCause::Exited)),
        out_of_fuel = report.count(Some(TerminalCause::OutOfFuel)),
        truncated = report.count(None),
        mean_reward = report.mean_reward(),
        episodes = env.episodes(),
        frames = renderer.frames(),
        "run complete"
    );

    if let Some(path) = &cli.history_out {
        report.write_json(path)?;
        info!(path = %path.display(), "reward history written");
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("lander").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_fly_the_hover_controller() {
        let cli = cli(&[]);
        assert_eq!(cli.policy, PolicyKind::Hover);
        assert_eq!(cli.episodes, 10);
        assert_eq!(cli.seed, None);
        assert_eq!(cli.log_every, 0);
    }

    #[test]
    fn unknown_policy_is_rejected() {
        assert!(Cli::try_parse_from(["lander", "--policy", "ppo"]).is_err());
    }

    #[test]
    fn seed_flag_overrides_config() {
        let cli = cli(&["--seed", "42"]);
        assert_eq!(load_config(&cli).unwrap().seed, 42);
    }

    #[test]
    fn idle_run_crashes_every_episode() {
        let report = run(&cli(&["--episodes", "3", "--policy", "idle"])).unwrap();
        assert_eq!(report.episodes.len(), 3);
        assert_eq!(report.count(Some(TerminalCause::Crashed)), 3);
        assert_eq!(report.landed(), 0);
        assert!(report.mean_reward() < 0.0);
    }

    #[test]
    fn step_cap_is_reported_as_truncation() {
        let report = run(&cli(&["--episodes", "2", "--max-steps", "5"])).unwrap();
        assert_eq!(report.count(None), 2);
        assert!(report.episodes.iter().all(|e| e.steps == 5));
    }
}
