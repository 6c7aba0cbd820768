#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::cast_precision_loss)]
//! # Lunar Lander Environment
//!
//! A reinforcement learning environment built on the `physics` crate: a
//! four-thruster probe launches above one landing pad and has to settle next
//! to another before its fuel runs out.
//!
//! ## Key Components
//!
//! -   **[`LunarEnv`]:** the episode facade implementing [`Env`]. Owns its
//!     state and its seeded pad picker.
//! -   **[`SceneLayoutGenerator`]:** pad layout and start/target selection.
//! -   **[`reward`] and [`termination`]:** the shaped reward and the ordered
//!     terminal conditions evaluated after every step.
//! -   **[`VecEnv`]:** independent environments stepped in lock-step.
//! -   **[`Policy`]:** idle, random, PD hover and manual action sources, plus
//!     [`run_episode`] to drive one episode with an optional [`Renderer`].
//!
//! ## Usage
//!
//! ```rust
//! use rl::{Env, EnvConfig, HoverController, LunarEnv, Policy};
//!
//! let config = EnvConfig::default().with_seed(7);
//! let mut policy = HoverController::new(config.gravity, config.thrust_force);
//! let mut env = LunarEnv::new(config)?;
//!
//! let mut obs = env.reset();
//! let step = env.step(policy.select_action(&obs).as_slice())?;
//! obs = step.observation;
//! assert_eq!(obs.to_vec().len(), env.obs_size());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod env;
pub mod error;
pub mod lunar;
pub mod policy;
pub mod render;
pub mod reward;
pub mod rollout;
pub mod scene;
pub mod state;
pub mod termination;
pub mod vec_env;

pub use config::EnvConfig;
pub use env::{Env, Step};
pub use error::{ConfigError, EnvError};
pub use lunar::LunarEnv;
pub use policy::{HoverController, IdlePolicy, Key, ManualThrust, Policy, RandomPolicy};
pub use render::{RecordingRenderer, Renderer};
pub use rollout::{run_episode, EpisodeSummary};
pub use scene::{SceneLayoutGenerator, MAX_PAD_COUNT};
pub use state::{EpisodeState, Observation, Snapshot, OBS_SIZE};
pub use termination::TerminalCause;
pub use vec_env::VecEnv;
