use physics::PhysicsError;
use thiserror::Error;

use crate::termination::TerminalCause;

/// Problems detected while building an environment. Never raised by `step`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("need at least 2 landing pads, got {0}")]
    TooFewPads(usize),
    #[error("at most {max} landing pads are supported, got {count}")]
    TooManyPads { count: usize, max: usize },
    #[error("pad stride must be positive and finite, got {0}")]
    InvalidPadStride(f64),
    #[error("pad at x={x} lies outside the arena width {width}")]
    PadOutsideArena { x: f64, width: f64 },
    #[error("starting fuel must be positive and finite, got {0}")]
    NonPositiveFuel(f64),
    #[error("launch altitude y={start_y} is not above the surface line y={surface_y}")]
    StartBelowSurface { start_y: f64, surface_y: f64 },
    #[error(transparent)]
    Physics(#[from] PhysicsError),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
}

/// Misuse of a live environment. State is never touched when one of these is
/// returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EnvError {
    #[error("action must have {expected} components, got {got}")]
    ActionArity { expected: usize, got: usize },
    #[error("action component {index} is not finite: {value}")]
    NonFiniteAction { index: usize, value: f64 },
    #[error("step called before reset")]
    NotReset,
    #[error("episode already finished ({0}); call reset first")]
    EpisodeFinished(TerminalCause),
    #[error("invalid pad selection start={start} target={target} for {count} pads")]
    InvalidPad {
        start: usize,
        target: usize,
        count: usize,
    },
}
