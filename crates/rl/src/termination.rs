//! # Episode Termination
//!
//! Four mutually exclusive terminal causes, checked in a fixed order after
//! the reward for the step has been computed. The first match wins, so a
//! probe that leaves the arena through the floor is recorded as `Exited`,
//! not `Crashed`.

use std::fmt;

use physics::Arena;
use serde::{Deserialize, Serialize};

use crate::reward::at_target;
use crate::state::EpisodeState;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TerminalCause {
    /// Left the arena rectangle.
    Exited,
    /// Tank empty.
    OutOfFuel,
    /// Reached the target slowly enough.
    Landed,
    /// Touched the surface line anywhere.
    Crashed,
}

impl TerminalCause {
    /// All causes in evaluation order.
    pub const PRIORITY: [Self; 4] = [Self::Exited, Self::OutOfFuel, Self::Landed, Self::Crashed];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exited => "exited",
            Self::OutOfFuel => "out-of-fuel",
            Self::Landed => "landed",
            Self::Crashed => "crashed",
        }
    }

    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Landed)
    }
}

impl fmt::Display for TerminalCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether `cause`'s own condition holds for `state`, ignoring priority.
#[must_use]
pub fn condition_holds(cause: TerminalCause, state: &EpisodeState, arena: &Arena) -> bool {
    match cause {
        TerminalCause::Exited => !arena.contains(state.position),
        TerminalCause::OutOfFuel => state.fuel <= 0.0,
        TerminalCause::Landed => at_target(state),
        TerminalCause::Crashed => arena.touches_surface(state.position),
    }
}

/// The cause that would end the episode in `state`, without side effects.
#[must_use]
pub fn classify(state: &EpisodeState, arena: &Arena) -> Option<TerminalCause> {
    TerminalCause::PRIORITY
        .into_iter()
        .find(|&cause| condition_holds(cause, state, arena))
}

/// Decide whether the episode ends and record the cause on `state`.
///
/// A crash pins the probe onto the surface line; velocity is left alone.
pub fn judge(state: &mut EpisodeState, arena: &Arena) -> Option<TerminalCause> {
    let cause = classify(state, arena)?;
    if cause == TerminalCause::Crashed {
        state.position.y = arena.surface_y;
    }
    state.cause = Some(cause);
    Some(cause)
}
