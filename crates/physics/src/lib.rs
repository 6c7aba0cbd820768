#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Lander Physics
//!
//! Point-mass kinematics for a four-thruster probe flying over a flat lunar
//! surface.
//!
//! This crate is the lowest layer of the lander workspace. It knows nothing
//! about episodes, rewards or pads; it only turns thruster commands into
//! motion and fuel burn.
//!
//! ## Key Components
//!
//! -   **Geometry:** [`Vec2`] and the [`Arena`] rectangle with its surface
//!     line, defined in the [`types`] module.
//! -   **Thrusters:** the fixed thruster-to-axis matrix and the [`Action`]
//!     command vector in [`thrusters`].
//! -   **Integration:** [`integrate`] advances position and velocity with
//!     semi-implicit Euler under constant gravity, see [`integrator`].
//! -   **Fuel:** [`fuel::consume`] bills the commanded thrust.
//!
//! ## Usage
//!
//! ```rust
//! use physics::{integrate, Action, KinematicParams, Vec2};
//!
//! let params = KinematicParams::new(0.05, 1.62, 2.0)?;
//! let (pos, vel) = integrate(Vec2::new(400.0, 120.0), Vec2::ZERO, &Action::IDLE, &params);
//! assert!(vel.y > 0.0 && pos.y > 120.0);
//! # Ok::<(), physics::PhysicsError>(())
//! ```

pub mod error;
pub mod fuel;
pub mod integrator;
pub mod thrusters;
pub mod types;

pub use error::PhysicsError;
pub use integrator::{integrate, KinematicParams};
pub use thrusters::{net_force, Action, Thruster, THRUSTER_COUNT, THRUSTER_MATRIX};
pub use types::{Arena, Vec2};
