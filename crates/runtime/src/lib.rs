//! # Lander Runtime
//!
//! Headless driver for the lunar lander environment. Loads an
//! [`rl::EnvConfig`], flies a number of episodes with one of the built-in
//! policies and reports how they ended. The `lander` binary is a thin wrapper
//! around [`app::run`].

pub mod app;
pub mod render;
