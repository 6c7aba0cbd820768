use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PhysicsError {
    #[error("timestep must be positive and finite, got {0}")]
    NonPositiveTimestep(f64),
    #[error("{name} must be finite, got {value}")]
    NonFiniteParameter { name: &'static str, value: f64 },
    #[error("arena must have positive extents, got {width}x{height}")]
    DegenerateArena { width: f64, height: f64 },
    #[error("surface line {surface_y} lies outside the arena height {height}")]
    SurfaceOutsideArena { surface_y: f64, height: f64 },
}
