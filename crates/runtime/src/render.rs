use rl::{Renderer, Snapshot};
use tracing::debug;

/// Text renderer: emits one `debug!` event per `every` steps. With `every`
/// set to zero it only counts frames.
#[derive(Debug, Default)]
pub struct LogRenderer {
    every: u64,
    frames: u64,
}

impl LogRenderer {
    #[must_use]
    pub fn new(every: u64) -> Self {
        Self { every, frames: 0 }
    }

    /// Snapshots seen so far, across episodes.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for LogRenderer {
    fn draw(&mut self, snapshot: &Snapshot) {
        self.frames += 1;
        if self.every == 0 || snapshot.steps % self.every != 0 {
            return;
        }
        debug!(
            step = snapshot.steps,
            x = snapshot.position.x,
            y = snapshot.position.y,
            vx = snapshot.velocity.x,
            vy = snapshot.velocity.y,
            fuel = snapshot.fuel,
            distance = snapshot.position.distance(snapshot.target),
            "probe"
        );
    }
}
