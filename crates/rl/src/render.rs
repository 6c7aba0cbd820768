use crate::state::Snapshot;

/// Presentation layer seam. A renderer is owned by whoever drives the
/// episode and only ever sees read-only snapshots; the environment holds no
/// handle to it.
pub trait Renderer {
    fn draw(&mut self, snapshot: &Snapshot);
}

/// Keeps every snapshot it is given. Handy for replays and assertions.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub frames: Vec<Snapshot>,
}

impl Renderer for RecordingRenderer {
    fn draw(&mut self, snapshot: &Snapshot) {
        self.frames.push(*snapshot);
    }
}
