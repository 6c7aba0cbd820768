//! Landing pad layout and per-episode start/target selection.

use crate::error::ConfigError;

/// Upper bound on the pad row, checked before anything is allocated.
pub const MAX_PAD_COUNT: usize = 1024;

/// A fixed row of pads along the surface plus the seeded picker that chooses
/// a launch pad and a different target pad for each episode.
pub struct SceneLayoutGenerator {
    pads: Vec<f64>,
    rng: fastrand::Rng,
}

impl SceneLayoutGenerator {
    /// # Errors
    ///
    /// See [`SceneLayoutGenerator::check_row`].
    pub fn new(pad_stride: f64, pad_count: usize, seed: u64) -> Result<Self, ConfigError> {
        Self::check_row(pad_stride, pad_count)?;
        Ok(Self {
            pads: Self::layout(pad_stride, pad_count),
            rng: fastrand::Rng::with_seed(seed),
        })
    }

    /// Validate a pad row without building it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TooFewPads`] for fewer than two pads,
    /// [`ConfigError::TooManyPads`] above [`MAX_PAD_COUNT`] and
    /// [`ConfigError::InvalidPadStride`] for a stride that is not a positive
    /// finite number.
    pub fn check_row(pad_stride: f64, pad_count: usize) -> Result<(), ConfigError> {
        if pad_count < 2 {
            return Err(ConfigError::TooFewPads(pad_count));
        }
        if pad_count > MAX_PAD_COUNT {
            return Err(ConfigError::TooManyPads {
                count: pad_count,
                max: MAX_PAD_COUNT,
            });
        }
        if !pad_stride.is_finite() || pad_stride <= 0.0 {
            return Err(ConfigError::InvalidPadStride(pad_stride));
        }
        Ok(())
    }

    /// Centre of the rightmost pad of a row, computed without allocating.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn outermost_pad(pad_stride: f64, pad_count: usize) -> f64 {
        (pad_count as f64 - 0.5) * pad_stride
    }

    /// Pad centres, left to right. The first one sits half a stride in from
    /// the left edge.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn layout(pad_stride: f64, pad_count: usize) -> Vec<f64> {
        (0..pad_count)
            .map(|i| (i as f64 + 0.5) * pad_stride)
            .collect()
    }

    #[must_use]
    pub fn pads(&self) -> &[f64] {
        &self.pads
    }

    /// Restart the pick sequence from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.rng.seed(seed);
    }

    /// Indices of a uniformly chosen launch pad and a uniformly chosen,
    /// different target pad.
    pub fn pick_indices(&mut self) -> (usize, usize) {
        let n = self.pads.len();
        let start = self.rng.usize(..n);
        // draw from the n - 1 remaining pads and step over the launch pad
        let mut target = self.rng.usize(..n - 1);
        if target >= start {
            target += 1;
        }
        (start, target)
    }

    /// Horizontal offsets of the launch and target pads, never equal.
    pub fn pick_start_and_target(&mut self) -> (f64, f64) {
        let (start, target) = self.pick_indices();
        (self.pads[start], self.pads[target])
    }
}
