//! Sources of the random parameters consumed by [`crate::tree::Tree::grow`].
//!
//! Growth draws one [`GrowthSample`] per candidate parent. Keeping the
//! source behind [`SampleSource`] lets callers own the RNG (and its seed)
//! explicitly, or script the samples outright.

use rand::Rng;
use rand::distr::{Distribution, Uniform};
use rand_distr::Normal;

use crate::config::Config;
use crate::error::{Error, Result};

/// Parameters for one proposed child.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GrowthSample {
    /// Signed turn from the parent's heading, in radians.
    pub angle_offset: f64,
    pub length: f64,
    /// Attachment position along the parent, in `(0, 1]`.
    pub fraction: f64,
}

/// Anything that can hand out growth samples.
pub trait SampleSource {
    fn next_sample(&mut self) -> GrowthSample;
}

/// Draws samples from the distributions in a [`Config`].
#[derive(Debug, Clone)]
pub struct RandomSampler<R> {
    rng: R,
    angle: Normal<f64>,
    angle_min: f64,
    angle_max: f64,
    length: Uniform<f64>,
    split: Uniform<f64>,
}

impl<R: Rng> RandomSampler<R> {
    /// Builds a sampler for `cfg` driven by `rng`.
    ///
    /// ### Errors
    /// [`Error::InvalidConfig`] if `cfg` fails [`Config::validate`].
    pub fn new(cfg: &Config, rng: R) -> Result<Self> {
        cfg.validate()?;

        let angle = Normal::new(cfg.angle.mean, cfg.angle.std_dev)
            .map_err(|e| Error::invalid_config(format!("angle distribution: {e}")))?;
        let length = Uniform::new_inclusive(cfg.length.min, cfg.length.max)
            .map_err(|e| Error::invalid_config(format!("length distribution: {e}")))?;
        let split = Uniform::new_inclusive(cfg.split.min, cfg.split.max)
            .map_err(|e| Error::invalid_config(format!("split distribution: {e}")))?;

        Ok(Self {
            rng,
            angle,
            angle_min: cfg.angle.min,
            angle_max: cfg.angle.max,
            length,
            split,
        })
    }

    /// Signed turn: clamped normal magnitude, fair-coin sign.
    pub fn sample_angle(&mut self) -> f64 {
        let sign = if self.rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let magnitude = self
            .angle
            .sample(&mut self.rng)
            .clamp(self.angle_min, self.angle_max);
        sign * magnitude
    }

    pub fn sample_length(&mut self) -> f64 {
        self.length.sample(&mut self.rng)
    }

    pub fn sample_fraction(&mut self) -> f64 {
        self.split.sample(&mut self.rng)
    }
}

impl<R: Rng> SampleSource for RandomSampler<R> {
    fn next_sample(&mut self) -> GrowthSample {
        GrowthSample {
            angle_offset: self.sample_angle(),
            length: self.sample_length(),
            fraction: self.sample_fraction(),
        }
    }
}

/// Replays a fixed list of samples, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct SequenceSampler {
    samples: Vec<GrowthSample>,
    next: usize,
}

impl SequenceSampler {
    /// ### Panics
    /// Panics if `samples` is empty.
    pub fn new(samples: Vec<GrowthSample>) -> Self {
        assert!(!samples.is_empty(), "SequenceSampler needs at least one sample");
        Self { samples, next: 0 }
    }

    /// Number of samples handed out so far.
    pub fn drawn(&self) -> usize {
        self.next
    }
}

impl SampleSource for SequenceSampler {
    fn next_sample(&mut self) -> GrowthSample {
        let s = self.samples[self.next % self.samples.len()];
        self.next += 1;
        s
    }
}
