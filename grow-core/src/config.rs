use std::f64::consts::PI;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Distribution of the turn between a parent's heading and a child's.
///
/// The magnitude is drawn from `Normal(mean, std_dev)` and clamped to
/// `[min, max]`; the sign is a fair coin flip. All values are radians.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AngleDistribution {
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl Default for AngleDistribution {
    fn default() -> Self {
        Self {
            mean: PI / 6.0,
            std_dev: PI / 24.0,
            min: PI / 12.0,
            max: PI / 4.0,
        }
    }
}

/// Closed interval sampled uniformly.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct UniformRange {
    pub min: f64,
    pub max: f64,
}

impl UniformRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    fn check(&self, name: &str) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(Error::invalid_config(format!("{name} bounds must be finite")));
        }
        if self.min > self.max {
            return Err(Error::invalid_config(format!(
                "{name} min {} exceeds max {}",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Generator parameters for tree growth.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Radius of the origin-centered disk every tip must stay inside.
    pub disk_radius: f64,
    /// Turn applied to a child relative to its parent's heading.
    pub angle: AngleDistribution,
    /// Length of each new branch.
    pub length: UniformRange,
    /// Where along the parent a child attaches, as a fraction of its length.
    pub split: UniformRange,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            disk_radius: 5.0,
            angle: AngleDistribution::default(),
            length: UniformRange::new(0.5, 1.0),
            split: UniformRange::new(0.3, 1.0),
        }
    }
}

impl Config {
    /// Checks that every distribution can be sampled and yields usable
    /// geometry.
    ///
    /// ### Errors
    /// [`Error::InvalidConfig`] describing the first offending field.
    pub fn validate(&self) -> Result<()> {
        if !(self.disk_radius.is_finite() && self.disk_radius > 0.0) {
            return Err(Error::invalid_config(format!(
                "disk_radius must be positive, got {}",
                self.disk_radius
            )));
        }

        let a = &self.angle;
        if !a.mean.is_finite() || !a.std_dev.is_finite() || a.std_dev < 0.0 {
            return Err(Error::invalid_config(
                "angle mean must be finite and std_dev non-negative",
            ));
        }
        UniformRange::new(a.min, a.max).check("angle")?;

        self.length.check("length")?;
        if self.length.min <= 0.0 {
            return Err(Error::invalid_config("length min must be positive"));
        }

        self.split.check("split")?;
        if self.split.min <= 0.0 || self.split.max > 1.0 {
            return Err(Error::invalid_config("split must lie within (0, 1]"));
        }
        Ok(())
    }

    /// Draws the root branch length from the `length` range.
    ///
    /// ### Panics
    /// Panics if `length.min > length.max`; call [`Config::validate`] first.
    pub fn sample_root_length(&self, rng: &mut impl Rng) -> f64 {
        rng.random_range(self.length.min..=self.length.max)
    }
}
