use std::fmt;

use crate::error::{Error, Result};
use crate::types::Point;
use glam::DVec2;

/// Fractions above this snap to the tip exactly.
const TIP_SNAP_FRACTION: f64 = 0.99;

/// A directed line segment from `base` to `tip`.
///
/// The heading is derived once at construction. Apart from `child_count`,
/// which the owning [`crate::tree::Tree`] bumps whenever a child is
/// accepted, a branch never changes after it is built.
#[derive(Debug, Clone, PartialEq)]
pub struct Branch {
    base: Point,
    tip: Point,
    heading: f64,
    child_count: u32,
}

impl Branch {
    /// Builds a branch from `base` to `tip`.
    ///
    /// ### Errors
    /// - [`Error::NonFiniteBranch`] if either endpoint has a NaN or
    ///   infinite component.
    /// - [`Error::ZeroLengthBranch`] if `base == tip`.
    pub fn new(base: Point, tip: Point) -> Result<Self> {
        if !base.is_finite() || !tip.is_finite() {
            return Err(Error::NonFiniteBranch);
        }
        if base == tip {
            return Err(Error::ZeroLengthBranch {
                x: base.x,
                y: base.y,
            });
        }

        let d = tip - base;
        Ok(Self {
            base,
            tip,
            heading: d.y.atan2(d.x),
            child_count: 0,
        })
    }

    #[inline]
    pub fn base(&self) -> Point {
        self.base
    }

    #[inline]
    pub fn tip(&self) -> Point {
        self.tip
    }

    /// Angle of `tip - base` in radians, in `(-π, π]`.
    #[inline]
    pub fn heading(&self) -> f64 {
        self.heading
    }

    /// Number of children successfully grown from this branch.
    #[inline]
    pub fn child_count(&self) -> u32 {
        self.child_count
    }

    pub(crate) fn record_child(&mut self) {
        self.child_count += 1;
    }

    /// Returns the point `fraction` of the way from base to tip.
    ///
    /// Fractions above `0.99` return the tip itself, so growth meant to
    /// start at the tip is not displaced by round-off.
    ///
    /// ### Errors
    /// [`Error::InvalidFraction`] unless `fraction` is in `(0, 1]`.
    pub fn attachment_point(&self, fraction: f64) -> Result<Point> {
        if !(fraction > 0.0 && fraction <= 1.0) {
            return Err(Error::InvalidFraction { fraction });
        }
        if fraction > TIP_SNAP_FRACTION {
            return Ok(self.tip);
        }
        Ok(self.base + fraction * (self.tip - self.base))
    }

    /// Proposes a child segment without committing it.
    ///
    /// The child starts at [`Branch::attachment_point`] and points
    /// `angle_offset` radians away from this branch's heading.
    ///
    /// ### Parameters
    /// - `angle_offset` - Signed turn relative to [`Branch::heading`].
    /// - `length` - Length of the proposed child.
    /// - `fraction` - Where along this branch the child attaches.
    ///
    /// ### Returns
    /// The `(base, tip)` pair of the proposed child.
    pub fn propose_child(
        &self,
        angle_offset: f64,
        length: f64,
        fraction: f64,
    ) -> Result<(Point, Point)> {
        let new_base = self.attachment_point(fraction)?;
        let angle = self.heading + angle_offset;
        let new_tip = new_base + DVec2::new(angle.cos(), angle.sin()) * length;
        Ok((new_base, new_tip))
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) - ({}, {})",
            self.base.x, self.base.y, self.tip.x, self.tip.y
        )
    }
}
