use crate::branch::Branch;
use crate::error::{Error, Result};
use crate::geometry::{inside_disk, segments_intersect};
use crate::sampler::SampleSource;
use crate::types::BranchId;
use glam::DVec2;

/// A growing set of non-crossing branches confined to a disk.
///
/// Branches are stored in growth order; index `0` is the root. The list
/// only ever grows, and every branch in it satisfies:
///
/// - its tip lies inside or on the disk of radius `disk_radius`;
/// - it does not cross any branch that existed when it was inserted
///   (checked with the new branch as the first segment; touching
///   segments are order-sensitive, see [`crate::geometry`]);
/// - apart from the root, its base is an attachment point of the branch
///   it grew from.
#[derive(Debug, Clone)]
pub struct Tree {
    branches: Vec<Branch>,
    disk_radius: f64,
}

impl Tree {
    /// Creates a tree holding only `root`.
    ///
    /// ### Errors
    /// - [`Error::InvalidConfig`] if `disk_radius` is not positive and finite.
    /// - [`Error::RootOutsideDisk`] if the root's tip is outside the disk.
    pub fn new(root: Branch, disk_radius: f64) -> Result<Self> {
        if !(disk_radius.is_finite() && disk_radius > 0.0) {
            return Err(Error::invalid_config(format!(
                "disk_radius must be positive, got {disk_radius}"
            )));
        }
        let tip = root.tip();
        if !inside_disk(tip, disk_radius) {
            return Err(Error::RootOutsideDisk {
                x: tip.x,
                y: tip.y,
                radius: disk_radius,
            });
        }

        Ok(Self {
            branches: vec![root],
            disk_radius,
        })
    }

    /// Creates a tree whose root runs from the origin straight up to
    /// `(0, length)`.
    pub fn with_vertical_root(length: f64, disk_radius: f64) -> Result<Self> {
        let root = Branch::new(DVec2::ZERO, DVec2::new(0.0, length))?;
        Self::new(root, disk_radius)
    }

    /// All branches in growth order.
    #[inline]
    pub fn branches(&self) -> &[Branch] {
        &self.branches
    }

    #[inline]
    pub fn root(&self) -> &Branch {
        &self.branches[0]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.branches.len()
    }

    /// Always `false`: a tree is never without its root.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }

    #[inline]
    pub fn disk_radius(&self) -> f64 {
        self.disk_radius
    }

    /// Branch ids ordered by ascending child count.
    ///
    /// The sort is stable, so branches with equal counts keep their growth
    /// order. This is the order in which [`Tree::grow`] tries parents.
    pub fn priority_order(&self) -> Vec<BranchId> {
        let mut order: Vec<BranchId> = (0..self.branches.len()).collect();
        order.sort_by_key(|&id| self.branches[id].child_count());
        order
    }

    /// Returns `true` if `candidate` may join the tree: its tip is inside
    /// the disk and it crosses no existing branch.
    pub fn accepts(&self, candidate: &Branch) -> bool {
        inside_disk(candidate.tip(), self.disk_radius) && !self.intersects(candidate)
    }

    /// Returns `true` if `candidate` crosses any branch already in the tree.
    ///
    /// `candidate` is always passed as the first segment to
    /// [`segments_intersect`].
    pub fn intersects(&self, candidate: &Branch) -> bool {
        let (a, b) = (candidate.base(), candidate.tip());
        self.branches
            .iter()
            .any(|other| segments_intersect(a, b, other.base(), other.tip()))
    }

    /// Attempts to add one branch.
    ///
    /// Parents are visited once each in [`Tree::priority_order`]. For each
    /// parent a fresh sample is drawn from `source` and turned into a
    /// candidate via [`Branch::propose_child`]. The first candidate that
    /// [`Tree::accepts`] is appended, its parent's child count is bumped,
    /// and the call returns.
    ///
    /// ### Parameters
    /// - `source` - Supplies one [`crate::sampler::GrowthSample`] per
    ///   parent tried.
    ///
    /// ### Returns
    /// - `Ok(Some(id))` with the id of the new branch.
    /// - `Ok(None)` if every parent was tried and rejected; the tree is
    ///   unchanged. This is expected once the disk fills up.
    ///
    /// ### Errors
    /// Propagates [`Error`] if a sample violates a branch precondition
    /// (for example a fraction outside `(0, 1]` or a zero length).
    pub fn grow(&mut self, source: &mut impl SampleSource) -> Result<Option<BranchId>> {
        // Snapshot: parents added during this call are not tried.
        for parent in self.priority_order() {
            // Fresh sample per parent; a rejected parent is not retried.
            let s = source.next_sample();
            let (base, tip) =
                self.branches[parent].propose_child(s.angle_offset, s.length, s.fraction)?;
            let candidate = Branch::new(base, tip)?;

            // First acceptable candidate wins; at most one branch per call.
            if self.accepts(&candidate) {
                let id = self.branches.len();
                tracing::trace!(id, parent, branch = %candidate, "branch accepted");
                self.branches.push(candidate);
                self.branches[parent].record_child();
                return Ok(Some(id));
            }
        }
        Ok(None)
    }
}
