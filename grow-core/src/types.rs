use glam::DVec2;

/// Identifier for a branch in a [`crate::tree::Tree`].
///
/// This is an index into the tree's branch list, and is only meaningful
/// within the lifetime of a given `Tree` instance. Ids are assigned in
/// growth order, so the root is always `0`.
pub type BranchId = usize;

/// A position in the plane. The bounding disk is centered at the origin.
pub type Point = DVec2;
