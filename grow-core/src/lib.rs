//! Core growth library for disk-confined branching trees.
//!
//! Main components:
//! - [`geometry`] — orientation, segment-intersection and disk predicates.
//! - [`branch`] — a single directed segment and its candidate children.
//! - [`config`] — growth distributions and the disk radius.
//! - [`sampler`] — injectable sources of per-proposal growth samples.
//! - [`tree`] — the branch collection and its growth step.
//! - [`driver`] — budgeted outer loop around [`tree::Tree::grow`].
//! - [`error`] — caller-contract violations.
//! - [`types`] — shared type aliases and IDs.

pub mod branch;
pub mod config;
pub mod driver;
pub mod error;
pub mod geometry;
pub mod sampler;
pub mod tree;
pub mod types;

pub use error::{Error, Result};
