use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Caller-contract violations.
///
/// A rejected growth proposal is never an error; these variants only
/// describe inputs that would otherwise produce degenerate geometry.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("branch has zero length: base and tip are both ({x}, {y})")]
    ZeroLengthBranch { x: f64, y: f64 },

    #[error("branch endpoint is not finite")]
    NonFiniteBranch,

    #[error("attachment fraction must be in (0, 1], got {fraction}")]
    InvalidFraction { fraction: f64 },

    #[error("root tip ({x}, {y}) lies outside the disk of radius {radius}")]
    RootOutsideDisk { x: f64, y: f64, radius: f64 },

    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("growth budget needs a duration or an iteration limit")]
    UnboundedBudget,
}

impl Error {
    #[must_use]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}
