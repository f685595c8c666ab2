//! Error types for the helper surface.
//!
//! The estimator itself never fails: degenerate inputs yield `NaN`.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ChatterjeeError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatterjeeError {
    /// X and Y columns of different lengths cannot be paired.
    #[error("column length mismatch: {x_len} x values, {y_len} y values")]
    LengthMismatch { x_len: usize, y_len: usize },
}
