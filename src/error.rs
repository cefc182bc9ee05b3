use std::error::Error;
use std::fmt;

/// Custom error type for kernel operation failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KernelError {
    /// The divisor matrix produced a pivot below the configured threshold
    /// during Gauss-Jordan elimination and has no usable inverse.
    Singular,
    /// A flat buffer's length does not match its declared dimensions, or a
    /// dimension is zero.
    InvalidDimensions {
        rows: usize,
        cols: usize,
        len: usize,
    },
    /// Operand shapes are incompatible for the requested operation.
    ShapeMismatch {
        op: &'static str,
        lhs: (usize, usize),
        rhs: (usize, usize),
    },
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            KernelError::Singular => write!(f, "Matrix is not invertible"),
            KernelError::InvalidDimensions { rows, cols, len } => write!(
                f,
                "Invalid shape ({}, {}) for buffer of length {}",
                rows, cols, len
            ),
            KernelError::ShapeMismatch { op, lhs, rhs } => write!(
                f,
                "Incompatible shapes {:?} and {:?} for {}",
                lhs, rhs, op
            ),
        }
    }
}

impl Error for KernelError {}
