use thiserror::Error;

/// Top-level error type for the cutting kernel.
///
/// Only construction and ingestion boundaries return errors. Contract
/// violations inside the kernel panic, and geometric degeneracies are
/// reported as classification codes.
#[derive(Debug, Error)]
pub enum KernelError {
    #[error(transparent)]
    Quantization(#[from] QuantizationError),

    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

/// Errors raised while mapping coordinates onto the integer lattice.
#[derive(Debug, Error)]
pub enum QuantizationError {
    #[error("quantization multiplier must be finite and positive, got {0}")]
    InvalidMultiplier(f64),

    #[error("coordinate {value} exceeds quantization multiplier {multiplier}")]
    OutOfRange { value: f64, multiplier: f64 },

    #[error("coordinate is not finite: {0}")]
    NonFinite(f64),
}

/// Errors related to matrix construction and shape checks.
#[derive(Debug, Error)]
pub enum MatrixError {
    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("cannot {op} matrices of shapes {left:?} and {right:?}")]
    ShapeMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },
}

/// Convenience type alias for results using [`KernelError`].
pub type Result<T> = std::result::Result<T, KernelError>;
