pub mod error;
pub mod math;
pub mod scalar;

pub use error::{KernelError, Result};
pub use scalar::{Quantizer, Rational, Scalar, Sign};

/// Scalar representation selected at build time.
#[cfg(feature = "exact-arithmetic")]
pub type Real = Rational;

/// Scalar representation selected at build time.
#[cfg(not(feature = "exact-arithmetic"))]
pub type Real = f64;
