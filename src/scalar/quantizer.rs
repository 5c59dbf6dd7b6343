use tracing::debug;

use crate::error::{QuantizationError, Result};
use crate::math::{BoundingBox, Vector3};

use super::Rational;

/// Bridge between user coordinates and the exact integer lattice.
///
/// Applied once when vertices are ingested and once when results leave the
/// kernel, never inside predicate loops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantizer {
    multiplier: f64,
}

impl Quantizer {
    /// Creates a quantizer accepting coordinates in `[-multiplier, multiplier]`.
    ///
    /// # Errors
    ///
    /// Returns [`QuantizationError::InvalidMultiplier`] if `multiplier` is not
    /// finite and strictly positive.
    pub fn new(multiplier: f64) -> Result<Self> {
        if !multiplier.is_finite() || multiplier <= 0.0 {
            return Err(QuantizationError::InvalidMultiplier(multiplier).into());
        }
        debug!(multiplier, "configured coordinate quantizer");
        Ok(Self { multiplier })
    }

    /// Creates a quantizer whose multiplier is the largest coordinate
    /// magnitude among `points`.
    ///
    /// # Errors
    ///
    /// Returns an error if `points` is empty, contains a non-finite
    /// coordinate, or only contains the origin.
    pub fn from_extent<'a, I>(points: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Vector3<f64>>,
    {
        let mut bbox = BoundingBox::<Vector3<f64>>::default();
        for point in points {
            for value in [point.x, point.y, point.z] {
                if !value.is_finite() {
                    return Err(QuantizationError::NonFinite(value).into());
                }
            }
            bbox.expand(point);
        }
        if bbox.is_empty() {
            return Err(QuantizationError::InvalidMultiplier(0.0).into());
        }

        let extent = [bbox.minimum(), bbox.maximum()]
            .into_iter()
            .flat_map(|corner| [corner.x, corner.y, corner.z])
            .fold(0.0_f64, |acc, value| acc.max(value.abs()));
        Self::new(extent)
    }

    #[must_use]
    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    /// Quantizes a single coordinate.
    ///
    /// # Panics
    ///
    /// Panics if `|d|` exceeds the multiplier.
    #[must_use]
    pub fn quantize(&self, d: f64) -> Rational {
        Rational::quantize(d, self.multiplier)
    }

    /// Quantizes a single coordinate, reporting out-of-range input.
    ///
    /// # Errors
    ///
    /// Returns an error if `d` is not finite or `|d|` exceeds the multiplier.
    pub fn try_quantize(&self, d: f64) -> Result<Rational> {
        if !d.is_finite() {
            return Err(QuantizationError::NonFinite(d).into());
        }
        if d.abs() > self.multiplier {
            return Err(QuantizationError::OutOfRange {
                value: d,
                multiplier: self.multiplier,
            }
            .into());
        }
        Ok(Rational::quantize(d, self.multiplier))
    }

    #[must_use]
    pub fn dequantize(&self, value: &Rational) -> f64 {
        value.dequantize(self.multiplier)
    }

    /// Quantizes every component of a vertex.
    ///
    /// # Errors
    ///
    /// Returns an error if any component is out of range.
    pub fn quantize_point(&self, point: &Vector3<f64>) -> Result<Vector3<Rational>> {
        Ok(Vector3::new(
            self.try_quantize(point.x)?,
            self.try_quantize(point.y)?,
            self.try_quantize(point.z)?,
        ))
    }

    #[must_use]
    pub fn dequantize_point(&self, point: &Vector3<Rational>) -> Vector3<f64> {
        Vector3::new(
            self.dequantize(&point.x),
            self.dequantize(&point.y),
            self.dequantize(&point.z),
        )
    }
}
