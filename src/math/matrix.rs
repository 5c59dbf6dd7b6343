use std::fmt;
use std::ops::{Div, Index, IndexMut, Mul, Sub};

use nalgebra::{DMatrix, DVector};

use crate::error::{MatrixError, Result};
use crate::scalar::Scalar;

use super::{Vector2, Vector3};

/// Dense matrix with a shape fixed at construction, backed by
/// [`nalgebra::DMatrix`] so it works for exact scalars as well as `f64`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<S: Scalar>(DMatrix<S>);

impl<S: Scalar> Matrix<S> {
    /// Zero-filled `rows x cols` matrix.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self(DMatrix::zeros(rows, cols))
    }

    /// Builds a matrix from equally sized rows.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::RaggedRows`] if any row differs in length from
    /// the first.
    pub fn from_rows(rows: Vec<Vec<S>>) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != cols)
        {
            return Err(MatrixError::RaggedRows {
                row,
                found,
                expected: cols,
            }
            .into());
        }
        let n_rows = rows.len();
        Ok(Self(DMatrix::from_row_iterator(
            n_rows,
            cols,
            rows.into_iter().flatten(),
        )))
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.0.nrows()
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.0.ncols()
    }

    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        self.0.shape()
    }

    /// Underlying nalgebra matrix.
    #[must_use]
    pub fn as_dmatrix(&self) -> &DMatrix<S> {
        &self.0
    }

    /// Matrix product, reporting incompatible shapes instead of panicking.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::ShapeMismatch`] if `self.cols() != other.rows()`.
    pub fn try_mul(&self, other: &Self) -> Result<Self> {
        if self.cols() != other.rows() {
            return Err(MatrixError::ShapeMismatch {
                op: "multiply",
                left: self.shape(),
                right: other.shape(),
            }
            .into());
        }
        Ok(Self(&self.0 * &other.0))
    }

    /// Multiplies a 2x3 matrix by a 3D column vector.
    ///
    /// # Panics
    ///
    /// Panics if the matrix is not 2x3.
    #[must_use]
    pub fn transform_3_to_2(&self, v: &Vector3<S>) -> Vector2<S> {
        assert!(
            self.shape() == (2, 3),
            "expected a 2x3 matrix, got {}x{}",
            self.rows(),
            self.cols()
        );

        let column = DVector::from_vec(vec![v.x.clone(), v.y.clone(), v.z.clone()]);
        let image = &self.0 * &column;
        Vector2::new(image[0].clone(), image[1].clone())
    }

    fn check_bounds(&self, row: usize, col: usize) {
        assert!(
            row < self.rows() && col < self.cols(),
            "entry ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows(),
            self.cols()
        );
    }
}

impl<S: Scalar> From<DMatrix<S>> for Matrix<S> {
    fn from(inner: DMatrix<S>) -> Self {
        Self(inner)
    }
}

impl<S: Scalar> Index<(usize, usize)> for Matrix<S> {
    type Output = S;

    fn index(&self, (row, col): (usize, usize)) -> &S {
        self.check_bounds(row, col);
        &self.0[(row, col)]
    }
}

impl<S: Scalar> IndexMut<(usize, usize)> for Matrix<S> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut S {
        self.check_bounds(row, col);
        &mut self.0[(row, col)]
    }
}

impl<S: Scalar> Mul for &Matrix<S> {
    type Output = Matrix<S>;

    /// # Panics
    ///
    /// Panics on incompatible shapes; see [`Matrix::try_mul`].
    fn mul(self, rhs: Self) -> Matrix<S> {
        match self.try_mul(rhs) {
            Ok(m) => m,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<S: Scalar> Mul<S> for &Matrix<S> {
    type Output = Matrix<S>;

    fn mul(self, rhs: S) -> Matrix<S> {
        Matrix(&self.0 * rhs)
    }
}

impl<S: Scalar> Div<S> for &Matrix<S> {
    type Output = Matrix<S>;

    fn div(self, rhs: S) -> Matrix<S> {
        Matrix(&self.0 / rhs)
    }
}

impl<S: Scalar> Sub for &Matrix<S> {
    type Output = Matrix<S>;

    fn sub(self, rhs: Self) -> Matrix<S> {
        assert!(
            self.shape() == rhs.shape(),
            "cannot subtract a {:?} matrix from a {:?} matrix",
            rhs.shape(),
            self.shape()
        );
        Matrix(&self.0 - &rhs.0)
    }
}

impl<S: Scalar> Mul<&Vector3<S>> for &Matrix<S> {
    type Output = Vector2<S>;

    fn mul(self, rhs: &Vector3<S>) -> Vector2<S> {
        self.transform_3_to_2(rhs)
    }
}

impl<S: Scalar> fmt::Display for Matrix<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows() {
            for col in 0..self.cols() {
                write!(f, "{}, ", self.0[(row, col)])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::error::KernelError;
    use crate::scalar::Rational;

    fn m(rows: &[&[f64]]) -> Matrix<f64> {
        Matrix::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    #[test]
    fn new_is_zero_filled() {
        let a = Matrix::<f64>::new(2, 3);
        assert_eq!(a.shape(), (2, 3));
        assert_relative_eq!(a[(1, 2)], 0.0);
    }

    #[test]
    fn product_of_compatible_shapes() {
        let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let b = m(&[&[5.0], &[6.0]]);
        let c = &a * &b;
        assert_eq!(c.shape(), (2, 1));
        assert_relative_eq!(c[(0, 0)], 17.0);
        assert_relative_eq!(c[(1, 0)], 39.0);
    }

    #[test]
    fn try_mul_reports_mismatch() {
        let a = m(&[&[1.0, 2.0]]);
        let b = m(&[&[1.0, 2.0]]);
        assert!(matches!(
            a.try_mul(&b),
            Err(KernelError::Matrix(MatrixError::ShapeMismatch { .. }))
        ));
    }

    #[test]
    #[should_panic(expected = "cannot multiply")]
    fn operator_mul_panics_on_mismatch() {
        let a = m(&[&[1.0, 2.0]]);
        let _ = &a * &a;
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let rows = vec![vec![1.0, 2.0], vec![3.0]];
        assert!(matches!(
            Matrix::from_rows(rows),
            Err(KernelError::Matrix(MatrixError::RaggedRows { row: 1, .. }))
        ));
    }

    #[test]
    fn scalar_ops_and_subtract() {
        let a = m(&[&[2.0, 4.0], &[6.0, 8.0]]);
        let half = &a / 2.0;
        assert_relative_eq!(half[(1, 1)], 4.0);
        let twice = &a * 2.0;
        assert_relative_eq!(twice[(0, 1)], 8.0);
        let diff = &twice - &a;
        assert_eq!(diff, a);
    }

    #[test]
    #[should_panic(expected = "cannot subtract")]
    fn subtract_requires_same_shape() {
        let _ = &Matrix::<f64>::new(2, 2) - &Matrix::<f64>::new(2, 3);
    }

    #[test]
    fn two_by_three_projects_vector() {
        let select_xz = m(&[&[1.0, 0.0, 0.0], &[0.0, 0.0, 1.0]]);
        let p = &select_xz * &Vector3::new(7.0, 8.0, 9.0);
        assert_eq!(p, Vector2::new(7.0, 9.0));
    }

    #[test]
    fn exact_entries() {
        let mut a = Matrix::<Rational>::new(1, 1);
        a[(0, 0)] = Rational::new(1, 3);
        let b = &a * Rational::from_integer(3);
        assert_eq!(b[(0, 0)], Rational::from_integer(1));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn entry_outside_shape_panics() {
        let a = Matrix::<f64>::new(2, 2);
        let _ = a[(2, 0)];
    }

    #[test]
    fn wraps_nalgebra_matrices() {
        let inner = nalgebra::DMatrix::from_row_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let a = Matrix::from(inner.clone());
        assert_eq!(a, m(&[&[1.0, 2.0], &[3.0, 4.0]]));
        assert_eq!(a.as_dmatrix(), &inner);
    }

    #[test]
    fn exact_product_matches_hand_result() {
        let third = Rational::new(1, 3);
        let a = Matrix::from_rows(vec![
            vec![third.clone(), Rational::from_integer(1)],
            vec![Rational::from_integer(0), third.clone()],
        ])
        .unwrap();
        let b = &a * &a;
        assert_eq!(b[(0, 0)], Rational::new(1, 9));
        assert_eq!(b[(0, 1)], Rational::new(2, 3));
        assert_eq!(b[(1, 0)], Rational::from_integer(0));
        assert_eq!(b[(1, 1)], Rational::new(1, 9));
    }

    #[test]
    fn display_lists_rows() {
        let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        assert_eq!(a.to_string(), "1, 2, \n3, 4, \n");
    }
}
