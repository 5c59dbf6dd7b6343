use std::fmt;
use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

use crate::scalar::{self, Scalar};
use num_traits::Zero;

use super::Matrix;

/// Fixed-cardinality tuple of scalars with bounds-checked indexing.
pub trait Vector:
    Clone
    + PartialEq
    + fmt::Debug
    + Index<usize, Output = Self::Element>
    + IndexMut<usize>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Self::Element, Output = Self>
    + Div<Self::Element, Output = Self>
{
    type Element: Scalar;

    /// Number of components.
    const CARDINALITY: usize;

    /// Vector with every component set to `value`.
    fn splat(value: Self::Element) -> Self;
}

/// 2D vector or point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vector2<S> {
    pub x: S,
    pub y: S,
}

impl<S: Scalar> Vector2<S> {
    #[must_use]
    pub fn new(x: S, y: S) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn zero() -> Self {
        Self::new(S::zero(), S::zero())
    }

    /// Lifts this vector into 3D with the given `z`.
    #[must_use]
    pub fn extend(self, z: S) -> Vector3<S> {
        Vector3::new(self.x, self.y, z)
    }
}

impl<S: Scalar> Vector for Vector2<S> {
    type Element = S;
    const CARDINALITY: usize = 2;

    fn splat(value: S) -> Self {
        Self::new(value.clone(), value)
    }
}

impl<S> Index<usize> for Vector2<S> {
    type Output = S;

    fn index(&self, index: usize) -> &S {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("index {index} out of bounds for Vector2"),
        }
    }
}

impl<S> IndexMut<usize> for Vector2<S> {
    fn index_mut(&mut self, index: usize) -> &mut S {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("index {index} out of bounds for Vector2"),
        }
    }
}

/// 3D vector or point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vector3<S> {
    pub x: S,
    pub y: S,
    pub z: S,
}

impl<S: Scalar> Vector3<S> {
    #[must_use]
    pub fn new(x: S, y: S, z: S) -> Self {
        Self { x, y, z }
    }

    #[must_use]
    pub fn zero() -> Self {
        Self::new(S::zero(), S::zero(), S::zero())
    }

    /// The `(x, y)` part of this vector.
    #[must_use]
    pub fn xy(&self) -> Vector2<S> {
        Vector2::new(self.x.clone(), self.y.clone())
    }

    #[must_use]
    pub fn cross(&self, other: &Self) -> Self {
        cross_product(self, other)
    }

    #[must_use]
    pub fn dot(&self, other: &Self) -> S {
        dot_product(self, other)
    }
}

impl<S: Scalar> Vector for Vector3<S> {
    type Element = S;
    const CARDINALITY: usize = 3;

    fn splat(value: S) -> Self {
        Self::new(value.clone(), value.clone(), value)
    }
}

impl<S> Index<usize> for Vector3<S> {
    type Output = S;

    fn index(&self, index: usize) -> &S {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("index {index} out of bounds for Vector3"),
        }
    }
}

impl<S> IndexMut<usize> for Vector3<S> {
    fn index_mut(&mut self, index: usize) -> &mut S {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("index {index} out of bounds for Vector3"),
        }
    }
}

macro_rules! impl_vector_ops {
    ($ty:ident { $($field:ident),+ }) => {
        impl<S: Scalar> Add for $ty<S> {
            type Output = Self;

            fn add(self, rhs: Self) -> Self {
                Self { $($field: self.$field + rhs.$field),+ }
            }
        }

        impl<S: Scalar> Add for &$ty<S> {
            type Output = $ty<S>;

            fn add(self, rhs: Self) -> $ty<S> {
                $ty { $($field: self.$field.clone() + rhs.$field.clone()),+ }
            }
        }

        impl<S: Scalar> Sub for $ty<S> {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self {
                Self { $($field: self.$field - rhs.$field),+ }
            }
        }

        impl<S: Scalar> Sub for &$ty<S> {
            type Output = $ty<S>;

            fn sub(self, rhs: Self) -> $ty<S> {
                $ty { $($field: self.$field.clone() - rhs.$field.clone()),+ }
            }
        }

        impl<S: Scalar> Mul<S> for $ty<S> {
            type Output = Self;

            fn mul(self, rhs: S) -> Self {
                Self { $($field: self.$field * rhs.clone()),+ }
            }
        }

        impl<S: Scalar> Div<S> for $ty<S> {
            type Output = Self;

            fn div(self, rhs: S) -> Self {
                Self { $($field: self.$field / rhs.clone()),+ }
            }
        }

        impl<S: Scalar> Neg for $ty<S> {
            type Output = Self;

            fn neg(self) -> Self {
                Self { $($field: -self.$field),+ }
            }
        }
    };
}

impl_vector_ops!(Vector2 { x, y });
impl_vector_ops!(Vector3 { x, y, z });

impl<S: fmt::Display> fmt::Display for Vector2<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<S: fmt::Display> fmt::Display for Vector3<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl From<nalgebra::Point2<f64>> for Vector2<f64> {
    fn from(p: nalgebra::Point2<f64>) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Vector2<f64>> for nalgebra::Point2<f64> {
    fn from(v: Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<nalgebra::Vector2<f64>> for Vector2<f64> {
    fn from(v: nalgebra::Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2<f64>> for nalgebra::Vector2<f64> {
    fn from(v: Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<nalgebra::Point3<f64>> for Vector3<f64> {
    fn from(p: nalgebra::Point3<f64>) -> Self {
        Self::new(p.x, p.y, p.z)
    }
}

impl From<Vector3<f64>> for nalgebra::Point3<f64> {
    fn from(v: Vector3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<nalgebra::Vector3<f64>> for Vector3<f64> {
    fn from(v: nalgebra::Vector3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector3<f64>> for nalgebra::Vector3<f64> {
    fn from(v: Vector3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

/// Componentwise minimum.
#[must_use]
pub fn compwise_min<V: Vector>(a: &V, b: &V) -> V {
    let mut out = a.clone();
    for i in 0..V::CARDINALITY {
        out[i] = scalar::min(&a[i], &b[i]);
    }
    out
}

/// Componentwise maximum.
#[must_use]
pub fn compwise_max<V: Vector>(a: &V, b: &V) -> V {
    let mut out = a.clone();
    for i in 0..V::CARDINALITY {
        out[i] = scalar::max(&a[i], &b[i]);
    }
    out
}

#[must_use]
pub fn cross_product<S: Scalar>(a: &Vector3<S>, b: &Vector3<S>) -> Vector3<S> {
    Vector3::new(
        a.y.clone() * b.z.clone() - a.z.clone() * b.y.clone(),
        a.z.clone() * b.x.clone() - a.x.clone() * b.z.clone(),
        a.x.clone() * b.y.clone() - a.y.clone() * b.x.clone(),
    )
}

#[must_use]
pub fn dot_product<V: Vector>(a: &V, b: &V) -> V::Element {
    (0..V::CARDINALITY).fold(V::Element::zero(), |acc, i| {
        acc + a[i].clone() * b[i].clone()
    })
}

/// `a * b^T` as a square matrix.
#[must_use]
pub fn outer_product<V: Vector>(a: &V, b: &V) -> Matrix<V::Element> {
    let n = V::CARDINALITY;
    let mut out = Matrix::new(n, n);
    for row in 0..n {
        for col in 0..n {
            out[(row, col)] = a[row].clone() * b[col].clone();
        }
    }
    out
}

#[must_use]
pub fn squared_length<V: Vector>(v: &V) -> V::Element {
    dot_product(v, v)
}

/// Euclidean length. Under exact arithmetic the square root is taken in
/// floating point, so the result is approximate.
#[must_use]
pub fn length<V: Vector>(v: &V) -> V::Element {
    squared_length(v).sqrt()
}

/// `v / length(v)`. The zero vector is a precondition violation.
#[must_use]
pub fn normalize<V: Vector>(v: &V) -> V {
    v.clone() / length(v)
}
