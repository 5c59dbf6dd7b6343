use crate::scalar::{self, Scalar};

use super::vector::{compwise_max, compwise_min, Vector};
use super::Vector3;

/// Axis-aligned extents over a vector type.
///
/// A default box is empty: its minimum sits at the upper sentinel and its
/// maximum at the lower one, so the first [`expand`](Self::expand) yields
/// real bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundingBox<V> {
    minimum: V,
    maximum: V,
}

impl<V: Vector> Default for BoundingBox<V> {
    fn default() -> Self {
        let sentinel = V::Element::upper_sentinel();
        Self {
            minimum: V::splat(sentinel.clone()),
            maximum: V::splat(-sentinel),
        }
    }
}

impl<V: Vector> BoundingBox<V> {
    #[must_use]
    pub fn new(minimum: V, maximum: V) -> Self {
        Self { minimum, maximum }
    }

    /// Smallest box containing every point.
    #[must_use]
    pub fn from_points<'a, I>(points: I) -> Self
    where
        I: IntoIterator<Item = &'a V>,
        V: 'a,
    {
        let mut bbox = Self::default();
        for point in points {
            bbox.expand(point);
        }
        bbox
    }

    #[must_use]
    pub fn minimum(&self) -> &V {
        &self.minimum
    }

    #[must_use]
    pub fn maximum(&self) -> &V {
        &self.maximum
    }

    /// `true` until the first point is added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        (0..V::CARDINALITY).any(|i| self.minimum[i] > self.maximum[i])
    }

    pub fn expand(&mut self, point: &V) {
        self.maximum = compwise_max(&self.maximum, point);
        self.minimum = compwise_min(&self.minimum, point);
    }

    pub fn expand_box(&mut self, other: &Self) {
        self.maximum = compwise_max(&self.maximum, &other.maximum);
        self.minimum = compwise_min(&self.minimum, &other.minimum);
    }

    /// Grows every side by `eps`.
    pub fn enlarge(&mut self, eps: &V::Element) {
        for i in 0..V::CARDINALITY {
            self.maximum[i] = self.maximum[i].clone() + eps.clone();
            self.minimum[i] = self.minimum[i].clone() - eps.clone();
        }
    }

    /// Closed containment test.
    #[must_use]
    pub fn contains(&self, point: &V) -> bool {
        (0..V::CARDINALITY).all(|i| self.minimum[i] <= point[i] && point[i] <= self.maximum[i])
    }

    /// Closed overlap test.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        (0..V::CARDINALITY)
            .all(|i| self.minimum[i] <= other.maximum[i] && self.maximum[i] >= other.minimum[i])
    }
}

impl<S: Scalar> BoundingBox<Vector3<S>> {
    #[must_use]
    pub fn surface_area(&self) -> S {
        let d = &self.maximum - &self.minimum;
        S::from_f64(2.0)
            * (d.x.clone() * d.y.clone() + d.x * d.z.clone() + d.y * d.z)
    }

    /// Axis (0, 1 or 2) along which the box is longest.
    #[must_use]
    pub fn maximum_extent(&self) -> usize {
        let d = &self.maximum - &self.minimum;
        if d.x > d.y && d.x > d.z {
            0
        } else if d.y > d.z {
            1
        } else {
            2
        }
    }

    /// Length of the longest side, or zero when empty.
    #[must_use]
    pub fn largest_side(&self) -> S {
        if self.is_empty() {
            return S::zero();
        }
        let d = &self.maximum - &self.minimum;
        scalar::max(&d.x, &scalar::max(&d.y, &d.z))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::math::Vector2;
    use crate::scalar::Rational;

    fn v(x: f64, y: f64, z: f64) -> Vector3<f64> {
        Vector3::new(x, y, z)
    }

    #[test]
    fn default_is_empty_and_first_expand_sets_bounds() {
        let mut bbox = BoundingBox::<Vector3<f64>>::default();
        assert!(bbox.is_empty());
        bbox.expand(&v(1.0, 2.0, 3.0));
        assert!(!bbox.is_empty());
        assert_eq!(bbox.minimum(), &v(1.0, 2.0, 3.0));
        assert_eq!(bbox.maximum(), &v(1.0, 2.0, 3.0));
    }

    #[test]
    fn expand_tracks_extremes() {
        let pts = [v(0.0, 5.0, -1.0), v(2.0, -3.0, 4.0), v(1.0, 1.0, 1.0)];
        let bbox = BoundingBox::from_points(&pts);
        assert_eq!(bbox.minimum(), &v(0.0, -3.0, -1.0));
        assert_eq!(bbox.maximum(), &v(2.0, 5.0, 4.0));
        assert_eq!(bbox.maximum_extent(), 1);
        assert_relative_eq!(bbox.surface_area(), 2.0 * (2.0 * 8.0 + 2.0 * 5.0 + 8.0 * 5.0));
        assert_relative_eq!(bbox.largest_side(), 8.0);
    }

    #[test]
    fn merge_and_enlarge() {
        let mut a = BoundingBox::new(v(0.0, 0.0, 0.0), v(1.0, 1.0, 1.0));
        let b = BoundingBox::new(v(-1.0, 0.5, 0.5), v(0.5, 2.0, 0.5));
        a.expand_box(&b);
        assert_eq!(a.minimum(), &v(-1.0, 0.0, 0.0));
        assert_eq!(a.maximum(), &v(1.0, 2.0, 1.0));
        a.enlarge(&0.5);
        assert_eq!(a.minimum(), &v(-1.5, -0.5, -0.5));
    }

    #[test]
    fn overlap_is_closed() {
        let a = BoundingBox::new(v(0.0, 0.0, 0.0), v(1.0, 1.0, 1.0));
        let touching = BoundingBox::new(v(1.0, 0.0, 0.0), v(2.0, 1.0, 1.0));
        let apart = BoundingBox::new(v(1.5, 0.0, 0.0), v(2.0, 1.0, 1.0));
        assert!(a.intersects(&touching));
        assert!(!a.intersects(&apart));
    }

    #[test]
    fn contains_2d_point() {
        let bbox = BoundingBox::new(Vector2::new(0.0, 0.0), Vector2::new(1.0, 1.0));
        assert!(bbox.contains(&Vector2::new(1.0, 0.5)));
        assert!(!bbox.contains(&Vector2::new(1.1, 0.5)));
    }

    #[test]
    fn exact_boxes_use_finite_sentinels() {
        let mut bbox = BoundingBox::<Vector3<Rational>>::default();
        assert!(bbox.is_empty());
        let p = Vector3::new(Rational::new(1, 3), Rational::from_integer(-2), Rational::from_integer(0));
        bbox.expand(&p);
        assert_eq!(bbox.minimum(), &p);
        assert_eq!(bbox.maximum(), &p);
    }
}
