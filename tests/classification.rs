#![allow(clippy::unwrap_used)]

mod common;

use common::{grid_point_2d, init_tracing};
use cutkernel::math::intersect_2d::{compute_segment_intersection, SegmentIntersection};
use cutkernel::math::intersect_3d::{segment_plane_intersection, segment_plane_intersection_type};
use cutkernel::math::polygon_2d::{point_in_polygon_2d, PointInPolygon};
use cutkernel::math::polygon_3d::{compute_polygon_plane_coefficients, point_in_polygon_3d};
use cutkernel::math::{BoundingBox, Vector2, Vector3};
use cutkernel::{Rational, Scalar};
use proptest::prelude::*;

fn polygon() -> impl Strategy<Value = Vec<Vector2<f64>>> {
    prop::collection::vec(grid_point_2d(), 3..9)
}

fn exact2(p: &Vector2<f64>) -> Vector2<Rational> {
    Vector2::new(Rational::from_f64(p.x), Rational::from_f64(p.y))
}

fn small_point_3d() -> impl Strategy<Value = Vector3<f64>> {
    (-6_i32..=6, -6_i32..=6, -6_i32..=6)
        .prop_map(|(x, y, z)| Vector3::new(f64::from(x), f64::from(y), f64::from(z)))
}

fn parameters<S: Clone>(hit: &SegmentIntersection<S>) -> Option<(S, S)> {
    match hit {
        SegmentIntersection::Proper { s, t, .. }
        | SegmentIntersection::EndpointTouch { s, t, .. } => Some((s.clone(), t.clone())),
        _ => None,
    }
}

proptest! {
    #[test]
    fn point_in_polygon_ignores_rotation(
        vertices in polygon(),
        q in grid_point_2d(),
        shift in 0_usize..8,
    ) {
        init_tracing();
        let expected = point_in_polygon_2d(&q, &vertices);
        let mut rotated = vertices.clone();
        rotated.rotate_left(shift % vertices.len());
        prop_assert_eq!(point_in_polygon_2d(&q, &rotated), expected);
    }

    #[test]
    fn point_in_polygon_ignores_winding(vertices in polygon(), q in grid_point_2d()) {
        let expected = point_in_polygon_2d(&q, &vertices);
        let mut reversed = vertices.clone();
        reversed.reverse();
        prop_assert_eq!(point_in_polygon_2d(&q, &reversed), expected);
    }

    #[test]
    fn every_vertex_is_on_vertex(vertices in polygon(), pick in 0_usize..8) {
        let q = vertices[pick % vertices.len()];
        prop_assert_eq!(point_in_polygon_2d(&q, &vertices), PointInPolygon::OnVertex);
    }

    #[test]
    fn point_in_polygon_float_matches_exact(vertices in polygon(), q in grid_point_2d()) {
        let exact: Vec<_> = vertices.iter().map(exact2).collect();
        prop_assert_eq!(
            point_in_polygon_2d(&q, &vertices),
            point_in_polygon_2d(&exact2(&q), &exact)
        );
    }

    #[test]
    fn lifted_polygon_classifies_like_its_shadow(
        vertices in polygon(),
        q in grid_point_2d(),
        height in -4_i32..=4,
    ) {
        let z = f64::from(height);
        let mut lifted: Vec<_> = vertices.iter().map(|v| v.extend(z)).collect();
        let mut plane = compute_polygon_plane_coefficients(&lifted);
        prop_assume!(!plane.is_degenerate());
        prop_assert_eq!(plane.dominant_axis, 2);
        // Wind the polygon counter-clockwise about +z so the projection keeps
        // x and y in place.
        if plane.normal.z < 0.0 {
            lifted.reverse();
            plane = compute_polygon_plane_coefficients(&lifted);
        }
        prop_assert_eq!(
            point_in_polygon_3d(&q.extend(z), &lifted, &plane),
            point_in_polygon_2d(&q, &vertices)
        );
    }

    #[test]
    fn disjoint_boxes_mean_disjoint_segments(
        a in grid_point_2d(),
        b in grid_point_2d(),
        c in grid_point_2d(),
        d in grid_point_2d(),
    ) {
        let hit = compute_segment_intersection(&a, &b, &c, &d);
        let first = BoundingBox::from_points([&a, &b]);
        let second = BoundingBox::from_points([&c, &d]);
        if !first.intersects(&second) {
            prop_assert_eq!(hit, SegmentIntersection::Disjoint);
        }
    }

    #[test]
    fn segment_parameters_stay_in_unit_interval(
        a in grid_point_2d(),
        b in grid_point_2d(),
        c in grid_point_2d(),
        d in grid_point_2d(),
    ) {
        let hit = compute_segment_intersection(&a, &b, &c, &d);
        if let Some((s, t)) = parameters(&hit) {
            prop_assert!((0.0..=1.0).contains(&s), "s = {}", s);
            prop_assert!((0.0..=1.0).contains(&t), "t = {}", t);
        }
    }

    #[test]
    fn segment_class_is_symmetric(
        a in grid_point_2d(),
        b in grid_point_2d(),
        c in grid_point_2d(),
        d in grid_point_2d(),
    ) {
        prop_assert_eq!(
            compute_segment_intersection(&a, &b, &c, &d).code(),
            compute_segment_intersection(&c, &d, &a, &b).code()
        );
    }

    #[test]
    fn segment_class_float_matches_exact(
        a in grid_point_2d(),
        b in grid_point_2d(),
        c in grid_point_2d(),
        d in grid_point_2d(),
    ) {
        let float = compute_segment_intersection(&a, &b, &c, &d);
        let exact =
            compute_segment_intersection(&exact2(&a), &exact2(&b), &exact2(&c), &exact2(&d));
        prop_assert_eq!(float.code(), exact.code());
        if let (Some((s, t)), Some((se, te))) = (parameters(&float), parameters(&exact)) {
            prop_assert!((s - se.to_f64()).abs() < 1e-12);
            prop_assert!((t - te.to_f64()).abs() < 1e-12);
        }
    }

    #[test]
    fn segment_plane_type_matches_point_construction(
        a in small_point_3d(),
        b in small_point_3d(),
        c in small_point_3d(),
        q in small_point_3d(),
        r in small_point_3d(),
    ) {
        // Small integer coordinates keep the plane coefficients exact, so
        // both routines see the same plane.
        let triangle = [a, b, c];
        let plane = compute_polygon_plane_coefficients(&triangle);
        prop_assert_eq!(
            segment_plane_intersection_type(&q, &r, &triangle, &plane),
            segment_plane_intersection(&q, &r, &plane).kind()
        );
    }
}
