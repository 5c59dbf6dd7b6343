#![allow(dead_code)]

use cutkernel::math::{Vector2, Vector3};
use proptest::prelude::*;

/// Installs a WARN-level subscriber; override with `RUST_LOG`, e.g.
/// `RUST_LOG=cutkernel=trace` to watch predicate escalations.
pub fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_test_writer()
        .try_init();
}

/// Points on a coarse quarter-unit grid, so collinear and coincident
/// configurations come up often.
pub fn grid_point_2d() -> impl Strategy<Value = Vector2<f64>> {
    (-12_i32..=12, -12_i32..=12)
        .prop_map(|(x, y)| Vector2::new(f64::from(x) * 0.25, f64::from(y) * 0.25))
}

pub fn grid_point_3d() -> impl Strategy<Value = Vector3<f64>> {
    (-8_i32..=8, -8_i32..=8, -8_i32..=8).prop_map(|(x, y, z)| {
        Vector3::new(f64::from(x) * 0.5, f64::from(y) * 0.5, f64::from(z) * 0.5)
    })
}

pub fn any_point_2d() -> impl Strategy<Value = Vector2<f64>> {
    (-1.0e3_f64..1.0e3, -1.0e3_f64..1.0e3).prop_map(|(x, y)| Vector2::new(x, y))
}

pub fn any_point_3d() -> impl Strategy<Value = Vector3<f64>> {
    (-1.0e3_f64..1.0e3, -1.0e3_f64..1.0e3, -1.0e3_f64..1.0e3)
        .prop_map(|(x, y, z)| Vector3::new(x, y, z))
}
