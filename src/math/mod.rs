pub mod bounding_box;
pub mod intersect_2d;
pub mod intersect_3d;
pub mod matrix;
pub mod polygon_2d;
pub mod polygon_3d;
pub mod predicates;
pub mod vector;

pub use bounding_box::BoundingBox;
pub use matrix::Matrix;
pub use vector::{
    compwise_max, compwise_min, cross_product, dot_product, length, normalize, outer_product,
    squared_length, Vector, Vector2, Vector3,
};
