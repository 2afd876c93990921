// src/math/geometry/mod.rs
pub mod sampling;

pub use sampling::sample_point_in_circle;
