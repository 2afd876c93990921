// ./src/lib.rs

// Eigene Module deklarieren
pub mod debug;
pub mod math;

pub use math::point_distribution::seed_points::{
    GenerationSettings, PointAlgorithm, PointGenerationPlugin, PointGenerator, PointSet,
};
pub use math::{MathError, MathResult, Point};
