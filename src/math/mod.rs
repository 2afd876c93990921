pub mod algorithms;
pub mod error;
pub mod geometry;
pub mod point_distribution;
pub mod probability;
pub mod types;
pub mod utils;

// Re-exports für einfache Verwendung
pub use error::{MathError, MathResult};
pub use types::*;

// Öffentliche API
pub mod prelude {
    pub use super::{
        algorithms::dedup::filter_duplicates,
        error::{MathError, MathResult},
        geometry::sampling::sample_point_in_circle,
        point_distribution::seed_points::{
            GenerationSettings, PointAlgorithm, PointGenerator, PointSet, boundary_anchors,
        },
        probability::{RandomSource, SeededRandom},
        types::*,
    };
}
