// src/math/point_distribution/seed_points/mod.rs

// Saatpunkte für die Voronoi-basierte Stadtgenerierung
pub mod config;
pub mod events;
pub mod generator;
pub mod plugin;
pub mod resource;
pub mod strategies;

pub use self::config::{GenerationSettings, PointAlgorithm};
pub use self::events::RegeneratePointsEvent;
pub use self::generator::{PointGenerator, PointSet, boundary_anchors};
pub use self::plugin::PointGenerationPlugin;
pub use self::resource::GeneratedPoints;
pub use self::strategies::{CityLayers, UNIFORM_GRANULARITY, UniformGrid};
