// src/math/point_distribution/mod.rs

// Deklaration der verschiedenen Punktverteilungs-Methoden/Module
pub mod seed_points;

// Re-Exporte der wichtigsten Elemente aus den Untermodulen
pub use self::seed_points::{
    GenerationSettings, // Konfiguration für einen Generierungsaufruf
    PointAlgorithm,
    PointGenerator,
    PointSet,
};
