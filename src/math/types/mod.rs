// src/math/types/mod.rs
pub mod area;
pub mod point;

pub use area::*;
pub use point::*;

// Re-export häufig verwendete externe Typen
pub use bevy::math::Vec2;
pub use spade::Point2;

pub type SpadePoint = Point2<f64>;

/// Konvertiert eine Punktmenge in Spade-Punkte für die nachgelagerte Delaunay-/Voronoi-Stufe.
pub fn to_spade_points(points: &[Point]) -> Vec<SpadePoint> {
    points.iter().map(|&p| SpadePoint::from(p)).collect()
}
