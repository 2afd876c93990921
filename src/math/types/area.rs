// src/math/types/area.rs

use crate::math::{error::*, types::*};
use std::fmt;

/// Rechteckiger Generierungsbereich, beschrieben durch Ursprung und Ausdehnung.
///
/// `width` läuft entlang der X-Achse, `length` entlang der Y-Achse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationArea {
    pub start_x: f64,
    pub start_y: f64,
    pub width: f64,
    pub length: f64,
}

impl GenerationArea {
    /// Erstellt einen neuen Bereich und prüft die Ausdehnung.
    pub fn new(start_x: f64, start_y: f64, width: f64, length: f64) -> MathResult<Self> {
        if !start_x.is_finite() || !start_y.is_finite() {
            return Err(MathError::InvalidConfiguration {
                message: format!("Area origin must be finite, got ({start_x}, {start_y})"),
            });
        }
        if !(width.is_finite() && width > 0.0) || !(length.is_finite() && length > 0.0) {
            return Err(MathError::InvalidConfiguration {
                message: format!(
                    "Area extent must be positive and finite, got width {width}, length {length}"
                ),
            });
        }

        Ok(Self {
            start_x,
            start_y,
            width,
            length,
        })
    }

    pub fn origin(&self) -> Point {
        Point::new(self.start_x, self.start_y)
    }

    pub fn end_x(&self) -> f64 {
        self.start_x + self.width
    }

    pub fn end_y(&self) -> f64 {
        self.start_y + self.length
    }

    /// Mittelpunkt des Rechtecks
    pub fn center(&self) -> Point {
        Point::new(
            self.start_x + self.width / 2.0,
            self.start_y + self.length / 2.0,
        )
    }

    /// Ecken in der Reihenfolge: Ursprung, +width, +length, +width+length
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.start_x, self.start_y),
            Point::new(self.end_x(), self.start_y),
            Point::new(self.start_x, self.end_y()),
            Point::new(self.end_x(), self.end_y()),
        ]
    }

    /// Kantenmitten in der Reihenfolge: oben, unten, links, rechts
    pub fn edge_midpoints(&self) -> [Point; 4] {
        let half_width = self.width / 2.0;
        let half_length = self.length / 2.0;
        [
            Point::new(self.start_x + half_width, self.start_y),
            Point::new(self.start_x + half_width, self.end_y()),
            Point::new(self.start_x, self.start_y + half_length),
            Point::new(self.end_x(), self.start_y + half_length),
        ]
    }

    /// Verschiebt den Ursprung um `fraction` der Ausdehnung nach innen und
    /// verkleinert die Ausdehnung um `2 * fraction` (gleicher Rand auf jeder Seite).
    pub fn inset(&self, fraction: f64) -> Self {
        Self {
            start_x: self.start_x + self.width * fraction,
            start_y: self.start_y + self.length * fraction,
            width: self.width * (1.0 - 2.0 * fraction),
            length: self.length * (1.0 - 2.0 * fraction),
        }
    }

    /// Prüft `[start, start + extent)` auf beiden Achsen
    pub fn contains_half_open(&self, point: Point) -> bool {
        point.x >= self.start_x
            && point.x < self.end_x()
            && point.y >= self.start_y
            && point.y < self.end_y()
    }

    pub fn to_geo_rect(&self) -> geo::Rect<f64> {
        geo::Rect::new(
            geo::Coord {
                x: self.start_x,
                y: self.start_y,
            },
            geo::Coord {
                x: self.end_x(),
                y: self.end_y(),
            },
        )
    }
}

impl fmt::Display for GenerationArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Area[({:.3}, {:.3}) {:.3} x {:.3}]",
            self.start_x, self.start_y, self.width, self.length
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rejects_non_positive_extent() {
        assert!(GenerationArea::new(0.0, 0.0, 0.0, 10.0).is_err());
        assert!(GenerationArea::new(0.0, 0.0, 10.0, -1.0).is_err());
        assert!(GenerationArea::new(0.0, 0.0, f64::NAN, 10.0).is_err());
        assert!(GenerationArea::new(f64::INFINITY, 0.0, 10.0, 10.0).is_err());
        assert!(GenerationArea::new(-5.0, -5.0, 10.0, 10.0).is_ok());
    }

    #[test]
    fn test_corners_and_midpoints() {
        let area = GenerationArea::new(10.0, 20.0, 100.0, 50.0).unwrap();
        assert_eq!(
            area.corners(),
            [
                Point::new(10.0, 20.0),
                Point::new(110.0, 20.0),
                Point::new(10.0, 70.0),
                Point::new(110.0, 70.0),
            ]
        );
        assert_eq!(
            area.edge_midpoints(),
            [
                Point::new(60.0, 20.0),
                Point::new(60.0, 70.0),
                Point::new(10.0, 45.0),
                Point::new(110.0, 45.0),
            ]
        );
        assert_eq!(area.center(), Point::new(60.0, 45.0));
    }

    #[test]
    fn test_inset_keeps_equal_margins() {
        let area = GenerationArea::new(0.0, 0.0, 100.0, 200.0).unwrap();
        let inner = area.inset(0.2);
        assert_relative_eq!(inner.start_x, 20.0);
        assert_relative_eq!(inner.start_y, 40.0);
        assert_relative_eq!(inner.width, 60.0);
        assert_relative_eq!(inner.length, 120.0);
        assert_relative_eq!(inner.end_x(), 80.0);
        assert_relative_eq!(inner.end_y(), 160.0);
    }

    #[test]
    fn test_contains_half_open() {
        let area = GenerationArea::new(0.0, 0.0, 10.0, 10.0).unwrap();
        assert!(area.contains_half_open(Point::new(0.0, 0.0)));
        assert!(area.contains_half_open(Point::new(9.99, 9.99)));
        assert!(!area.contains_half_open(Point::new(10.0, 5.0)));
        assert!(!area.contains_half_open(Point::new(5.0, -0.1)));
    }

    #[test]
    fn test_geo_rect_matches_extent() {
        let area = GenerationArea::new(-5.0, 5.0, 10.0, 20.0).unwrap();
        let rect = area.to_geo_rect();
        assert_relative_eq!(rect.width(), 10.0);
        assert_relative_eq!(rect.height(), 20.0);
        assert_eq!(Point::from(rect.min()), area.origin());
    }
}
