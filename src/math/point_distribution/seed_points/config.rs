// src/math/point_distribution/seed_points/config.rs

use crate::math::{
    error::{MathError, MathResult},
    types::GenerationArea,
};
use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Verteilungsstrategie für die Saatpunkte.
///
/// Jede Variante trägt nur die Parameter, die sie selbst braucht.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointAlgorithm {
    /// Unabhängige, ganzzahlige Gleichverteilung über das Rechteck.
    Simple,
    /// Dünne äußere Schicht plus dichterer innerer Kern.
    CityLike,
    /// Seitenverhältnis-unabhängiges Quantisierungsgitter.
    Uniform,
    /// Flächengleichverteilung in einer Kreisscheibe um die Rechteckmitte.
    Circle { radius: f64 },
}

impl PointAlgorithm {
    /// Bildet den alten ganzzahligen Selektor (0..=3) ab.
    ///
    /// `circle_radius` wird nur für den Kreis-Selektor verwendet.
    pub fn from_selector(selector: i32, circle_radius: f64) -> MathResult<Self> {
        match selector {
            0 => Ok(Self::Simple),
            1 => Ok(Self::CityLike),
            2 => Ok(Self::Uniform),
            3 => Ok(Self::Circle {
                radius: circle_radius,
            }),
            other => Err(MathError::InvalidArgument {
                message: format!("Unknown point algorithm selector {other}"),
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Simple => "Simple",
            Self::CityLike => "CityLike",
            Self::Uniform => "Uniform",
            Self::Circle { .. } => "Circle",
        }
    }

    /// Rechteckige Strategien bekommen Randpunkte angehängt.
    pub fn is_rectangular(&self) -> bool {
        !matches!(self, Self::Circle { .. })
    }
}

impl fmt::Display for PointAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Circle { radius } => write!(f, "Circle(r={radius})"),
            other => f.write_str(other.name()),
        }
    }
}

impl FromStr for PointAlgorithm {
    type Err = MathError;

    /// Namen ohne Beachtung der Groß-/Kleinschreibung.
    ///
    /// Ein Name trägt keinen Radius: `"circle"` ergibt `Circle { radius: 1.0 }`.
    /// Für einen anderen Radius `from_selector` verwenden oder die Variante direkt bauen.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simple" => Ok(Self::Simple),
            "citylike" | "city_like" | "city-like" => Ok(Self::CityLike),
            "uniform" => Ok(Self::Uniform),
            "circle" => Ok(Self::Circle { radius: 1.0 }),
            _ => Err(MathError::InvalidArgument {
                message: format!("Unknown point algorithm '{s}'"),
            }),
        }
    }
}

/// Konfiguration für einen Generierungsaufruf.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationSettings {
    pub start_x: f64,
    pub start_y: f64,
    /// Ausdehnung entlang X
    pub width: f64,
    /// Ausdehnung entlang Y
    pub length: f64,
    /// Angeforderte Anzahl Punkte
    pub amount: usize,
    pub algorithm: PointAlgorithm,
    /// Fester Seed; `None` heißt zeitbasiert und nicht reproduzierbar.
    pub seed: Option<u64>,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            start_x: 0.0,
            start_y: 0.0,
            width: 500.0,
            length: 500.0,
            amount: 500,
            algorithm: PointAlgorithm::Simple,
            seed: None,
        }
    }
}

impl GenerationSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_area(mut self, start_x: f64, start_y: f64, width: f64, length: f64) -> Self {
        self.start_x = start_x;
        self.start_y = start_y;
        self.width = width;
        self.length = length;
        self
    }

    pub fn with_amount(mut self, amount: usize) -> Self {
        self.amount = amount;
        self
    }

    pub fn with_algorithm(mut self, algorithm: PointAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn without_seed(mut self) -> Self {
        self.seed = None;
        self
    }

    /// Der geprüfte Generierungsbereich.
    pub fn area(&self) -> MathResult<GenerationArea> {
        GenerationArea::new(self.start_x, self.start_y, self.width, self.length)
    }

    pub fn validate(&self) -> MathResult<()> {
        self.area()?;
        if let PointAlgorithm::Circle { radius } = self.algorithm {
            if !(radius.is_finite() && radius > 0.0) {
                return Err(MathError::InvalidConfiguration {
                    message: format!("Circle radius must be positive and finite, got {radius}"),
                });
            }
        }
        Ok(())
    }
}
