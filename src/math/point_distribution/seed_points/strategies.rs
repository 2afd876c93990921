// src/math/point_distribution/seed_points/strategies.rs

use crate::math::{
    geometry::sampling::sample_point_in_circle,
    probability::RandomSource,
    types::{GenerationArea, Point},
};
use crate::next_random_int;
use bevy::log::debug;

/// Anzahl Quantisierungsschritte auf der kürzeren Achse der Uniform-Strategie.
pub const UNIFORM_GRANULARITY: i64 = 20_000;

/// `floor(value * share)` in f64, wie die Altimplementierung rundet.
fn floor_share(value: usize, share: f64) -> usize {
    (value as f64 * share).floor() as usize
}

/// Ganzzahlige Ziehung auf einer Achse: Gitter `[ceil(start), ceil(start + extent))`.
///
/// Liegt keine ganze Zahl im Intervall, wird `start` selbst verwendet.
fn draw_axis<R: RandomSource + ?Sized>(rng: &mut R, start: f64, extent: f64) -> f64 {
    let low = start.ceil() as i64;
    let high = (start + extent).ceil() as i64;
    if high > low {
        next_random_int!(rng, low..high) as f64
    } else {
        start
    }
}

/// Unabhängige Gleichverteilung über den halboffenen Bereich.
pub fn simple_spread<R: RandomSource + ?Sized>(
    area: &GenerationArea,
    amount: usize,
    rng: &mut R,
) -> Vec<Point> {
    let mut points = Vec::with_capacity(amount);
    for _ in 0..amount {
        let x = draw_axis(rng, area.start_x, area.width);
        let y = draw_axis(rng, area.start_y, area.length);
        points.push(Point::new(x, y));
    }
    points
}

/// Aufteilung der City-Strategie in äußere und innere Schicht.
///
/// Die Anteile werden nacheinander in f64 abgerundet: zuerst 30% der Anfrage für die
/// äußere Schicht, davon wiederum 70% für den Kern. `90 * 0.7` ergibt dabei 62, nicht 63.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CityLayers {
    pub outer_area: GenerationArea,
    pub outer_amount: usize,
    pub inner_area: GenerationArea,
    pub inner_amount: usize,
}

impl CityLayers {
    pub const OUTER_SHARE: f64 = 0.3;
    pub const INNER_SHARE: f64 = 0.7;
    /// Rand pro Seite für den Kern
    pub const INSET_FRACTION: f64 = 0.2;

    pub fn plan(area: &GenerationArea, amount: usize) -> Self {
        let outer_amount = floor_share(amount, Self::OUTER_SHARE);
        let inner_amount = floor_share(outer_amount, Self::INNER_SHARE);
        Self {
            outer_area: *area,
            outer_amount,
            inner_area: area.inset(Self::INSET_FRACTION),
            inner_amount,
        }
    }

    pub fn total(&self) -> usize {
        self.outer_amount + self.inner_amount
    }
}

/// Äußere Schicht über den ganzen Bereich, danach der dichtere Kern.
pub fn city_like_spread<R: RandomSource + ?Sized>(
    area: &GenerationArea,
    amount: usize,
    rng: &mut R,
) -> Vec<Point> {
    let layers = CityLayers::plan(area, amount);
    debug!(
        "CityLike: {} outer points in {}, {} inner points in {}",
        layers.outer_amount, layers.outer_area, layers.inner_amount, layers.inner_area
    );

    let mut points = simple_spread(&layers.outer_area, layers.outer_amount, rng);
    points.extend(simple_spread(&layers.inner_area, layers.inner_amount, rng));
    points
}

/// Quantisierungsgitter mit gleicher physikalischer Schrittweite auf beiden Achsen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniformGrid {
    pub width_steps: i64,
    pub length_steps: i64,
}

impl UniformGrid {
    pub fn for_area(area: &GenerationArea) -> Self {
        let granularity = UNIFORM_GRANULARITY as f64;
        if area.width > area.length {
            Self {
                width_steps: (granularity * area.width / area.length).floor() as i64,
                length_steps: UNIFORM_GRANULARITY,
            }
        } else {
            Self {
                width_steps: UNIFORM_GRANULARITY,
                length_steps: (granularity * area.length / area.width).floor() as i64,
            }
        }
    }

    pub fn step_x(&self, area: &GenerationArea) -> f64 {
        area.width / self.width_steps as f64
    }

    pub fn step_y(&self, area: &GenerationArea) -> f64 {
        area.length / self.length_steps as f64
    }
}

/// Untere Indexgrenze: der abgeschnittene Ursprung, höchstens `steps - 1`.
fn first_index(start: f64, steps: i64) -> i64 {
    (start.trunc() as i64).min(steps - 1)
}

/// Gleichmäßige Abdeckung über ein Gitter, unabhängig vom Seitenverhältnis.
///
/// Der Ursprung begrenzt nur den kleinsten Gitterindex, die Koordinaten werden nicht verschoben.
pub fn uniform_distribution<R: RandomSource + ?Sized>(
    area: &GenerationArea,
    amount: usize,
    rng: &mut R,
) -> Vec<Point> {
    let grid = UniformGrid::for_area(area);
    debug!(
        "Uniform: grid {} x {} steps for {}",
        grid.width_steps, grid.length_steps, area
    );

    let low_x = first_index(area.start_x, grid.width_steps);
    let low_y = first_index(area.start_y, grid.length_steps);
    let (width_steps, length_steps) = (grid.width_steps, grid.length_steps);

    let mut points = Vec::with_capacity(amount);
    for _ in 0..amount {
        let ix = next_random_int!(rng, low_x..width_steps);
        let iy = next_random_int!(rng, low_y..length_steps);
        points.push(Point::new(
            area.width * ix as f64 / width_steps as f64,
            area.length * iy as f64 / length_steps as f64,
        ));
    }
    points
}

/// Kreisscheibe um `(width / 2, length / 2)`; der Ursprung des Bereichs wird ignoriert.
pub fn circle_distribution<R: RandomSource + ?Sized>(
    area: &GenerationArea,
    radius: f64,
    amount: usize,
    rng: &mut R,
) -> Vec<Point> {
    let origin = Point::new(area.width / 2.0, area.length / 2.0);
    (0..amount)
        .map(|_| sample_point_in_circle(rng, origin, radius))
        .collect()
}
