use crate::math::{probability::RandomSource, types::Point, utils::constants::TAU};

/// Zieht einen flächengleichverteilten Punkt innerhalb einer Kreisscheibe.
///
/// Polarmethode: der Radius wird mit `sqrt(u)` gewichtet, sonst ballen sich die
/// Punkte im Zentrum.
pub fn sample_point_in_circle<R: RandomSource + ?Sized>(
    rng: &mut R,
    center: Point,
    radius: f64,
) -> Point {
    let r = radius * rng.next_unit().sqrt();
    let theta = TAU * rng.next_unit();
    Point::new(center.x + r * theta.cos(), center.y + r * theta.sin())
}
