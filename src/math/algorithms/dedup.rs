// src/math/algorithms/dedup.rs

use crate::math::types::Point;
use std::collections::HashSet;

/// Schlüssel für Wertgleichheit; `-0.0` und `0.0` fallen zusammen.
fn value_key(p: &Point) -> (u64, u64) {
    let norm = |v: f64| if v == 0.0 { 0.0_f64 } else { v };
    (norm(p.x).to_bits(), norm(p.y).to_bits())
}

/// Entfernt doppelte Punkte, das erste Vorkommen bleibt erhalten (stabile Reihenfolge).
///
/// Gibt die bereinigte Liste und die Anzahl entfernter Punkte zurück.
pub fn filter_duplicates(points: Vec<Point>) -> (Vec<Point>, usize) {
    let original_len = points.len();
    let mut seen = HashSet::with_capacity(original_len);
    let unique: Vec<Point> = points
        .into_iter()
        .filter(|p| seen.insert(value_key(p)))
        .collect();
    let removed = original_len - unique.len();
    (unique, removed)
}
