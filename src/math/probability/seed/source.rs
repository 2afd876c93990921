use bevy::log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};

/// Zufallsquelle, die von den Punktverteilungen verwendet wird.
///
/// Jede Generierung besitzt ihre eigene Instanz; es gibt keinen globalen Zustand.
pub trait RandomSource {
    /// Gleichverteilte Ganzzahl in `[low, high)`. Ist der Bereich leer, wird `low` geliefert.
    fn next_int_in_range(&mut self, low: i64, high: i64) -> i64;

    /// Gleichverteilter Wert in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

/// Liefert den festen Seed, falls gesetzt, sonst einen aus der Systemzeit abgeleiteten Wert.
pub fn resolve_seed(fixed: Option<u64>) -> u64 {
    match fixed {
        Some(seed) => seed,
        None => {
            let elapsed = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default();
            let seed = elapsed.as_secs() ^ u64::from(elapsed.subsec_nanos()).rotate_left(32);
            debug!("No fixed seed configured, derived {} from system time", seed);
            seed
        }
    }
}

/// Reproduzierbare Zufallsquelle auf Basis von `StdRng`.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    seed: u64,
    rng: StdRng,
}

impl SeededRandom {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Fester Seed wenn vorhanden, ansonsten zeitbasiert.
    pub fn from_policy(fixed: Option<u64>) -> Self {
        Self::from_seed(resolve_seed(fixed))
    }

    /// Der tatsächlich verwendete Seed
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn next_int_in_range(&mut self, low: i64, high: i64) -> i64 {
        if high <= low {
            return low;
        }
        self.rng.random_range(low..high)
    }

    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}
