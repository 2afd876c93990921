use bevy::prelude::*;

/// Fordert eine Neugenerierung der Saatpunkte an.
///
/// Ein gesetzter `seed` überschreibt für diesen Lauf den Seed der Konfiguration.
#[derive(Event, Debug, Clone, Default)]
pub struct RegeneratePointsEvent {
    pub seed: Option<u64>,
}
