use super::generator::PointSet;
use bevy::prelude::*;

/// Zuletzt erfolgreich erzeugte Saatpunkte.
#[derive(Resource, Debug, Clone, Default)]
pub struct GeneratedPoints {
    pub point_set: Option<PointSet>,
    /// Zähler erfolgreicher Generierungen
    pub generation: u64,
}

impl GeneratedPoints {
    pub fn points(&self) -> &[crate::math::types::Point] {
        self.point_set
            .as_ref()
            .map(|set| set.points())
            .unwrap_or_default()
    }
}
