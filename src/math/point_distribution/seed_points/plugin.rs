//! Provides a Bevy `Plugin` that keeps a generated seed point set in the world.
//!
//! The plugin initializes `GenerationSettings` and `GeneratedPoints` and regenerates
//! the point set whenever a `RegeneratePointsEvent` arrives.

use super::{
    config::GenerationSettings, events::RegeneratePointsEvent, generator::PointGenerator,
    resource::GeneratedPoints,
};
use bevy::prelude::*;

/// A Bevy `Plugin` responsible for seed point generation.
pub struct PointGenerationPlugin;

impl Plugin for PointGenerationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GenerationSettings>()
            .init_resource::<GeneratedPoints>()
            .add_event::<RegeneratePointsEvent>()
            .add_systems(Update, regenerate_points_system);
    }
}

/// Regenerates the point set for every `RegeneratePointsEvent`.
///
/// A failed generation is logged and leaves the previous point set untouched.
fn regenerate_points_system(
    mut events: EventReader<RegeneratePointsEvent>,
    settings: Res<GenerationSettings>,
    mut generated: ResMut<GeneratedPoints>,
) {
    for event in events.read() {
        let mut run_settings = (*settings).clone();
        if event.seed.is_some() {
            run_settings.seed = event.seed;
        }

        match PointGenerator::generate(&run_settings) {
            Ok(point_set) => {
                info!(
                    "Seed points regenerated: {} points ({} anchors)",
                    point_set.len(),
                    point_set.anchors().len()
                );
                generated.point_set = Some(point_set);
                generated.generation += 1;
            }
            Err(e) => {
                error!("Seed point generation failed: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::point_distribution::seed_points::config::PointAlgorithm;

    fn app_with_settings(settings: GenerationSettings) -> App {
        let mut app = App::new();
        app.insert_resource(settings).add_plugins(PointGenerationPlugin);
        app
    }

    #[test]
    fn test_no_points_without_event() {
        let mut app = app_with_settings(GenerationSettings::default().with_seed(1));
        app.update();
        let generated = app.world.resource::<GeneratedPoints>();
        assert!(generated.point_set.is_none());
        assert!(generated.points().is_empty());
    }

    #[test]
    fn test_event_regenerates_points() {
        let settings = GenerationSettings::default()
            .with_amount(50)
            .with_algorithm(PointAlgorithm::CityLike)
            .with_seed(8);
        let expected = PointGenerator::generate(&settings).unwrap();

        let mut app = app_with_settings(settings);
        app.world.send_event(RegeneratePointsEvent::default());
        app.update();

        let generated = app.world.resource::<GeneratedPoints>();
        assert_eq!(generated.generation, 1);
        assert_eq!(generated.points(), expected.points());
    }

    #[test]
    fn test_event_seed_overrides_settings() {
        let settings = GenerationSettings::default().with_amount(20).with_seed(1);
        let expected = PointGenerator::generate(&settings.clone().with_seed(99)).unwrap();

        let mut app = app_with_settings(settings.clone());
        app.world.send_event(RegeneratePointsEvent { seed: Some(99) });
        app.update();

        assert_eq!(
            app.world.resource::<GeneratedPoints>().points(),
            expected.points()
        );
        // Die Konfiguration selbst bleibt unverändert
        assert_eq!(app.world.resource::<GenerationSettings>(), &settings);
    }

    #[test]
    fn test_failed_generation_keeps_previous_points() {
        let mut app = app_with_settings(GenerationSettings::default().with_amount(10).with_seed(3));
        app.world.send_event(RegeneratePointsEvent::default());
        app.update();
        let before = app.world.resource::<GeneratedPoints>().points().to_vec();

        app.world.resource_mut::<GenerationSettings>().width = -1.0;
        app.world.send_event(RegeneratePointsEvent::default());
        app.update();

        let generated = app.world.resource::<GeneratedPoints>();
        assert_eq!(generated.generation, 1);
        assert_eq!(generated.points(), before.as_slice());
    }
}
