// src/math/point_distribution/seed_points/generator.rs

use crate::math::{
    algorithms::dedup::filter_duplicates,
    error::MathResult,
    point_distribution::seed_points::{
        config::{GenerationSettings, PointAlgorithm},
        strategies::{city_like_spread, circle_distribution, simple_spread, uniform_distribution},
    },
    probability::{RandomSource, SeededRandom},
    types::{GenerationArea, Point},
};
use bevy::log::{debug, info};

/// Die acht festen Randpunkte: vier Ecken, danach die Kantenmitten oben, unten, links, rechts.
pub fn boundary_anchors(area: &GenerationArea) -> [Point; 8] {
    let [c0, c1, c2, c3] = area.corners();
    let [m0, m1, m2, m3] = area.edge_midpoints();
    [c0, c1, c2, c3, m0, m1, m2, m3]
}

/// Ergebnis einer Generierung: eindeutige Saatpunkte, bei rechteckigen Strategien
/// gefolgt von den acht Randpunkten.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
    points: Vec<Point>,
    sampled_len: usize,
    duplicates_removed: usize,
    seed: Option<u64>,
}

impl PointSet {
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Der gezogene Anteil ohne Randpunkte
    pub fn sampled(&self) -> &[Point] {
        &self.points[..self.sampled_len]
    }

    /// Die angehängten Randpunkte (leer im Kreismodus)
    pub fn anchors(&self) -> &[Point] {
        &self.points[self.sampled_len..]
    }

    pub fn duplicates_removed(&self) -> usize {
        self.duplicates_removed
    }

    /// Seed der Generierung; `None` bei einer vom Aufrufer gestellten Zufallsquelle.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Erzeugt Saatpunkte für die Voronoi-Stufe.
/// Ablauf: Strategie wählen, Duplikate entfernen, im Rechteckmodus Randpunkte anhängen.
#[derive(Debug, Clone)]
pub struct PointGenerator {
    settings: GenerationSettings,
}

impl PointGenerator {
    pub fn new(settings: GenerationSettings) -> MathResult<Self> {
        settings.validate()?; // Validiert die übergebene Konfiguration
        Ok(Self { settings })
    }

    pub fn settings(&self) -> &GenerationSettings {
        &self.settings
    }

    /// Einmaliger Aufruf mit eigener, frisch geseedeter Zufallsquelle.
    pub fn generate(settings: &GenerationSettings) -> MathResult<PointSet> {
        Self::new(settings.clone())?.run()
    }

    /// Generiert mit einer Zufallsquelle aus der Seed-Politik der Konfiguration.
    pub fn run(&self) -> MathResult<PointSet> {
        let mut rng = SeededRandom::from_policy(self.settings.seed);
        info!(
            "Generating {} seed points with {} (seed {})",
            self.settings.amount,
            self.settings.algorithm,
            rng.seed()
        );
        let mut point_set = self.generate_with_rng(&mut rng)?;
        point_set.seed = Some(rng.seed());
        Ok(point_set)
    }

    /// Generiert mit einer vom Aufrufer gestellten Zufallsquelle.
    pub fn generate_with_rng<R: RandomSource + ?Sized>(&self, rng: &mut R) -> MathResult<PointSet> {
        let area = self.settings.area()?;
        let amount = self.settings.amount;

        let raw_points = match self.settings.algorithm {
            PointAlgorithm::Simple => simple_spread(&area, amount, rng),
            PointAlgorithm::CityLike => city_like_spread(&area, amount, rng),
            PointAlgorithm::Uniform => uniform_distribution(&area, amount, rng),
            PointAlgorithm::Circle { radius } => circle_distribution(&area, radius, amount, rng),
        };
        let raw_len = raw_points.len();

        let (mut points, duplicates_removed) = filter_duplicates(raw_points);
        debug!(
            "{}: sampled {} points, removed {} duplicates",
            self.settings.algorithm, raw_len, duplicates_removed
        );

        let sampled_len = points.len();
        if self.settings.algorithm.is_rectangular() {
            points.extend(boundary_anchors(&area));
        }

        Ok(PointSet {
            points,
            sampled_len,
            duplicates_removed,
            seed: None,
        })
    }
}
