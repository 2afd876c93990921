// src/debug/visualization/svg.rs
use crate::math::{
    error::{MathError, MathResult},
    point_distribution::seed_points::PointSet,
    types::{GenerationArea, Point},
};
use bevy::log::info;
use std::path::Path;
use ::svg::Document;
use ::svg::node::element::{Circle, Rectangle, Style};

/// Anzeigebereich: Generierungsbereich plus alle Punkte, mit etwas Rand.
fn display_bounds(area: &GenerationArea, points: &[Point]) -> (f64, f64, f64, f64) {
    let (mut min_x, mut min_y) = (area.start_x, area.start_y);
    let (mut max_x, mut max_y) = (area.end_x(), area.end_y());
    for p in points {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    let padding = (max_x - min_x).max(max_y - min_y) * 0.05;
    (
        min_x - padding,
        min_y - padding,
        max_x - min_x + 2.0 * padding,
        max_y - min_y + 2.0 * padding,
    )
}

/// Baut ein SVG-Dokument mit Generierungsbereich, gezogenen Punkten und Randpunkten.
pub fn point_set_svg(point_set: &PointSet, area: &GenerationArea, svg_pixel_size: f64) -> Document {
    let (view_x, view_y, view_w, view_h) = display_bounds(area, point_set.points());
    let stroke_w_thin = (view_w + view_h) / 2.0 * 0.002;
    let point_radius = (view_w + view_h) / 2.0 * 0.004;

    let style = Style::new(format!(
        r#"
    .background {{ fill: #f0f0f0; }}
    .area-bounds {{ fill: none; stroke: #888888; stroke-width: {stroke_w_thin}; stroke-dasharray: 5,5; }}
    .sampled-point {{ fill: #aaccff; stroke: #0000cc; stroke-width: {stroke_w_thin}; }}
    .anchor-point {{ fill: #ffaaaa; stroke: #cc0000; stroke-width: {stroke_w_thin}; }}
"#
    ));

    let mut document = Document::new()
        .set("width", svg_pixel_size)
        .set("height", svg_pixel_size)
        .set("viewBox", (view_x, view_y, view_w, view_h))
        .add(style)
        .add(
            Rectangle::new()
                .set("x", view_x)
                .set("y", view_y)
                .set("width", view_w)
                .set("height", view_h)
                .set("class", "background"),
        )
        .add(
            Rectangle::new()
                .set("x", area.start_x)
                .set("y", area.start_y)
                .set("width", area.width)
                .set("height", area.length)
                .set("class", "area-bounds"),
        );

    for (points, class, radius) in [
        (point_set.sampled(), "sampled-point", point_radius),
        (point_set.anchors(), "anchor-point", point_radius * 1.5),
    ] {
        for p in points {
            document = document.add(
                Circle::new()
                    .set("cx", p.x)
                    .set("cy", p.y)
                    .set("r", radius)
                    .set("class", class),
            );
        }
    }

    document
}

/// Schreibt das Debug-SVG einer Punktmenge auf die Platte.
pub fn write_point_set_svg<P: AsRef<Path>>(
    path: P,
    point_set: &PointSet,
    area: &GenerationArea,
    svg_pixel_size: f64,
) -> MathResult<()> {
    let document = point_set_svg(point_set, area, svg_pixel_size);
    ::svg::save(path.as_ref(), &document).map_err(|e| MathError::Export {
        message: format!("Could not write SVG '{}': {}", path.as_ref().display(), e),
    })?;
    info!("Debug SVG '{}' wurde erstellt.", path.as_ref().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::point_distribution::seed_points::{
        GenerationSettings, PointAlgorithm, PointGenerator,
    };

    #[test]
    fn test_svg_contains_one_circle_per_point() {
        let settings = GenerationSettings::default()
            .with_amount(30)
            .with_algorithm(PointAlgorithm::Simple)
            .with_seed(12);
        let area = settings.area().unwrap();
        let set = PointGenerator::generate(&settings).unwrap();

        let content = point_set_svg(&set, &area, 512.0).to_string();
        assert_eq!(content.matches("<circle").count(), set.len());
        assert_eq!(content.matches("class=\"anchor-point\"").count(), 8);
        assert!(content.contains("area-bounds"));
    }

    #[test]
    fn test_display_bounds_cover_circle_points_outside_area() {
        let area = GenerationArea::new(100.0, 100.0, 10.0, 10.0).unwrap();
        let (x, y, w, h) = display_bounds(&area, &[Point::new(5.0, 5.0)]);
        assert!(x < 5.0 && y < 5.0);
        assert!(x + w > 110.0 && y + h > 110.0);
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let settings = GenerationSettings::default().with_amount(5).with_seed(1);
        let area = settings.area().unwrap();
        let set = PointGenerator::generate(&settings).unwrap();
        let result = write_point_set_svg(
            "/nonexistent-directory/for/points.svg",
            &set,
            &area,
            256.0,
        );
        assert!(matches!(result, Err(MathError::Export { .. })));
    }
}
