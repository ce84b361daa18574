//! Painting for the picker: swatch wheels and the gradient background.

use egui::{Color32, Mesh, Painter, Pos2, Rect, Stroke, Vec2};
use palette_core::layout::{self, SwatchPlacement};
use palette_core::{ColorCatalog, ColorName, Rgb};

use crate::theme;

/// One swatch as laid out on screen.
#[derive(Debug, Clone)]
pub struct PlacedSwatch {
    pub name: ColorName,
    pub center: Pos2,
    pub radius: f32,
    pub color: Color32,
}

/// Lay the palette out as a wheel inside `rect`.
///
/// Spokes start at the top and run clockwise; ring `level` sits at
/// `level × ring_step` from the center.
pub fn layout_wheel(rect: Rect, catalog: &ColorCatalog) -> Vec<PlacedSwatch> {
    let center = rect.center();
    let outer = rect.width().min(rect.height()) / 2.0;
    let max_level = palette_core::config::VARIANTS.len() as f32;
    let ring_step = outer / (max_level + 0.5);

    layout::wheel()
        .into_iter()
        .map(|SwatchPlacement { name, angle_deg, level }| {
            let distance = level as f32 * ring_step;
            let angle = (angle_deg as f32).to_radians();
            let offset = Vec2::new(angle.sin(), -angle.cos()) * distance;
            let radius = (ring_step * 0.45).min(distance * 0.27).max(2.0);
            let color = catalog
                .hex(&name)
                .and_then(Rgb::from_hex)
                .map_or(theme::MISSING_STOP, theme::color32);
            PlacedSwatch {
                name,
                center: center + offset,
                radius,
                color,
            }
        })
        .collect()
}

/// Swatch under `pos`, if any.
pub fn hit_test(swatches: &[PlacedSwatch], pos: Pos2) -> Option<&PlacedSwatch> {
    swatches
        .iter()
        .find(|s| s.center.distance(pos) <= s.radius)
}

/// Paint a wheel, marking the hovered swatch and the slot's current pick.
pub fn render_wheel(
    painter: &Painter,
    rect: Rect,
    swatches: &[PlacedSwatch],
    hovered: Option<&ColorName>,
    selected: Option<&ColorName>,
) {
    painter.rect_filled(rect, 8.0, theme::WHEEL_BG);

    for swatch in swatches {
        painter.circle_filled(swatch.center, swatch.radius, swatch.color);

        let stroke = if selected == Some(&swatch.name) {
            Stroke::new(theme::SELECTED_STROKE_WIDTH, theme::SWATCH_SELECTED)
        } else if hovered == Some(&swatch.name) {
            Stroke::new(theme::HOVER_STROKE_WIDTH, theme::SWATCH_HOVER)
        } else {
            Stroke::new(theme::SWATCH_STROKE_WIDTH, theme::SWATCH_BORDER)
        };
        painter.circle_stroke(swatch.center, swatch.radius, stroke);
    }
}

/// Fill `rect` with a left-to-right gradient over `stops`.
pub fn render_gradient(painter: &Painter, rect: Rect, stops: &[Option<Rgb>]) {
    let colors: Vec<Color32> = stops
        .iter()
        .map(|s| s.map_or(theme::MISSING_STOP, theme::color32))
        .collect();

    match colors.len() {
        0 => {
            painter.rect_filled(rect, 0.0, theme::CANVAS_BG);
        }
        1 => {
            painter.rect_filled(rect, 0.0, colors[0]);
        }
        n => {
            let mut mesh = Mesh::default();
            let step = rect.width() / (n - 1) as f32;
            for (i, color) in colors.iter().enumerate() {
                let x = rect.left() + step * i as f32;
                mesh.colored_vertex(Pos2::new(x, rect.top()), *color);
                mesh.colored_vertex(Pos2::new(x, rect.bottom()), *color);
            }
            for i in 0..(n as u32 - 1) {
                let top = i * 2;
                mesh.add_triangle(top, top + 1, top + 2);
                mesh.add_triangle(top + 1, top + 3, top + 2);
            }
            painter.add(mesh);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use palette_core::BootstrapStyles;

    fn swatches() -> Vec<PlacedSwatch> {
        let catalog = ColorCatalog::resolve(&BootstrapStyles::new());
        let rect = Rect::from_min_size(Pos2::ZERO, Vec2::splat(200.0));
        layout_wheel(rect, &catalog)
    }

    #[test]
    fn test_wheel_fits_rect() {
        let swatches = swatches();
        assert_eq!(swatches.len(), 99);
        for s in &swatches {
            assert!(s.center.x - s.radius >= 0.0 && s.center.x + s.radius <= 200.0);
            assert!(s.center.y - s.radius >= 0.0 && s.center.y + s.radius <= 200.0);
        }
    }

    #[test]
    fn test_first_spoke_points_up() {
        let swatches = swatches();
        let gray_100 = &swatches[0];
        assert_eq!(gray_100.name.as_str(), "gray-100");
        assert!((gray_100.center.x - 100.0).abs() < 0.01);
        assert!(gray_100.center.y < 100.0);
    }

    #[test]
    fn test_hit_test() {
        let swatches = swatches();
        let target = &swatches[40];
        let hit = hit_test(&swatches, target.center).map(|s| s.name.clone());
        assert_eq!(hit, Some(target.name.clone()));
        assert!(hit_test(&swatches, Pos2::new(1.0, 1.0)).is_none());
    }
}
