//! Map rendering.
//!
//! Draws projected boundaries and markers to the egui canvas. All geometry
//! is in logical viewport space; `to_screen` maps it through the viewport
//! transform and the canvas fit.

use super::cache::{ProjectedFeature, ProjectedLayer};
use crate::data::CountryCode;
use crate::state::{MarkerTransform, ViewportTransform, MARKER_RADIUS};
use crate::ui::colors;
use eframe::egui::{epaint::Mesh, Align2, Color32, FontId, Painter, Pos2, Rect, Shape, Stroke, Vec2};

/// A country marker anchored at a projected centroid.
#[derive(Debug, Clone)]
pub struct MapMarker {
    pub code: CountryCode,
    /// Anchor in logical viewport coordinates.
    pub anchor: Pos2,
    pub color: Color32,
}

/// Fills the background with the ocean gradient.
pub fn render_ocean(painter: &Painter, rect: Rect) {
    let mut mesh = Mesh::default();
    mesh.colored_vertex(rect.left_top(), colors::map::OCEAN_TOP);
    mesh.colored_vertex(rect.right_top(), colors::map::OCEAN_TOP);
    mesh.colored_vertex(rect.right_bottom(), colors::map::OCEAN_BOTTOM);
    mesh.colored_vertex(rect.left_bottom(), colors::map::OCEAN_BOTTOM);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    painter.add(Shape::mesh(mesh));
}

/// Renders every boundary feature, filled by `fill_for`.
pub fn render_boundaries(
    painter: &Painter,
    layer: &ProjectedLayer,
    to_screen: impl Fn(Pos2) -> Pos2,
    fill_for: impl Fn(Option<&CountryCode>) -> Color32,
    hovered: Option<&CountryCode>,
) {
    let clip = painter.clip_rect();
    let outline = Stroke::new(0.5, colors::map::BORDER);

    for feature in &layer.features {
        let screen_bounds =
            Rect::from_two_pos(to_screen(feature.bounds.min), to_screen(feature.bounds.max));
        if !clip.intersects(screen_bounds) {
            continue;
        }

        let fill = fill_for(feature.code.as_ref());
        render_feature(painter, feature, &to_screen, fill, outline);
    }

    // Drawn last so the hover outline is never covered by a neighbour.
    let Some(code) = hovered else {
        return;
    };
    let stroke = Stroke::new(1.5, colors::map::HOVER_BORDER);
    for feature in layer.features_for(code) {
        for polygon in &feature.polygons {
            for ring in &polygon.rings {
                let points: Vec<Pos2> = ring.iter().map(|p| to_screen(*p)).collect();
                painter.add(Shape::closed_line(points, stroke));
            }
        }
    }
}

fn render_feature(
    painter: &Painter,
    feature: &ProjectedFeature,
    to_screen: &impl Fn(Pos2) -> Pos2,
    fill: Color32,
    outline: Stroke,
) {
    for polygon in &feature.polygons {
        if !polygon.triangles.is_empty() {
            let mut mesh = Mesh::default();
            mesh.reserve_vertices(polygon.vertices.len());
            mesh.reserve_triangles(polygon.triangles.len() / 3);
            for p in &polygon.vertices {
                mesh.colored_vertex(to_screen(*p), fill);
            }
            mesh.indices.extend_from_slice(&polygon.triangles);
            painter.add(Shape::mesh(mesh));
        }

        for ring in &polygon.rings {
            let points: Vec<Pos2> = ring.iter().map(|p| to_screen(*p)).collect();
            painter.add(Shape::closed_line(points, outline));
        }
    }
}

/// Renders markers at a constant on-screen size regardless of zoom.
pub fn render_markers(
    painter: &Painter,
    markers: &[MapMarker],
    viewport: &ViewportTransform,
    to_screen: impl Fn(Pos2) -> Pos2,
) {
    let clip = painter.clip_rect();
    for marker in markers {
        let transform = MarkerTransform::new(marker.anchor, viewport);
        let center = to_screen(transform.apply(marker.anchor));
        let edge = to_screen(transform.apply(marker.anchor + Vec2::new(MARKER_RADIUS, 0.0)));
        let radius = (edge - center).length();

        if !clip.expand(radius).contains(center) {
            continue;
        }

        painter.circle_filled(center, radius, marker.color);
        painter.circle_stroke(center, radius, Stroke::new(1.5, colors::map::MARKER_STROKE));
        painter.text(
            center,
            Align2::CENTER_CENTER,
            marker.code.as_str(),
            FontId::proportional((radius * 0.75).max(6.0)),
            colors::map::MARKER_LABEL,
        );
    }
}
