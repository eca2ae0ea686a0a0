//! Central canvas UI: the world map.
//!
//! Thin glue between egui and the controllers. Pointer and touch input is
//! turned into `ViewportCommand`s and hover events; everything is drawn from
//! the projected scene through the current viewport transform.

use crate::color_resolver::{color_for, MapMode};
use crate::data::{CountryCode, DataStore, RawId, WeatherCondition};
use crate::geo::{
    self, BoundaryLayer, MapMarker, MapProjection, ProjectedLayer, VIEWPORT_HEIGHT,
    VIEWPORT_WIDTH,
};
use crate::state::{
    AppState, InteractionContext, TooltipContent, TooltipState, ViewportTransform, MARKER_RADIUS,
};
use crate::ui::colors;
use eframe::egui::{self, Align2, Pos2, Rect, RichText, Sense, Vec2};
use egui_phosphor::regular as icons;
use web_time::Instant;

/// Scroll distance (points) that zooms by a factor of e.
const SCROLL_ZOOM_RATE: f32 = 0.002;

/// Geometry derived from one data load.
#[derive(Debug, Default)]
pub struct MapScene {
    pub layer: ProjectedLayer,
    /// Curated country centroids in logical coordinates.
    pub anchors: Vec<(CountryCode, Pos2)>,
    generation: u64,
}

impl MapScene {
    pub fn build(boundaries: &BoundaryLayer, store: &DataStore) -> Self {
        let projection = MapProjection::new();
        let anchors = store
            .countries()
            .iter()
            .filter_map(|c| c.centroid.map(|centroid| (c.code.clone(), projection.project(centroid))))
            .collect();

        Self {
            layer: ProjectedLayer::build(boundaries, &projection, store.index()),
            anchors,
            generation: store.generation(),
        }
    }

    /// True when the store changed since this scene was built.
    pub fn is_stale(&self, store: &DataStore) -> bool {
        self.generation != store.generation()
    }
}

/// Logical viewport → screen mapping for one frame.
///
/// The 1200×650 logical view is fitted into the canvas rect, letterboxed,
/// and the viewport transform is applied before the fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenMapping {
    pub origin: Pos2,
    pub fit: f32,
    pub viewport: ViewportTransform,
}

impl ScreenMapping {
    pub fn new(rect: Rect, viewport: ViewportTransform) -> Self {
        let fit = (rect.width() / VIEWPORT_WIDTH)
            .min(rect.height() / VIEWPORT_HEIGHT)
            .max(f32::EPSILON);
        let size = Vec2::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT) * fit;
        Self {
            origin: rect.center() - size / 2.0,
            fit,
            viewport,
        }
    }

    /// Screen rectangle covered by the logical viewport.
    pub fn view_rect(&self) -> Rect {
        Rect::from_min_size(
            self.origin,
            Vec2::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT) * self.fit,
        )
    }

    pub fn to_screen(&self, logical: Pos2) -> Pos2 {
        self.origin + self.viewport.apply(logical).to_vec2() * self.fit
    }

    /// Screen point in viewport space (after zoom/pan, before the fit).
    pub fn to_viewport(&self, screen: Pos2) -> Pos2 {
        ((screen - self.origin) / self.fit).to_pos2()
    }

    pub fn to_logical(&self, screen: Pos2) -> Pos2 {
        self.viewport.invert(self.to_viewport(screen))
    }
}

pub fn render_canvas(ctx: &egui::Context, state: &mut AppState, scene: &MapScene) {
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE)
        .show(ctx, |ui| {
            let available_size = ui.available_size();
            let (response, painter) =
                ui.allocate_painter(available_size, Sense::click_and_drag());
            let rect = response.rect;
            let now = Instant::now();

            state.viewport.attach(response.id);
            handle_gestures(&response, rect, state, now);

            let transform = state.viewport.tick(now);
            if let Some(update) = state.viewport.poll_update(now) {
                log::trace!("Viewport {}", update);
            }
            let mapping = ScreenMapping::new(rect, transform);
            let painter = painter.with_clip_rect(mapping.view_rect().intersect(rect));
            let mode = state.selection.mode();

            geo::render_ocean(&painter, mapping.view_rect());

            let markers: Vec<MapMarker> = scene
                .anchors
                .iter()
                .map(|(code, anchor)| MapMarker {
                    code: code.clone(),
                    anchor: *anchor,
                    color: color_for(Some(code), &mode, &state.store),
                })
                .collect();

            handle_hover(&response, state, scene, &markers, &mapping, &mode, now);

            geo::render_boundaries(
                &painter,
                &scene.layer,
                |p| mapping.to_screen(p),
                |code| color_for(code, &mode, &state.store),
                state.interaction.hovered_code(),
            );
            geo::render_markers(&painter, &markers, &transform, |p| mapping.to_screen(p));

            draw_overlay_info(ui, &rect, state, &mode);
            draw_zoom_controls(ui, &rect, state, now);

            if let Some(tooltip) = state.interaction.tooltip() {
                draw_tooltip(ctx, rect, tooltip);
            }

            if state.viewport.is_animating() {
                ctx.request_repaint();
            }
            if state.interaction.tick(now) {
                ctx.request_repaint_after(crate::state::TOUCH_RELEASE_DELAY);
            }
        });
}

fn handle_gestures(response: &egui::Response, rect: Rect, state: &mut AppState, now: Instant) {
    let mapping = ScreenMapping::new(rect, state.viewport.transform());

    if response.dragged() {
        let delta = response.drag_delta() / mapping.fit;
        state.viewport.pan_by(delta, now);
    }

    if response.double_clicked() {
        state.viewport.reset(now);
        return;
    }

    if let Some(cursor) = response.hover_pos() {
        let (scroll, pinch) = response
            .ctx
            .input(|i| (i.smooth_scroll_delta.y, i.zoom_delta()));
        let factor = (scroll * SCROLL_ZOOM_RATE).exp() * pinch;
        if (factor - 1.0).abs() > f32::EPSILON {
            let anchor = mapping.to_viewport(cursor);
            state.viewport.zoom_at(anchor, factor, now);
        }
    }
}

fn handle_hover(
    response: &egui::Response,
    state: &mut AppState,
    scene: &MapScene,
    markers: &[MapMarker],
    mapping: &ScreenMapping,
    mode: &MapMode,
    now: Instant,
) {
    let (touching, ended) = response.ctx.input(|i| (i.any_touches(), touch_ended(i)));

    if ended {
        state.interaction.on_touch_end(now);
        return;
    }
    // A lifted touch leaves the tooltip up until the release delay runs out.
    if !touching && state.interaction.is_release_pending() {
        return;
    }

    let Some(pos) = response.hover_pos() else {
        if !touching {
            state.interaction.on_leave();
        }
        return;
    };

    let ctx = InteractionContext {
        store: &state.store,
        mode,
        surface: response.rect,
    };
    match hit_ids(pos, scene, markers, mapping) {
        Some(ids) if touching => state.interaction.on_touch_start(pos, &ids, &ctx),
        Some(ids) => state.interaction.on_hover(pos, &ids, &ctx),
        None => state.interaction.on_leave(),
    }
}

fn touch_ended(input: &egui::InputState) -> bool {
    input.events.iter().any(|e| {
        matches!(
            e,
            egui::Event::Touch {
                phase: egui::TouchPhase::End | egui::TouchPhase::Cancel,
                ..
            }
        )
    })
}

/// Identifiers under `pos`: markers first, then boundary polygons.
fn hit_ids(
    pos: Pos2,
    scene: &MapScene,
    markers: &[MapMarker],
    mapping: &ScreenMapping,
) -> Option<Vec<RawId>> {
    let marker_radius = MARKER_RADIUS * mapping.fit;
    if let Some(marker) = markers
        .iter()
        .rev()
        .find(|m| mapping.to_screen(m.anchor).distance(pos) <= marker_radius)
    {
        return Some(vec![RawId::Text(marker.code.as_str().to_string())]);
    }

    scene
        .layer
        .hit_test(mapping.to_logical(pos))
        .map(|feature| feature.ids.clone())
}

fn draw_overlay_info(ui: &mut egui::Ui, rect: &Rect, state: &AppState, mode: &MapMode) {
    let overlay_pos = rect.left_top() + Vec2::new(10.0, 10.0);
    let overlay_rect = Rect::from_min_size(overlay_pos, Vec2::new(320.0, 50.0));

    ui.scope_builder(egui::UiBuilder::new().max_rect(overlay_rect), |ui| {
        ui.vertical(|ui| {
            ui.label(
                RichText::new(mode.to_string())
                    .strong()
                    .size(13.0)
                    .color(colors::tooltip::TITLE),
            );
            let summary = if state.store.is_loaded() {
                format!("{} countries", state.store.countries().len())
            } else {
                "Loading data...".to_string()
            };
            ui.label(RichText::new(summary).size(11.0).color(colors::tooltip::TEXT));
        });
    });
}

fn draw_zoom_controls(ui: &mut egui::Ui, rect: &Rect, state: &mut AppState, now: Instant) {
    let size = Vec2::new(44.0, 140.0);
    let controls_rect = Rect::from_min_size(rect.right_bottom() - size - Vec2::splat(12.0), size);

    ui.scope_builder(egui::UiBuilder::new().max_rect(controls_rect), |ui| {
        ui.vertical_centered(|ui| {
            let zoom_in = egui::Button::new(RichText::new(icons::MAGNIFYING_GLASS_PLUS).size(18.0));
            if ui
                .add_enabled(state.viewport.can_zoom_in(), zoom_in)
                .on_hover_text("Zoom in")
                .clicked()
            {
                state.viewport.zoom_in(now);
            }

            let zoom_out =
                egui::Button::new(RichText::new(icons::MAGNIFYING_GLASS_MINUS).size(18.0));
            if ui
                .add_enabled(state.viewport.can_zoom_out(), zoom_out)
                .on_hover_text("Zoom out")
                .clicked()
            {
                state.viewport.zoom_out(now);
            }

            let reset = egui::Button::new(RichText::new(icons::ARROW_COUNTER_CLOCKWISE).size(18.0));
            if ui.add(reset).on_hover_text("Reset view").clicked() {
                state.viewport.reset(now);
            }

            ui.label(
                RichText::new(format!("{}%", state.viewport.zoom_percent()))
                    .monospace()
                    .size(11.0)
                    .color(colors::tooltip::TEXT),
            );
        });
    });
}

fn draw_tooltip(ctx: &egui::Context, surface: Rect, tooltip: &TooltipState) {
    let placement = tooltip.placement;
    let pivot = if placement.above {
        Align2::LEFT_BOTTOM
    } else {
        Align2::LEFT_TOP
    };

    egui::Area::new(egui::Id::new("map_tooltip"))
        .order(egui::Order::Tooltip)
        .interactable(false)
        .pivot(pivot)
        .fixed_pos(surface.min + placement.anchor.to_vec2())
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style())
                .fill(colors::tooltip::BACKGROUND)
                .stroke(egui::Stroke::new(1.0, colors::tooltip::BORDER))
                .show(ui, |ui| {
                    ui.set_width(placement.width - 16.0);
                    ui.label(
                        RichText::new(&tooltip.name)
                            .strong()
                            .size(15.0)
                            .color(colors::tooltip::TITLE),
                    );
                    ui.add_space(4.0);
                    draw_tooltip_content(ui, &tooltip.content);
                });
        });
}

fn draw_tooltip_content(ui: &mut egui::Ui, content: &TooltipContent) {
    let text = |s: String| RichText::new(s).size(12.0).color(colors::tooltip::TEXT);
    let muted = |s: String| RichText::new(s).size(11.0).color(colors::tooltip::MUTED);

    match content {
        TooltipContent::Weather {
            month,
            record,
            condition,
            regions,
        } => {
            ui.label(muted(month.name().to_string()));
            ui.label(text(format!(
                "{} {:.0}°C day / {:.0}°C night",
                icons::THERMOMETER,
                record.day_temp_c,
                record.night_temp_c
            )));
            ui.label(text(format!(
                "{} {:.0} mm ({})",
                icons::DROP,
                record.rainfall_mm,
                crate::data::weather::rainfall_level(record.rainfall_mm)
            )));
            ui.label(text(format!(
                "{} ({})",
                condition.description(),
                crate::data::weather::temperature_feeling(record.day_temp_c)
            )));
            if let Some(best_time) = record.best_time {
                ui.label(text(best_time.label().to_string()));
            }
            if let Some(description) = &record.description {
                ui.add_space(2.0);
                ui.label(muted(description.clone()));
            }

            if !regions.is_empty() {
                ui.add_space(4.0);
                ui.separator();
                for region in regions {
                    let condition = WeatherCondition::for_record(&region.record);
                    ui.label(text(format!(
                        "{}: {:.0}°C, {:.0} mm, {}",
                        region.name,
                        region.record.day_temp_c,
                        region.record.rainfall_mm,
                        condition.description()
                    )));
                    if !region.description.is_empty() {
                        ui.label(muted(region.description.clone()));
                    }
                }
            }
        }
        TooltipContent::Visa {
            passport_name,
            status,
        } => {
            ui.label(muted(format!("With a {} passport", passport_name)));
            ui.label(text(status.label().to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_letterboxes_logical_view() {
        let rect = Rect::from_min_size(Pos2::ZERO, Vec2::new(2400.0, 1600.0));
        let mapping = ScreenMapping::new(rect, ViewportTransform::IDENTITY);
        assert_eq!(mapping.fit, 2.0);
        assert_eq!(mapping.origin, Pos2::new(0.0, 150.0));
        assert_eq!(mapping.to_screen(Pos2::new(600.0, 325.0)), Pos2::new(1200.0, 800.0));
    }

    #[test]
    fn test_mapping_round_trips_under_zoom() {
        let rect = Rect::from_min_size(Pos2::new(50.0, 20.0), Vec2::new(900.0, 700.0));
        let viewport = ViewportTransform {
            scale: 3.0,
            translate_x: -400.0,
            translate_y: -200.0,
        };
        let mapping = ScreenMapping::new(rect, viewport);
        let logical = Pos2::new(300.0, 250.0);
        let back = mapping.to_logical(mapping.to_screen(logical));
        assert!((back - logical).length() < 1e-3);
    }

    #[test]
    fn test_scene_tracks_store_generation() {
        let mut store = DataStore::new();
        let scene = MapScene::build(&BoundaryLayer::default(), &store);
        assert!(!scene.is_stale(&store));
        store.invalidate();
        assert!(scene.is_stale(&store));
    }
}
