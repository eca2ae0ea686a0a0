//! Top bar UI: app title and status.

use crate::state::AppState;
use crate::ui::colors;
use eframe::egui::{self, Color32, RichText};

pub fn render_top_bar(ctx: &egui::Context, state: &AppState, is_loading: bool) {
    egui::TopBottomPanel::top("top_bar")
        .exact_height(36.0)
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                ui.label(
                    RichText::new("Wayfarer Map")
                        .strong()
                        .size(16.0)
                        .color(Color32::WHITE),
                );

                ui.separator();

                if is_loading {
                    ui.spinner();
                }

                let color = if is_loading {
                    colors::ui::LOADING
                } else {
                    Color32::GRAY
                };
                ui.label(RichText::new(&state.status_message).size(13.0).color(color));
            });
        });
}
