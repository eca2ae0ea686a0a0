//! Right panel UI: legend for the active category.

use crate::color_resolver::{best_time_color, visa_color};
use crate::data::{BestTime, VisaCategory};
use crate::state::{AppState, MapCategory};
use crate::ui::colors;
use eframe::egui::{self, Color32, RichText, ScrollArea, Sense, Vec2};

pub fn render_right_panel(ctx: &egui::Context, state: &AppState) {
    egui::SidePanel::right("right_panel")
        .resizable(true)
        .default_width(200.0)
        .min_width(170.0)
        .max_width(320.0)
        .show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Legend");
                ui.separator();

                match state.selection.category {
                    MapCategory::Temperature => {
                        render_ramp(ui, &colors::TEMPERATURE_RAMP, "°C", "Day temperature")
                    }
                    MapCategory::Rainfall => {
                        render_ramp(ui, &colors::RAINFALL_RAMP, " mm", "Monthly rainfall")
                    }
                    MapCategory::BestTime => render_best_time(ui),
                    MapCategory::Visa => render_visa(ui),
                }

                ui.add_space(5.0);
                swatch(ui, colors::NO_DATA, "No data");
            });
        });
}

fn render_ramp(ui: &mut egui::Ui, steps: &[(f32, Color32)], unit: &str, title: &str) {
    ui.label(RichText::new(title).strong());
    let mut lower: Option<f32> = None;
    for (upper, color) in steps {
        let label = match (lower, upper.is_finite()) {
            (None, _) => format!("≤ {}{}", upper, unit),
            (Some(low), true) => format!("{}–{}{}", low, upper, unit),
            (Some(low), false) => format!("> {}{}", low, unit),
        };
        swatch(ui, *color, &label);
        lower = Some(*upper);
    }
}

fn render_best_time(ui: &mut egui::Ui) {
    ui.label(RichText::new("Best time to visit").strong());
    for best_time in [BestTime::Best, BestTime::Okay, BestTime::Avoid] {
        swatch(ui, best_time_color(best_time), best_time.label());
    }
}

fn render_visa(ui: &mut egui::Ui) {
    ui.label(RichText::new("Visa requirement").strong());
    swatch(ui, colors::visa::HOME, "Home country");
    // n/a shares the "No data" swatch below.
    for category in VisaCategory::all()
        .iter()
        .filter(|c| **c != VisaCategory::NotApplicable)
    {
        swatch(ui, visa_color(*category), category.label());
    }
}

fn swatch(ui: &mut egui::Ui, color: Color32, label: &str) {
    ui.horizontal(|ui| {
        let (rect, _) = ui.allocate_exact_size(Vec2::new(14.0, 14.0), Sense::hover());
        ui.painter().rect_filled(rect, 2.0, color);
        ui.label(RichText::new(label).small().color(colors::ui::VALUE));
    });
}
