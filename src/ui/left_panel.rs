//! Left panel UI: month, category and passport selectors.

use crate::data::{DataLoadChannel, DataSourceConfig, Month};
use crate::state::{AppState, MapCategory};
use crate::ui::colors;
use eframe::egui::{self, RichText};

pub fn render_left_panel(
    ctx: &egui::Context,
    state: &mut AppState,
    loader: &mut DataLoadChannel,
    config: &DataSourceConfig,
) {
    egui::SidePanel::left("left_panel")
        .resizable(true)
        .default_width(230.0)
        .min_width(200.0)
        .max_width(360.0)
        .show(ctx, |ui| {
            ui.heading("Explore");
            ui.separator();

            render_month_section(ui, state);
            ui.add_space(5.0);

            render_category_section(ui, state);
            ui.add_space(5.0);

            if state.selection.category == MapCategory::Visa {
                render_passport_section(ui, state);
                ui.add_space(5.0);
            }

            ui.separator();
            render_data_section(ui, state, loader, config);
        });
}

fn render_month_section(ui: &mut egui::Ui, state: &mut AppState) {
    let enabled = state.selection.category.is_weather();
    egui::CollapsingHeader::new(RichText::new("Month").strong())
        .default_open(true)
        .show(ui, |ui| {
            ui.add_enabled_ui(enabled, |ui| {
                egui::ComboBox::from_id_salt("month_selector")
                    .selected_text(state.selection.month.name())
                    .width(150.0)
                    .show_ui(ui, |ui| {
                        for month in Month::ALL {
                            ui.selectable_value(&mut state.selection.month, month, month.name());
                        }
                    });
            });
        });
}

fn render_category_section(ui: &mut egui::Ui, state: &mut AppState) {
    egui::CollapsingHeader::new(RichText::new("Color by").strong())
        .default_open(true)
        .show(ui, |ui| {
            for category in MapCategory::ALL {
                ui.radio_value(&mut state.selection.category, category, category.label());
            }
        });
}

fn render_passport_section(ui: &mut egui::Ui, state: &mut AppState) {
    let passports = state.store.passports();
    let selected = state
        .selection
        .passport
        .as_ref()
        .map(|code| state.store.display_name(code))
        .unwrap_or_else(|| "Select passport".to_string());

    egui::CollapsingHeader::new(RichText::new("Passport").strong())
        .default_open(true)
        .show(ui, |ui| {
            if passports.is_empty() {
                ui.label(
                    RichText::new("No visa data loaded")
                        .small()
                        .color(colors::ui::LABEL),
                );
                return;
            }

            egui::ComboBox::from_id_salt("passport_selector")
                .selected_text(selected)
                .width(180.0)
                .height(400.0)
                .show_ui(ui, |ui| {
                    for (code, name) in passports {
                        ui.selectable_value(&mut state.selection.passport, Some(code), name);
                    }
                });
        });
}

fn render_data_section(
    ui: &mut egui::Ui,
    state: &mut AppState,
    loader: &mut DataLoadChannel,
    config: &DataSourceConfig,
) {
    ui.horizontal(|ui| {
        ui.label(RichText::new("Countries").small().color(colors::ui::LABEL));
        ui.label(
            RichText::new(state.store.countries().len().to_string())
                .small()
                .color(colors::ui::VALUE),
        );
    });

    ui.add_space(5.0);
    ui.add_enabled_ui(!loader.is_loading(), |ui| {
        if ui.button("Reload data").clicked() {
            state.store.invalidate();
            state.interaction.clear();
            state.status_message = "Loading data...".to_string();
            loader.request(ui.ctx().clone(), config.clone());
        }
    });

    if let Some(dir) = &config.data_dir {
        ui.label(
            RichText::new(format!("Source: {}", dir.display()))
                .small()
                .color(colors::ui::LABEL),
        );
    }
}
