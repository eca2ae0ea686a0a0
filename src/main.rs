#![warn(clippy::all)]

//! Wayfarer Map - an interactive world map for planning travel.
//!
//! Countries are colored by monthly temperature, rainfall, best time to
//! visit, or visa requirements for a chosen passport. Hovering or tapping a
//! country shows its details; the map pans and zooms.

mod color_resolver;
mod data;
mod geo;
mod state;
mod ui;

use data::{DataBundle, DataLoadChannel, DataSourceConfig};
use eframe::egui;
use geo::BoundaryLayer;
use state::AppState;
use ui::MapScene;

// Native entry point
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    env_logger::init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1440.0, 860.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Wayfarer Map",
        native_options,
        Box::new(|cc| Ok(Box::new(WayfarerApp::new(cc)))),
    )
}

// WASM entry point - main is not called on wasm32
#[cfg(target_arch = "wasm32")]
fn main() {}

/// Entry point for the WASM application.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub async fn start() {
    use eframe::wasm_bindgen::JsCast as _;

    // Redirect `log` messages to `console.log`:
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let document = web_sys::window()
            .expect("No window")
            .document()
            .expect("No document");

        let canvas = document
            .get_element_by_id("app_canvas")
            .expect("Failed to find app_canvas")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("app_canvas was not a HtmlCanvasElement");

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(WayfarerApp::new(cc)))),
            )
            .await;

        // Remove the loading text once the app has loaded:
        if let Some(loading_text) = document.get_element_by_id("loading_text") {
            match start_result {
                Ok(_) => {
                    loading_text.remove();
                }
                Err(e) => {
                    loading_text.set_inner_html(
                        "<p>The app has crashed. See the developer console for details.</p>",
                    );
                    panic!("Failed to start eframe: {e:?}");
                }
            }
        }
    });
}

/// Main application state and logic.
pub struct WayfarerApp {
    /// Application state containing all sub-states
    state: AppState,

    /// Where datasets are read from
    data_config: DataSourceConfig,

    /// Channel for async dataset loading
    data_loader: DataLoadChannel,

    /// Boundary outlines from the last load
    boundaries: BoundaryLayer,

    /// Projected geometry, rebuilt when the store generation changes
    scene: MapScene,
}

impl WayfarerApp {
    /// Creates a new WayfarerApp instance and starts the initial data load.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        let data_config = DataSourceConfig::from_env();
        let mut data_loader = DataLoadChannel::new();
        data_loader.request(cc.egui_ctx.clone(), data_config.clone());

        Self {
            state: AppState::new(),
            data_config,
            data_loader,
            boundaries: BoundaryLayer::default(),
            scene: MapScene::default(),
        }
    }

    fn install_bundle(&mut self, bundle: DataBundle) {
        self.state.store.install(bundle.countries, bundle.visa);
        self.boundaries = bundle.boundaries;
        self.state.resolve_pending_passport();
        self.state.interaction.clear();

        self.state.status_message = if self.boundaries.is_empty() {
            "World outlines unavailable, showing markers only".to_string()
        } else {
            format!(
                "{} countries, {} outlines",
                self.state.store.countries().len(),
                self.boundaries.len()
            )
        };
    }
}

impl eframe::App for WayfarerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(bundle) = self.data_loader.try_recv() {
            self.install_bundle(bundle);
        }

        if self.scene.is_stale(&self.state.store) {
            self.scene = MapScene::build(&self.boundaries, &self.state.store);
        }

        let mode_before = self.state.selection.mode();

        // Side and top/bottom panels must be rendered before CentralPanel
        ui::render_top_bar(ctx, &self.state, self.data_loader.is_loading());
        ui::render_left_panel(
            ctx,
            &mut self.state,
            &mut self.data_loader,
            &self.data_config,
        );
        ui::render_right_panel(ctx, &self.state);

        if self.state.selection.mode() != mode_before {
            self.state.interaction.clear();
        }

        ui::render_canvas(ctx, &mut self.state, &self.scene);
    }
}
