#![warn(clippy::all)]

//! Data USA Catalog - A web-based browser for the Data USA dataset catalog.
//!
//! The catalog is fetched once on startup. Datasets can then be searched by
//! name or source description, filtered by topic, subtopic and source, and
//! sorted by name. Each result links to the dataset's external page.

mod catalog;
mod state;
mod ui;

use catalog::CatalogChannel;
use eframe::egui;
use state::{AppState, CatalogSettings};

// Native entry point
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    env_logger::init();

    let native_options = eframe::NativeOptions::default();

    eframe::run_native(
        "Data USA Catalog",
        native_options,
        Box::new(|cc| Ok(Box::new(CatalogApp::new(cc)))),
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
                Box::new(|cc| Ok(Box::new(CatalogApp::new(cc)))),
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
pub struct CatalogApp {
    /// Application state: settings, load progress, records and view
    state: AppState,

    /// Channel for the one-time catalog fetch
    catalog_channel: CatalogChannel,
}

impl CatalogApp {
    /// Creates a new CatalogApp instance.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        let settings = CatalogSettings::load();
        log::info!("Catalog endpoint: {}", settings.endpoint);

        Self {
            state: AppState::new(settings),
            catalog_channel: CatalogChannel::new(),
        }
    }

    /// Starts the catalog fetch on the first frame.
    fn start_load_if_needed(&mut self, ctx: &egui::Context) {
        if !self.state.needs_load() {
            return;
        }

        self.state.begin_load();
        self.catalog_channel.fetch(
            ctx.clone(),
            self.state.settings.endpoint.clone(),
            self.state.settings.request_timeout(),
        );
    }
}

impl eframe::App for CatalogApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.start_load_if_needed(ctx);

        // Check for the settled fetch
        if let Some(result) = self.catalog_channel.try_recv() {
            self.state.finish_load(result);
        }

        // Keep the elapsed time in the status line ticking while loading
        if self.state.load_state.is_loading() {
            ctx.request_repaint_after(std::time::Duration::from_millis(500));
        }

        // Render UI panels in the correct order for egui layout
        // Top panels must be rendered before CentralPanel
        let actions = {
            let visible = self.state.visible_records();
            ui::render_top_bar(ctx, &self.state, visible.len());
            let actions = ui::render_controls(ctx, &self.state);
            ui::render_results(ctx, &self.state, &visible);
            actions
        };

        if !actions.is_empty() {
            for action in actions {
                self.state.view.apply(action);
            }
            ctx.request_repaint();
        }
    }
}
