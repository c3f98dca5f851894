//! Top bar UI: app title and load status.

use super::colors;
use crate::state::AppState;
use eframe::egui::{self, RichText};

pub fn render_top_bar(ctx: &egui::Context, state: &AppState, visible: usize) {
    egui::TopBottomPanel::top("top_bar")
        .exact_height(40.0)
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                ui.label(
                    RichText::new("Data USA")
                        .strong()
                        .size(20.0)
                        .color(colors::ui::TITLE),
                );

                ui.separator();

                // Status text, with the failure cause on hover
                let status = ui.label(
                    RichText::new(state.status_message(visible))
                        .size(13.0)
                        .color(colors::ui::LABEL),
                );
                if let Some(e) = state.load_state.error() {
                    status.on_hover_text(e.to_string());
                }
            });
        });
}
