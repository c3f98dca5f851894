//! Loading indicator widget.

use super::colors;
use eframe::egui::{self, Response, Spinner, Ui, Widget};

/// Spinning ring with a "Loading" label, centered in the available width.
pub struct LoadingIndicator;

impl Widget for LoadingIndicator {
    fn ui(self, ui: &mut Ui) -> Response {
        ui.vertical_centered(|ui| {
            ui.add(Spinner::new().size(80.0).color(colors::loading::RING));
            ui.add_space(8.0);
            ui.label(egui::RichText::new("Loading").size(14.0));
        })
        .response
    }
}
