//! Controls panel: search box, sort direction toggles and facet filters.
//!
//! Controls never mutate state directly. Each interaction is returned as a
//! [`CatalogAction`] and applied by the app after the frame is laid out.

use super::colors;
use crate::catalog::{FacetKind, FacetSet};
use crate::state::{AppState, CatalogAction, ViewState};
use eframe::egui::{self, RichText};
use egui_phosphor::regular as icons;

pub fn render_controls(ctx: &egui::Context, state: &AppState) -> Vec<CatalogAction> {
    let mut actions = Vec::new();

    egui::TopBottomPanel::top("controls").show(ctx, |ui| {
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            render_search_box(ui, &state.view, &mut actions);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                render_sort_toggles(ui, &state.view, &mut actions);
            });
        });

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            ui.label(RichText::new("Filter by:").color(colors::ui::LABEL));
            for kind in FacetKind::all() {
                render_facet_selector(ui, *kind, state.facets(), &state.view, &mut actions);
            }
        });

        ui.add_space(8.0);
    });

    actions
}

fn render_search_box(ui: &mut egui::Ui, view: &ViewState, actions: &mut Vec<CatalogAction>) {
    let mut term = view.search_term.clone();
    let response = ui.add(
        egui::TextEdit::singleline(&mut term)
            .hint_text("Search by name")
            .desired_width(ui.available_width() * 0.6),
    );
    if response.changed() {
        actions.push(CatalogAction::Search(term));
    }

    if ui
        .button(icons::X)
        .on_hover_text("Clear search")
        .clicked()
    {
        actions.push(CatalogAction::Search(String::new()));
    }
}

/// Right-to-left layout: widgets are added in reverse visual order.
fn render_sort_toggles(ui: &mut egui::Ui, view: &ViewState, actions: &mut Vec<CatalogAction>) {
    let descending = format!("Z {} A", icons::ARROW_RIGHT);
    if ui.selectable_label(!view.sort_ascending, descending).clicked() {
        actions.push(CatalogAction::SetSortDirection { ascending: false });
    }

    let ascending = format!("A {} Z", icons::ARROW_RIGHT);
    if ui.selectable_label(view.sort_ascending, ascending).clicked() {
        actions.push(CatalogAction::SetSortDirection { ascending: true });
    }

    ui.label(RichText::new("Sort direction:").color(colors::ui::LABEL));
}

fn render_facet_selector(
    ui: &mut egui::Ui,
    kind: FacetKind,
    facets: &FacetSet,
    view: &ViewState,
    actions: &mut Vec<CatalogAction>,
) {
    let selected = view.selection(kind);
    let mut choice = selected.to_string();

    let selected_text = if selected.is_empty() {
        kind.placeholder()
    } else {
        selected
    };

    egui::ComboBox::from_id_salt(("facet_selector", kind))
        .selected_text(selected_text)
        .width(220.0)
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut choice, String::new(), kind.placeholder());
            for value in facets.values(kind) {
                ui.selectable_value(&mut choice, value.clone(), value.as_str());
            }
        });

    if choice != selected {
        actions.push(CatalogAction::SetFacet(kind, choice));
    }
}
