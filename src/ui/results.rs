//! Results area: card grid, empty-state and failure notices.

use super::colors;
use super::LoadingIndicator;
use crate::catalog::{FacetKind, Record};
use crate::state::{AppState, LoadState};
use eframe::egui::{
    self, text::LayoutJob, Align, CornerRadius, FontId, Layout, RichText, ScrollArea, Sense,
    Stroke, StrokeKind, UiBuilder, WidgetText,
};

/// Horizontal and vertical gap between cards.
const CARD_GAP: f32 = 16.0;

/// Rows of description shown before the text is clamped with an ellipsis.
const DESCRIPTION_ROWS: usize = 3;

/// What the results area shows for a load state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsView {
    Nothing,
    Loading,
    LoadFailed,
    NoData,
    Cards,
}

/// Picks the results-area content. A failed load never reads as an empty
/// catalog.
pub fn results_view(load_state: &LoadState, visible: usize) -> ResultsView {
    match load_state {
        LoadState::Idle => ResultsView::Nothing,
        LoadState::Loading { .. } => ResultsView::Loading,
        LoadState::Failed(_) => ResultsView::LoadFailed,
        LoadState::Loaded { .. } if visible == 0 => ResultsView::NoData,
        LoadState::Loaded { .. } => ResultsView::Cards,
    }
}

pub fn render_results(ctx: &egui::Context, state: &AppState, visible: &[&Record]) {
    egui::CentralPanel::default().show(ctx, |ui| {
        match results_view(&state.load_state, visible.len()) {
            ResultsView::Nothing => {}
            ResultsView::Loading => {
                ui.add_space(40.0);
                ui.add(LoadingIndicator);
            }
            ResultsView::LoadFailed => {
                let cause = state
                    .load_state
                    .error()
                    .map(|e| e.to_string())
                    .unwrap_or_default();
                render_notice(
                    ui,
                    colors::notice::ERROR_FILL,
                    RichText::new(format!("Could not load the catalog: {}", cause))
                        .color(colors::notice::ERROR_TEXT),
                );
            }
            ResultsView::NoData => {
                render_notice(
                    ui,
                    colors::notice::WARNING_FILL,
                    RichText::new("No data found").color(colors::notice::WARNING_TEXT),
                );
            }
            ResultsView::Cards => {
                render_card_grid(ui, visible, state.settings.min_card_width);
            }
        }
    });
}

fn render_notice(ui: &mut egui::Ui, fill: egui::Color32, text: impl Into<WidgetText>) {
    egui::Frame::new()
        .fill(fill)
        .inner_margin(12.0)
        .corner_radius(CornerRadius::same(4))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(text);
        });
}

/// Number of grid columns that fit `width` with cards at least
/// `min_card_width` wide. Always at least one.
pub fn column_count(width: f32, min_card_width: f32) -> usize {
    if !width.is_finite() || min_card_width <= 0.0 {
        return 1;
    }
    (((width + CARD_GAP) / (min_card_width + CARD_GAP)).floor() as usize).max(1)
}

fn render_card_grid(ui: &mut egui::Ui, records: &[&Record], min_card_width: f32) {
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let columns = column_count(ui.available_width(), min_card_width);
            ui.spacing_mut().item_spacing.x = CARD_GAP;

            for row in records.chunks(columns) {
                ui.columns(columns, |cols| {
                    for (col, record) in cols.iter_mut().zip(row) {
                        render_card(col, record);
                    }
                });
                ui.add_space(CARD_GAP);
            }
        });
}

fn render_card(ui: &mut egui::Ui, record: &Record) -> egui::Response {
    let builder = UiBuilder::new()
        .id_salt(("card", &record.key))
        .sense(Sense::click());

    let response = ui
        .scope_builder(builder, |ui| {
            egui::Frame::group(ui.style())
                .inner_margin(12.0)
                .corner_radius(CornerRadius::same(6))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    render_card_body(ui, record);
                });
        })
        .response
        .on_hover_text("Open in a new tab");

    // Also true over the inner source link, unlike hovered().
    if response.contains_pointer() {
        ui.painter().rect_stroke(
            response.rect,
            CornerRadius::same(6),
            Stroke::new(1.0, colors::card::HOVER_BORDER),
            StrokeKind::Inside,
        );
    }

    if response.clicked() {
        if let Some(link) = record.dataset_link() {
            ui.ctx().open_url(egui::OpenUrl::new_tab(link));
        }
    }

    response.context_menu(|ui| {
        if ui.button("Copy details").clicked() {
            ui.ctx().copy_text(record.card_text());
            ui.close();
        }
    });

    response
}

fn render_card_body(ui: &mut egui::Ui, record: &Record) {
    ui.label(RichText::new(&record.name).strong().size(16.0));
    ui.add_space(2.0);

    ui.label(clamped_description(record.description(), ui.available_width()));
    ui.add_space(6.0);

    let annotations = &record.annotations;
    for kind in FacetKind::all() {
        render_field(ui, kind.label(), annotations.facet(*kind));
    }

    ui.separator();

    ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
        if let Some(link) = record.dataset_link() {
            ui.add(
                egui::Hyperlink::from_label_and_url("View Source \u{bb}", link)
                    .open_in_new_tab(true),
            );
        }
    });
}

/// Description laid out with at most [`DESCRIPTION_ROWS`] rows. The full
/// text stays in the job; only the rendering is clamped.
fn clamped_description(text: &str, width: f32) -> LayoutJob {
    let mut job = LayoutJob::simple(
        text.to_owned(),
        FontId::proportional(13.0),
        colors::card::DESCRIPTION,
        width,
    );
    job.wrap.max_rows = DESCRIPTION_ROWS;
    job.wrap.break_anywhere = false;
    job
}

fn render_field(ui: &mut egui::Ui, label: &str, value: Option<&str>) {
    ui.horizontal_wrapped(|ui| {
        ui.label(
            RichText::new(format!("{}:", label))
                .strong()
                .color(colors::card::FIELD_LABEL),
        );
        ui.label(value.unwrap_or(""));
    });
}
