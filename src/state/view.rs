//! View state (search, facet selections, sort direction) and the derived
//! visible list.

use crate::catalog::{FacetKind, Record};

// ============================================================================
// Actions
// ============================================================================

/// User intents emitted by the controls and applied by [`ViewState::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogAction {
    /// Search box edited (or cleared with an empty term).
    Search(String),
    /// A facet dropdown changed. An empty value removes the filter.
    SetFacet(FacetKind, String),
    /// One of the sort direction toggles was pressed.
    SetSortDirection { ascending: bool },
}

// ============================================================================
// View State
// ============================================================================

/// Filter, search and sort selections. Resets to defaults on reload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub search_term: String,
    pub selected_topic: String,
    pub selected_sub_topic: String,
    pub selected_source: String,
    pub sort_ascending: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            selected_topic: String::new(),
            selected_sub_topic: String::new(),
            selected_source: String::new(),
            sort_ascending: true,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one action.
    ///
    /// Editing the search term always switches the sort back to ascending.
    /// Facet and sort changes touch only their own field.
    pub fn apply(&mut self, action: CatalogAction) {
        log::debug!("View action: {:?}", action);

        match action {
            CatalogAction::Search(term) => {
                self.sort_ascending = true;
                self.search_term = term;
            }
            CatalogAction::SetFacet(kind, value) => {
                *self.selection_mut(kind) = value;
            }
            CatalogAction::SetSortDirection { ascending } => {
                self.sort_ascending = ascending;
            }
        }
    }

    /// Current selection for a facet; empty means "show all".
    pub fn selection(&self, kind: FacetKind) -> &str {
        match kind {
            FacetKind::Topic => &self.selected_topic,
            FacetKind::SubTopic => &self.selected_sub_topic,
            FacetKind::Source => &self.selected_source,
        }
    }

    fn selection_mut(&mut self, kind: FacetKind) -> &mut String {
        match kind {
            FacetKind::Topic => &mut self.selected_topic,
            FacetKind::SubTopic => &mut self.selected_sub_topic,
            FacetKind::Source => &mut self.selected_source,
        }
    }

    /// True when the record passes every facet filter and the search term.
    pub fn matches(&self, record: &Record) -> bool {
        FacetKind::all().iter().all(|&kind| {
            let selected = self.selection(kind);
            selected.is_empty() || record.annotations.facet(kind) == Some(selected)
        }) && record.matches_search(&self.search_term)
    }
}

// ============================================================================
// Visible List
// ============================================================================

/// Filters and sorts `records` for display.
///
/// Pure and recomputed every frame. The sort is stable, so records with
/// equal names keep their payload order.
pub fn visible_records<'a>(records: &'a [Record], view: &ViewState) -> Vec<&'a Record> {
    let mut visible: Vec<&Record> = records.iter().filter(|r| view.matches(r)).collect();

    if view.sort_ascending {
        visible.sort_by(|a, b| a.name.cmp(&b.name));
    } else {
        visible.sort_by(|a, b| b.name.cmp(&a.name));
    }

    visible
}
