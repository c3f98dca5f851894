//! Application state management.
//!
//! The catalog (records and facets) is written once when the load settles.
//! Everything the user can change lives in [`ViewState`] and moves only
//! through [`CatalogAction`]s.

mod load;
mod settings;
mod view;

pub use load::LoadState;
pub use settings::CatalogSettings;
pub use view::{visible_records, CatalogAction, ViewState};

use crate::catalog::{FacetSet, FetchResult, Record};

/// Root application state.
#[derive(Default)]
pub struct AppState {
    /// Startup settings
    pub settings: CatalogSettings,

    /// Progress of the one-time catalog load
    pub load_state: LoadState,

    /// All valid records, in payload order
    records: Vec<Record>,

    /// Facet values derived from `records`
    facets: FacetSet,

    /// Search, filter and sort selections
    pub view: ViewState,
}

impl AppState {
    pub fn new(settings: CatalogSettings) -> Self {
        Self {
            settings,
            view: ViewState::new(),
            ..Default::default()
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn facets(&self) -> &FacetSet {
        &self.facets
    }

    /// True when the catalog still has to be requested.
    ///
    /// A non-empty record set or a load already in progress (or settled)
    /// suppresses a second request.
    pub fn needs_load(&self) -> bool {
        self.records.is_empty() && self.load_state.is_idle()
    }

    pub fn begin_load(&mut self) {
        log::info!("Loading catalog from {}", self.settings.endpoint);
        self.load_state = LoadState::Loading {
            since: web_time::Instant::now(),
        };
    }

    /// Stores the settled fetch. Only a load in progress accepts a result,
    /// so records and facets are set once and `Loaded`/`Failed` are final.
    pub fn finish_load(&mut self, result: FetchResult) {
        if !self.load_state.is_loading() {
            log::warn!(
                "Ignoring catalog result; load state is {:?}",
                self.load_state
            );
            return;
        }

        match result {
            Ok(catalog) => {
                if catalog.skipped > 0 {
                    log::warn!("Skipped {} malformed measures", catalog.skipped);
                }
                self.facets = FacetSet::from_records(&catalog.records);
                self.load_state = LoadState::Loaded {
                    count: catalog.records.len(),
                    skipped: catalog.skipped,
                };
                self.records = catalog.records;
            }
            Err(e) => {
                log::error!("Failed to load catalog: {}", e);
                self.load_state = LoadState::Failed(e);
            }
        }
    }

    /// Records to display for the current view.
    pub fn visible_records(&self) -> Vec<&Record> {
        visible_records(self.records(), &self.view)
    }

    /// One-line summary for the top bar.
    pub fn status_message(&self, visible: usize) -> String {
        match &self.load_state {
            LoadState::Idle => "Ready".to_string(),
            LoadState::Loading { since } => format!(
                "Loading catalog... ({:.0}s)",
                since.elapsed().as_secs_f64()
            ),
            LoadState::Loaded { count, skipped: 0 } => {
                format!("Showing {} of {} datasets", visible, count)
            }
            LoadState::Loaded { count, skipped } => format!(
                "Showing {} of {} datasets ({} skipped)",
                visible, count, skipped
            ),
            LoadState::Failed(_) => "Failed to load catalog".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{parse_catalog, CatalogError, FacetKind};

    const PAYLOAD: &str = r#"{
        "measures": {
            "Beta": {
                "name": "Beta",
                "cubes": [{ "annotations": {
                    "topic": "Health", "subtopic": "Vitals", "source_name": "CDC",
                    "source_description": "desc2", "dataset_link": "https://b"
                } }]
            },
            "Alpha": {
                "name": "Alpha",
                "cubes": [{ "annotations": {
                    "topic": "Econ", "subtopic": "Jobs", "source_name": "BLS",
                    "source_description": "desc1", "dataset_link": "https://a"
                } }]
            },
            "Gamma": { "name": "Gamma", "cubes": [{ "annotations": { "topic": "" } }] },
            "Broken": { "name": "Broken" }
        }
    }"#;

    #[test]
    fn test_load_lifecycle() {
        let mut state = AppState::new(CatalogSettings::default());
        assert!(state.needs_load());

        state.begin_load();
        assert!(state.load_state.is_loading());
        assert!(!state.needs_load());

        state.finish_load(parse_catalog(PAYLOAD));
        assert!(matches!(
            state.load_state,
            LoadState::Loaded {
                count: 3,
                skipped: 1
            }
        ));
        assert!(!state.needs_load());
        assert_eq!(state.records().len(), 3);
        assert_eq!(state.facets().values(FacetKind::Topic), ["Econ", "Health"]);
        assert_eq!(state.facets().values(FacetKind::Source), ["BLS", "CDC"]);

        let names: Vec<_> = state.visible_records().iter().map(|r| r.name.clone()).collect();
        assert_eq!(names, ["Alpha", "Beta", "Gamma"]);
        assert_eq!(state.status_message(3), "Showing 3 of 3 datasets (1 skipped)");
    }

    #[test]
    fn test_records_are_set_once() {
        let mut state = AppState::new(CatalogSettings::default());
        state.begin_load();
        state.finish_load(parse_catalog(PAYLOAD));

        state.finish_load(parse_catalog(r#"{ "measures": {} }"#));
        assert_eq!(state.records().len(), 3);

        state.finish_load(Err(CatalogError::Status(500)));
        assert!(state.load_state.error().is_none());
    }

    #[test]
    fn test_empty_load_is_final() {
        let mut state = AppState::new(CatalogSettings::default());
        state.begin_load();
        state.finish_load(parse_catalog(r#"{ "measures": {} }"#));

        state.finish_load(parse_catalog(PAYLOAD));
        assert!(state.records().is_empty());
        assert!(state.facets().values(FacetKind::Topic).is_empty());
        assert!(matches!(
            state.load_state,
            LoadState::Loaded {
                count: 0,
                skipped: 0
            }
        ));
        assert!(!state.needs_load());
    }

    #[test]
    fn test_failed_load_is_final() {
        let mut state = AppState::new(CatalogSettings::default());
        state.begin_load();
        state.finish_load(Err(CatalogError::Status(500)));

        state.finish_load(parse_catalog(PAYLOAD));
        assert!(state.records().is_empty());
        assert!(matches!(
            state.load_state.error(),
            Some(CatalogError::Status(500))
        ));
        assert!(!state.needs_load());
    }

    #[test]
    fn test_result_without_load_in_progress_is_ignored() {
        let mut state = AppState::new(CatalogSettings::default());
        state.finish_load(parse_catalog(PAYLOAD));

        assert!(state.records().is_empty());
        assert!(state.load_state.is_idle());
    }

    #[test]
    fn test_failed_load_leaves_empty_view() {
        let mut state = AppState::new(CatalogSettings::default());
        state.begin_load();
        state.finish_load(Err(CatalogError::Request("offline".to_string())));

        assert!(matches!(state.load_state.error(), Some(CatalogError::Request(_))));
        assert!(state.visible_records().is_empty());
        assert!(!state.needs_load());
        assert_eq!(state.status_message(0), "Failed to load catalog");
    }

    #[test]
    fn test_empty_measures_is_a_successful_load() {
        let mut state = AppState::new(CatalogSettings::default());
        state.begin_load();
        state.finish_load(parse_catalog(r#"{ "measures": {} }"#));

        assert!(matches!(
            state.load_state,
            LoadState::Loaded {
                count: 0,
                skipped: 0
            }
        ));
        assert!(state.visible_records().is_empty());
        assert!(state.load_state.error().is_none());
        assert_eq!(state.status_message(0), "Showing 0 of 0 datasets");
    }

    #[test]
    fn test_view_actions_on_loaded_state() {
        let mut state = AppState::new(CatalogSettings::default());
        state.begin_load();
        state.finish_load(parse_catalog(PAYLOAD));

        state
            .view
            .apply(CatalogAction::SetFacet(FacetKind::Topic, "Health".to_string()));
        let names: Vec<_> = state.visible_records().iter().map(|r| r.name.clone()).collect();
        assert_eq!(names, ["Beta"]);
    }
}
