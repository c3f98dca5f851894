//! Record types for catalog entries.
//!
//! A [`Record`] is the validated form of one API measure. Only the fields
//! the viewer displays or filters on are kept.

use super::facets::FacetKind;
use serde_json::{Map, Value};

/// Annotation fields read from the first cube of a measure.
///
/// Every field is optional. Absent, `null` and non-string values all
/// collapse to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotations {
    pub topic: Option<String>,
    pub subtopic: Option<String>,
    pub source_name: Option<String>,
    pub source_description: Option<String>,
    pub dataset_link: Option<String>,
}

impl Annotations {
    /// Extracts the known annotation keys from a raw JSON object.
    pub fn from_json(map: &Map<String, Value>) -> Self {
        let text = |key: &str| map.get(key).and_then(Value::as_str).map(str::to_owned);

        Self {
            topic: text("topic"),
            subtopic: text("subtopic"),
            source_name: text("source_name"),
            source_description: text("source_description"),
            dataset_link: text("dataset_link"),
        }
    }

    /// Returns the annotation value backing a facet.
    pub fn facet(&self, kind: FacetKind) -> Option<&str> {
        match kind {
            FacetKind::Topic => self.topic.as_deref(),
            FacetKind::SubTopic => self.subtopic.as_deref(),
            FacetKind::Source => self.source_name.as_deref(),
        }
    }
}

/// One dataset descriptor from the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Key of the measure in the payload's `measures` object.
    pub key: String,
    /// Display name, never empty.
    pub name: String,
    pub annotations: Annotations,
}

impl Record {
    pub fn new(key: impl Into<String>, name: impl Into<String>, annotations: Annotations) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            annotations,
        }
    }

    /// Source description, or the empty string when absent.
    pub fn description(&self) -> &str {
        self.annotations.source_description.as_deref().unwrap_or("")
    }

    pub fn dataset_link(&self) -> Option<&str> {
        self.annotations
            .dataset_link
            .as_deref()
            .filter(|link| !link.is_empty())
    }

    /// Free-text match used by the search box.
    ///
    /// The name is lower-cased before matching but the term is not, so a
    /// term containing uppercase letters can only match through the
    /// description. The description is matched as-is.
    pub fn matches_search(&self, term: &str) -> bool {
        self.name.to_lowercase().contains(term) || self.description().contains(term)
    }

    /// Plain-text rendering of every card field, untruncated.
    pub fn card_text(&self) -> String {
        let field = |value: &Option<String>| value.clone().unwrap_or_default();

        format!(
            "{}\n{}\nSource Name: {}\nTopic: {}\nSubtopic: {}\nLink: {}",
            self.name,
            self.description(),
            field(&self.annotations.source_name),
            field(&self.annotations.topic),
            field(&self.annotations.subtopic),
            field(&self.annotations.dataset_link),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(name: &str, description: Option<&str>) -> Record {
        Record::new(
            name,
            name,
            Annotations {
                source_description: description.map(str::to_owned),
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_annotations_ignore_non_string_values() {
        let raw = json!({
            "topic": "Economy",
            "subtopic": null,
            "source_name": 42,
            "dataset_link": "https://example.org"
        });
        let annotations = Annotations::from_json(raw.as_object().unwrap());

        assert_eq!(annotations.topic.as_deref(), Some("Economy"));
        assert_eq!(annotations.subtopic, None);
        assert_eq!(annotations.source_name, None);
        assert_eq!(annotations.source_description, None);
        assert_eq!(annotations.dataset_link.as_deref(), Some("https://example.org"));
    }

    #[test]
    fn test_search_is_case_insensitive_on_name() {
        let r = record("Household Income", None);

        assert!(r.matches_search("income"));
        assert!(r.matches_search("hold inc"));
        // Uppercase terms never match the lower-cased name.
        assert!(!r.matches_search("Income"));
    }

    #[test]
    fn test_search_is_case_sensitive_on_description() {
        let r = record("Wages", Some("Census Bureau ACS"));

        assert!(r.matches_search("Census"));
        assert!(r.matches_search("ACS"));
        assert!(!r.matches_search("acs"));
        assert!(!r.matches_search("census"));
    }

    #[test]
    fn test_empty_term_matches_without_description() {
        let r = record("Wages", None);
        assert!(r.matches_search(""));
    }

    #[test]
    fn test_card_text_keeps_full_description() {
        let long = "line one. ".repeat(50);
        let r = record("Wages", Some(&long));

        assert!(r.card_text().contains(long.as_str()));
        assert!(r.card_text().starts_with("Wages\n"));
    }

    #[test]
    fn test_empty_dataset_link_is_none() {
        let mut r = record("Wages", None);
        r.annotations.dataset_link = Some(String::new());
        assert_eq!(r.dataset_link(), None);
    }
}
