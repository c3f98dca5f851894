//! Facet kinds and the distinct values derived for each of them.

use super::types::Record;
use std::collections::BTreeSet;

/// A categorical dimension usable as an exact-match filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FacetKind {
    Topic,
    SubTopic,
    Source,
}

impl FacetKind {
    /// Facets in the order their dropdowns are laid out.
    pub fn all() -> &'static [FacetKind] {
        &[FacetKind::Source, FacetKind::Topic, FacetKind::SubTopic]
    }

    /// Text of the "show all" option.
    pub fn placeholder(&self) -> &'static str {
        match self {
            FacetKind::Topic => "Select a topic",
            FacetKind::SubTopic => "Select a subtopic",
            FacetKind::Source => "Select a source",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FacetKind::Topic => "Topic",
            FacetKind::SubTopic => "Subtopic",
            FacetKind::Source => "Source Name",
        }
    }
}

/// Distinct, sorted facet values observed across the whole record set.
///
/// Computed once after the catalog loads. Every value is non-empty and
/// belongs to at least one record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetSet {
    topics: Vec<String>,
    sub_topics: Vec<String>,
    sources: Vec<String>,
}

impl FacetSet {
    pub fn from_records(records: &[Record]) -> Self {
        Self {
            topics: distinct_values(records, FacetKind::Topic),
            sub_topics: distinct_values(records, FacetKind::SubTopic),
            sources: distinct_values(records, FacetKind::Source),
        }
    }

    pub fn values(&self, kind: FacetKind) -> &[String] {
        match kind {
            FacetKind::Topic => &self.topics,
            FacetKind::SubTopic => &self.sub_topics,
            FacetKind::Source => &self.sources,
        }
    }
}

fn distinct_values(records: &[Record], kind: FacetKind) -> Vec<String> {
    records
        .iter()
        .filter_map(|record| record.annotations.facet(kind))
        .filter(|value| !value.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Annotations;

    fn record(name: &str, topic: Option<&str>, source: Option<&str>) -> Record {
        Record::new(
            name,
            name,
            Annotations {
                topic: topic.map(str::to_owned),
                source_name: source.map(str::to_owned),
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_values_are_distinct_and_sorted() {
        let records = vec![
            record("a", Some("Health"), Some("CDC")),
            record("b", Some("Economy"), Some("BLS")),
            record("c", Some("Health"), Some("BLS")),
        ];
        let facets = FacetSet::from_records(&records);

        assert_eq!(facets.values(FacetKind::Topic), ["Economy", "Health"]);
        assert_eq!(facets.values(FacetKind::Source), ["BLS", "CDC"]);
        assert!(facets.values(FacetKind::SubTopic).is_empty());
    }

    #[test]
    fn test_empty_and_absent_values_excluded() {
        let records = vec![
            record("a", Some(""), None),
            record("b", None, Some("")),
            record("c", Some("Housing"), None),
        ];
        let facets = FacetSet::from_records(&records);

        assert_eq!(facets.values(FacetKind::Topic), ["Housing"]);
        assert!(facets.values(FacetKind::Source).is_empty());
    }

    #[test]
    fn test_every_value_backed_by_a_record() {
        let records = vec![
            record("a", Some("Health"), Some("CDC")),
            record("b", Some("Economy"), None),
        ];
        let facets = FacetSet::from_records(&records);

        for kind in FacetKind::all() {
            for value in facets.values(*kind) {
                assert!(records
                    .iter()
                    .any(|r| r.annotations.facet(*kind) == Some(value.as_str())));
            }
        }
    }

    #[test]
    fn test_ordering_is_case_sensitive() {
        let records = vec![
            record("a", Some("education"), None),
            record("b", Some("Economy"), None),
        ];
        let facets = FacetSet::from_records(&records);

        assert_eq!(facets.values(FacetKind::Topic), ["Economy", "education"]);
    }
}
