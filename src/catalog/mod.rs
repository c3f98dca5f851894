//! Data USA catalog integration.
//!
//! This module provides functionality for:
//! - Fetching the cube catalog from the Data USA API
//! - Parsing the loosely-typed `measures` payload into records
//! - Deriving the facet values used by the filter dropdowns

mod error;
mod facets;
mod fetch;
mod parse;
mod types;

pub use error::CatalogError;
pub use facets::{FacetKind, FacetSet};
pub use fetch::{CatalogChannel, FetchResult};
pub use parse::parse_catalog;
pub use types::{Annotations, Record};
