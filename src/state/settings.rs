//! Startup settings for the catalog viewer.
//!
//! Settings are read once at startup and never written back. Natively they
//! can be overridden through environment variables; in the browser through
//! the page's query string.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Data USA cube catalog endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://datausa.io/api/cubes";

/// Catalog source and layout settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// URL of the catalog API.
    pub endpoint: String,
    /// Request timeout for native builds. Browser fetches have none.
    pub request_timeout_secs: u64,
    /// Minimum width of a result card; determines the grid column count.
    pub min_card_width: f32,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout_secs: 30,
            min_card_width: 260.0,
        }
    }
}

impl CatalogSettings {
    const ENDPOINT_VAR: &'static str = "CATALOG_ENDPOINT";
    const TIMEOUT_VAR: &'static str = "CATALOG_TIMEOUT_SECS";

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Load settings from the process environment.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let mut settings = Self::default();
        settings.apply_overrides(|key| std::env::var(key).ok());
        settings
    }

    /// Load settings from the page URL (`?endpoint=...`).
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let mut settings = Self::default();

        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let query = search.trim_start_matches('?');
        if query.is_empty() {
            return settings;
        }

        settings.apply_overrides(|key| {
            Self::query_override(query, key).map(|raw| {
                js_sys::decode_uri_component(&raw)
                    .ok()
                    .and_then(|s| s.as_string())
                    .unwrap_or(raw)
            })
        });
        settings
    }

    /// Raw query value for an override variable. Browser fetches have no
    /// timeout, so only the endpoint can be set from the URL.
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    fn query_override(query: &str, key: &str) -> Option<String> {
        match key {
            Self::ENDPOINT_VAR => query_param(query, "endpoint"),
            _ => None,
        }
    }

    /// Applies overrides looked up by variable name. Invalid values are
    /// ignored with a warning.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(endpoint) = lookup(Self::ENDPOINT_VAR) {
            let endpoint = endpoint.trim();
            if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
                log::info!("Using catalog endpoint {}", endpoint);
                self.endpoint = endpoint.to_string();
            } else {
                log::warn!("Ignoring invalid catalog endpoint: {:?}", endpoint);
            }
        }

        if let Some(timeout) = lookup(Self::TIMEOUT_VAR) {
            match timeout.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => self.request_timeout_secs = secs,
                _ => log::warn!("Ignoring invalid request timeout: {:?}", timeout),
            }
        }
    }
}

/// Returns the raw (still percent-encoded) value of a query parameter.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn query_param(query: &str, name: &str) -> Option<String> {
    query.split('&').find_map(|pair| {
        let mut kv = pair.splitn(2, '=');
        let key = kv.next().unwrap_or("");
        let value = kv.next().unwrap_or("");
        (key == name && !value.is_empty()).then(|| value.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn overridden(vars: &[(&str, &str)]) -> CatalogSettings {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let mut settings = CatalogSettings::default();
        settings.apply_overrides(|key| vars.get(key).cloned());
        settings
    }

    #[test]
    fn test_defaults() {
        let settings = CatalogSettings::default();
        assert_eq!(settings.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(settings.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_valid_overrides() {
        let settings = overridden(&[
            ("CATALOG_ENDPOINT", " http://localhost:8080/api/cubes "),
            ("CATALOG_TIMEOUT_SECS", "5"),
        ]);
        assert_eq!(settings.endpoint, "http://localhost:8080/api/cubes");
        assert_eq!(settings.request_timeout_secs, 5);
    }

    #[test]
    fn test_invalid_overrides_ignored() {
        let settings = overridden(&[
            ("CATALOG_ENDPOINT", "ftp://example.org"),
            ("CATALOG_TIMEOUT_SECS", "0"),
        ]);
        assert_eq!(settings, CatalogSettings::default());

        let settings = overridden(&[("CATALOG_TIMEOUT_SECS", "soon")]);
        assert_eq!(settings.request_timeout_secs, 30);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: CatalogSettings =
            serde_json::from_str(r#"{ "min_card_width": 300.0 }"#).unwrap();
        assert_eq!(settings.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(settings.min_card_width, 300.0);
    }

    #[test]
    fn test_query_param() {
        let query = "foo=1&endpoint=https%3A%2F%2Fexample.org&empty=";
        assert_eq!(
            query_param(query, "endpoint").as_deref(),
            Some("https%3A%2F%2Fexample.org")
        );
        assert_eq!(query_param(query, "empty"), None);
        assert_eq!(query_param(query, "missing"), None);
    }

    #[test]
    fn test_query_string_sets_endpoint_only() {
        let query = "endpoint=http://localhost:8080/api/cubes&timeout=5";
        assert_eq!(
            CatalogSettings::query_override(query, "CATALOG_TIMEOUT_SECS"),
            None
        );

        let mut settings = CatalogSettings::default();
        settings.apply_overrides(|key| CatalogSettings::query_override(query, key));
        assert_eq!(settings.endpoint, "http://localhost:8080/api/cubes");
        assert_eq!(settings.request_timeout_secs, 30);
    }
}
