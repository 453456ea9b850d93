//! Finder configuration.
//!
//! Loaded from TOML, or JSON when the path ends in `.json`. Every field has
//! a default so a partial file (or no file at all) is valid.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogSource, JsonCatalogSource, MockCatalogSource};
use crate::error::ConfigError;
use crate::search::{FilterOptions, SortOption, DEFAULT_MAX_PRICE, DEFAULT_MIN_PRICE};

/// File names searched for when no explicit path is given.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["finder.toml", ".finder.toml", "finder.json"];

/// Top-level configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FinderConfig {
    /// Catalog source configuration.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Initial browsing state.
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

impl FinderConfig {
    /// Load config from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: display.clone(),
            source,
        })?;

        Self::parse(&content, is_json(path)).map_err(|message| ConfigError::Parse {
            path: display,
            message,
        })
    }

    fn parse(content: &str, json: bool) -> Result<Self, String> {
        if json {
            serde_json::from_str(content).map_err(|e| e.to_string())
        } else {
            toml::from_str(content).map_err(|e| e.to_string())
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = if is_json(path) {
            serde_json::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            self.to_toml()?
        };

        std::fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.display().to_string(),
            source,
        })
    }

    /// Render as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Search `start` and its ancestors for a config file.
    ///
    /// Returns the first path found together with its parsed contents.
    pub fn discover(start: &Path) -> Option<(PathBuf, Result<Self, ConfigError>)> {
        start.ancestors().find_map(|dir| {
            CONFIG_FILE_NAMES
                .iter()
                .map(|name| dir.join(name))
                .find(|candidate| candidate.is_file())
                .map(|found| {
                    let loaded = Self::load(&found);
                    (found, loaded)
                })
        })
    }

    /// Filter options the browsing session starts with.
    pub fn initial_options(&self) -> FilterOptions {
        self.defaults.to_options()
    }

    /// Build the configured catalog source.
    ///
    /// Relative catalog paths resolve against `base_dir`.
    pub fn catalog_source(&self, base_dir: &Path) -> Box<dyn CatalogSource> {
        match &self.catalog.source {
            CatalogSourceKind::Mock => Box::new(
                MockCatalogSource::new().with_latency(self.catalog.latency()),
            ),
            CatalogSourceKind::File(path) => {
                let path = if path.is_absolute() {
                    path.clone()
                } else {
                    base_dir.join(path)
                };
                Box::new(JsonCatalogSource::new(path))
            }
        }
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext == "json")
}

/// Where products come from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CatalogSourceKind {
    /// Built-in demo catalog.
    #[default]
    Mock,
    /// JSON file of products.
    File(PathBuf),
}

impl From<String> for CatalogSourceKind {
    fn from(s: String) -> Self {
        if s.is_empty() || s == "mock" {
            CatalogSourceKind::Mock
        } else {
            CatalogSourceKind::File(PathBuf::from(s))
        }
    }
}

impl From<CatalogSourceKind> for String {
    fn from(kind: CatalogSourceKind) -> Self {
        match kind {
            CatalogSourceKind::Mock => "mock".to_string(),
            CatalogSourceKind::File(path) => path.display().to_string(),
        }
    }
}

/// Catalog source configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    /// `"mock"` or a path to a JSON catalog.
    #[serde(default)]
    pub source: CatalogSourceKind,

    /// Simulated latency of the mock source in milliseconds.
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
}

fn default_latency_ms() -> u64 {
    500
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            source: CatalogSourceKind::Mock,
            latency_ms: default_latency_ms(),
        }
    }
}

impl CatalogConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

/// Initial search term and filter options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DefaultsConfig {
    /// Search term applied on start.
    #[serde(default)]
    pub search: String,

    /// Category filter; empty means all categories.
    #[serde(default)]
    pub category: String,

    /// Lower price bound; `"any"` removes it.
    #[serde(default = "default_min_price", with = "price_bound")]
    pub min_price: Option<f64>,

    /// Upper price bound; `"any"` removes it.
    #[serde(default = "default_max_price", with = "price_bound")]
    pub max_price: Option<f64>,

    #[serde(default)]
    pub in_stock: bool,

    #[serde(default)]
    pub sort: SortOption,
}

fn default_min_price() -> Option<f64> {
    Some(DEFAULT_MIN_PRICE)
}

fn default_max_price() -> Option<f64> {
    Some(DEFAULT_MAX_PRICE)
}

/// Price bounds as either a number or the keyword `"any"`.
///
/// TOML has no null, so an unbounded side needs a spelling of its own.
/// JSON `null` is accepted as well.
mod price_bound {
    use serde::{de, Deserialize, Deserializer, Serializer};

    const UNBOUNDED: &str = "any";

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Bound {
        Price(f64),
        Keyword(String),
    }

    pub fn serialize<S: Serializer>(bound: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
        match bound {
            Some(price) => serializer.serialize_f64(*price),
            None => serializer.serialize_str(UNBOUNDED),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
        match Option::<Bound>::deserialize(deserializer)? {
            None => Ok(None),
            Some(Bound::Price(price)) => Ok(Some(price)),
            Some(Bound::Keyword(word)) if word == UNBOUNDED => Ok(None),
            Some(Bound::Keyword(word)) => Err(de::Error::custom(format!(
                "expected a price or \"{}\", found \"{}\"",
                UNBOUNDED, word
            ))),
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: String::new(),
            min_price: default_min_price(),
            max_price: default_max_price(),
            in_stock: false,
            sort: SortOption::default(),
        }
    }
}

impl DefaultsConfig {
    pub fn to_options(&self) -> FilterOptions {
        let options = FilterOptions::default()
            .with_price_range(self.min_price, self.max_price)
            .with_in_stock(self.in_stock)
            .with_sort(self.sort);

        if self.category.is_empty() {
            options
        } else {
            options.with_category(self.category.clone())
        }
    }
}
