//! Builder configuration.
//!
//! Loaded from a TOML file such as:
//!
//! ```toml
//! namespace = "ga"
//! page_size = 1000
//! page_token = "0"
//! metric_format = "INTEGER"
//! group_operator = "honor"
//! ```
//!
//! Every key is optional.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GaError, GaResult};
use crate::filter::{DimensionFilter, MetricFilter};
use crate::request::{DEFAULT_PAGE_SIZE, DEFAULT_PAGE_TOKEN, FormattingType};

/// Namespace prefixed onto view, dimension, metric and order names.
pub const DEFAULT_NAMESPACE: &str = "ga";

/// Prefix `name` with `namespace`, e.g. `ga:sessions`.
pub fn qualify(namespace: &str, name: &str) -> String {
    format!("{}:{}", namespace, name)
}

/// What the grouped filter shortcuts (`add_dimension_filters`,
/// `add_metric_filters`) do with their operator argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupOperatorPolicy {
    /// Ignore the argument and always group with AND.
    #[default]
    AlwaysAnd,
    /// Group with the operator the caller passed.
    Honor,
}

/// Defaults a `RequestBuilder` starts from (and returns to on reset).
///
/// Filters are built independently of any builder and default to the `ga`
/// namespace. Pass them through [`BuilderConfig::dimension_filter`] or
/// [`BuilderConfig::metric_filter`] to match a configured namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    pub namespace: String,
    pub page_size: i32,
    pub page_token: String,
    /// Formatting used by `add_metric` when none is given
    pub metric_format: FormattingType,
    pub group_operator: GroupOperatorPolicy,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            page_token: DEFAULT_PAGE_TOKEN.to_string(),
            metric_format: FormattingType::default(),
            group_operator: GroupOperatorPolicy::default(),
        }
    }
}

impl BuilderConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> GaResult<Self> {
        let config: BuilderConfig = toml::from_str(content)?;
        if config.namespace.is_empty() {
            return Err(GaError::Config("namespace must not be empty".to_string()));
        }
        Ok(config)
    }

    /// Load a TOML file.
    pub fn load(path: impl AsRef<Path>) -> GaResult<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded builder config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Load `<config dir>/gareq/config.toml`, or defaults if it doesn't exist.
    pub fn load_default() -> GaResult<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(path),
            _ => Ok(Self::default()),
        }
    }

    /// Per-user config file location, when the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("gareq").join("config.toml"))
    }

    /// Use `namespace` instead of `ga`.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Choose how grouped filter shortcuts treat their operator.
    pub fn with_group_operator(mut self, policy: GroupOperatorPolicy) -> Self {
        self.group_operator = policy;
        self
    }

    /// Prefix `name` with this config's namespace.
    pub fn qualify(&self, name: &str) -> String {
        qualify(&self.namespace, name)
    }

    /// Move a dimension filter into this config's namespace.
    ///
    /// # Example
    /// ```
    /// use gareq::{BuilderConfig, DimensionFilter, Filter};
    /// let config = BuilderConfig::default().with_namespace("mcf");
    /// let f = config.dimension_filter(DimensionFilter::exact("source", "google"));
    /// assert_eq!(f.make()["dimensionName"], "mcf:source");
    /// ```
    pub fn dimension_filter(&self, filter: DimensionFilter) -> DimensionFilter {
        filter.in_namespace(self.namespace.as_str())
    }

    /// Move a metric filter into this config's namespace.
    pub fn metric_filter(&self, filter: MetricFilter) -> MetricFilter {
        filter.in_namespace(self.namespace.as_str())
    }
}
