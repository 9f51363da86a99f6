//! Metric filters.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::config::{DEFAULT_NAMESPACE, qualify};
use crate::filter::Filter;

/// Comparison applied to a metric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MetricFilterOperator {
    Equal,
    LessThan,
    GreaterThan,
    /// Metric is absent; the comparison value is ignored
    IsMissing,
}

wire_str!(MetricFilterOperator, "metric filter operator", {
    Equal => "EQUAL",
    LessThan => "LESS_THAN",
    GreaterThan => "GREATER_THAN",
    IsMissing => "IS_MISSING",
});

/// A filter on one metric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricFilter {
    namespace: String,
    name: String,
    operator: MetricFilterOperator,
    comparison_value: String,
    not: bool,
}

impl MetricFilter {
    pub fn new(
        name: impl Into<String>,
        operator: MetricFilterOperator,
        value: impl ToString,
    ) -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            name: name.into(),
            operator,
            comparison_value: value.to_string(),
            not: false,
        }
    }

    pub fn equal(name: impl Into<String>, value: impl ToString) -> Self {
        Self::new(name, MetricFilterOperator::Equal, value)
    }

    pub fn less_than(name: impl Into<String>, value: impl ToString) -> Self {
        Self::new(name, MetricFilterOperator::LessThan, value)
    }

    pub fn greater_than(name: impl Into<String>, value: impl ToString) -> Self {
        Self::new(name, MetricFilterOperator::GreaterThan, value)
    }

    pub fn is_missing(name: impl Into<String>) -> Self {
        Self::new(name, MetricFilterOperator::IsMissing, "")
    }

    pub fn not(mut self) -> Self {
        self.not = true;
        self
    }

    pub fn in_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn operator(&self) -> MetricFilterOperator {
        self.operator
    }
}

impl Filter for MetricFilter {
    fn make(&self) -> serde_json::Value {
        json!({
            "metricName": qualify(&self.namespace, &self.name),
            "not": self.not,
            "operator": self.operator.as_str(),
            "comparisonValue": self.comparison_value,
        })
    }
}
