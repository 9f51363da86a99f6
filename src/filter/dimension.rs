//! Dimension filters.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::config::{DEFAULT_NAMESPACE, qualify};
use crate::filter::Filter;

/// How a dimension value is matched against the filter expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DimensionFilterOperator {
    Regexp,
    BeginsWith,
    EndsWith,
    /// Substring match
    Partial,
    Exact,
    NumericEqual,
    NumericGreaterThan,
    NumericLessThan,
    /// Value is one of the expressions
    InList,
}

wire_str!(DimensionFilterOperator, "dimension filter operator", {
    Regexp => "REGEXP",
    BeginsWith => "BEGINS_WITH",
    EndsWith => "ENDS_WITH",
    Partial => "PARTIAL",
    Exact => "EXACT",
    NumericEqual => "NUMERIC_EQUAL",
    NumericGreaterThan => "NUMERIC_GREATER_THAN",
    NumericLessThan => "NUMERIC_LESS_THAN",
    InList => "IN_LIST",
});

/// A filter on one dimension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionFilter {
    namespace: String,
    name: String,
    operator: DimensionFilterOperator,
    expressions: Vec<String>,
    not: bool,
    case_sensitive: bool,
}

impl DimensionFilter {
    /// Create a filter on the bare dimension `name`.
    pub fn new<I, S>(
        name: impl Into<String>,
        operator: DimensionFilterOperator,
        expressions: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            name: name.into(),
            operator,
            expressions: expressions.into_iter().map(Into::into).collect(),
            not: false,
            case_sensitive: false,
        }
    }

    /// Dimension value equals `value`.
    ///
    /// # Example
    /// ```
    /// use gareq::{DimensionFilter, Filter};
    /// let f = DimensionFilter::exact("country", "Japan");
    /// assert_eq!(f.make()["operator"], "EXACT");
    /// ```
    pub fn exact(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::single(name, DimensionFilterOperator::Exact, value.into())
    }

    /// Dimension value matches the regular expression.
    pub fn regexp(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self::single(name, DimensionFilterOperator::Regexp, pattern.into())
    }

    pub fn begins_with(name: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self::single(name, DimensionFilterOperator::BeginsWith, prefix.into())
    }

    pub fn ends_with(name: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self::single(name, DimensionFilterOperator::EndsWith, suffix.into())
    }

    /// Dimension value contains `part`.
    pub fn partial(name: impl Into<String>, part: impl Into<String>) -> Self {
        Self::single(name, DimensionFilterOperator::Partial, part.into())
    }

    /// Dimension value is one of `values`.
    pub fn in_list<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(name, DimensionFilterOperator::InList, values)
    }

    pub fn numeric_equal(name: impl Into<String>, value: impl ToString) -> Self {
        Self::single(name, DimensionFilterOperator::NumericEqual, value.to_string())
    }

    pub fn numeric_greater_than(name: impl Into<String>, value: impl ToString) -> Self {
        Self::single(name, DimensionFilterOperator::NumericGreaterThan, value.to_string())
    }

    pub fn numeric_less_than(name: impl Into<String>, value: impl ToString) -> Self {
        Self::single(name, DimensionFilterOperator::NumericLessThan, value.to_string())
    }

    fn single(
        name: impl Into<String>,
        operator: DimensionFilterOperator,
        expression: String,
    ) -> Self {
        Self::new(name, operator, [expression])
    }

    /// Invert the match.
    pub fn not(mut self) -> Self {
        self.not = true;
        self
    }

    pub fn case_sensitive(mut self) -> Self {
        self.case_sensitive = true;
        self
    }

    /// Use a namespace other than `ga` for the dimension name.
    pub fn in_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn operator(&self) -> DimensionFilterOperator {
        self.operator
    }
}

impl Filter for DimensionFilter {
    fn make(&self) -> serde_json::Value {
        json!({
            "dimensionName": qualify(&self.namespace, &self.name),
            "not": self.not,
            "operator": self.operator.as_str(),
            "expressions": self.expressions,
            "caseSensitive": self.case_sensitive,
        })
    }
}
