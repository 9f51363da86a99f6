use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::GaResult;
use crate::request::{FilterLogicalOperator, FormattingType, OrderType, SamplingLevel, SortOrder};

/// Page size of a fresh request.
pub const DEFAULT_PAGE_SIZE: i32 = 10;

/// Page token of a fresh request (first page).
pub const DEFAULT_PAGE_TOKEN: &str = "0";

/// One end of a date range: a `YYYY-MM-DD` date or a relative token
/// such as `today`, `yesterday` or `7daysAgo`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateBound(String);

impl DateBound {
    /// The bound as sent to the API.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DateBound {
    fn from(s: &str) -> Self {
        DateBound(s.to_string())
    }
}

impl From<String> for DateBound {
    fn from(s: String) -> Self {
        DateBound(s)
    }
}

impl From<NaiveDate> for DateBound {
    fn from(d: NaiveDate) -> Self {
        DateBound(d.format("%Y-%m-%d").to_string())
    }
}

/// A reporting window. Either bound may be left open.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl DateRange {
    /// Range with both bounds set.
    ///
    /// # Example
    /// ```
    /// use gareq::DateRange;
    /// let range = DateRange::between("7daysAgo", "yesterday");
    /// assert_eq!(range.start_date.as_deref(), Some("7daysAgo"));
    /// ```
    pub fn between(from: impl Into<DateBound>, to: impl Into<DateBound>) -> Self {
        Self::default().starting(from).ending(to)
    }

    /// Set the start bound. An empty bound leaves the start open.
    pub fn starting(mut self, from: impl Into<DateBound>) -> Self {
        self.start_date = non_empty(from.into());
        self
    }

    /// Set the end bound. An empty bound leaves the end open.
    pub fn ending(mut self, to: impl Into<DateBound>) -> Self {
        self.end_date = non_empty(to.into());
        self
    }
}

fn non_empty(bound: DateBound) -> Option<String> {
    if bound.0.is_empty() { None } else { Some(bound.0) }
}

/// A requested metric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metric {
    /// Namespaced metric name, e.g. `ga:sessions`
    pub expression: String,
    #[serde(default)]
    pub formatting_type: FormattingType,
}

/// A requested dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dimension {
    /// Namespaced dimension name, e.g. `ga:country`
    pub name: String,
    /// Bucket boundaries for numeric dimensions, as strings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub histogram_buckets: Option<Vec<String>>,
}

/// One sort rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderBy {
    pub field_name: String,
    #[serde(default)]
    pub order_type: OrderType,
    #[serde(default)]
    pub sort_order: SortOrder,
}

/// A group of filter descriptors combined under one operator.
///
/// Filter descriptors are opaque: they are whatever the filter produced
/// when the clause was added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterClause {
    #[serde(default)]
    pub operator: FilterLogicalOperator,
    pub filters: Vec<serde_json::Value>,
}

/// The request descriptor for a single report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportRequest {
    pub view_id: Option<String>,
    pub date_ranges: Vec<DateRange>,
    pub metrics: Vec<Metric>,
    pub dimensions: Vec<Dimension>,
    pub order_bys: Vec<OrderBy>,
    pub dimension_filter_clauses: Vec<FilterClause>,
    pub metric_filter_clauses: Vec<FilterClause>,
    pub filters_expression: Option<String>,
    pub hide_totals: bool,
    pub hide_value_ranges: bool,
    pub page_size: i32,
    pub page_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sampling_level: Option<SamplingLevel>,
}

impl ReportRequest {
    /// Fresh descriptor with empty collections and the given paging defaults.
    pub fn initial(page_size: i32, page_token: impl Into<String>) -> Self {
        Self {
            view_id: None,
            date_ranges: vec![],
            metrics: vec![],
            dimensions: vec![],
            order_bys: vec![],
            dimension_filter_clauses: vec![],
            metric_filter_clauses: vec![],
            filters_expression: None,
            hide_totals: true,
            hide_value_ranges: true,
            page_size,
            page_token: page_token.into(),
            sampling_level: None,
        }
    }

    /// Render as a JSON value.
    pub fn to_json(&self) -> GaResult<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Render as compact JSON text.
    pub fn to_json_string(&self) -> GaResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Render as indented JSON text.
    pub fn to_json_pretty(&self) -> GaResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for ReportRequest {
    fn default() -> Self {
        Self::initial(DEFAULT_PAGE_SIZE, DEFAULT_PAGE_TOKEN)
    }
}

/// The `batchGet` body: several report requests sent together.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportBatch {
    #[serde(default)]
    pub report_requests: Vec<ReportRequest>,
}

impl ReportBatch {
    /// Empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a request snapshot.
    pub fn push(&mut self, request: ReportRequest) -> &mut Self {
        self.report_requests.push(request);
        self
    }

    /// Number of requests in the batch.
    pub fn len(&self) -> usize {
        self.report_requests.len()
    }

    /// Whether no request has been pushed.
    pub fn is_empty(&self) -> bool {
        self.report_requests.is_empty()
    }

    /// Detached copy of the batch.
    pub fn make(&self) -> ReportBatch {
        self.clone()
    }

    /// Render the `batchGet` body as a JSON value.
    pub fn to_json(&self) -> GaResult<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}
