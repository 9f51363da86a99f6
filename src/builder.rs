//! The fluent request builder.
//!
//! Every mutation takes `&mut self` and returns `&mut Self`, so calls chain.
//! [`RequestBuilder::make`] returns an owned copy of the current request;
//! later mutation of the builder never reaches a request already made.

use std::str::FromStr;

use crate::config::{BuilderConfig, GroupOperatorPolicy};
use crate::error::GaError;
use crate::filter::Filter;
use crate::request::{
    DateRange, Dimension, FilterClause, FilterLogicalOperator, FormattingType, Metric, OrderBy,
    OrderType, ReportRequest, SamplingLevel, SortOrder,
};

/// Which filter clause collection an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterClauseKind {
    /// `dimensionFilterClauses`
    Dimension,
    /// `metricFilterClauses`
    Metric,
}

impl FilterClauseKind {
    /// Name of the descriptor field holding these clauses.
    pub fn field_name(&self) -> &'static str {
        match self {
            FilterClauseKind::Dimension => "dimensionFilterClauses",
            FilterClauseKind::Metric => "metricFilterClauses",
        }
    }
}

impl FromStr for FilterClauseKind {
    type Err = GaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "dimensionFilterClauses" => Ok(FilterClauseKind::Dimension),
            "metricFilterClauses" => Ok(FilterClauseKind::Metric),
            other => Err(GaError::InvalidClauseKind(other.to_string())),
        }
    }
}

/// Arguments to [`RequestBuilder::order_by`]. Unset parts take the
/// defaults: value ordering, descending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSpec {
    pub name: String,
    pub order_type: Option<OrderType>,
    pub sort_order: Option<SortOrder>,
}

impl OrderSpec {
    /// Sort rule for the bare field `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            order_type: None,
            sort_order: None,
        }
    }

    /// Sort by something other than the field value.
    pub fn order_type(mut self, order_type: OrderType) -> Self {
        self.order_type = Some(order_type);
        self
    }

    /// Sort in the given direction.
    pub fn sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = Some(sort_order);
        self
    }
}

impl From<&str> for OrderSpec {
    fn from(name: &str) -> Self {
        OrderSpec::new(name)
    }
}

impl From<String> for OrderSpec {
    fn from(name: String) -> Self {
        OrderSpec::new(name)
    }
}

/// Builds one [`ReportRequest`] through chained mutations.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    config: BuilderConfig,
    request: ReportRequest,
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestBuilder {
    /// Builder with the default configuration (`ga` namespace, 10 rows per page).
    pub fn new() -> Self {
        Self::with_config(BuilderConfig::default())
    }

    /// Builder whose fresh state comes from `config`.
    pub fn with_config(config: BuilderConfig) -> Self {
        let request = initial_request(&config);
        tracing::debug!("New request builder (namespace '{}')", config.namespace);
        Self { config, request }
    }

    /// Configuration this builder starts from.
    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Discard everything set so far.
    pub fn reset(&mut self) -> &mut Self {
        self.request = initial_request(&self.config);
        tracing::debug!("Request builder reset");
        self
    }

    /// Snapshot the request built so far.
    pub fn make(&self) -> ReportRequest {
        tracing::debug!(
            "Made request: {} date ranges, {} metrics, {} dimensions, {} orders, \
             {}+{} filter clauses",
            self.request.date_ranges.len(),
            self.request.metrics.len(),
            self.request.dimensions.len(),
            self.request.order_bys.len(),
            self.request.dimension_filter_clauses.len(),
            self.request.metric_filter_clauses.len(),
        );
        self.request.clone()
    }

    // =========================================================================
    // Scalars
    // =========================================================================

    /// Set the view to report on.
    ///
    /// # Example
    /// ```
    /// use gareq::RequestBuilder;
    /// let req = RequestBuilder::new().set_view(12345).make();
    /// assert_eq!(req.view_id.as_deref(), Some("ga:12345"));
    /// ```
    pub fn set_view(&mut self, view: impl std::fmt::Display) -> &mut Self {
        self.request.view_id = Some(self.config.qualify(&view.to_string()));
        self
    }

    /// Include totals in the response.
    pub fn show_totals(&mut self) -> &mut Self {
        self.request.hide_totals = false;
        self
    }

    /// Include minimum and maximum value ranges in the response.
    pub fn show_value_ranges(&mut self) -> &mut Self {
        self.request.hide_value_ranges = false;
        self
    }

    /// Maximum number of rows per page.
    pub fn set_page_size(&mut self, size: i32) -> &mut Self {
        self.request.page_size = size;
        self
    }

    /// Continue from the token a previous response returned.
    pub fn set_page_token(&mut self, token: impl Into<String>) -> &mut Self {
        self.request.page_token = token.into();
        self
    }

    /// Request a specific sample size.
    pub fn set_sampling(&mut self, level: SamplingLevel) -> &mut Self {
        self.request.sampling_level = Some(level);
        self
    }

    /// Smaller sample, faster response.
    pub fn set_fast_sampling(&mut self) -> &mut Self {
        self.set_sampling(SamplingLevel::Small)
    }

    /// Larger sample, more accurate response.
    pub fn set_precise_sample(&mut self) -> &mut Self {
        self.set_sampling(SamplingLevel::Large)
    }

    /// Set the raw filter expression (e.g. `ga:browser==Firefox`).
    pub fn set_filters_expression(&mut self, expression: impl Into<String>) -> &mut Self {
        self.request.filters_expression = Some(expression.into());
        self
    }

    /// Drop the raw filter expression.
    pub fn clear_filters_expression(&mut self) -> &mut Self {
        self.request.filters_expression = None;
        self
    }

    // =========================================================================
    // Date ranges
    // =========================================================================

    /// Append a date range.
    pub fn add_date(&mut self, range: DateRange) -> &mut Self {
        self.request.date_ranges.push(range);
        self
    }

    // =========================================================================
    // Dimensions
    // =========================================================================

    /// Append a dimension.
    pub fn add_dimension(&mut self, name: &str) -> &mut Self {
        self.request.dimensions.push(Dimension {
            name: self.config.qualify(name),
            histogram_buckets: None,
        });
        self
    }

    /// Append a histogram dimension. Buckets are stored in their string form.
    ///
    /// # Example
    /// ```
    /// use gareq::RequestBuilder;
    /// let req = RequestBuilder::new()
    ///     .add_dimension_with_buckets("sessionCount", [1, 10, 100])
    ///     .make();
    /// assert_eq!(
    ///     req.dimensions[0].histogram_buckets,
    ///     Some(vec!["1".to_string(), "10".to_string(), "100".to_string()])
    /// );
    /// ```
    pub fn add_dimension_with_buckets<I, B>(&mut self, name: &str, buckets: I) -> &mut Self
    where
        I: IntoIterator<Item = B>,
        B: ToString,
    {
        let buckets: Vec<String> = buckets.into_iter().map(|b| b.to_string()).collect();
        self.request.dimensions.push(Dimension {
            name: self.config.qualify(name),
            histogram_buckets: Some(buckets),
        });
        self
    }

    /// Append each dimension in order.
    pub fn add_dimensions<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            self.add_dimension(name.as_ref());
        }
        self
    }

    /// Drop every dimension with this name. Unknown names are ignored.
    pub fn remove_dimension(&mut self, name: &str) -> &mut Self {
        let target = self.config.qualify(name);
        self.request.dimensions.retain(|d| d.name != target);
        self
    }

    /// Drop every dimension named in `names`.
    pub fn remove_dimensions<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            self.remove_dimension(name.as_ref());
        }
        self
    }

    /// Remove all dimensions.
    pub fn clear_dimensions(&mut self) -> &mut Self {
        self.request.dimensions = Vec::new();
        self
    }

    // =========================================================================
    // Metrics
    // =========================================================================

    /// Append a metric with the configured default formatting (INTEGER
    /// unless configured otherwise).
    pub fn add_metric(&mut self, name: &str) -> &mut Self {
        let format = self.config.metric_format;
        self.add_metric_as(name, format)
    }

    /// Append a metric with an explicit formatting type.
    pub fn add_metric_as(&mut self, name: &str, formatting_type: FormattingType) -> &mut Self {
        self.request.metrics.push(Metric {
            expression: self.config.qualify(name),
            formatting_type,
        });
        self
    }

    /// Append a metric formatted as an integer.
    pub fn add_metric_int(&mut self, name: &str) -> &mut Self {
        self.add_metric_as(name, FormattingType::Integer)
    }

    /// Append a metric formatted as a float.
    pub fn add_metric_float(&mut self, name: &str) -> &mut Self {
        self.add_metric_as(name, FormattingType::Float)
    }

    /// Append a metric formatted as currency.
    pub fn add_metric_currency(&mut self, name: &str) -> &mut Self {
        self.add_metric_as(name, FormattingType::Currency)
    }

    /// Append a metric formatted as a percentage.
    pub fn add_metric_percent(&mut self, name: &str) -> &mut Self {
        self.add_metric_as(name, FormattingType::Percent)
    }

    /// Append a metric formatted as a duration.
    pub fn add_metric_time(&mut self, name: &str) -> &mut Self {
        self.add_metric_as(name, FormattingType::Time)
    }

    /// Append each metric in order, with the default formatting.
    pub fn add_metrics<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            self.add_metric(name.as_ref());
        }
        self
    }

    /// Drop every metric with this name. Unknown names are ignored.
    pub fn remove_metric(&mut self, name: &str) -> &mut Self {
        let target = self.config.qualify(name);
        self.request.metrics.retain(|m| m.expression != target);
        self
    }

    /// Drop every metric named in `names`.
    pub fn remove_metrics<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            self.remove_metric(name.as_ref());
        }
        self
    }

    /// Remove all metrics.
    pub fn clear_metrics(&mut self) -> &mut Self {
        self.request.metrics = Vec::new();
        self
    }

    // =========================================================================
    // Ordering
    // =========================================================================

    /// Append a sort rule.
    ///
    /// # Example
    /// ```
    /// use gareq::RequestBuilder;
    /// use gareq::builder::OrderSpec;
    /// use gareq::request::{OrderType, SortOrder};
    ///
    /// let req = RequestBuilder::new()
    ///     .order_by("sessions")
    ///     .order_by(OrderSpec::new("date").order_type(OrderType::DimensionAsInteger))
    ///     .make();
    /// assert_eq!(req.order_bys[0].sort_order, SortOrder::Descending);
    /// assert_eq!(req.order_bys[1].order_type, OrderType::DimensionAsInteger);
    /// ```
    pub fn order_by(&mut self, spec: impl Into<OrderSpec>) -> &mut Self {
        let spec = spec.into();
        self.request.order_bys.push(OrderBy {
            field_name: self.config.qualify(&spec.name),
            order_type: spec.order_type.unwrap_or_default(),
            sort_order: spec.sort_order.unwrap_or_default(),
        });
        self
    }

    /// Sort ascending by `name`'s value.
    pub fn order_asc(&mut self, name: &str) -> &mut Self {
        self.order_by(OrderSpec::new(name).sort_order(SortOrder::Ascending))
    }

    /// Sort descending by `name`'s value.
    pub fn order_desc(&mut self, name: &str) -> &mut Self {
        self.order_by(OrderSpec::new(name))
    }

    /// Order a histogram dimension by its buckets.
    pub fn order_histogram(&mut self, name: &str) -> &mut Self {
        self.order_by(OrderSpec::new(name).order_type(OrderType::HistogramBucket))
    }

    // =========================================================================
    // Filter clauses
    // =========================================================================

    /// Append a clause holding the single `filter`, joined with AND.
    pub fn add_filter(&mut self, kind: FilterClauseKind, filter: impl Filter) -> &mut Self {
        let snapshot = filter.make();
        self.push_clause(kind, FilterLogicalOperator::And, vec![snapshot])
    }

    /// Append one clause grouping all `filters` under `operator`.
    ///
    /// # Example
    /// ```
    /// use gareq::{DimensionFilter, FilterClauseKind, RequestBuilder};
    /// use gareq::request::FilterLogicalOperator;
    ///
    /// let req = RequestBuilder::new()
    ///     .add_filters(
    ///         FilterClauseKind::Dimension,
    ///         [
    ///             DimensionFilter::exact("country", "Japan"),
    ///             DimensionFilter::exact("country", "Peru"),
    ///         ],
    ///         FilterLogicalOperator::Or,
    ///     )
    ///     .make();
    /// assert_eq!(req.dimension_filter_clauses.len(), 1);
    /// assert_eq!(req.dimension_filter_clauses[0].filters.len(), 2);
    /// ```
    pub fn add_filters<I, F>(
        &mut self,
        kind: FilterClauseKind,
        filters: I,
        operator: FilterLogicalOperator,
    ) -> &mut Self
    where
        I: IntoIterator<Item = F>,
        F: Filter,
    {
        // Snapshot everything before touching our own clauses.
        let snapshots: Vec<serde_json::Value> = filters.into_iter().map(|f| f.make()).collect();
        self.push_clause(kind, operator, snapshots)
    }

    /// Append a dimension clause holding the single `filter`, joined with AND.
    pub fn add_dimension_filter(&mut self, filter: impl Filter) -> &mut Self {
        self.add_filter(FilterClauseKind::Dimension, filter)
    }

    /// Group `filters` into one dimension clause.
    ///
    /// `operator` only takes effect under [`GroupOperatorPolicy::Honor`];
    /// by default the clause is always AND.
    ///
    /// [`GroupOperatorPolicy::Honor`]: crate::config::GroupOperatorPolicy::Honor
    pub fn add_dimension_filters<I, F>(
        &mut self,
        filters: I,
        operator: FilterLogicalOperator,
    ) -> &mut Self
    where
        I: IntoIterator<Item = F>,
        F: Filter,
    {
        let operator = self.group_operator(operator);
        self.add_filters(FilterClauseKind::Dimension, filters, operator)
    }

    /// Group `filters` into one dimension clause joined with OR.
    pub fn add_dimension_or_filters<I, F>(&mut self, filters: I) -> &mut Self
    where
        I: IntoIterator<Item = F>,
        F: Filter,
    {
        self.add_filters(FilterClauseKind::Dimension, filters, FilterLogicalOperator::Or)
    }

    /// Append a metric clause holding the single `filter`, joined with AND.
    pub fn add_metric_filter(&mut self, filter: impl Filter) -> &mut Self {
        self.add_filter(FilterClauseKind::Metric, filter)
    }

    /// Group `filters` into one metric clause. See [`Self::add_dimension_filters`]
    /// for how `operator` is treated.
    pub fn add_metric_filters<I, F>(
        &mut self,
        filters: I,
        operator: FilterLogicalOperator,
    ) -> &mut Self
    where
        I: IntoIterator<Item = F>,
        F: Filter,
    {
        let operator = self.group_operator(operator);
        self.add_filters(FilterClauseKind::Metric, filters, operator)
    }

    /// Group `filters` into one metric clause joined with OR.
    pub fn add_metric_or_filters<I, F>(&mut self, filters: I) -> &mut Self
    where
        I: IntoIterator<Item = F>,
        F: Filter,
    {
        self.add_filters(FilterClauseKind::Metric, filters, FilterLogicalOperator::Or)
    }

    fn group_operator(&self, requested: FilterLogicalOperator) -> FilterLogicalOperator {
        match self.config.group_operator {
            GroupOperatorPolicy::AlwaysAnd => FilterLogicalOperator::And,
            GroupOperatorPolicy::Honor => requested,
        }
    }

    fn push_clause(
        &mut self,
        kind: FilterClauseKind,
        operator: FilterLogicalOperator,
        filters: Vec<serde_json::Value>,
    ) -> &mut Self {
        tracing::trace!(
            "{} += {} clause of {} filters",
            kind.field_name(),
            operator,
            filters.len()
        );
        let clauses = match kind {
            FilterClauseKind::Dimension => &mut self.request.dimension_filter_clauses,
            FilterClauseKind::Metric => &mut self.request.metric_filter_clauses,
        };
        clauses.push(FilterClause { operator, filters });
        self
    }
}

/// Fresh request state. Allocates new collections on every call.
fn initial_request(config: &BuilderConfig) -> ReportRequest {
    ReportRequest::initial(config.page_size, config.page_token.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{DimensionFilter, MetricFilter};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn names(req: &ReportRequest) -> Vec<&str> {
        req.dimensions.iter().map(|d| d.name.as_str()).collect()
    }

    fn expressions(req: &ReportRequest) -> Vec<&str> {
        req.metrics.iter().map(|m| m.expression.as_str()).collect()
    }

    #[test]
    fn test_fresh_builder_defaults() {
        let req = RequestBuilder::new().make();
        assert_eq!(req, ReportRequest::default());
        assert!(req.hide_totals);
        assert!(req.hide_value_ranges);
        assert_eq!(req.page_size, 10);
        assert_eq!(req.page_token, "0");
        assert_eq!(req.sampling_level, None);
    }

    #[test]
    fn test_scalars_last_write_wins() {
        let req = RequestBuilder::new()
            .set_view("1")
            .set_view("2")
            .set_page_size(500)
            .set_page_token("abc")
            .set_fast_sampling()
            .set_precise_sample()
            .show_totals()
            .show_value_ranges()
            .make();
        assert_eq!(req.view_id.as_deref(), Some("ga:2"));
        assert_eq!(req.page_size, 500);
        assert_eq!(req.page_token, "abc");
        assert_eq!(req.sampling_level, Some(SamplingLevel::Large));
        assert!(!req.hide_totals);
        assert!(!req.hide_value_ranges);
    }

    #[test]
    fn test_filters_expression() {
        let mut builder = RequestBuilder::new();
        builder.set_filters_expression("ga:browser==Firefox");
        assert_eq!(builder.make().filters_expression.as_deref(), Some("ga:browser==Firefox"));
        builder.clear_filters_expression();
        assert_eq!(builder.make().filters_expression, None);
    }

    #[test]
    fn test_dimensions_add_remove() {
        let mut builder = RequestBuilder::new();
        builder.add_dimensions(["x", "y", "z", "y"]);
        builder.remove_dimension("y").remove_dimension("missing");
        assert_eq!(names(&builder.make()), vec!["ga:x", "ga:z"]);

        builder.remove_dimensions(vec!["x".to_string()]);
        assert_eq!(names(&builder.make()), vec!["ga:z"]);

        builder.clear_dimensions();
        assert!(builder.make().dimensions.is_empty());
    }

    #[test]
    fn test_histogram_buckets_are_stored() {
        let req = RequestBuilder::new()
            .add_dimension_with_buckets("sessionCount", [0.5, 2.0])
            .add_dimension("country")
            .make();
        assert_eq!(
            req.dimensions[0].histogram_buckets,
            Some(vec!["0.5".to_string(), "2".to_string()])
        );
        assert_eq!(req.dimensions[1].histogram_buckets, None);
    }

    #[test]
    fn test_metrics_formatting() {
        let req = RequestBuilder::new()
            .add_metric("a")
            .add_metric_int("b")
            .add_metric_float("c")
            .add_metric_currency("d")
            .add_metric_percent("e")
            .add_metric_time("f")
            .make();
        let formats: Vec<_> = req.metrics.iter().map(|m| m.formatting_type).collect();
        assert_eq!(
            formats,
            vec![
                FormattingType::Integer,
                FormattingType::Integer,
                FormattingType::Float,
                FormattingType::Currency,
                FormattingType::Percent,
                FormattingType::Time,
            ]
        );
    }

    #[test]
    fn test_metrics_add_remove() {
        let mut builder = RequestBuilder::new();
        builder.add_metrics(["a", "b", "c"]).add_metric_float("b");
        builder.remove_metric("b");
        assert_eq!(expressions(&builder.make()), vec!["ga:a", "ga:c"]);
        builder.remove_metrics(["a", "nope"]);
        assert_eq!(expressions(&builder.make()), vec!["ga:c"]);
        builder.clear_metrics();
        assert!(builder.make().metrics.is_empty());
    }

    #[test]
    fn test_configured_metric_format() {
        let config = BuilderConfig {
            metric_format: FormattingType::Float,
            ..BuilderConfig::default()
        };
        let req = RequestBuilder::with_config(config).add_metric("bounceRate").make();
        assert_eq!(req.metrics[0].formatting_type, FormattingType::Float);
    }

    #[test]
    fn test_ordering_shortcuts() {
        let req = RequestBuilder::new()
            .order_desc("sessions")
            .order_asc("country")
            .order_histogram("sessionCount")
            .order_by(
                OrderSpec::new("date")
                    .order_type(OrderType::Delta)
                    .sort_order(SortOrder::Ascending),
            )
            .make();
        assert_eq!(
            req.order_bys,
            vec![
                OrderBy {
                    field_name: "ga:sessions".into(),
                    order_type: OrderType::Value,
                    sort_order: SortOrder::Descending,
                },
                OrderBy {
                    field_name: "ga:country".into(),
                    order_type: OrderType::Value,
                    sort_order: SortOrder::Ascending,
                },
                OrderBy {
                    field_name: "ga:sessionCount".into(),
                    order_type: OrderType::HistogramBucket,
                    sort_order: SortOrder::Descending,
                },
                OrderBy {
                    field_name: "ga:date".into(),
                    order_type: OrderType::Delta,
                    sort_order: SortOrder::Ascending,
                },
            ]
        );
    }

    #[test]
    fn test_single_filter_clause() {
        let f = DimensionFilter::exact("country", "Japan");
        let req = RequestBuilder::new().add_filter(FilterClauseKind::Dimension, &f).make();
        assert_eq!(
            req.dimension_filter_clauses,
            vec![FilterClause {
                operator: FilterLogicalOperator::And,
                filters: vec![f.make()],
            }]
        );
        assert!(req.metric_filter_clauses.is_empty());
    }

    #[test]
    fn test_or_group_clause() {
        let f1 = MetricFilter::greater_than("sessions", 10);
        let f2 = MetricFilter::is_missing("sessions");
        let req = RequestBuilder::new().add_metric_or_filters([&f1, &f2]).make();
        assert_eq!(req.metric_filter_clauses.len(), 1);
        assert_eq!(req.metric_filter_clauses[0].operator, FilterLogicalOperator::Or);
        assert_eq!(req.metric_filter_clauses[0].filters, vec![f1.make(), f2.make()]);
    }

    #[test]
    fn test_grouped_shortcut_ignores_operator_by_default() {
        let filters = [json!({ "a": 1 }), json!({ "b": 2 })];
        let req = RequestBuilder::new()
            .add_dimension_filters(&filters, FilterLogicalOperator::Or)
            .add_metric_filters(&filters, FilterLogicalOperator::Or)
            .make();
        assert_eq!(req.dimension_filter_clauses[0].operator, FilterLogicalOperator::And);
        assert_eq!(req.metric_filter_clauses[0].operator, FilterLogicalOperator::And);
    }

    #[test]
    fn test_grouped_shortcut_honors_operator_when_configured() {
        let config = BuilderConfig::default().with_group_operator(GroupOperatorPolicy::Honor);
        let filters = [json!({ "a": 1 })];
        let req = RequestBuilder::with_config(config)
            .add_dimension_filters(&filters, FilterLogicalOperator::Or)
            .add_metric_filters(&filters, FilterLogicalOperator::And)
            .make();
        assert_eq!(req.dimension_filter_clauses[0].operator, FilterLogicalOperator::Or);
        assert_eq!(req.metric_filter_clauses[0].operator, FilterLogicalOperator::And);
    }

    #[test]
    fn test_clause_kind_from_field_name() {
        assert_eq!(
            "dimensionFilterClauses".parse::<FilterClauseKind>().unwrap(),
            FilterClauseKind::Dimension
        );
        assert_eq!(
            "metricFilterClauses".parse::<FilterClauseKind>().unwrap(),
            FilterClauseKind::Metric
        );
        assert!("orderBys".parse::<FilterClauseKind>().is_err());
    }

    #[test]
    fn test_reset_restores_configured_defaults() {
        let config = BuilderConfig {
            page_size: 250,
            ..BuilderConfig::default()
        };
        let mut builder = RequestBuilder::with_config(config);
        builder.set_view("1").add_metric("x").set_page_size(5).show_totals();
        builder.reset();
        let req = builder.make();
        assert_eq!(req.view_id, None);
        assert!(req.metrics.is_empty());
        assert_eq!(req.page_size, 250);
        assert!(req.hide_totals);
    }

    #[test]
    fn test_custom_namespace() {
        let config = BuilderConfig::default().with_namespace("mcf");
        let req = RequestBuilder::with_config(config)
            .set_view("9")
            .add_dimension("source")
            .add_metric("totalConversions")
            .order_asc("source")
            .make();
        assert_eq!(req.view_id.as_deref(), Some("mcf:9"));
        assert_eq!(req.dimensions[0].name, "mcf:source");
        assert_eq!(req.metrics[0].expression, "mcf:totalConversions");
        assert_eq!(req.order_bys[0].field_name, "mcf:source");
    }

    #[test]
    fn test_custom_namespace_filters() {
        let config = BuilderConfig::default().with_namespace("mcf");
        let mut builder = RequestBuilder::with_config(config);
        let scoped = builder
            .config()
            .dimension_filter(DimensionFilter::exact("source", "google"));
        let metric = builder
            .config()
            .metric_filter(MetricFilter::greater_than("totalConversions", 0));
        builder
            .add_dimension("source")
            .add_dimension_filter(&scoped)
            .add_metric_filter(&metric)
            .add_dimension_filter(DimensionFilter::exact("source", "bing"));

        let req = builder.make();
        let dimension_filters = &req.dimension_filter_clauses;
        assert_eq!(dimension_filters[0].filters[0]["dimensionName"], json!(req.dimensions[0].name));
        assert_eq!(req.metric_filter_clauses[0].filters[0]["metricName"], "mcf:totalConversions");
        // Filters built without the config keep the default namespace.
        assert_eq!(dimension_filters[1].filters[0]["dimensionName"], "ga:source");
    }
}
