use serde::{Deserialize, Serialize};

/// How a metric value is rendered by the reporting API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FormattingType {
    #[default]
    Integer,
    Float,
    Currency,
    Percent,
    /// Seconds, rendered as HH:MM:SS
    Time,
}

wire_str!(FormattingType, "formatting type", {
    Integer => "INTEGER",
    Float => "FLOAT",
    Currency => "CURRENCY",
    Percent => "PERCENT",
    Time => "TIME",
});

/// What an order entry sorts by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    /// Sort by the field's value
    #[default]
    Value,
    /// Sort by the change between the first two date ranges
    Delta,
    /// Sort by a weighted value (ratio metrics only)
    Smart,
    /// Sort by histogram bucket order (histogram dimensions only)
    HistogramBucket,
    /// Parse dimension values as integers before sorting
    DimensionAsInteger,
}

wire_str!(OrderType, "order type", {
    Value => "VALUE",
    Delta => "DELTA",
    Smart => "SMART",
    HistogramBucket => "HISTOGRAM_BUCKET",
    DimensionAsInteger => "DIMENSION_AS_INTEGER",
});

/// Sort order direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

wire_str!(SortOrder, "sort order", {
    Ascending => "ASCENDING",
    Descending => "DESCENDING",
});

/// Logical operator joining the filters of one clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FilterLogicalOperator {
    #[default]
    And,
    Or,
}

wire_str!(FilterLogicalOperator, error = crate::error::GaError::operator, {
    And => "AND",
    Or => "OR",
});

/// Sample size requested from the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SamplingLevel {
    /// Let the API balance speed and accuracy
    Default,
    /// Fast response, smaller sample
    Small,
    /// Precise response, larger sample
    Large,
}

wire_str!(SamplingLevel, "sampling level", {
    Default => "DEFAULT",
    Small => "SMALL",
    Large => "LARGE",
});
