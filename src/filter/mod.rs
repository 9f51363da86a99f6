//! Filters that can be grouped into request filter clauses.
//!
//! The builder treats every filter as opaque: it calls [`Filter::make`] once,
//! when the clause is added, and stores whatever comes back.

pub mod dimension;
pub mod metric;

pub use self::dimension::{DimensionFilter, DimensionFilterOperator};
pub use self::metric::{MetricFilter, MetricFilterOperator};

/// Anything that can produce a filter descriptor.
pub trait Filter {
    /// Snapshot this filter as a plain JSON descriptor.
    fn make(&self) -> serde_json::Value;
}

/// A pre-built descriptor is its own snapshot.
impl Filter for serde_json::Value {
    fn make(&self) -> serde_json::Value {
        self.clone()
    }
}

impl<F: Filter + ?Sized> Filter for &F {
    fn make(&self) -> serde_json::Value {
        (**self).make()
    }
}

impl<F: Filter + ?Sized> Filter for Box<F> {
    fn make(&self) -> serde_json::Value {
        (**self).make()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_snapshot_is_detached() {
        let mut raw = json!({ "dimensionName": "ga:country" });
        let snapshot = raw.make();
        raw["dimensionName"] = json!("ga:city");
        assert_eq!(snapshot["dimensionName"], "ga:country");
    }

    #[test]
    fn test_boxed_trait_objects() {
        let filters: Vec<Box<dyn Filter>> = vec![
            Box::new(DimensionFilter::exact("country", "Japan")),
            Box::new(MetricFilter::greater_than("sessions", 10)),
        ];
        let made: Vec<_> = filters.iter().map(|f| f.make()).collect();
        assert_eq!(made[0]["dimensionName"], "ga:country");
        assert_eq!(made[1]["metricName"], "ga:sessions");
    }
}
