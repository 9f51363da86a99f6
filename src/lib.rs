//! # gareq
//!
//! Fluent builder for Analytics Reporting `batchGet` request descriptors.
//!
//! A [`RequestBuilder`] collects a view, date ranges, metrics, dimensions,
//! ordering, filter clauses, sampling and paging through chained calls, and
//! [`RequestBuilder::make`] hands back a detached [`ReportRequest`] that
//! serializes to the JSON the API expects.
//!
//! ## Quick Example
//!
//! ```
//! use gareq::prelude::*;
//!
//! let mut builder = RequestBuilder::new();
//! builder
//!     .set_view("12345")
//!     .add_date(DateRange::between("7daysAgo", "yesterday"))
//!     .add_metric("sessions")
//!     .add_dimension("country")
//!     .order_desc("sessions")
//!     .add_dimension_or_filters(&[
//!         DimensionFilter::exact("country", "Japan"),
//!         DimensionFilter::exact("country", "France"),
//!     ]);
//!
//! let request = builder.make();
//! assert_eq!(request.view_id.as_deref(), Some("ga:12345"));
//! assert_eq!(request.metrics[0].expression, "ga:sessions");
//! ```
//!
//! Names are passed bare and stored namespaced (`sessions` → `ga:sessions`).

/// Wire-string conversions for a fieldless enum: `as_str`, `Display`
/// and a case-insensitive `FromStr`.
///
/// Unknown strings become `GaError::InvalidValue` tagged with the given kind,
/// or whatever `error = <fn(&str) -> GaError>` builds.
macro_rules! wire_str {
    (@impl $ty:ident, $err:expr, { $($variant:ident => $wire:literal),+ }) => {
        impl $ty {
            /// The API's name for this value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $wire,)+
                }
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $ty {
            type Err = crate::error::GaError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                $(
                    if s.eq_ignore_ascii_case($wire) {
                        return Ok($ty::$variant);
                    }
                )+
                Err(($err)(s))
            }
        }
    };
    ($ty:ident, error = $err:expr, { $($variant:ident => $wire:literal),+ $(,)? }) => {
        wire_str!(@impl $ty, $err, { $($variant => $wire),+ });
    };
    ($ty:ident, $kind:literal, { $($variant:ident => $wire:literal),+ $(,)? }) => {
        wire_str!(
            @impl $ty,
            |s: &str| crate::error::GaError::invalid($kind, s),
            { $($variant => $wire),+ }
        );
    };
}

pub mod builder;
pub mod config;
pub mod error;
pub mod filter;
pub mod request;

pub use builder::{FilterClauseKind, RequestBuilder};
pub use config::{BuilderConfig, GroupOperatorPolicy};
pub use error::{GaError, GaResult};
pub use filter::{DimensionFilter, Filter, MetricFilter};
pub use request::{DateRange, ReportBatch, ReportRequest};

pub mod prelude {
    pub use crate::builder::*;
    pub use crate::config::{BuilderConfig, GroupOperatorPolicy};
    pub use crate::error::*;
    pub use crate::filter::*;
    pub use crate::request::*;
}
