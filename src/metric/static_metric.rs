//! Descriptors for base metrics measured directly against a data source.

use super::{names, Metric};
use crate::data::ValueType;

/// A base statistic such as a row count.
///
/// The value is produced upstream and written into the result store; this
/// type only carries the identifier and declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticMetric {
    name: &'static str,
    value_type: ValueType,
    description: &'static str,
}

impl StaticMetric {
    pub const fn new(name: &'static str, value_type: ValueType, description: &'static str) -> Self {
        Self {
            name,
            value_type,
            description,
        }
    }

    /// Number of non-null rows.
    pub const fn count() -> Self {
        Self::new(names::COUNT, ValueType::Integer, "Number of non-null values")
    }

    pub const fn null_count() -> Self {
        Self::new(names::NULL_COUNT, ValueType::Integer, "Number of null values")
    }

    pub const fn like_count() -> Self {
        Self::new(
            names::LIKE_COUNT,
            ValueType::Integer,
            "Number of values matching a LIKE pattern",
        )
    }

    pub const fn ilike_count() -> Self {
        Self::new(
            names::ILIKE_COUNT,
            ValueType::Integer,
            "Number of values matching a case-insensitive LIKE pattern",
        )
    }

    pub const fn unique_count() -> Self {
        Self::new(
            names::UNIQUE_COUNT,
            ValueType::Integer,
            "Number of values appearing exactly once",
        )
    }

    pub const fn distinct_count() -> Self {
        Self::new(
            names::DISTINCT_COUNT,
            ValueType::Integer,
            "Number of distinct values",
        )
    }

    pub const fn min() -> Self {
        Self::new(names::MIN, ValueType::Float, "Minimum value")
    }

    pub const fn max() -> Self {
        Self::new(names::MAX, ValueType::Float, "Maximum value")
    }

    pub const fn mean() -> Self {
        Self::new(names::MEAN, ValueType::Float, "Arithmetic mean")
    }

    /// Human-readable description.
    pub fn description(&self) -> &'static str {
        self.description
    }
}

impl Metric for StaticMetric {
    fn name(&self) -> &'static str {
        self.name
    }

    fn value_type(&self) -> ValueType {
        self.value_type
    }
}

/// Every built-in base metric.
pub fn builtin_static() -> Vec<StaticMetric> {
    vec![
        StaticMetric::count(),
        StaticMetric::null_count(),
        StaticMetric::like_count(),
        StaticMetric::ilike_count(),
        StaticMetric::unique_count(),
        StaticMetric::distinct_count(),
        StaticMetric::min(),
        StaticMetric::max(),
        StaticMetric::mean(),
    ]
}
