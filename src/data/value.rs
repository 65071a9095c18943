//! Numeric metric values and their declared types.

use serde::{Deserialize, Serialize};

/// Declared type of a metric's value.
///
/// Consumers (serializers, storage) use this to interpret a result without
/// inspecting it at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    /// Whole numbers, e.g. row counts.
    Integer,
    /// Floating point, e.g. ratios and means.
    Float,
}

impl ValueType {
    /// Get the descriptive name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Float => "float",
        }
    }
}

impl std::fmt::Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A computed numeric value.
///
/// Serialized untagged, so `25` reads back as [`MetricValue::Int`] and
/// `0.25` as [`MetricValue::Float`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Int(i64),
    Float(f64),
}

impl MetricValue {
    /// Value as f64. Integers beyond 2^53 lose precision.
    pub fn as_f64(&self) -> f64 {
        match *self {
            MetricValue::Int(v) => v as f64,
            MetricValue::Float(v) => v,
        }
    }

    /// Value as i64, truncating (and saturating) floats.
    pub fn as_i64(&self) -> i64 {
        match *self {
            MetricValue::Int(v) => v,
            MetricValue::Float(v) => v as i64,
        }
    }

    /// Whether the value counts as "true": anything but zero.
    ///
    /// NaN is truthy.
    pub fn is_truthy(&self) -> bool {
        match *self {
            MetricValue::Int(v) => v != 0,
            MetricValue::Float(v) => v != 0.0,
        }
    }

    /// Whether the value is a finite number. Integers always are.
    pub fn is_finite(&self) -> bool {
        match *self {
            MetricValue::Int(_) => true,
            MetricValue::Float(v) => v.is_finite(),
        }
    }

    /// The [`ValueType`] this value carries.
    pub fn value_type(&self) -> ValueType {
        match self {
            MetricValue::Int(_) => ValueType::Integer,
            MetricValue::Float(_) => ValueType::Float,
        }
    }
}

impl From<i64> for MetricValue {
    fn from(v: i64) -> Self {
        MetricValue::Int(v)
    }
}

impl From<i32> for MetricValue {
    fn from(v: i32) -> Self {
        MetricValue::Int(v as i64)
    }
}

impl From<f64> for MetricValue {
    fn from(v: f64) -> Self {
        MetricValue::Float(v)
    }
}

impl std::fmt::Display for MetricValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MetricValue::Int(v) => write!(f, "{}", v),
            MetricValue::Float(v) => write!(f, "{}", v),
        }
    }
}
