//! Metric definitions: the capability trait, static base metrics, and
//! composed metrics derived from other metrics' results.
//!
//! Two families implement [`Metric`]:
//!
//! - [`StaticMetric`]: a base statistic measured directly against a data
//!   source. Only its descriptor lives here; the measuring happens upstream.
//! - [`ComposedMetric`]: a pure formula over a [`ResultStore`] that
//!   declares which other metrics it reads.
//!
//! [`CatalogEntry`] is the tagged variant over both.
//!
//! [`ResultStore`]: crate::data::ResultStore

mod composed;
pub mod names;
mod static_metric;

pub use composed::{builtin_composed, ComposedMetric, DuplicateCount, NullRatio, Ratio};
pub use static_metric::{builtin_static, StaticMetric};

use crate::data::ValueType;
use std::sync::Arc;

/// Capability shared by every metric.
pub trait Metric: Send + Sync + std::fmt::Debug {
    /// Stable, catalog-unique identifier. Also the key into the result store.
    fn name(&self) -> &'static str;

    /// Declared type of the metric's value.
    fn value_type(&self) -> ValueType;
}

/// A metric as registered in a catalog.
#[derive(Debug, Clone)]
pub enum CatalogEntry {
    Static(StaticMetric),
    Composed(Arc<dyn ComposedMetric>),
}

impl CatalogEntry {
    /// Identifiers this entry depends on. Empty for static metrics.
    pub fn required(&self) -> &[&'static str] {
        match self {
            CatalogEntry::Static(_) => &[],
            CatalogEntry::Composed(m) => m.required(),
        }
    }

    pub fn is_composed(&self) -> bool {
        matches!(self, CatalogEntry::Composed(_))
    }

    /// The composed metric, if this entry is one.
    pub fn as_composed(&self) -> Option<&Arc<dyn ComposedMetric>> {
        match self {
            CatalogEntry::Composed(m) => Some(m),
            CatalogEntry::Static(_) => None,
        }
    }
}

impl Metric for CatalogEntry {
    fn name(&self) -> &'static str {
        match self {
            CatalogEntry::Static(m) => m.name(),
            CatalogEntry::Composed(m) => m.name(),
        }
    }

    fn value_type(&self) -> ValueType {
        match self {
            CatalogEntry::Static(m) => m.value_type(),
            CatalogEntry::Composed(m) => m.value_type(),
        }
    }
}

impl From<StaticMetric> for CatalogEntry {
    fn from(metric: StaticMetric) -> Self {
        CatalogEntry::Static(metric)
    }
}

impl From<Arc<dyn ComposedMetric>> for CatalogEntry {
    fn from(metric: Arc<dyn ComposedMetric>) -> Self {
        CatalogEntry::Composed(metric)
    }
}
