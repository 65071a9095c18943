//! Composable Metric Profiling Library
//!
//! This library provides the metric layer of a data profiler: base
//! statistics measured upstream, and composed metrics derived from them
//! without ever failing on missing or degenerate input.
//!
//! # Overview
//!
//! The library is organized into composable modules:
//!
//! - **data**: Core data structures (MetricValue, ValueType, ResultStore)
//! - **metric**: The Metric trait, static base metrics, composed metrics
//! - **catalog**: Registration with dependency validation and evaluation order
//! - **profile**: Evaluation of composed metrics over result stores
//!
//! # Example
//!
//! ```
//! use composable_profiler::prelude::*;
//!
//! let catalog = MetricCatalog::builder()
//!     .register_static(StaticMetric::count())
//!     .register_static(StaticMetric::like_count())
//!     .register_composed(Ratio::like_ratio())
//!     .build()
//!     .unwrap();
//!
//! let base = ResultStore::from_json(r#"{"count": 100, "likeCount": 25}"#).unwrap();
//! let report = Profiler::new(catalog).profile("users.email", &base).unwrap();
//!
//! assert_eq!(report.results.get("likeRatio"), Some(MetricValue::Float(0.25)));
//! ```

pub mod catalog;
pub mod data;
pub mod error;
pub mod metric;
pub mod profile;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::catalog::{builtin_entries, CatalogBuilder, CatalogConfig, MetricCatalog};
    pub use crate::data::{MetricValue, ResultStore, ValueType};
    pub use crate::error::{ProfilerError, Result};
    pub use crate::metric::{
        builtin_composed, builtin_static, names, CatalogEntry, ComposedMetric, DuplicateCount,
        Metric, NullRatio, Ratio, StaticMetric,
    };
    pub use crate::profile::{ProfileReport, Profiler};
}
