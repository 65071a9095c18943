//! Core data structures: metric values and the per-run result store.

mod result_store;
mod value;

pub use result_store::ResultStore;
pub use value::{MetricValue, ValueType};
