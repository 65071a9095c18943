//! Evaluating a catalog's composed metrics over precomputed base results.

mod report;

pub use report::ProfileReport;

use crate::catalog::MetricCatalog;
use crate::data::{MetricValue, ResultStore};
use crate::error::Result;
use rayon::prelude::*;
use tracing::{debug, info, warn};

/// Runs composed metrics in dependency order.
///
/// Each store is evaluated on one thread. The input store is cloned, then
/// every composed metric's result (value or null) is appended so later
/// metrics can read earlier ones. A non-finite formula output is recorded
/// as no result.
#[derive(Debug, Clone)]
pub struct Profiler {
    catalog: MetricCatalog,
}

impl Profiler {
    pub fn new(catalog: MetricCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &MetricCatalog {
        &self.catalog
    }

    /// Evaluate one store.
    ///
    /// A composed metric already present in `base` is skipped; the upstream
    /// value stands.
    pub fn profile(&self, name: &str, base: &ResultStore) -> Result<ProfileReport> {
        let mut results = base.clone();
        let mut computed = Vec::new();
        let mut no_result = Vec::new();
        let mut skipped = Vec::new();

        for metric in self.catalog.ordered_composed() {
            let metric_name = metric.name();
            if results.contains(metric_name) {
                warn!(profile = %name, metric = metric_name, "result already present, skipping");
                skipped.push(metric_name.to_string());
                continue;
            }

            let value = metric.compute(&results).filter(MetricValue::is_finite);
            debug!(profile = %name, metric = metric_name, value = ?value, "computed");
            match value {
                Some(_) => computed.push(metric_name.to_string()),
                None => {
                    debug!(
                        profile = %name,
                        metric = metric_name,
                        required = ?metric.required(),
                        "no result"
                    );
                    no_result.push(metric_name.to_string());
                }
            }
            results.insert(metric_name, value)?;
        }

        info!(
            profile = %name,
            computed = computed.len(),
            no_result = no_result.len(),
            skipped = skipped.len(),
            "profiled"
        );

        Ok(ProfileReport {
            name: name.to_string(),
            results,
            computed,
            no_result,
            skipped,
        })
    }

    /// Evaluate several named stores in parallel. Output order matches input.
    pub fn profile_many(&self, stores: &[(String, ResultStore)]) -> Result<Vec<ProfileReport>> {
        stores
            .par_iter()
            .map(|(name, store)| self.profile(name, store))
            .collect()
    }
}
