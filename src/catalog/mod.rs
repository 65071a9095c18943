//! Metric catalog: registration, dependency validation and evaluation order.
//!
//! A catalog is built once and never mutated. Building it checks that every
//! identifier a composed metric requires is registered and that composed
//! metrics do not depend on each other cyclically, so a bad dependency is a
//! startup error rather than a silent "no result" at run time.

mod config;

pub use config::CatalogConfig;

use crate::error::{ProfilerError, Result};
use crate::metric::{
    builtin_composed, builtin_static, CatalogEntry, ComposedMetric, Metric, StaticMetric,
};
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use tracing::{debug, info};

/// Every built-in metric, base metrics first.
pub fn builtin_entries() -> Vec<CatalogEntry> {
    builtin_static()
        .into_iter()
        .map(CatalogEntry::from)
        .chain(builtin_composed().into_iter().map(CatalogEntry::from))
        .collect()
}

/// A validated set of metrics.
#[derive(Debug, Clone)]
pub struct MetricCatalog {
    entries: Vec<CatalogEntry>,
    index: HashMap<&'static str, usize>,
    /// Indices of composed entries, dependencies before dependents.
    order: Vec<usize>,
}

/// Builder for [`MetricCatalog`]. Validation happens in [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    entries: Vec<CatalogEntry>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a base metric.
    pub fn register_static(mut self, metric: StaticMetric) -> Self {
        self.entries.push(CatalogEntry::Static(metric));
        self
    }

    /// Register a composed metric.
    pub fn register_composed<M: ComposedMetric + 'static>(mut self, metric: M) -> Self {
        self.entries.push(CatalogEntry::Composed(Arc::new(metric)));
        self
    }

    /// Register an already-wrapped entry.
    pub fn register(mut self, entry: CatalogEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Validate and freeze the catalog.
    pub fn build(self) -> Result<MetricCatalog> {
        if self.entries.is_empty() {
            return Err(ProfilerError::EmptyCatalog);
        }

        let mut index = HashMap::with_capacity(self.entries.len());
        for (i, entry) in self.entries.iter().enumerate() {
            if index.insert(entry.name(), i).is_some() {
                return Err(ProfilerError::DuplicateMetric(entry.name().to_string()));
            }
        }

        for entry in &self.entries {
            for dependency in entry.required() {
                if !index.contains_key(dependency) {
                    return Err(ProfilerError::MissingDependency {
                        metric: entry.name().to_string(),
                        dependency: dependency.to_string(),
                    });
                }
            }
        }

        let order = evaluation_order(&self.entries, &index)?;
        info!(
            metrics = self.entries.len(),
            composed = order.len(),
            "built metric catalog"
        );
        debug!(
            order = ?order.iter().map(|&i| self.entries[i].name()).collect::<Vec<_>>(),
            "composed metric evaluation order"
        );

        Ok(MetricCatalog {
            entries: self.entries,
            index,
            order,
        })
    }
}

/// Kahn's algorithm over composed entries. Static entries are always
/// satisfied. Ties resolve by registration order.
fn evaluation_order(
    entries: &[CatalogEntry],
    index: &HashMap<&'static str, usize>,
) -> Result<Vec<usize>> {
    let n = entries.len();
    // composed dependencies of each entry; every name is registered by now
    let deps: Vec<Vec<usize>> = entries
        .iter()
        .map(|entry| {
            entry
                .required()
                .iter()
                .map(|name| index[name])
                .filter(|&d| entries[d].is_composed())
                .collect()
        })
        .collect();

    let mut pending = vec![0usize; n];
    let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); n];
    for (i, ds) in deps.iter().enumerate() {
        pending[i] = ds.len();
        for &d in ds {
            dependents[d].push(i);
        }
    }

    let composed: Vec<usize> = (0..n).filter(|&i| entries[i].is_composed()).collect();
    let mut ready: BTreeSet<usize> = composed.iter().copied().filter(|&i| pending[i] == 0).collect();
    let mut order = Vec::with_capacity(composed.len());

    while let Some(next) = ready.pop_first() {
        order.push(next);
        for &dependent in &dependents[next] {
            pending[dependent] -= 1;
            if pending[dependent] == 0 {
                ready.insert(dependent);
            }
        }
    }

    if order.len() < composed.len() {
        return Err(ProfilerError::DependencyCycle(find_cycle(entries, &deps, &pending)));
    }
    Ok(order)
}

/// Every unresolved entry depends on another unresolved one, so walking
/// unresolved dependencies must revisit a node.
fn find_cycle(entries: &[CatalogEntry], deps: &[Vec<usize>], pending: &[usize]) -> Vec<String> {
    let unresolved = |i: usize| entries[i].is_composed() && pending[i] > 0;
    let Some(start) = (0..entries.len()).find(|&i| unresolved(i)) else {
        return Vec::new();
    };

    let mut path = vec![start];
    let mut current = start;
    loop {
        let Some(&next) = deps[current].iter().find(|&&d| unresolved(d)) else {
            break;
        };
        if let Some(pos) = path.iter().position(|&p| p == next) {
            let mut cycle: Vec<String> = path[pos..]
                .iter()
                .map(|&i| entries[i].name().to_string())
                .collect();
            cycle.push(entries[next].name().to_string());
            return cycle;
        }
        path.push(next);
        current = next;
    }
    path.iter().map(|&i| entries[i].name().to_string()).collect()
}

impl MetricCatalog {
    /// Start building a catalog.
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::new()
    }

    /// Catalog with every built-in metric.
    pub fn default_catalog() -> Result<Self> {
        builtin_entries()
            .into_iter()
            .fold(Self::builder(), CatalogBuilder::register)
            .build()
    }

    /// Catalog of the built-in metrics a config enables.
    pub fn from_config(config: &CatalogConfig) -> Result<Self> {
        let builtins = builtin_entries();
        let mut builder = Self::builder();
        for name in &config.metrics {
            let entry = builtins
                .iter()
                .find(|e| e.name() == name.as_str())
                .ok_or_else(|| ProfilerError::UnknownMetric(name.clone()))?;
            builder = builder.register(entry.clone());
        }
        info!(catalog = %config.name, "loading metric catalog from config");
        builder.build()
    }

    /// Describe this catalog as a config.
    pub fn to_config(&self, name: &str, description: Option<&str>) -> CatalogConfig {
        CatalogConfig {
            name: name.to_string(),
            description: description.map(String::from),
            metrics: self.entries.iter().map(|e| e.name().to_string()).collect(),
        }
    }

    /// Look up a metric by identifier.
    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in registration order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Base metrics in registration order.
    pub fn static_metrics(&self) -> impl Iterator<Item = &StaticMetric> {
        self.entries.iter().filter_map(|e| match e {
            CatalogEntry::Static(m) => Some(m),
            CatalogEntry::Composed(_) => None,
        })
    }

    /// Composed metrics in registration order.
    pub fn composed_metrics(&self) -> impl Iterator<Item = &Arc<dyn ComposedMetric>> {
        self.entries.iter().filter_map(CatalogEntry::as_composed)
    }

    /// Composed metric identifiers, dependencies before dependents.
    pub fn evaluation_order(&self) -> Vec<&'static str> {
        self.order.iter().map(|&i| self.entries[i].name()).collect()
    }

    /// Composed metrics, dependencies before dependents.
    pub fn ordered_composed(&self) -> impl Iterator<Item = &Arc<dyn ComposedMetric>> {
        self.order
            .iter()
            .filter_map(|&i| self.entries[i].as_composed())
    }
}
