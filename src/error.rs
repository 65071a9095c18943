//! Error types for the composable-profiler library.

use thiserror::Error;

/// Main error type for the library.
///
/// Composed metric formulas never produce these: missing inputs and
/// degenerate arithmetic are encoded as "no result" instead. Errors are
/// reserved for catalog misconfiguration and I/O around stores and configs.
#[derive(Error, Debug)]
pub enum ProfilerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Metric '{0}' is registered more than once")]
    DuplicateMetric(String),

    #[error("Metric '{metric}' requires '{dependency}', which is not registered")]
    MissingDependency { metric: String, dependency: String },

    #[error("Dependency cycle between composed metrics: {}", .0.join(" -> "))]
    DependencyCycle(Vec<String>),

    #[error("Unknown metric '{0}'")]
    UnknownMetric(String),

    #[error("Catalog has no registered metrics")]
    EmptyCatalog,

    #[error("Result for '{0}' has already been written")]
    DuplicateResult(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, ProfilerError>;
