//! Profile output for one result store.

use crate::data::ResultStore;
use crate::error::{ProfilerError, Result};
use serde::{Deserialize, Serialize};

/// Outcome of evaluating composed metrics over one store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileReport {
    /// Name of the profiled target, e.g. a column.
    pub name: String,
    /// Base results plus every composed result, nulls included.
    pub results: ResultStore,
    /// Composed metrics that produced a value.
    pub computed: Vec<String>,
    /// Composed metrics that produced no result.
    pub no_result: Vec<String>,
    /// Composed metrics skipped because the input already held them.
    pub skipped: Vec<String>,
}

impl ProfileReport {
    /// Whether every evaluated composed metric produced a value.
    pub fn is_complete(&self) -> bool {
        self.no_result.is_empty()
    }

    /// Save to JSON string.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(ProfilerError::from)
    }

    /// Save to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(ProfilerError::from)
    }
}

impl std::fmt::Display for ProfileReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Profile: {}", self.name)?;
        writeln!(f, "  Metrics:    {}", self.results.len())?;
        writeln!(f, "  Computed:   {}", self.computed.len())?;
        writeln!(f, "  No result:  {}", self.no_result.len())?;
        writeln!(f, "  Skipped:    {}", self.skipped.len())?;
        let width = self.results.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
        for (name, value) in self.results.iter() {
            match value {
                Some(v) => writeln!(f, "  {:<width$}  {}", name, v, width = width)?,
                None => writeln!(f, "  {:<width$}  null", name, width = width)?,
            }
        }
        Ok(())
    }
}
