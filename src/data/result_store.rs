//! The run-scoped mapping from metric identifier to computed value.

use super::MetricValue;
use crate::error::{ProfilerError, Result};
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

/// Results of one profiling run, keyed by metric identifier.
///
/// An entry holds `Some(value)` or `None` for an explicit null. Absent and
/// null entries both mean "not computed", which is distinct from a computed
/// zero. The store is append-only: once an identifier has an entry it is
/// never overwritten. Values are finite.
///
/// Deserializing goes through [`insert`](Self::insert), so a repeated key,
/// an empty identifier or a non-finite value is rejected on load too.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResultStore {
    entries: BTreeMap<String, Option<MetricValue>>,
}

impl ResultStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from `(identifier, value)` pairs.
    ///
    /// Fails on the first repeated identifier.
    pub fn from_entries<I, K>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, Option<MetricValue>)>,
        K: Into<String>,
    {
        let mut store = Self::new();
        for (name, value) in entries {
            store.insert(name, value)?;
        }
        Ok(store)
    }

    /// Load from a JSON object such as `{"count": 100, "likeCount": null}`.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawEntries = serde_json::from_str(json)?;
        Self::from_entries(raw.0)
    }

    /// Load from a YAML mapping.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let raw: RawEntries = serde_yaml::from_str(yaml)?;
        Self::from_entries(raw.0)
    }

    /// Load from a file, picking JSON or YAML by extension (`.json`,
    /// `.yaml`/`.yml`).
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json(&contents),
            Some("yaml") | Some("yml") => Self::from_yaml(&contents),
            other => Err(ProfilerError::InvalidParameter(format!(
                "unsupported result store extension {:?} for {}",
                other,
                path.display()
            ))),
        }
    }

    /// Serialize to a JSON object.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(ProfilerError::from)
    }

    /// Write a result. `None` records an explicit null.
    ///
    /// NaN and infinities are rejected; a formula that cannot produce a
    /// finite value reports no result instead.
    pub fn insert<K: Into<String>>(&mut self, name: K, value: Option<MetricValue>) -> Result<()> {
        let name = name.into();
        if name.is_empty() {
            return Err(ProfilerError::InvalidParameter(
                "metric identifier must not be empty".to_string(),
            ));
        }
        if let Some(v) = value.filter(|v| !v.is_finite()) {
            return Err(ProfilerError::InvalidParameter(format!(
                "non-finite value {} for '{}'",
                v, name
            )));
        }
        if self.entries.contains_key(&name) {
            return Err(ProfilerError::DuplicateResult(name));
        }
        self.entries.insert(name, value);
        Ok(())
    }

    /// Get a value, treating absent and null alike.
    pub fn get(&self, name: &str) -> Option<MetricValue> {
        self.entries.get(name).copied().flatten()
    }

    /// Get a value as f64.
    pub fn get_f64(&self, name: &str) -> Option<f64> {
        self.get(name).map(|v| v.as_f64())
    }

    /// Raw entry: `None` if absent, `Some(None)` if explicitly null.
    pub fn entry(&self, name: &str) -> Option<Option<MetricValue>> {
        self.entries.get(name).copied()
    }

    /// Whether an entry (possibly null) exists.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of entries, nulls included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<MetricValue>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

/// Map entries in input order, duplicates kept, so validation can see them.
struct RawEntries(Vec<(String, Option<MetricValue>)>);

impl<'de> Deserialize<'de> for RawEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = RawEntries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map from metric identifier to number or null")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<RawEntries, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, Option<MetricValue>>()? {
                    entries.push(entry);
                }
                Ok(RawEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

impl<'de> Deserialize<'de> for ResultStore {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = RawEntries::deserialize(deserializer)?;
        ResultStore::from_entries(raw.0).map_err(de::Error::custom)
    }
}
