//! Composed metrics: pure formulas over previously computed results.

use super::{names, Metric};
use crate::data::{MetricValue, ResultStore, ValueType};
use std::sync::Arc;

/// A metric derived from other metrics' results.
///
/// # Contract
///
/// - [`required`](ComposedMetric::required) is declarative: it names the
///   identifiers `compute` reads and nothing else. Resolving it into an
///   evaluation order is the executor's job (see
///   [`MetricCatalog`](crate::catalog::MetricCatalog)).
/// - [`compute`](ComposedMetric::compute) is pure. It never mutates the
///   store, never performs I/O, and never panics or errors. A missing, null
///   or degenerate input yields `None` ("no result") for this metric alone.
pub trait ComposedMetric: Metric {
    /// Identifiers that must be in the store before `compute` runs.
    fn required(&self) -> &[&'static str];

    /// Evaluate the formula against the current results.
    fn compute(&self, results: &ResultStore) -> Option<MetricValue>;
}

/// `numerator / denominator` over two stored results.
///
/// No result when the denominator is missing, null or zero, when the
/// numerator is missing or null, or when the quotient overflows to infinity.
/// A zero denominator is treated exactly like an absent one: a table with no
/// rows has no LIKE ratio rather than a ratio of 0.0. That mirrors the established profiler behaviour and is kept as is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ratio {
    name: &'static str,
    // denominator first, then numerator
    required: [&'static str; 2],
}

impl Ratio {
    pub const fn new(
        name: &'static str,
        numerator: &'static str,
        denominator: &'static str,
    ) -> Self {
        Self {
            name,
            required: [denominator, numerator],
        }
    }

    /// `likeCount / count`.
    pub const fn like_ratio() -> Self {
        Self::new(names::LIKE_RATIO, names::LIKE_COUNT, names::COUNT)
    }

    /// `iLikeCount / count`.
    pub const fn ilike_ratio() -> Self {
        Self::new(names::ILIKE_RATIO, names::ILIKE_COUNT, names::COUNT)
    }

    /// `uniqueCount / count`.
    pub const fn unique_ratio() -> Self {
        Self::new(names::UNIQUE_RATIO, names::UNIQUE_COUNT, names::COUNT)
    }

    /// `distinctCount / count`.
    pub const fn distinct_ratio() -> Self {
        Self::new(names::DISTINCT_RATIO, names::DISTINCT_COUNT, names::COUNT)
    }

    pub fn numerator(&self) -> &'static str {
        self.required[1]
    }

    pub fn denominator(&self) -> &'static str {
        self.required[0]
    }
}

impl Metric for Ratio {
    fn name(&self) -> &'static str {
        self.name
    }

    fn value_type(&self) -> ValueType {
        ValueType::Float
    }
}

impl ComposedMetric for Ratio {
    fn required(&self) -> &[&'static str] {
        &self.required
    }

    fn compute(&self, results: &ResultStore) -> Option<MetricValue> {
        let denominator = results
            .get(self.denominator())
            .filter(MetricValue::is_truthy)?;
        let numerator = results.get(self.numerator())?;
        Some(MetricValue::Float(numerator.as_f64() / denominator.as_f64()))
            .filter(MetricValue::is_finite)
    }
}

/// Share of nulls among all rows: `nullCount / (nullCount + count)`.
///
/// `count` excludes nulls, so the sum is the total row count. No result if
/// either input is missing or null, or if the total is zero or overflows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullRatio;

impl Metric for NullRatio {
    fn name(&self) -> &'static str {
        names::NULL_RATIO
    }

    fn value_type(&self) -> ValueType {
        ValueType::Float
    }
}

impl ComposedMetric for NullRatio {
    fn required(&self) -> &[&'static str] {
        &[names::COUNT, names::NULL_COUNT]
    }

    fn compute(&self, results: &ResultStore) -> Option<MetricValue> {
        let count = results.get_f64(names::COUNT)?;
        let nulls = results.get_f64(names::NULL_COUNT)?;
        let total = count + nulls;
        if total == 0.0 || !total.is_finite() {
            return None;
        }
        Some(MetricValue::Float(nulls / total))
    }
}

/// Values that occur more than once: `count - distinctCount`.
///
/// Inputs are read as integers (floats truncate). No result if either is
/// missing or null, or if the subtraction overflows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DuplicateCount;

impl Metric for DuplicateCount {
    fn name(&self) -> &'static str {
        names::DUPLICATE_COUNT
    }

    fn value_type(&self) -> ValueType {
        ValueType::Integer
    }
}

impl ComposedMetric for DuplicateCount {
    fn required(&self) -> &[&'static str] {
        &[names::COUNT, names::DISTINCT_COUNT]
    }

    fn compute(&self, results: &ResultStore) -> Option<MetricValue> {
        let count = results.get(names::COUNT)?.as_i64();
        let distinct = results.get(names::DISTINCT_COUNT)?.as_i64();
        count.checked_sub(distinct).map(MetricValue::Int)
    }
}

/// Every built-in composed metric.
pub fn builtin_composed() -> Vec<Arc<dyn ComposedMetric>> {
    vec![
        Arc::new(Ratio::like_ratio()),
        Arc::new(Ratio::ilike_ratio()),
        Arc::new(Ratio::unique_ratio()),
        Arc::new(Ratio::distinct_ratio()),
        Arc::new(NullRatio),
        Arc::new(DuplicateCount),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(entries: &[(&str, Option<MetricValue>)]) -> ResultStore {
        ResultStore::from_entries(entries.iter().copied()).unwrap()
    }

    fn int(v: i64) -> Option<MetricValue> {
        Some(MetricValue::Int(v))
    }

    #[test]
    fn test_like_ratio_scenarios() {
        let ratio = Ratio::like_ratio();

        // A: plain ratio
        let a = store(&[("count", int(100)), ("likeCount", int(25))]);
        assert_eq!(ratio.compute(&a), Some(MetricValue::Float(0.25)));

        // B: zero denominator
        let b = store(&[("count", int(0)), ("likeCount", int(0))]);
        assert_eq!(ratio.compute(&b), None);

        // C: null numerator
        let c = store(&[("count", int(100)), ("likeCount", None)]);
        assert_eq!(ratio.compute(&c), None);

        // D: denominator absent
        let d = store(&[("likeCount", int(25))]);
        assert_eq!(ratio.compute(&d), None);

        // numerator absent, denominator fine
        let e = store(&[("count", int(100))]);
        assert_eq!(ratio.compute(&e), None);
    }

    #[test]
    fn test_ratio_null_denominator() {
        let ratio = Ratio::like_ratio();
        let s = store(&[("count", None), ("likeCount", int(25))]);
        assert_eq!(ratio.compute(&s), None);
    }

    #[test]
    fn test_ratio_float_zero_denominator() {
        let ratio = Ratio::like_ratio();
        let s = store(&[("count", Some(MetricValue::Float(0.0))), ("likeCount", int(3))]);
        assert_eq!(ratio.compute(&s), None);
    }

    #[test]
    fn test_ratio_overflow_is_no_result() {
        let ratio = Ratio::like_ratio();
        let s = store(&[
            ("count", Some(MetricValue::Float(1e-300))),
            ("likeCount", Some(MetricValue::Float(1e300))),
        ]);
        assert_eq!(ratio.compute(&s), None);

        let huge = store(&[
            ("count", Some(MetricValue::Float(f64::MAX))),
            ("nullCount", Some(MetricValue::Float(f64::MAX))),
        ]);
        assert_eq!(NullRatio.compute(&huge), None);
    }

    #[test]
    fn test_ratio_zero_numerator_is_a_result() {
        let ratio = Ratio::like_ratio();
        let s = store(&[("count", int(40)), ("likeCount", int(0))]);
        assert_eq!(ratio.compute(&s), Some(MetricValue::Float(0.0)));
    }

    #[test]
    fn test_ratio_required_is_exact() {
        let ratio = Ratio::like_ratio();
        assert_eq!(ratio.required(), &["count", "likeCount"]);
        assert_eq!(ratio.numerator(), "likeCount");
        assert_eq!(ratio.denominator(), "count");
        assert_eq!(ratio.name(), "likeRatio");
        assert_eq!(ratio.value_type(), ValueType::Float);
    }

    #[test]
    fn test_ratio_ignores_unrelated_entries() {
        let ratio = Ratio::unique_ratio();
        let s = store(&[
            ("count", int(10)),
            ("uniqueCount", int(4)),
            ("likeCount", None),
        ]);
        assert_eq!(ratio.compute(&s), Some(MetricValue::Float(0.4)));
    }

    #[test]
    fn test_null_ratio() {
        let s = store(&[("count", int(75)), ("nullCount", int(25))]);
        assert_eq!(NullRatio.compute(&s), Some(MetricValue::Float(0.25)));

        let all_null = store(&[("count", int(0)), ("nullCount", int(8))]);
        assert_eq!(NullRatio.compute(&all_null), Some(MetricValue::Float(1.0)));

        let empty = store(&[("count", int(0)), ("nullCount", int(0))]);
        assert_eq!(NullRatio.compute(&empty), None);

        let missing = store(&[("count", int(10))]);
        assert_eq!(NullRatio.compute(&missing), None);
    }

    #[test]
    fn test_duplicate_count() {
        let s = store(&[("count", int(10)), ("distinctCount", int(7))]);
        assert_eq!(DuplicateCount.compute(&s), Some(MetricValue::Int(3)));
        assert_eq!(DuplicateCount.value_type(), ValueType::Integer);

        let null = store(&[("count", int(10)), ("distinctCount", None)]);
        assert_eq!(DuplicateCount.compute(&null), None);

        let overflow = store(&[("count", int(i64::MIN)), ("distinctCount", int(1))]);
        assert_eq!(DuplicateCount.compute(&overflow), None);
    }

    #[test]
    fn test_compute_does_not_mutate() {
        let s = store(&[("count", int(100)), ("likeCount", int(25))]);
        let before = s.clone();
        for metric in builtin_composed() {
            let first = metric.compute(&s);
            let second = metric.compute(&s);
            assert_eq!(first, second, "{} not idempotent", metric.name());
        }
        assert_eq!(s, before);
    }
}
