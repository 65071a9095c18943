//! Properties of the LIKE ratio over arbitrary result stores.

use composable_profiler::prelude::*;
use proptest::prelude::*;

fn store(count: Option<MetricValue>, like: Option<MetricValue>) -> ResultStore {
    ResultStore::from_entries([(names::COUNT, count), (names::LIKE_COUNT, like)]).unwrap()
}

fn arb_value() -> impl Strategy<Value = MetricValue> {
    prop_oneof![
        any::<i64>().prop_map(MetricValue::Int),
        (-1.0e12f64..1.0e12).prop_map(MetricValue::Float),
    ]
}

#[test]
fn scenario_a_plain_ratio() {
    let s = store(Some(MetricValue::Int(100)), Some(MetricValue::Int(25)));
    assert_eq!(Ratio::like_ratio().compute(&s), Some(MetricValue::Float(0.25)));
}

#[test]
fn scenario_b_zero_total() {
    let s = store(Some(MetricValue::Int(0)), Some(MetricValue::Int(0)));
    assert_eq!(Ratio::like_ratio().compute(&s), None);
}

#[test]
fn scenario_c_null_numerator() {
    let s = store(Some(MetricValue::Int(100)), None);
    assert_eq!(Ratio::like_ratio().compute(&s), None);
}

#[test]
fn scenario_d_count_missing() {
    let s = ResultStore::from_entries([(names::LIKE_COUNT, Some(MetricValue::Int(25)))]).unwrap();
    assert_eq!(Ratio::like_ratio().compute(&s), None);
}

#[test]
fn required_is_exactly_count_and_like_count() {
    let ratio = Ratio::like_ratio();
    let mut required = ratio.required().to_vec();
    required.sort_unstable();
    assert_eq!(required, vec!["count", "likeCount"]);
    // stable across calls
    assert_eq!(ratio.required(), Ratio::like_ratio().required());
}

proptest! {
    #[test]
    fn positive_denominator_divides(count in 1i64..1_000_000_000, like in arb_value()) {
        let s = store(Some(MetricValue::Int(count)), Some(like));
        let expected = like.as_f64() / count as f64;
        prop_assert_eq!(Ratio::like_ratio().compute(&s), Some(MetricValue::Float(expected)));
    }

    #[test]
    fn falsy_denominator_gives_no_result(
        like in proptest::option::of(arb_value()),
        kind in 0u8..4,
    ) {
        let s = match kind {
            0 => ResultStore::from_entries([(names::LIKE_COUNT, like)]).unwrap(),
            1 => store(None, like),
            2 => store(Some(MetricValue::Int(0)), like),
            _ => store(Some(MetricValue::Float(0.0)), like),
        };
        prop_assert_eq!(Ratio::like_ratio().compute(&s), None);
    }

    #[test]
    fn null_numerator_gives_no_result(count in proptest::option::of(arb_value())) {
        let s = store(count, None);
        prop_assert_eq!(Ratio::like_ratio().compute(&s), None);
    }

    #[test]
    fn absent_numerator_gives_no_result(count in proptest::option::of(arb_value())) {
        let s = ResultStore::from_entries([(names::COUNT, count)]).unwrap();
        prop_assert_eq!(Ratio::like_ratio().compute(&s), None);
    }

    #[test]
    fn compute_is_idempotent_and_pure(
        count in proptest::option::of(arb_value()),
        like in proptest::option::of(arb_value()),
    ) {
        let s = store(count, like);
        let before = s.clone();
        let first = Ratio::like_ratio().compute(&s);
        let second = Ratio::like_ratio().compute(&s);
        prop_assert_eq!(first, second);
        prop_assert_eq!(s, before);
    }
}
