//! Property-based tests for switch dispatch using proptest.

use proptest::prelude::*;
use standout_switch::{gt, lt, Case, Options, Outcome, Pattern, Switch, Value};

// ============================================================================
// Test helpers
// ============================================================================

// Strategy to generate scalar input values
fn scalar_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        (-1000.0f64..1000.0).prop_map(Value::from),
        "[a-z0-9]{0,8}".prop_map(Value::from),
    ]
}

fn threshold_cases(thresholds: &[i64], fall_through: &[bool]) -> Vec<Case> {
    thresholds
        .iter()
        .zip(fall_through.iter().chain(std::iter::repeat(&false)))
        .enumerate()
        .map(|(i, (t, ft))| Case::new(gt(*t), i).with_fall_through(*ft))
        .collect()
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Dispatching the same input twice yields the same outcome.
    #[test]
    fn dispatch_is_idempotent(
        thresholds in prop::collection::vec(any::<i64>(), 0..10),
        flags in prop::collection::vec(any::<bool>(), 0..10),
        input in scalar_strategy(),
        return_many in any::<bool>(),
        stop in any::<bool>(),
    ) {
        let mut cases = threshold_cases(&thresholds, &flags);
        cases.push(Case::otherwise("default"));
        let instance = Switch::with_options(
            cases,
            Options::new().return_many(return_many).stop_fall_through(stop),
        );

        let first = instance.dispatch(input.clone()).unwrap();
        let second = instance.dispatch(input).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Single mode never produces a sequence; many mode always does.
    #[test]
    fn outcome_shape_follows_return_many(
        thresholds in prop::collection::vec(any::<i64>(), 0..10),
        flags in prop::collection::vec(any::<bool>(), 0..10),
        input in any::<i64>(),
        return_many in any::<bool>(),
    ) {
        let instance = Switch::with_options(
            threshold_cases(&thresholds, &flags),
            Options::new().return_many(return_many),
        );

        let outcome = instance.dispatch(input).unwrap();
        prop_assert_eq!(outcome.is_many(), return_many);
    }

    /// Without fall-through, many mode returns exactly the matching entries in
    /// list order, and single mode returns the first of them.
    #[test]
    fn return_many_lists_matches_in_order(
        thresholds in prop::collection::vec(-100i64..100, 0..10),
        input in -100i64..100,
    ) {
        let cases = threshold_cases(&thresholds, &[]);
        let expected: Vec<Value> = thresholds
            .iter()
            .enumerate()
            .filter(|(_, t)| input > **t)
            .map(|(i, _)| Value::from(i))
            .collect();

        let collect = Switch::with_options(cases.clone(), Options::new().return_many(true));
        prop_assert_eq!(collect.dispatch(input).unwrap(), Outcome::Many(expected.clone()));

        let first = Switch::new(cases);
        prop_assert_eq!(first.dispatch(input).unwrap().into_single(), expected.first().cloned());
    }

    /// Strict literal patterns match exactly the equal inputs.
    #[test]
    fn strict_literal_matches_iff_equal(
        pattern in scalar_strategy(),
        input in scalar_strategy(),
    ) {
        let instance = Switch::new(vec![Case::new(Pattern::literal(pattern.clone()), "hit")]);
        let hit = !instance.dispatch(input.clone()).unwrap().is_empty();
        prop_assert_eq!(hit, pattern.strict_eq(&input));
    }

    /// Loose equality between a number and its decimal rendering always holds.
    #[test]
    fn loose_literal_matches_rendered_numbers(n in any::<i32>()) {
        let instance = Switch::with_options(
            vec![Case::new(n.to_string(), "hit")],
            Options::new().strict(false),
        );
        prop_assert_eq!(instance.dispatch(n).unwrap().into_single(), Some(Value::from("hit")));
    }

    /// Regex patterns never match non-string inputs, whatever the flags.
    #[test]
    fn regex_never_matches_non_strings(
        input in prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::from),
            any::<i64>().prop_map(Value::from),
        ],
        strict in any::<bool>(),
        replace in any::<bool>(),
    ) {
        let instance = Switch::with_options(
            vec![Case::new(Pattern::regex(".*").unwrap(), "hit")],
            Options::new().strict(strict).perform_replace_on_regex(replace),
        );
        prop_assert!(instance.dispatch(input).unwrap().is_empty());
    }

    /// With an unstopped chain, every entry after the first match fires until
    /// an entry without the flag closes it.
    #[test]
    fn open_chain_forces_following_entries(chain_len in 1usize..8, input in -50i64..50) {
        let mut builder = Switch::builder().fall_through(lt(i64::MAX), "start");
        for i in 0..chain_len {
            // Thresholds that never match on their own.
            builder = builder.fall_through(gt(1000 + i as i64), i);
        }
        let instance = builder.case(gt(1000), "end").case(gt(1000), "after").return_many(true).build();

        let values = instance.dispatch(input).unwrap().into_many();
        prop_assert_eq!(values.len(), chain_len + 2);
        prop_assert_eq!(values.first(), Some(&Value::from("start")));
        prop_assert_eq!(values.last(), Some(&Value::from("end")));
    }
}
