//! Property-based tests for determinism, padding and the summation sign law

use fenix::{DispatchError, Dispatcher, GenerateError, NoFallback, parse_placeholder};
use proptest::prelude::*;

fn resolve(dispatcher: &Dispatcher, raw: &str) -> Result<String, DispatchError> {
    dispatcher.resolve(raw, "", &NoFallback)
}

/// A placeholder for one of the seeded built-ins.
fn seeded_placeholder_strategy() -> impl Strategy<Value = String> {
    let index = -1000i64..1000;
    let entropy = (any::<bool>(), any::<u64>());
    prop_oneof![
        (index.clone(), 0u32..6, 0u32..6, entropy.clone()).prop_map(
            |(i, digits, decimals, (use_id, extra))| format!(
                "{{{{Fenix.RandomPositiveDecimalValue[{i}]({digits}, {decimals})}}({use_id},{extra})}}"
            )
        ),
        (
            prop::collection::vec(index.clone(), 1..5),
            0u32..6,
            0u32..6,
            entropy.clone()
        )
            .prop_map(|(indexes, digits, decimals, (use_id, extra))| {
                let indexes: Vec<String> = indexes.iter().map(i64::to_string).collect();
                format!(
                    "{{{{Fenix.RandomPositiveDecimalValue.Sum[{}]({digits}, {decimals})}}({use_id},{extra})}}",
                    indexes.join(",")
                )
            }),
        (index, "[A-Za-z0-9 :-]{0,12}", entropy).prop_map(|(i, prefix, (use_id, extra))| {
            format!(
                "{{{{Fenix.ControlledUniqueId[{i}]({prefix}%nnnnnn%%a(4; 7)%)}}({use_id},{extra})}}"
            )
        }),
    ]
}

proptest! {
    #[test]
    fn prop_dispatch_is_deterministic(
        raw in seeded_placeholder_strategy(),
        identity in "[a-z0-9-]{0,36}",
    ) {
        let dispatcher = Dispatcher::new();
        let first = dispatcher.resolve(&raw, &identity, &NoFallback);
        let second = dispatcher.resolve(&raw, &identity, &NoFallback);
        prop_assert!(first.is_ok(), "{raw} failed: {first:?}");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_reparse_is_identical(raw in seeded_placeholder_strategy()) {
        prop_assert_eq!(parse_placeholder(&raw), parse_placeholder(&raw));
    }

    #[test]
    fn prop_padding_never_truncates(
        index in 0i64..10_000,
        digits in 0u32..8,
        decimals in 0u32..8,
        integer_width in 0usize..14,
        fraction_width in 0usize..14,
    ) {
        let raw = format!(
            "{{{{Fenix.RandomPositiveDecimalValue[{index}]({digits}, {decimals}, {integer_width}, {fraction_width})}}(false)}}"
        );
        let value = resolve(&Dispatcher::new(), &raw).unwrap();
        let (integer, fraction) = match value.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (value.as_str(), None),
        };
        prop_assert!(integer.len() >= integer_width);
        prop_assert!(integer.len() >= 1);
        if decimals == 0 {
            prop_assert!(fraction.is_none());
        } else {
            prop_assert_eq!(fraction.map(str::len), Some(fraction_width.max(decimals as usize)));
        }
    }

    #[test]
    fn prop_sum_of_negative_index_negates_value(
        k in 1i64..100_000,
        extra in any::<u64>(),
        digits in 0u32..6,
        decimals in 0u32..5,
    ) {
        let dispatcher = Dispatcher::new();
        let single = resolve(
            &dispatcher,
            &format!("{{{{Fenix.RandomPositiveDecimalValue[{k}]({digits}, {decimals})}}(false,{extra})}}"),
        )
        .unwrap();
        let sum = resolve(
            &dispatcher,
            &format!("{{{{Fenix.RandomPositiveDecimalValue.Sum[-{k}]({digits}, {decimals})}}(false,{extra})}}"),
        )
        .unwrap();

        let is_zero = single.chars().all(|c| c == '0' || c == '.');
        let expected = if is_zero { single } else { format!("-{single}") };
        prop_assert_eq!(sum, expected);
    }

    #[test]
    fn prop_decimal_argument_count_law(count in 0usize..10) {
        prop_assume!(count != 2 && count != 4);
        let arguments = vec!["1"; count].join(", ");
        let dispatcher = Dispatcher::new();
        for name in ["Fenix.RandomPositiveDecimalValue", "Fenix.RandomPositiveDecimalValue.Sum"] {
            let raw = format!("{{{{{name}({arguments})}}}}");
            let result = resolve(&dispatcher, &raw);
            prop_assert!(
                matches!(
                    result,
                    Err(DispatchError::Generate(GenerateError::InvalidArgumentCount { .. }))
                ),
                "{} gave {:?}",
                raw,
                result
            );
        }
    }
}
