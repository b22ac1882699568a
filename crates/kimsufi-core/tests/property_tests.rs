//! Property-based tests for option sets, selection and combinations.

use kimsufi_core::{
    cartesian_combinations, cheapest_mandatory_options, combinations, resolve_price,
    CatalogOption, OptionPrice, OptionSet, OrderOption, PriceConfig,
};
use proptest::prelude::*;
use std::collections::HashSet;

// =============================================================================
// Strategies
// =============================================================================

fn family_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("memory".to_string()),
        Just("storage".to_string()),
        Just("bandwidth".to_string()),
        Just("os".to_string()),
    ]
}

fn option_strategy() -> impl Strategy<Value = OrderOption> {
    (family_strategy(), "[a-z0-9-]{1,8}")
        .prop_map(|(family, plan_code)| OrderOption::new(family, plan_code))
}

fn option_set_strategy() -> impl Strategy<Value = OptionSet> {
    prop::collection::vec(option_strategy(), 0..12).prop_map(OptionSet::from)
}

fn record_strategy() -> impl Strategy<Value = CatalogOption> {
    (
        option_strategy(),
        any::<bool>(),
        prop::option::of(0i64..1_000),
        any::<bool>(),
    )
        .prop_map(|(option, mandatory, price, monthly)| {
            let duration = if monthly { "P1M" } else { "P12M" };
            let prices = price
                .map(|p| vec![OptionPrice::new(duration, "default", p)])
                .unwrap_or_default();
            CatalogOption::new(option, mandatory, prices)
        })
}

// =============================================================================
// OptionSet
// =============================================================================

proptest! {
    /// set: applying the same option twice changes nothing the second time
    #[test]
    fn set_is_idempotent(options in option_set_strategy(), option in option_strategy()) {
        let once = options.normalized().with(option.clone());
        let twice = once.clone().with(option);
        prop_assert_eq!(once.len(), twice.len());
        prop_assert_eq!(once, twice);
    }

    /// set: at most one option per family afterwards
    #[test]
    fn set_keeps_families_unique(options in option_set_strategy()) {
        let mut normalized = OptionSet::new();
        for option in options {
            normalized.set(option);
        }
        prop_assert!(normalized.is_normalized());
    }

    /// merge: families of the receiver are untouched, new ones come from others
    #[test]
    fn merge_never_overwrites(a in option_set_strategy(), b in option_set_strategy()) {
        let a = a.normalized();
        let b = b.normalized();
        let merged = a.clone().merged(b.clone());

        for option in &a {
            prop_assert_eq!(merged.get(&option.family), Some(option));
        }
        for option in &b {
            if !a.contains_family(&option.family) {
                prop_assert_eq!(merged.get(&option.family), Some(option));
            }
        }
        prop_assert_eq!(&merged.as_slice()[..a.len()], a.as_slice());
    }

    /// families/plan codes are projections of the same length
    #[test]
    fn projections_match_length(options in option_set_strategy()) {
        prop_assert_eq!(options.families().len(), options.len());
        prop_assert_eq!(options.plan_codes().len(), options.len());
    }

    /// split_by_plan_code partitions without losing or reordering options
    #[test]
    fn split_is_a_partition(options in option_set_strategy(), code in "[a-z0-9-]{1,8}") {
        let (matching, other) = options.split_by_plan_code(&code);
        prop_assert_eq!(matching.len() + other.len(), options.len());
        prop_assert!(matching.iter().all(|o| o.plan_code == code));
        prop_assert!(other.iter().all(|o| o.plan_code != code));
    }

    /// Display -> FromStr on option tokens is identity
    #[test]
    fn option_token_roundtrip(option in option_strategy()) {
        let parsed: OrderOption = option.to_string().parse().expect("Should parse");
        prop_assert_eq!(option, parsed);
    }
}

// =============================================================================
// Selection
// =============================================================================

proptest! {
    /// Cheapest selection holds one record per mandatory family, and no
    /// priced record of that family is strictly cheaper than a priced winner
    #[test]
    fn cheapest_selection_is_minimal(records in prop::collection::vec(record_strategy(), 0..16)) {
        let config = PriceConfig::default();
        let cheapest = cheapest_mandatory_options(&records);

        let families: HashSet<&str> = cheapest.iter().map(|r| r.family()).collect();
        prop_assert_eq!(families.len(), cheapest.len());

        for winner in &cheapest {
            let first = records
                .iter()
                .find(|r| r.mandatory && r.family() == winner.family())
                .expect("family came from a mandatory record");

            let Some(first_price) = resolve_price(first, &config) else {
                // An unpriced first occupant is never replaced
                prop_assert_eq!(winner, first);
                continue;
            };

            let winning = resolve_price(winner, &config).expect("priced occupant").price_in_ucents;
            prop_assert!(winning <= first_price.price_in_ucents);

            for record in records.iter().filter(|r| r.mandatory && r.family() == winner.family()) {
                if let Some(price) = resolve_price(record, &config) {
                    prop_assert!(winning <= price.price_in_ucents);
                }
            }
        }
    }
}

// =============================================================================
// Combinations
// =============================================================================

proptest! {
    /// Every row has one option per family, drawn from the input
    #[test]
    fn combination_rows_are_complete(options in option_set_strategy()) {
        let groups = options.groups();
        let expected: usize = if groups.is_empty() {
            0
        } else {
            groups.iter().map(|(_, bucket)| bucket.len()).product()
        };

        let rows = combinations(&options);
        prop_assert_eq!(rows.len(), expected);

        let families: Vec<String> = groups.iter().map(|(family, _)| family.clone()).collect();
        for row in &rows {
            prop_assert_eq!(row.families(), families.clone());
            prop_assert!(row.iter().all(|o| options.iter().any(|i| i == o)));
        }
    }

    /// Cartesian rows are pairwise distinct when the input has no duplicates
    #[test]
    fn cartesian_rows_are_distinct(options in option_set_strategy()) {
        let unique: OptionSet = {
            let mut seen = HashSet::new();
            options.into_iter().filter(|o| seen.insert(o.clone())).collect()
        };

        let rows = cartesian_combinations(&unique);
        let distinct: HashSet<Vec<String>> = rows.iter().map(|row| row.plan_codes()).collect();
        prop_assert_eq!(distinct.len(), rows.len());
    }
}

#[test]
fn documented_examples_hold() {
    let options = OptionSet::from_tokens(["mem=ram64", "disk=ssd1"]).unwrap();
    assert_eq!(options.families(), vec!["mem", "disk"]);

    let err = OptionSet::from_tokens(["mem"]).unwrap_err();
    assert!(err.to_string().contains("mem"));

    let (matching, other) = options.split_by_plan_code("ram64");
    assert_eq!(matching.as_slice(), &[OrderOption::new("mem", "ram64")]);
    assert_eq!(other.as_slice(), &[OrderOption::new("disk", "ssd1")]);
}
