use proptest::prelude::*;
use rust_decimal::Decimal;
use steel_inventory::{
    InventoryError, InventoryService, SqliteStore, SteelForm, ValidationError,
};

/// Non-negative decimal with up to three fractional digits
fn quantity() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000, 0u32..=3).prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

/// Quantities anywhere up to the largest `Decimal`, including values near it
fn wide_quantity() -> impl Strategy<Value = Decimal> {
    prop_oneof![
        quantity(),
        (0u64..1_000).prop_map(|below| Decimal::MAX - Decimal::from(below)),
        (0u32..=18).prop_map(|exp| Decimal::MAX / Decimal::from(10u64.pow(exp))),
    ]
}

fn add_form(code: &str, weight: Decimal, length: Decimal) -> SteelForm {
    SteelForm {
        name: String::new(),
        code: code.to_string(),
        weight: weight.to_string(),
        length: length.to_string(),
        thickness: "3".to_string(),
    }
}

fn apply_all(adds: &[(Decimal, Decimal)]) -> (Decimal, Decimal, usize) {
    let mut service = InventoryService::load(SqliteStore::open_in_memory().unwrap()).unwrap();
    for (weight, length) in adds {
        service
            .add_or_merge(&add_form("A1", *weight, *length))
            .unwrap();
    }
    let totals = service.totals();
    (totals.total_weight, totals.total_length, service.items().len())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn repeated_adds_commute(adds in prop::collection::vec((quantity(), quantity()), 1..6)) {
        let mut reversed = adds.clone();
        reversed.reverse();

        let forward = apply_all(&adds);
        let backward = apply_all(&reversed);

        prop_assert_eq!(forward, backward);
        prop_assert_eq!(forward.2, 1);
    }

    #[test]
    fn merged_totals_equal_plain_sums(adds in prop::collection::vec((quantity(), quantity()), 1..6)) {
        let (weight, length, _) = apply_all(&adds);
        let expected_weight: Decimal = adds.iter().map(|(w, _)| *w).sum();
        let expected_length: Decimal = adds.iter().map(|(_, l)| *l).sum();
        prop_assert_eq!(weight, expected_weight);
        prop_assert_eq!(length, expected_length);
    }

    #[test]
    fn adds_near_the_upper_bound_never_panic(
        adds in prop::collection::vec((wide_quantity(), wide_quantity()), 1..6)
    ) {
        let mut service = InventoryService::load(SqliteStore::open_in_memory().unwrap()).unwrap();
        let mut expected = (Decimal::ZERO, Decimal::ZERO);

        for (index, (weight, length)) in adds.iter().enumerate() {
            // alternate between merging into A1 and creating new codes
            let code = if index % 2 == 0 { "A1".to_string() } else { format!("N{index}") };
            let fits = expected.0.checked_add(*weight).zip(expected.1.checked_add(*length));
            let before = service.snapshot();

            match (service.add_or_merge(&add_form(&code, *weight, *length)), fits) {
                (Ok(_), Some(next)) => expected = next,
                (Err(InventoryError::Validation(ValidationError::QuantityOverflow(_))), None) => {
                    prop_assert_eq!(service.snapshot(), before);
                }
                (outcome, fits) => {
                    let outcome = outcome.map(|o| o.item().clone());
                    prop_assert!(false, "unexpected outcome {:?} (fits: {:?})", outcome, fits);
                }
            }

            let totals = service.totals();
            prop_assert_eq!((totals.total_weight, totals.total_length), expected);
        }
    }
}
