//! Property tests for the allocator invariants: exact-sum, the
//! single-participant identity, grid bounds on the equal path, and
//! deterministic remainder distribution on the weighted path.

use proptest::prelude::*;
use rust_decimal::Decimal;
use tipsplit_core::{
    allocate_shares, Granularity, Money, RoundingMode, SplitRequest, TipBasis, TipPercent,
};

fn any_mode() -> impl Strategy<Value = RoundingMode> {
    prop_oneof![
        Just(RoundingMode::Nearest),
        Just(RoundingMode::Up),
        Just(RoundingMode::Down),
    ]
}

fn any_granularity() -> impl Strategy<Value = Granularity> {
    prop_oneof![
        Just(Granularity::Cent),
        Just(Granularity::Nickel),
        Just(Granularity::Quarter),
    ]
}

proptest! {
    #[test]
    fn equal_split_shares_sum_to_total(
        total_cents in 0i64..=1_000_000,
        people in 1usize..=50,
        mode in any_mode(),
        granularity in any_granularity(),
    ) {
        let weights = vec![Decimal::ONE; people];
        let shares = allocate_shares(Money::from_cents(total_cents), &weights, mode, granularity)
            .expect("equal split of a valid request failed");

        prop_assert_eq!(shares.len(), people);
        prop_assert_eq!(shares.iter().copied().sum::<Money>().cents(), total_cents);
        prop_assert!(shares.iter().all(|s| !s.is_negative()));
    }
}

proptest! {
    #[test]
    fn single_participant_gets_the_whole_total(
        total_cents in 0i64..=1_000_000,
        mode in any_mode(),
        granularity in any_granularity(),
    ) {
        let shares =
            allocate_shares(Money::from_cents(total_cents), &[Decimal::ONE], mode, granularity)
                .expect("single-participant split failed");
        prop_assert_eq!(shares, vec![Money::from_cents(total_cents)]);
    }
}

proptest! {
    /// For totals large enough that no walk-back can trigger, the leading
    /// shares sit on the granularity grid and within one step of the
    /// unrounded ideal quotient.
    #[test]
    fn equal_split_leading_shares_stay_on_grid(
        total_cents in 65_000i64..=1_000_000,
        people in 2usize..=50,
        mode in any_mode(),
        granularity in any_granularity(),
    ) {
        let weights = vec![Decimal::ONE; people];
        let shares = allocate_shares(Money::from_cents(total_cents), &weights, mode, granularity)
            .expect("equal split of a valid request failed");

        let step = granularity.step_cents();
        let n = people as i64;
        let lead = shares[0].cents();

        for share in &shares[..people - 1] {
            prop_assert_eq!(share.cents(), lead);
            prop_assert_eq!(share.cents() % step, 0);
        }
        // |lead - total/n| < step, compared without leaving integers
        prop_assert!((lead * n - total_cents).abs() < step * n);
    }
}

proptest! {
    #[test]
    fn weighted_split_shares_sum_to_total(
        total_cents in 0i64..=1_000_000,
        raw_weights in prop::collection::vec(1u32..=1_000, 2..=12),
    ) {
        let weights: Vec<Decimal> = raw_weights.iter().copied().map(Decimal::from).collect();
        let shares = allocate_shares(
            Money::from_cents(total_cents),
            &weights,
            RoundingMode::Nearest,
            Granularity::Cent,
        )
        .expect("weighted split of a valid request failed");

        prop_assert_eq!(shares.iter().copied().sum::<Money>().cents(), total_cents);

        // Each share is the floored ideal proportion or one cent above it
        let weight_sum: i128 = raw_weights.iter().map(|w| *w as i128).sum();
        for (share, weight) in shares.iter().zip(&raw_weights) {
            let base = (total_cents as i128 * *weight as i128 / weight_sum) as i64;
            prop_assert!(share.cents() == base || share.cents() == base + 1);
        }
    }
}

proptest! {
    #[test]
    fn weighted_split_is_deterministic(
        total_cents in 0i64..=1_000_000,
        raw_weights in prop::collection::vec(1u32..=1_000, 2..=12),
    ) {
        let weights: Vec<Decimal> = raw_weights.iter().copied().map(Decimal::from).collect();
        let run = || {
            allocate_shares(
                Money::from_cents(total_cents),
                &weights,
                RoundingMode::Nearest,
                Granularity::Cent,
            )
            .expect("weighted split of a valid request failed")
        };
        prop_assert_eq!(run(), run());
    }
}

proptest! {
    /// End-to-end exact-sum through the full request path, tip included.
    #[test]
    fn full_request_upholds_exact_sum(
        subtotal_cents in 1i64..=100_000,
        tax_cents in 0i64..=20_000,
        tip_bps in 0u32..=10_000,
        people in 1usize..=20,
        post_tax in any::<bool>(),
        mode in any_mode(),
        granularity in any_granularity(),
    ) {
        let basis = if post_tax { TipBasis::PostTax } else { TipBasis::PreTax };
        let request = SplitRequest::even(
            Money::from_cents(subtotal_cents),
            Money::from_cents(tax_cents),
            TipPercent::from_bps(tip_bps),
            basis,
            people,
            mode,
            granularity,
        );

        let result = request.compute().expect("valid request failed");
        prop_assert_eq!(
            result.per_person.iter().copied().sum::<Money>(),
            result.grand_total
        );
        prop_assert_eq!(
            result.grand_total,
            request.subtotal_before_tax + request.tax_amount + result.tip
        );
    }
}
