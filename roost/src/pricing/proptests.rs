//! Property-based tests for stay pricing.

use super::{calculate_total, is_weekend};
use crate::{Host, HostId};
use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn host(standard: i64, weekend: i64) -> Host {
    Host::new(
        HostId::new("h-prop").unwrap(),
        "prop@example.com",
        Decimal::new(standard, 2),
        Decimal::new(weekend, 2),
    )
    .unwrap()
}

fn start_strategy() -> impl Strategy<Value = NaiveDate> {
    (0u64..3000).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .checked_add_days(Days::new(offset))
            .unwrap()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Whole weeks always contain exactly two weekend days.
    #[test]
    fn whole_weeks_price_five_and_two(
        start in start_strategy(),
        weeks in 1u64..8,
        standard in 0i64..100_000,
        weekend in 0i64..100_000,
    ) {
        let h = host(standard, weekend);
        let end = start.checked_add_days(Days::new(weeks * 7 - 1)).unwrap();
        let expected = Decimal::from(weeks)
            * (Decimal::from(5) * h.standard_rate() + Decimal::from(2) * h.weekend_rate());
        prop_assert_eq!(calculate_total(start, end, &h), expected);
    }

    // Splitting a stay at any day gives the same total as pricing it whole.
    #[test]
    fn total_is_additive(
        start in start_strategy(),
        first in 0u64..30,
        second in 1u64..30,
        standard in 0i64..100_000,
        weekend in 0i64..100_000,
    ) {
        let h = host(standard, weekend);
        let mid = start.checked_add_days(Days::new(first)).unwrap();
        let after_mid = mid.checked_add_days(Days::new(1)).unwrap();
        let end = mid.checked_add_days(Days::new(second)).unwrap();
        prop_assert_eq!(
            calculate_total(start, end, &h),
            calculate_total(start, mid, &h) + calculate_total(after_mid, end, &h)
        );
    }

    // With equal rates the total is rate times the inclusive day count.
    #[test]
    fn flat_rate_counts_days(
        start in start_strategy(),
        nights in 0u64..90,
        rate in 0i64..100_000,
    ) {
        let h = host(rate, rate);
        let end = start.checked_add_days(Days::new(nights)).unwrap();
        prop_assert_eq!(
            calculate_total(start, end, &h),
            h.standard_rate() * Decimal::from(nights + 1)
        );
    }

    #[test]
    fn single_day_uses_matching_rate(
        day in start_strategy(),
        standard in 0i64..100_000,
        weekend in 0i64..100_000,
    ) {
        let h = host(standard, weekend);
        let expected = if is_weekend(day) { h.weekend_rate() } else { h.standard_rate() };
        prop_assert_eq!(calculate_total(day, day, &h), expected);
    }
}
