//! Property-based tests for `DateRange` comparisons.

use super::DateRange;
use chrono::{Days, NaiveDate};
use proptest::prelude::*;

// Strategy for dates spread over a few years around the present.
fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0u64..2000).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .checked_add_days(Days::new(offset))
            .unwrap()
    })
}

// Strategy for ordered ranges of 1 to 60 nights.
fn range_strategy() -> impl Strategy<Value = DateRange> {
    (date_strategy(), 1u64..=60).prop_map(|(start, nights)| {
        DateRange::new(start, start.checked_add_days(Days::new(nights)).unwrap()).unwrap()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    #[test]
    fn overlaps_is_symmetric(a in range_strategy(), b in range_strategy()) {
        prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
    }

    #[test]
    fn disjoint_is_symmetric(a in range_strategy(), b in range_strategy()) {
        prop_assert_eq!(a.is_disjoint_from(&b), b.is_disjoint_from(&a));
    }

    #[test]
    fn range_overlaps_itself(a in range_strategy()) {
        prop_assert!(a.overlaps(&a));
        prop_assert!(!a.is_disjoint_from(&a));
    }

    // For well-formed ranges the strict and inclusive tests partition all pairs.
    #[test]
    fn disjoint_is_complement_of_overlap(a in range_strategy(), b in range_strategy()) {
        prop_assert_eq!(a.is_disjoint_from(&b), !a.overlaps(&b));
    }

    // Overlapping ranges share at least one calendar day.
    #[test]
    fn overlap_means_shared_day(a in range_strategy(), b in range_strategy()) {
        let shared = a.days().any(|day| b.days().any(|other| other == day));
        prop_assert_eq!(a.overlaps(&b), shared);
    }

    #[test]
    fn days_count_matches_len(a in range_strategy()) {
        prop_assert_eq!(a.days().count() as u64, a.len());
    }

    #[test]
    fn days_are_consecutive(a in range_strategy()) {
        let days: Vec<NaiveDate> = a.days().collect();
        prop_assert_eq!(days.first().copied(), Some(a.start()));
        prop_assert_eq!(days.last().copied(), Some(a.end()));
        for pair in days.windows(2) {
            prop_assert_eq!((pair[1] - pair[0]).num_days(), 1);
        }
    }
}
