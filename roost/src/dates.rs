//! Date ranges covered by stays and the predicates that compare them.
//!
//! Two comparisons exist:
//!
//! - [`DateRange::overlaps`] is inclusive on both ends. A stay ending on day
//!   X and another starting on day X overlap. Creation uses this test.
//! - [`DateRange::is_disjoint_from`] is strict. The update path uses it to
//!   decide that another stay does *not* conflict.
//!
//! For closed ranges `is_disjoint_from` is exactly `!overlaps`. Both exist
//! because callers apply them as separate gates with separate messages.

use std::fmt;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A span of calendar days from `start` to `end`.
///
/// Ranges built with [`DateRange::new`] satisfy `start < end`. Ranges built
/// from incoming requests with [`DateRange::spanning`] may not, so that
/// conflicts can still be reported for requests with out-of-order dates.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use roost::DateRange;
///
/// let d = |day| NaiveDate::from_ymd_opt(2025, 1, day).unwrap();
///
/// let first = DateRange::new(d(10), d(15)).unwrap();
/// let touching = DateRange::new(d(15), d(20)).unwrap();
/// let later = DateRange::new(d(16), d(20)).unwrap();
///
/// assert!(first.overlaps(&touching));
/// assert!(!first.overlaps(&later));
/// assert!(first.is_disjoint_from(&later));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a range whose start strictly precedes its end.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDateRange`] if `start >= end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start >= end {
            return Err(Error::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a range without checking the order of its endpoints.
    #[must_use]
    pub const fn spanning(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Returns the first day.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Returns the last day.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns `true` if the start does not come before the end.
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.start >= self.end
    }

    /// Inclusive overlap: `self.start <= other.end && self.end >= other.start`.
    ///
    /// Shared boundary days count as overlapping.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && self.end >= other.start
    }

    /// Strict disjointness: `self.start > other.end || self.end < other.start`.
    ///
    /// Only ranges separated by at least one day are disjoint.
    #[must_use]
    pub fn is_disjoint_from(&self, other: &Self) -> bool {
        self.start > other.end || self.end < other.start
    }

    /// Number of calendar days in the range, endpoints included.
    ///
    /// Inverted ranges contain no days.
    #[must_use]
    pub fn len(&self) -> u64 {
        if self.start > self.end {
            0
        } else {
            u64::try_from((self.end - self.start).num_days()).unwrap_or(0) + 1
        }
    }

    /// Returns `true` if the range contains no days.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over every day from start to end, both included.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use roost::DateRange;
    ///
    /// let d = |day| NaiveDate::from_ymd_opt(2025, 3, day).unwrap();
    /// let days: Vec<NaiveDate> = DateRange::new(d(1), d(3)).unwrap().days().collect();
    /// assert_eq!(days, vec![d(1), d(2), d(3)]);
    /// ```
    #[must_use]
    pub fn days(self) -> DateRangeIter {
        DateRangeIter {
            next: (self.start <= self.end).then_some(self.start),
            end: self.end,
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl IntoIterator for DateRange {
    type Item = NaiveDate;
    type IntoIter = DateRangeIter;

    fn into_iter(self) -> Self::IntoIter {
        self.days()
    }
}

/// Iterator over the days of a `DateRange`.
#[derive(Debug, Clone)]
pub struct DateRangeIter {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl Iterator for DateRangeIter {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = if current < self.end {
            current.checked_add_days(Days::new(1))
        } else {
            None
        };
        Some(current)
    }
}

#[cfg(test)]
mod proptests;

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn range(a: (i32, u32, u32), b: (i32, u32, u32)) -> DateRange {
        DateRange::spanning(d(a.0, a.1, a.2), d(b.0, b.1, b.2))
    }

    #[test]
    fn test_new_rejects_inverted_and_equal() {
        assert!(DateRange::new(d(2025, 1, 10), d(2025, 1, 11)).is_ok());
        assert!(matches!(
            DateRange::new(d(2025, 1, 10), d(2025, 1, 10)),
            Err(Error::InvalidDateRange { .. })
        ));
        assert!(matches!(
            DateRange::new(d(2025, 1, 11), d(2025, 1, 10)),
            Err(Error::InvalidDateRange { .. })
        ));
    }

    #[test]
    fn test_overlaps_shared_boundary() {
        let a = range((2025, 1, 10), (2025, 1, 15));
        let b = range((2025, 1, 15), (2025, 1, 20));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_overlaps_adjacent_days_do_not_overlap() {
        let a = range((2025, 1, 10), (2025, 1, 14));
        let b = range((2025, 1, 15), (2025, 1, 20));
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_overlaps_containment() {
        let outer = range((2025, 1, 1), (2025, 1, 31));
        let inner = range((2025, 1, 10), (2025, 1, 12));
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_disjoint_strict() {
        let a = range((2025, 1, 10), (2025, 1, 15));
        let touching = range((2025, 1, 15), (2025, 1, 20));
        let apart = range((2025, 1, 16), (2025, 1, 20));
        assert!(!a.is_disjoint_from(&touching));
        assert!(a.is_disjoint_from(&apart));
        assert!(apart.is_disjoint_from(&a));
    }

    #[test]
    fn test_len_and_days() {
        let a = range((2024, 2, 27), (2024, 3, 1));
        assert_eq!(a.len(), 4);
        let days: Vec<_> = a.days().collect();
        assert_eq!(
            days,
            vec![d(2024, 2, 27), d(2024, 2, 28), d(2024, 2, 29), d(2024, 3, 1)]
        );
    }

    #[test]
    fn test_inverted_range_has_no_days() {
        let a = range((2025, 1, 15), (2025, 1, 10));
        assert!(a.is_inverted());
        assert!(a.is_empty());
        assert_eq!(a.days().count(), 0);
    }

    #[test]
    fn test_single_day_span() {
        let a = range((2025, 1, 15), (2025, 1, 15));
        assert!(a.is_inverted());
        assert_eq!(a.len(), 1);
        assert_eq!(a.days().count(), 1);
    }

    #[test]
    fn test_display() {
        let a = range((2025, 1, 10), (2025, 1, 15));
        assert_eq!(format!("{a}"), "2025-01-10..2025-01-15");
    }
}
