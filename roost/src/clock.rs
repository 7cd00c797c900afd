//! Source of the current date.

use chrono::{Local, NaiveDate};

/// Where the reservation service gets "today" from.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use roost::Clock;
///
/// let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// assert_eq!(Clock::Fixed(date).today(), date);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Clock {
    /// The local calendar date of the machine.
    #[default]
    System,
    /// A fixed date.
    Fixed(NaiveDate),
}

impl Clock {
    /// Returns the current date according to this clock.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        match self {
            Self::System => Local::now().date_naive(),
            Self::Fixed(date) => *date,
        }
    }
}

impl From<Option<NaiveDate>> for Clock {
    fn from(date: Option<NaiveDate>) -> Self {
        date.map_or(Self::System, Self::Fixed)
    }
}
