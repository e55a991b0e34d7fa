//! Date ranges for quote requests.

use chrono::NaiveDate;

use crate::DateRangeError;

/// An inclusive range of calendar dates for history and candle requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// Start date (inclusive).
    pub from: NaiveDate,
    /// End date (inclusive).
    pub till: NaiveDate,
}

impl DateRange {
    /// Creates a new date range, validating that from <= till.
    ///
    /// # Errors
    ///
    /// Returns an error if from > till.
    pub fn new(from: NaiveDate, till: NaiveDate) -> Result<Self, DateRangeError> {
        if from > till {
            return Err(DateRangeError::InvalidRange { from, till });
        }
        Ok(Self { from, till })
    }

    /// Creates a date range for a single day.
    #[must_use]
    pub const fn single_day(date: NaiveDate) -> Self {
        Self {
            from: date,
            till: date,
        }
    }

    /// Narrows the range to a board's availability window.
    ///
    /// An unbounded side (`None`) leaves the corresponding bound as the
    /// caller supplied it. The result may be empty (from > till) when the
    /// requested range lies entirely outside the window; the server then
    /// simply returns no rows.
    #[must_use]
    pub fn clamp_to(&self, from: Option<NaiveDate>, till: Option<NaiveDate>) -> Self {
        Self {
            from: from.map_or(self.from, |f| self.from.max(f)),
            till: till.map_or(self.till, |t| self.till.min(t)),
        }
    }

    /// Returns true if the range contains the given date.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.from && date <= self.till
    }

    /// Returns the total number of days in the range.
    #[must_use]
    pub fn total_days(&self) -> usize {
        ((self.till - self.from).num_days() + 1) as usize
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.from, self.till)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_date_range_new() {
        let range = DateRange::new(d(2024, 1, 1), d(2024, 1, 31)).unwrap();
        assert_eq!(range.from, d(2024, 1, 1));
        assert_eq!(range.till, d(2024, 1, 31));
    }

    #[test]
    fn test_date_range_invalid() {
        assert!(DateRange::new(d(2024, 1, 31), d(2024, 1, 1)).is_err());
    }

    #[test]
    fn test_clamp_to_window() {
        let requested = DateRange::new(d(2019, 1, 1), d(2022, 1, 1)).unwrap();
        let clamped = requested.clamp_to(Some(d(2020, 1, 1)), Some(d(2021, 1, 1)));
        assert_eq!(clamped.from, d(2020, 1, 1));
        assert_eq!(clamped.till, d(2021, 1, 1));
    }

    #[test]
    fn test_clamp_unbounded_side_passes_through() {
        let requested = DateRange::new(d(2019, 1, 1), d(2022, 1, 1)).unwrap();
        let clamped = requested.clamp_to(None, Some(d(2021, 1, 1)));
        assert_eq!(clamped.from, d(2019, 1, 1));
        assert_eq!(clamped.till, d(2021, 1, 1));

        let clamped = requested.clamp_to(Some(d(2020, 1, 1)), None);
        assert_eq!(clamped.from, d(2020, 1, 1));
        assert_eq!(clamped.till, d(2022, 1, 1));
    }

    #[test]
    fn test_clamp_inside_window_is_identity() {
        let requested = DateRange::new(d(2020, 6, 1), d(2020, 7, 1)).unwrap();
        let clamped = requested.clamp_to(Some(d(2020, 1, 1)), Some(d(2021, 1, 1)));
        assert_eq!(clamped, requested);
    }

    #[test]
    fn test_total_days() {
        let range = DateRange::single_day(d(2024, 1, 1));
        assert_eq!(range.total_days(), 1);
        assert!(range.contains(d(2024, 1, 1)));
        assert!(!range.contains(d(2024, 1, 2)));
    }
}
