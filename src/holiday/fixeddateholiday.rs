use chrono::NaiveDate;

use crate::error::{Result, WorkingDayError};
use crate::time::utility::is_valid_month_day;

use super::recurringholiday::RecurringHoliday;

/// Same month and day every year.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedDateHoliday {
    month: u32,
    day: u32
}

impl FixedDateHoliday {
    /// Fails when `(month, day)` is not a calendar day even in a leap year.
    pub fn new(month: u32, day: u32) -> Result<FixedDateHoliday> {
        if !is_valid_month_day(month, day) {
            return Err(WorkingDayError::InvalidArgument(
                format!("{month:02}-{day:02} is not a day of the year")
            ));
        }
        Ok(FixedDateHoliday { month, day })
    }

    /// Catalog entries are literals known to be valid.
    pub(crate) const fn new_unchecked(month: u32, day: u32) -> FixedDateHoliday {
        FixedDateHoliday { month, day }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}

impl RecurringHoliday for FixedDateHoliday {
    fn resolve(&self, year: i32) -> Result<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
            .ok_or(WorkingDayError::InvalidDate { year, month: self.month, day: self.day })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_to_the_same_day_every_year() {
        let christmas = FixedDateHoliday::new(12, 25).unwrap();
        assert_eq!(christmas.resolve(2011).unwrap(), NaiveDate::from_ymd_opt(2011, 12, 25).unwrap());
        assert_eq!(christmas.resolve(1999).unwrap(), NaiveDate::from_ymd_opt(1999, 12, 25).unwrap());
    }

    #[test]
    fn leap_day_fails_outside_leap_years() {
        let leap_day = FixedDateHoliday::new(2, 29).unwrap();
        assert!(leap_day.resolve(2012).is_ok());
        assert!(matches!(
            leap_day.resolve(2011),
            Err(WorkingDayError::InvalidDate { year: 2011, month: 2, day: 29 })
        ));
        assert!(!leap_day.is_holiday(NaiveDate::from_ymd_opt(2011, 3, 1).unwrap()));
    }

    #[test]
    fn rejects_impossible_days() {
        assert!(matches!(FixedDateHoliday::new(4, 31), Err(WorkingDayError::InvalidArgument(_))));
        assert!(matches!(FixedDateHoliday::new(0, 1), Err(WorkingDayError::InvalidArgument(_))));
    }
}
