use chrono::{NaiveDate, Weekday};

use crate::error::{Result, WorkingDayError};
use crate::time::weekdayops::last_weekday_of_month;

use super::recurringholiday::RecurringHoliday;

/// The last occurrence of a weekday in a month, e.g. the last Monday of May.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LastWeekdayHoliday {
    month: u32,
    weekday: Weekday,
}

impl LastWeekdayHoliday {
    pub fn new(month: u32, weekday: Weekday) -> Result<LastWeekdayHoliday> {
        if !(1..=12).contains(&month) {
            Err(WorkingDayError::InvalidArgument(format!("month {month}")))
        } else {
            Ok(LastWeekdayHoliday { month, weekday })
        }
    }

    pub(crate) const fn new_unchecked(month: u32, weekday: Weekday) -> LastWeekdayHoliday {
        LastWeekdayHoliday { month, weekday }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }
}

impl RecurringHoliday for LastWeekdayHoliday {
    fn resolve(&self, year: i32) -> Result<NaiveDate> {
        let first_of_month = NaiveDate::from_ymd_opt(year, self.month, 1)
            .ok_or(WorkingDayError::InvalidDate { year, month: self.month, day: 1 })?;
        Ok(last_weekday_of_month(first_of_month, self.weekday))
    }
}
