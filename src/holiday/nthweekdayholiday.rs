use chrono::{
    Datelike,
    Days,
    NaiveDate,
    Weekday
};

use crate::error::{Result, WorkingDayError};
use crate::time::weekdayops::first_weekday_of_month;

use super::recurringholiday::RecurringHoliday;

/// The n-th occurrence of a weekday in a month, e.g. the third Monday of January.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NthWeekdayHoliday {
    month: u32,
    n: u8,
    weekday: Weekday,
}

impl NthWeekdayHoliday {
    pub fn new(month: u32, n: u8, weekday: Weekday) -> Result<NthWeekdayHoliday> {
        if !(1..=12).contains(&month) || !(1..=5).contains(&n) {
            Err(WorkingDayError::InvalidArgument(
                format!("occurrence {n} of {weekday} in month {month}")
            ))
        } else {
            Ok(NthWeekdayHoliday { month, n, weekday })
        }
    }

    pub(crate) const fn new_unchecked(month: u32, n: u8, weekday: Weekday) -> NthWeekdayHoliday {
        NthWeekdayHoliday { month, n, weekday }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn n(&self) -> u8 {
        self.n
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }
}

impl RecurringHoliday for NthWeekdayHoliday {
    fn resolve(&self, year: i32) -> Result<NaiveDate> {
        let first_of_month = NaiveDate::from_ymd_opt(year, self.month, 1)
            .ok_or(WorkingDayError::InvalidDate { year, month: self.month, day: 1 })?;
        let first = first_weekday_of_month(first_of_month, self.weekday);
        let weeks_after = self.n as u32 - 1;
        first.checked_add_days(Days::new(7 * weeks_after as u64))
            .filter(|nth| nth.month() == self.month)
            .ok_or(WorkingDayError::InvalidDate { year, month: self.month, day: first.day() + 7 * weeks_after })
    }
}
