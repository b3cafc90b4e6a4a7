use chrono::{NaiveDate, TimeDelta};

use crate::error::{Result, WorkingDayError};
use crate::time::easter::easter_sunday;

use super::recurringholiday::RecurringHoliday;

/// A signed day offset from Western Easter Sunday.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EasterRelatedHoliday {
    shift_days: i64
}

impl EasterRelatedHoliday {
    /// Largest offset, in either direction, accepted by [`EasterRelatedHoliday::new`].
    pub const MAX_SHIFT_DAYS: i64 = 366;

    pub fn new(shift_days: i64) -> Result<EasterRelatedHoliday> {
        if shift_days.unsigned_abs() > Self::MAX_SHIFT_DAYS.unsigned_abs() {
            return Err(WorkingDayError::InvalidArgument(
                format!("easter offset of {shift_days} days exceeds {} days", Self::MAX_SHIFT_DAYS)
            ));
        }
        Ok(EasterRelatedHoliday { shift_days })
    }

    pub(crate) const fn new_unchecked(shift_days: i64) -> EasterRelatedHoliday {
        EasterRelatedHoliday { shift_days }
    }

    pub fn shift_days(&self) -> i64 {
        self.shift_days
    }
}

impl RecurringHoliday for EasterRelatedHoliday {
    fn resolve(&self, year: i32) -> Result<NaiveDate> {
        let easter = easter_sunday(year).ok_or(WorkingDayError::YearOutOfRange(year))?;
        let shift = TimeDelta::try_days(self.shift_days).ok_or_else(|| WorkingDayError::InvalidArgument(
            format!("easter offset of {} days", self.shift_days)
        ))?;
        easter.checked_add_signed(shift).ok_or(WorkingDayError::YearOutOfRange(year))
    }
}
