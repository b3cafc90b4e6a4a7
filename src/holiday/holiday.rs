use std::sync::Arc;

use chrono::{NaiveDate, Weekday};

use crate::error::Result;

use super::easterrelatedholiday::EasterRelatedHoliday;
use super::fixeddateholiday::FixedDateHoliday;
use super::lastweekdayholiday::LastWeekdayHoliday;
use super::nthweekdayholiday::NthWeekdayHoliday;
use super::recurringholiday::RecurringHoliday;

/// A named, immutable holiday rule. Cloning shares the rule.
#[derive(Clone, Debug)]
pub struct Holiday {
    name: String,
    rule: Arc<dyn RecurringHoliday>
}

impl Holiday {
    pub fn new(name: impl Into<String>, rule: Arc<dyn RecurringHoliday>) -> Holiday {
        Holiday { name: name.into(), rule }
    }

    pub fn fixed(name: impl Into<String>, month: u32, day: u32) -> Result<Holiday> {
        Ok(Holiday::new(name, Arc::new(FixedDateHoliday::new(month, day)?)))
    }

    pub fn easter_related(name: impl Into<String>, shift_days: i64) -> Result<Holiday> {
        Ok(Holiday::new(name, Arc::new(EasterRelatedHoliday::new(shift_days)?)))
    }

    pub fn nth_weekday(name: impl Into<String>, month: u32, n: u8, weekday: Weekday) -> Result<Holiday> {
        Ok(Holiday::new(name, Arc::new(NthWeekdayHoliday::new(month, n, weekday)?)))
    }

    pub fn last_weekday(name: impl Into<String>, month: u32, weekday: Weekday) -> Result<Holiday> {
        Ok(Holiday::new(name, Arc::new(LastWeekdayHoliday::new(month, weekday)?)))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rule(&self) -> &Arc<dyn RecurringHoliday> {
        &self.rule
    }

    pub fn resolve(&self, year: i32) -> Result<NaiveDate> {
        self.rule.resolve(year)
    }

    pub fn is_holiday(&self, d: NaiveDate) -> bool {
        self.rule.is_holiday(d)
    }
}

/// Declares an accessor returning a process-lifetime catalog entry.
macro_rules! catalog_holiday {
    ($(#[$meta:meta])* $accessor:ident, $name:literal, $rule:expr) => {
        $(#[$meta])*
        pub fn $accessor() -> &'static $crate::holiday::holiday::Holiday {
            static HOLIDAY: std::sync::LazyLock<$crate::holiday::holiday::Holiday> =
                std::sync::LazyLock::new(|| {
                    $crate::holiday::holiday::Holiday::new($name, std::sync::Arc::new($rule))
                });
            &HOLIDAY
        }
    };
}

pub(crate) use catalog_holiday;
