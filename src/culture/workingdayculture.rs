use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use chrono::{
    Datelike,
    Days,
    NaiveDate,
    Weekday
};

use crate::error::Result;
use crate::holiday::holiday::Holiday;
use crate::strategy::holidaystrategy::HolidayStrategy;
use crate::strategy::weekdaypolicy::WeekdayPolicy;

use super::cultureregistry::CultureRegistry;

const ONE_DAY: Days = Days::new(1);

/// Working-day rules of a region, plus the date arithmetic built on them.
///
/// Implement this directly for a fully custom culture, or use
/// [`WorkingDayCulture`] to pair a holiday strategy with a weekday policy.
pub trait WorkingDayCultureInfo: Send + Sync {
    fn name(&self) -> &str;

    fn is_working_weekday(&self, weekday: Weekday) -> bool;

    fn is_working_day(&self, d: NaiveDate) -> bool;

    fn holidays(&self) -> Option<Vec<Holiday>>;

    /// Moves `n` working days away from `horizon`, one calendar day at a
    /// time. `horizon` itself is never counted, so `n == 0` returns it
    /// unchanged.
    ///
    /// # Panics
    ///
    /// Panics when the walk passes `NaiveDate::MAX` or `NaiveDate::MIN`.
    fn add_working_days(&self, horizon: NaiveDate, n: i32) -> NaiveDate {
        let shift_one_day: fn(NaiveDate) -> NaiveDate = if n >= 0 {
            |d: NaiveDate| d + ONE_DAY
        } else {
            |d: NaiveDate| d - ONE_DAY
        };

        let mut m = n.unsigned_abs();
        let mut d = horizon;
        while m > 0 {
            d = shift_one_day(d);
            m -= self.is_working_day(d) as u32;
        }
        d
    }

    fn next_working_day(&self, d: NaiveDate) -> NaiveDate {
        self.add_working_days(d, 1)
    }

    fn previous_working_day(&self, d: NaiveDate) -> NaiveDate {
        self.add_working_days(d, -1)
    }

    /// Every catalog holiday resolved in the year of `d`, keyed by date.
    ///
    /// Entries resolving to the same date collapse; the later catalog entry
    /// wins. A culture without an enumerable catalog yields an empty map.
    fn all_year_holidays(&self, d: NaiveDate) -> Result<BTreeMap<NaiveDate, Holiday>> {
        let mut holidays = BTreeMap::new();
        for holiday in self.holidays().unwrap_or_default() {
            holidays.insert(holiday.resolve(d.year())?, holiday);
        }
        Ok(holidays)
    }
}

/// A holiday strategy paired with a weekday policy under a culture name.
#[derive(Clone)]
pub struct WorkingDayCulture {
    name: String,
    holiday_strategy: Arc<dyn HolidayStrategy>,
    weekday_policy: Arc<dyn WeekdayPolicy>
}

impl WorkingDayCulture {
    pub fn new(name: impl Into<String>,
               holiday_strategy: Arc<dyn HolidayStrategy>,
               weekday_policy: Arc<dyn WeekdayPolicy>) -> WorkingDayCulture {
        WorkingDayCulture { name: name.into(), holiday_strategy, weekday_policy }
    }

    /// Resolves `name` through the process-wide registry.
    pub fn resolve(name: &str) -> Result<WorkingDayCulture> {
        CultureRegistry::global().resolve(name)
    }

    pub fn holiday_strategy(&self) -> &Arc<dyn HolidayStrategy> {
        &self.holiday_strategy
    }

    pub fn weekday_policy(&self) -> &Arc<dyn WeekdayPolicy> {
        &self.weekday_policy
    }
}

impl WorkingDayCultureInfo for WorkingDayCulture {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_working_weekday(&self, weekday: Weekday) -> bool {
        self.weekday_policy.is_working_weekday(weekday)
    }

    fn is_working_day(&self, d: NaiveDate) -> bool {
        self.weekday_policy.is_working_weekday(d.weekday()) && !self.holiday_strategy.is_holiday(d)
    }

    fn holidays(&self) -> Option<Vec<Holiday>> {
        self.holiday_strategy.holidays()
    }
}

impl fmt::Debug for WorkingDayCulture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkingDayCulture").field("name", &self.name).finish_non_exhaustive()
    }
}
