use std::iter;
use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::holiday::holiday::Holiday;

use super::holidaystrategy::HolidayStrategy;
use super::weekendadjustment::ObservanceRule;
use super::yearcache::YearCache;

/// A country rule set: decorates another strategy with national holidays.
///
/// Fixed holidays are matched by month and day. Moveable holidays are
/// resolved once per year and cached. With an observance rule, a date is
/// also a holiday when a holiday on a nearby weekend day is observed on it.
pub struct NationalHolidayStrategy {
    decorated: Box<dyn HolidayStrategy>,
    fixed_holidays: Vec<Holiday>,
    moveable_holidays: Vec<Holiday>,
    moveable_per_year: YearCache<Vec<NaiveDate>>,
    observance: ObservanceRule
}

impl NationalHolidayStrategy {
    pub fn new(decorated: Box<dyn HolidayStrategy>) -> NationalHolidayStrategy {
        NationalHolidayStrategy {
            decorated,
            fixed_holidays: Vec::new(),
            moveable_holidays: Vec::new(),
            moveable_per_year: YearCache::new(),
            observance: ObservanceRule::none()
        }
    }

    pub fn with_fixed_holiday(mut self, holiday: Holiday) -> NationalHolidayStrategy {
        self.fixed_holidays.push(holiday);
        self
    }

    pub fn with_moveable_holiday(mut self, holiday: Holiday) -> NationalHolidayStrategy {
        self.moveable_holidays.push(holiday);
        self
    }

    pub fn with_observance(mut self, observance: ObservanceRule) -> NationalHolidayStrategy {
        self.observance = observance;
        self
    }

    pub fn decorated(&self) -> &dyn HolidayStrategy {
        self.decorated.as_ref()
    }

    pub fn observance(&self) -> &ObservanceRule {
        &self.observance
    }

    /// Number of years whose moveable holidays have been computed so far.
    pub fn cached_years(&self) -> usize {
        self.moveable_per_year.len()
    }

    fn moveable_holidays_in(&self, year: i32) -> Arc<Vec<NaiveDate>> {
        self.moveable_per_year.get_or_compute(year, || {
            let dates: Vec<NaiveDate> = self.moveable_holidays.iter()
                .filter_map(|h| h.resolve(year).ok())
                .collect();
            debug!(year, count = dates.len(), "computed moveable national holidays");
            dates
        })
    }

    fn matches(&self, test_date: NaiveDate) -> bool {
        if self.decorated.is_holiday(test_date) {
            return true;
        }
        if self.fixed_holidays.iter().any(|h| h.is_holiday(test_date)) {
            return true;
        }
        !self.moveable_holidays.is_empty()
            && self.moveable_holidays_in(test_date.year()).contains(&test_date)
    }
}

impl HolidayStrategy for NationalHolidayStrategy {
    fn is_holiday(&self, d: NaiveDate) -> bool {
        iter::once(d)
            .chain(self.observance.shifted_test_dates(d))
            .any(|test_date| self.matches(test_date))
    }

    fn holidays(&self) -> Option<Vec<Holiday>> {
        let mut holidays = self.decorated.holidays().unwrap_or_default();
        holidays.extend(self.fixed_holidays.iter().cloned());
        holidays.extend(self.moveable_holidays.iter().cloned());
        Some(holidays)
    }
}
