use std::fmt::Debug;

use chrono::{Datelike, NaiveDate};

use crate::error::Result;

/// A rule producing one concrete date per year.
///
/// Resolving must be a pure function of the rule and the year.
pub trait RecurringHoliday: Debug + Send + Sync {

    fn resolve(&self, year: i32) -> Result<NaiveDate>;

    fn is_holiday(&self, d: NaiveDate) -> bool {
        self.resolve(d.year()).is_ok_and(|holiday| holiday == d)
    }
}
