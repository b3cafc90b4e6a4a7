use chrono::NaiveDate;

use crate::holiday::holiday::Holiday;

/// Decides whether a date is a holiday under some regional rule set.
pub trait HolidayStrategy: Send + Sync {
    fn is_holiday(&self, d: NaiveDate) -> bool;

    /// The named holidays this strategy knows about, or `None` when the
    /// strategy cannot enumerate them.
    fn holidays(&self) -> Option<Vec<Holiday>>;
}
