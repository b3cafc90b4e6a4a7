use chrono::NaiveDate;

use crate::holiday::holiday::Holiday;

use super::holidaystrategy::HolidayStrategy;

/// No holidays at all.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultHolidayStrategy;

impl HolidayStrategy for DefaultHolidayStrategy {
    fn is_holiday(&self, _d: NaiveDate) -> bool {
        false
    }

    fn holidays(&self) -> Option<Vec<Holiday>> {
        Some(Vec::new())
    }
}
