use chrono::NaiveDate;

use crate::error::Result;
use crate::holiday::christianholidays::ChristianHoliday;
use crate::holiday::holiday::Holiday;

use super::holidaystrategy::HolidayStrategy;

/// Holidays drawn from the Christian catalog by a flag selection.
#[derive(Clone, Debug)]
pub struct ChristianHolidayStrategy {
    selection: ChristianHoliday,
    holidays: Vec<Holiday>
}

impl ChristianHolidayStrategy {
    pub fn new(selection: ChristianHoliday) -> ChristianHolidayStrategy {
        ChristianHolidayStrategy {
            selection,
            holidays: selection.holidays()
        }
    }

    pub fn from_bits(bits: u16) -> Result<ChristianHolidayStrategy> {
        Ok(ChristianHolidayStrategy::new(ChristianHoliday::from_bits(bits)?))
    }

    pub fn selection(&self) -> ChristianHoliday {
        self.selection
    }
}

impl HolidayStrategy for ChristianHolidayStrategy {
    fn is_holiday(&self, d: NaiveDate) -> bool {
        self.holidays.iter().any(|h| h.is_holiday(d))
    }

    fn holidays(&self) -> Option<Vec<Holiday>> {
        Some(self.holidays.clone())
    }
}
