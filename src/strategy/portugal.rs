use crate::holiday::christianholidays::ChristianHoliday;
use crate::holiday::fixeddateholiday::FixedDateHoliday;
use crate::holiday::globalholidays::international_workers_day;
use crate::holiday::holiday::catalog_holiday;

use super::christianholidaystrategy::ChristianHolidayStrategy;
use super::nationalholidaystrategy::NationalHolidayStrategy;

catalog_holiday!(freedom_day, "Freedom Day", FixedDateHoliday::new_unchecked(4, 25));
catalog_holiday!(portugal_day, "Portugal Day", FixedDateHoliday::new_unchecked(6, 10));
catalog_holiday!(republic_day, "Republic Day", FixedDateHoliday::new_unchecked(10, 5));
catalog_holiday!(restoration_of_independence, "Restoration of Independence", FixedDateHoliday::new_unchecked(12, 1));

/// National holidays of Portugal. No weekend observance.
pub fn portugal() -> NationalHolidayStrategy {
    let christian = ChristianHolidayStrategy::new(
        ChristianHoliday::NEW_YEAR
            | ChristianHoliday::GOOD_FRIDAY
            | ChristianHoliday::EASTER
            | ChristianHoliday::CORPUS_CHRISTI
            | ChristianHoliday::ASSUMPTION
            | ChristianHoliday::ALL_SAINTS
            | ChristianHoliday::IMMACULATE_CONCEPTION
            | ChristianHoliday::CHRISTMAS
    );
    NationalHolidayStrategy::new(Box::new(christian))
        .with_fixed_holiday(freedom_day().clone())
        .with_fixed_holiday(international_workers_day().clone())
        .with_fixed_holiday(portugal_day().clone())
        .with_fixed_holiday(republic_day().clone())
        .with_fixed_holiday(restoration_of_independence().clone())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::strategy::holidaystrategy::HolidayStrategy;

    use super::*;

    #[test]
    fn good_friday_and_freedom_day_2011() {
        let strategy = portugal();
        assert!(strategy.is_holiday(NaiveDate::from_ymd_opt(2011, 4, 22).unwrap()));
        assert!(strategy.is_holiday(NaiveDate::from_ymd_opt(2011, 4, 25).unwrap()));
        assert!(!strategy.is_holiday(NaiveDate::from_ymd_opt(2011, 4, 26).unwrap()));
        // Freedom Day on a Sunday is not moved
        assert!(!strategy.is_holiday(NaiveDate::from_ymd_opt(2010, 4, 26).unwrap()));
    }

    #[test]
    fn thirteen_holidays() {
        assert_eq!(portugal().holidays().unwrap().len(), 13);
    }
}
