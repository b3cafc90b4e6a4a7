use super::fixeddateholiday::FixedDateHoliday;
use super::holiday::catalog_holiday;

catalog_holiday!(international_workers_day, "International Workers' Day", FixedDateHoliday::new_unchecked(5, 1));
catalog_holiday!(st_patricks_day, "St. Patrick's Day", FixedDateHoliday::new_unchecked(3, 17));
catalog_holiday!(veterans_day, "Veterans Day", FixedDateHoliday::new_unchecked(11, 11));
