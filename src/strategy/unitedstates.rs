use chrono::Weekday;

use crate::holiday::christianholidays::ChristianHoliday;
use crate::holiday::fixeddateholiday::FixedDateHoliday;
use crate::holiday::globalholidays::veterans_day;
use crate::holiday::holiday::catalog_holiday;
use crate::holiday::lastweekdayholiday::LastWeekdayHoliday;
use crate::holiday::nthweekdayholiday::NthWeekdayHoliday;

use super::christianholidaystrategy::ChristianHolidayStrategy;
use super::nationalholidaystrategy::NationalHolidayStrategy;
use super::weekendadjustment::ObservanceRule;

catalog_holiday!(independence_day, "Independence Day", FixedDateHoliday::new_unchecked(7, 4));
catalog_holiday!(martin_luther_king_day, "Martin Luther King Jr. Day", NthWeekdayHoliday::new_unchecked(1, 3, Weekday::Mon));
catalog_holiday!(washingtons_birthday, "Washington's Birthday", NthWeekdayHoliday::new_unchecked(2, 3, Weekday::Mon));
catalog_holiday!(memorial_day, "Memorial Day", LastWeekdayHoliday::new_unchecked(5, Weekday::Mon));
catalog_holiday!(labor_day, "Labor Day", NthWeekdayHoliday::new_unchecked(9, 1, Weekday::Mon));
catalog_holiday!(columbus_day, "Columbus Day", NthWeekdayHoliday::new_unchecked(10, 2, Weekday::Mon));
catalog_holiday!(thanksgiving_day, "Thanksgiving Day", NthWeekdayHoliday::new_unchecked(11, 4, Weekday::Thu));

/// Federal holidays, observed on Friday/Monday when they fall on a weekend.
pub fn united_states() -> NationalHolidayStrategy {
    let christian = ChristianHolidayStrategy::new(ChristianHoliday::NEW_YEAR | ChristianHoliday::CHRISTMAS);
    NationalHolidayStrategy::new(Box::new(christian))
        .with_fixed_holiday(independence_day().clone())
        .with_fixed_holiday(veterans_day().clone())
        .with_moveable_holiday(martin_luther_king_day().clone())
        .with_moveable_holiday(washingtons_birthday().clone())
        .with_moveable_holiday(memorial_day().clone())
        .with_moveable_holiday(labor_day().clone())
        .with_moveable_holiday(columbus_day().clone())
        .with_moveable_holiday(thanksgiving_day().clone())
        .with_observance(ObservanceRule::weekend_observance())
}
