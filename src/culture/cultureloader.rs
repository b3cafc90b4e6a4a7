use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use chrono::Weekday;
use serde::Deserialize;

use crate::error::{parse_json_value, Result};
use crate::holiday::christianholidays::ChristianHoliday;
use crate::holiday::holiday::Holiday;
use crate::strategy::christianholidaystrategy::ChristianHolidayStrategy;
use crate::strategy::nationalholidaystrategy::NationalHolidayStrategy;
use crate::strategy::weekdaypolicy::WeekendMaskPolicy;
use crate::strategy::weekendadjustment::{ObservanceRule, WeekendAdjustment};

use super::workingdayculture::WorkingDayCulture;

#[derive(Deserialize)]
struct EasterRelatedHolidayJsonProp {
    name: String,
    shift_days: i64
}

#[derive(Deserialize)]
struct NthWeekdayHolidayJsonProp {
    name: String,
    month: u32,
    n: u8,
    weekday: Weekday,
}

#[derive(Deserialize)]
struct LastWeekdayHolidayJsonProp {
    name: String,
    month: u32,
    weekday: Weekday,
}

#[derive(Deserialize)]
struct FixedDateHolidayJsonProp {
    name: String,
    month: u32,
    day: u32
}

#[derive(Deserialize)]
enum HolidayType {
    EasterRelated,
    FixedDate,
    NthWeekday,
    LastWeekday
}

#[derive(Deserialize)]
struct HolidayTypedObject {
    holiday_type: HolidayType
}

/// A holiday parsed from JSON, sorted by how the strategy matches it.
enum NationalHoliday {
    Fixed(Holiday),
    Moveable(Holiday)
}

fn get_holiday_from_json(json: serde_json::Value) -> Result<NationalHoliday> {
    let holiday_type_obj: HolidayTypedObject = parse_json_value(json.clone())?;
    match holiday_type_obj.holiday_type {
        HolidayType::FixedDate => {
            let prop: FixedDateHolidayJsonProp = parse_json_value(json)?;
            Ok(NationalHoliday::Fixed(Holiday::fixed(prop.name, prop.month, prop.day)?))
        },
        HolidayType::EasterRelated => {
            let prop: EasterRelatedHolidayJsonProp = parse_json_value(json)?;
            Ok(NationalHoliday::Moveable(Holiday::easter_related(prop.name, prop.shift_days)?))
        },
        HolidayType::NthWeekday => {
            let prop: NthWeekdayHolidayJsonProp = parse_json_value(json)?;
            Ok(NationalHoliday::Moveable(Holiday::nth_weekday(prop.name, prop.month, prop.n, prop.weekday)?))
        },
        HolidayType::LastWeekday => {
            let prop: LastWeekdayHolidayJsonProp = parse_json_value(json)?;
            Ok(NationalHoliday::Moveable(Holiday::last_weekday(prop.name, prop.month, prop.weekday)?))
        }
    }
}

fn default_weekends() -> HashSet<Weekday> {
    HashSet::from([Weekday::Sat, Weekday::Sun])
}

#[derive(Deserialize)]
struct CultureJsonProp {
    name: String,
    #[serde(default = "default_weekends")]
    weekends: HashSet<Weekday>,
    #[serde(default)]
    christian_holidays: Vec<String>,
    #[serde(default)]
    observance: HashMap<Weekday, WeekendAdjustment>,
    #[serde(default)]
    holidays: Vec<serde_json::Value>
}

/// Builds a culture from its JSON description.
pub fn culture_from_json(json_value: serde_json::Value) -> Result<WorkingDayCulture> {
    let prop: CultureJsonProp = parse_json_value(json_value)?;

    let mut selection = ChristianHoliday::NONE;
    for name in prop.christian_holidays.iter() {
        selection |= ChristianHoliday::from_name(name)?;
    }

    let mut strategy = NationalHolidayStrategy::new(Box::new(ChristianHolidayStrategy::new(selection)))
        .with_observance(ObservanceRule::new(&prop.observance));
    for holiday_json in prop.holidays {
        strategy = match get_holiday_from_json(holiday_json)? {
            NationalHoliday::Fixed(holiday) => strategy.with_fixed_holiday(holiday),
            NationalHoliday::Moveable(holiday) => strategy.with_moveable_holiday(holiday)
        };
    }

    Ok(WorkingDayCulture::new(
        prop.name,
        Arc::new(strategy),
        Arc::new(WeekendMaskPolicy::new(&prop.weekends))
    ))
}
