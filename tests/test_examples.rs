use std::io::Cursor;
use std::sync::Arc;

use chrono::{Datelike, NaiveDate, Weekday};

use workingdays::configuration::Configuration;
use workingdays::culture::cultureregistry::CultureRegistry;
use workingdays::culture::workingdayculture::{WorkingDayCulture, WorkingDayCultureInfo};
use workingdays::error::WorkingDayError;
use workingdays::holiday::christianholidays::{self, ChristianHoliday};
use workingdays::holiday::holiday::Holiday;
use workingdays::strategy::holidaystrategy::HolidayStrategy;
use workingdays::strategy::weekdaypolicy::WeekdayPolicy;
use workingdays::time::weekdayops::{first_weekday_of_month, last_weekday, last_weekday_of_month, next_weekday};

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn portugal() -> WorkingDayCulture {
    WorkingDayCulture::resolve("pt-PT").unwrap()
}

#[test]
fn friday_plus_two_working_days() {
    let culture = WorkingDayCulture::resolve("default").unwrap();
    assert_eq!(culture.add_working_days(ymd(2011, 5, 13), 2), ymd(2011, 5, 17));
}

#[test]
fn portuguese_easter_week() {
    assert_eq!(portugal().add_working_days(ymd(2011, 4, 21), 2), ymd(2011, 4, 27));
    let default = WorkingDayCulture::resolve("default").unwrap();
    assert_eq!(default.add_working_days(ymd(2011, 4, 21), 2), ymd(2011, 4, 25));
}

#[test]
fn freedom_day_is_not_worked() {
    let culture = portugal();
    assert!(!culture.is_working_day(ymd(2011, 4, 25)));
    assert!(culture.is_working_day(ymd(2011, 4, 26)));
}

#[test]
fn next_and_last_tuesday() {
    let saturday = ymd(2011, 8, 20);
    assert_eq!(next_weekday(saturday, Weekday::Tue), ymd(2011, 8, 23));
    assert_eq!(last_weekday(saturday, Weekday::Tue), ymd(2011, 8, 16));
}

#[test]
fn tuesdays_of_august() {
    for day in 1..=31 {
        let d = ymd(2011, 8, day);
        assert_eq!(first_weekday_of_month(d, Weekday::Tue), ymd(2011, 8, 2));
        assert_eq!(last_weekday_of_month(d, Weekday::Tue), ymd(2011, 8, 30));
    }
}

#[test]
fn portuguese_year_has_thirteen_holidays() {
    let culture = portugal();
    let holidays = culture.all_year_holidays(ymd(2011, 6, 15)).unwrap();
    assert_eq!(holidays.len(), 13);
    for (date, holiday) in holidays.iter() {
        assert_eq!(date.year(), 2011);
        assert!(!culture.is_working_day(*date), "{} on {date} is a working day", holiday.name());
    }
    assert_eq!(holidays[&ymd(2011, 4, 22)].name(), christianholidays::good_friday().name());
}

#[test]
fn american_observance() {
    let culture = WorkingDayCulture::resolve("en-US").unwrap();
    // Independence Day 2010 on a Sunday, Christmas 2010 on a Saturday
    assert!(!culture.is_working_day(ymd(2010, 7, 5)));
    assert!(!culture.is_working_day(ymd(2010, 12, 24)));
    assert!(!culture.is_working_day(ymd(2011, 11, 24)));
    assert!(culture.is_working_day(ymd(2011, 11, 17)));
    assert_eq!(culture.add_working_days(ymd(2011, 5, 27), 1), ymd(2011, 5, 31));
}

#[test]
fn unsupported_culture() {
    let err = WorkingDayCulture::resolve("tlh-KX").unwrap_err();
    assert!(matches!(err, WorkingDayError::UnsupportedCulture(ref name) if name == "tlh-KX"));
}

/// Treats one date as the only holiday, the way a test pins "today".
struct SingleDayStrategy(NaiveDate);

impl HolidayStrategy for SingleDayStrategy {
    fn is_holiday(&self, d: NaiveDate) -> bool {
        d == self.0
    }

    fn holidays(&self) -> Option<Vec<Holiday>> {
        None
    }
}

struct SevenDayPolicy;

impl WeekdayPolicy for SevenDayPolicy {
    fn is_working_weekday(&self, _weekday: Weekday) -> bool {
        true
    }
}

#[test]
fn injected_strategies_replace_the_tables() {
    let today = ymd(2011, 5, 14);
    let registry = CultureRegistry::builder()
        .locate_holiday_strategy(move |name| {
            (name == "test").then(|| Arc::new(SingleDayStrategy(today)) as Arc<dyn HolidayStrategy>)
        })
        .locate_weekday_policy(|name| {
            (name == "test").then(|| Arc::new(SevenDayPolicy) as Arc<dyn WeekdayPolicy>)
        })
        .build();

    let culture = registry.resolve("test").unwrap();
    assert!(!culture.is_working_day(today));
    assert_eq!(culture.add_working_days(ymd(2011, 5, 13), 1), ymd(2011, 5, 15));
    assert!(culture.all_year_holidays(today).unwrap().is_empty());

    // unmatched names still go through the built-in tables
    assert!(!registry.resolve("pt-PT").unwrap().is_working_day(ymd(2011, 4, 25)));
}

#[test]
fn injected_strategy_keeps_builtin_policy() {
    let registry = CultureRegistry::builder()
        .locate_holiday_strategy(|_| Some(Arc::new(SingleDayStrategy(ymd(2011, 5, 16))) as Arc<dyn HolidayStrategy>))
        .build();
    let culture = registry.resolve("en-US").unwrap();
    assert_eq!(culture.add_working_days(ymd(2011, 5, 13), 1), ymd(2011, 5, 17));
    // US holidays are gone with the substituted strategy
    assert!(culture.is_working_day(ymd(2011, 7, 4)));
}

/// Friday to Sunday off, Christmas only.
struct LongWeekendCulture;

impl WorkingDayCultureInfo for LongWeekendCulture {
    fn name(&self) -> &str {
        "long-weekend"
    }

    fn is_working_weekday(&self, weekday: Weekday) -> bool {
        !matches!(weekday, Weekday::Fri | Weekday::Sat | Weekday::Sun)
    }

    fn is_working_day(&self, d: NaiveDate) -> bool {
        self.is_working_weekday(d.weekday()) && !christianholidays::christmas().is_holiday(d)
    }

    fn holidays(&self) -> Option<Vec<Holiday>> {
        Some(ChristianHoliday::CHRISTMAS.holidays())
    }
}

#[test]
fn hand_written_culture_gets_date_arithmetic() {
    let culture = LongWeekendCulture;
    // 2011-05-12 is a Thursday
    assert_eq!(culture.next_working_day(ymd(2011, 5, 12)), ymd(2011, 5, 16));
    assert_eq!(culture.previous_working_day(ymd(2011, 5, 16)), ymd(2011, 5, 12));
    // 2012-12-25 is a Tuesday
    assert_eq!(culture.add_working_days(ymd(2012, 12, 24), 1), ymd(2012, 12, 26));
    let holidays = culture.all_year_holidays(ymd(2012, 1, 1)).unwrap();
    assert_eq!(holidays.keys().copied().collect::<Vec<_>>(), vec![ymd(2012, 12, 25)]);
}

const CONFIGURATION: &str = r#"{
    "default_culture": "en-GB",
    "fallback_culture": "default",
    "cultures": [
        {
            "name": "en-GB",
            "weekends": ["Sat", "Sun"],
            "christian_holidays": ["NewYear", "GoodFriday", "EasterMonday", "Christmas"],
            "observance": { "Sat": "NextWeekday", "Sun": "NextWeekday" },
            "holidays": [
                { "holiday_type": "FixedDate", "name": "Boxing Day", "month": 12, "day": 26 },
                { "holiday_type": "NthWeekday", "name": "Early May", "month": 5, "n": 1, "weekday": "Mon" },
                { "holiday_type": "LastWeekday", "name": "Spring", "month": 5, "weekday": "Mon" },
                { "holiday_type": "EasterRelated", "name": "Whit Monday", "shift_days": 50 }
            ]
        }
    ]
}"#;

#[test]
fn configured_registry() {
    let config = Configuration::from_reader(Cursor::new(CONFIGURATION)).unwrap();
    assert_eq!(config.cultures().len(), 1);
    let registry = config.registry();

    let uk = registry.default_culture().unwrap();
    assert_eq!(uk.name(), "en-GB");
    // Friday 2011-04-22 Good Friday, Monday 2011-04-25 Easter Monday
    assert_eq!(uk.add_working_days(ymd(2011, 4, 21), 1), ymd(2011, 4, 26));
    assert_eq!(uk.all_year_holidays(ymd(2011, 1, 1)).unwrap().len(), 8);

    let unknown = registry.resolve("fr-FR").unwrap();
    assert_eq!(unknown.name(), "fr-FR");
    assert!(unknown.is_working_day(ymd(2011, 4, 25)));
}
