use std::collections::HashSet;

use chrono::Weekday;

/// Decides whether a weekday is normally worked.
pub trait WeekdayPolicy: Send + Sync {
    fn is_working_weekday(&self, weekday: Weekday) -> bool;
}

/// Monday to Friday.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultWeekdayPolicy;

impl WeekdayPolicy for DefaultWeekdayPolicy {
    fn is_working_weekday(&self, weekday: Weekday) -> bool {
        !matches!(weekday, Weekday::Sat | Weekday::Sun)
    }
}

/// Days off kept as a seven-bit set, bit `i` standing for the weekday
/// `i` days after Monday.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeekendMaskPolicy(u8);

impl WeekendMaskPolicy {
    pub fn new(weekends: &HashSet<Weekday>) -> Self {
        WeekendMaskPolicy(weekends.iter().fold(0, |mask, &weekday| mask | Self::bit(weekday)))
    }

    fn bit(weekday: Weekday) -> u8 {
        1 << weekday.num_days_from_monday()
    }

    pub fn is_weekend(&self, weekday: Weekday) -> bool {
        self.0 & Self::bit(weekday) != 0
    }

    pub fn weekends(&self) -> HashSet<Weekday> {
        (0..7u8)
            .filter_map(|day| Weekday::try_from(day).ok())
            .filter(|&weekday| self.is_weekend(weekday))
            .collect()
    }
}

impl Default for WeekendMaskPolicy {
    fn default() -> Self {
        WeekendMaskPolicy::new(&HashSet::from([Weekday::Sat, Weekday::Sun]))
    }
}

impl WeekdayPolicy for WeekendMaskPolicy {
    fn is_working_weekday(&self, weekday: Weekday) -> bool {
        !self.is_weekend(weekday)
    }
}
