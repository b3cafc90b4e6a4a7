use std::collections::HashMap;

use chrono::{
    Datelike,
    NaiveDate,
    TimeDelta,
    Weekday
};
use serde::{
    Serialize,
    Deserialize
};


/// Where a holiday falling on a weekend day is observed.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize, Deserialize)]
pub enum WeekendAdjustment {
    Unadjusted = 0,
    NextWeekday = 1,
    PreviousWeekday = -1
}

/// Observance-shift rule seen from the observed side.
///
/// For every weekday, the day offsets pointing back to the canonical dates
/// whose holidays are observed on that weekday. Indexed by
/// `Weekday::num_days_from_monday()`.
#[derive(Clone, Debug, Default)]
pub struct ObservanceRule {
    probes: [Vec<i64>; 7]
}

impl ObservanceRule {
    /// No shifting; every holiday is observed on its canonical date.
    pub fn none() -> ObservanceRule {
        ObservanceRule::default()
    }

    /// Saturday holidays observed on Friday, Sunday holidays on Monday.
    pub fn weekend_observance() -> ObservanceRule {
        ObservanceRule::new(&HashMap::from([
            (Weekday::Sat, WeekendAdjustment::PreviousWeekday),
            (Weekday::Sun, WeekendAdjustment::NextWeekday)
        ]))
    }

    /// Builds the rule from a weekend map. Every key counts as a weekend
    /// day; a shifted holiday skips over consecutive weekend days.
    pub fn new(adjustment_map: &HashMap<Weekday, WeekendAdjustment>) -> ObservanceRule {
        let mut probes: [Vec<i64>; 7] = Default::default();

        for (&weekday, &adj) in adjustment_map {
            if adj == WeekendAdjustment::Unadjusted {
                continue;
            }

            let mut observed = weekday;
            let step = if adj == WeekendAdjustment::NextWeekday {
                Weekday::succ
            } else {
                Weekday::pred
            };

            let mut shift_days: i64 = 0;
            let one_day = adj as i64;

            while adjustment_map.contains_key(&observed) && shift_days.abs() < 7 {
                observed = step(&observed);
                shift_days += one_day;
            }
            // the whole week is weekend, nowhere to observe
            if adjustment_map.contains_key(&observed) {
                continue;
            }

            let idx = observed.num_days_from_monday() as usize;
            probes[idx].push(-shift_days);
        }

        for offsets in probes.iter_mut() {
            offsets.sort_unstable();
        }

        ObservanceRule { probes }
    }

    pub fn is_none(&self) -> bool {
        self.probes.iter().all(Vec::is_empty)
    }

    /// Canonical dates whose holidays would be observed on `d`, `d` excluded.
    /// Dates outside the representable range are skipped.
    pub fn shifted_test_dates(&self, d: NaiveDate) -> impl Iterator<Item = NaiveDate> + '_ {
        let idx = d.weekday().num_days_from_monday() as usize;
        self.probes[idx].iter().filter_map(move |&offset| d.checked_add_signed(TimeDelta::days(offset)))
    }
}
