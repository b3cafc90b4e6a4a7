use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use crate::error::{Result, WorkingDayError};

use super::easterrelatedholiday::EasterRelatedHoliday;
use super::fixeddateholiday::FixedDateHoliday;
use super::holiday::{catalog_holiday, Holiday};

catalog_holiday!(new_year, "New Year", FixedDateHoliday::new_unchecked(1, 1));
catalog_holiday!(epiphany, "Epiphany", FixedDateHoliday::new_unchecked(1, 6));
catalog_holiday!(carnival, "Carnival", EasterRelatedHoliday::new_unchecked(-47));
catalog_holiday!(good_friday, "Good Friday", EasterRelatedHoliday::new_unchecked(-2));
catalog_holiday!(easter, "Easter", EasterRelatedHoliday::new_unchecked(0));
catalog_holiday!(easter_monday, "Easter Monday", EasterRelatedHoliday::new_unchecked(1));
catalog_holiday!(ascension, "Ascension", EasterRelatedHoliday::new_unchecked(39));
catalog_holiday!(pentecost, "Pentecost", EasterRelatedHoliday::new_unchecked(50));
catalog_holiday!(corpus_christi, "Corpus Christi", EasterRelatedHoliday::new_unchecked(60));
catalog_holiday!(assumption, "Assumption", FixedDateHoliday::new_unchecked(8, 15));
catalog_holiday!(all_saints, "All Saints", FixedDateHoliday::new_unchecked(11, 1));
catalog_holiday!(day_of_the_dead, "Day of the Dead", FixedDateHoliday::new_unchecked(11, 2));
catalog_holiday!(immaculate_conception, "Immaculate Conception", FixedDateHoliday::new_unchecked(12, 8));
catalog_holiday!(christmas, "Christmas", FixedDateHoliday::new_unchecked(12, 25));

/// Selection of Christian catalog entries, one bit per entry.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ChristianHoliday(u16);

impl ChristianHoliday {
    pub const NONE: ChristianHoliday = ChristianHoliday(0);
    pub const NEW_YEAR: ChristianHoliday = ChristianHoliday(1 << 0);
    pub const EPIPHANY: ChristianHoliday = ChristianHoliday(1 << 1);
    pub const CARNIVAL: ChristianHoliday = ChristianHoliday(1 << 2);
    pub const GOOD_FRIDAY: ChristianHoliday = ChristianHoliday(1 << 3);
    pub const EASTER: ChristianHoliday = ChristianHoliday(1 << 4);
    pub const EASTER_MONDAY: ChristianHoliday = ChristianHoliday(1 << 5);
    pub const ASCENSION: ChristianHoliday = ChristianHoliday(1 << 6);
    pub const PENTECOST: ChristianHoliday = ChristianHoliday(1 << 7);
    pub const CORPUS_CHRISTI: ChristianHoliday = ChristianHoliday(1 << 8);
    pub const ASSUMPTION: ChristianHoliday = ChristianHoliday(1 << 9);
    pub const ALL_SAINTS: ChristianHoliday = ChristianHoliday(1 << 10);
    pub const DAY_OF_THE_DEAD: ChristianHoliday = ChristianHoliday(1 << 11);
    pub const IMMACULATE_CONCEPTION: ChristianHoliday = ChristianHoliday(1 << 12);
    pub const CHRISTMAS: ChristianHoliday = ChristianHoliday(1 << 13);
    pub const ALL: ChristianHoliday = ChristianHoliday((1 << 14) - 1);

    /// Fails when `bits` selects entries outside the catalog.
    pub fn from_bits(bits: u16) -> Result<ChristianHoliday> {
        if bits & !Self::ALL.0 != 0 {
            return Err(WorkingDayError::InvalidArgument(
                format!("unknown christian holiday flags {:#06x}", bits & !Self::ALL.0)
            ));
        }
        Ok(ChristianHoliday(bits))
    }

    /// Looks up a single flag by its configuration key, e.g. `"GoodFriday"`.
    pub fn from_name(name: &str) -> Result<ChristianHoliday> {
        CATALOG.iter()
            .find(|(_, key, _)| *key == name)
            .map(|(flag, _, _)| *flag)
            .ok_or_else(|| WorkingDayError::InvalidArgument(
                format!("unknown christian holiday '{name}'")
            ))
    }

    pub const fn bits(&self) -> u16 {
        self.0
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub const fn contains(&self, other: ChristianHoliday) -> bool {
        self.0 & other.0 == other.0
    }

    /// Selected catalog entries, in catalog order.
    pub fn holidays(&self) -> Vec<Holiday> {
        CATALOG.iter()
            .filter(|(flag, _, _)| self.contains(*flag))
            .map(|(_, _, accessor)| accessor().clone())
            .collect()
    }
}

const CATALOG: [(ChristianHoliday, &str, fn() -> &'static Holiday); 14] = [
    (ChristianHoliday::NEW_YEAR, "NewYear", new_year),
    (ChristianHoliday::EPIPHANY, "Epiphany", epiphany),
    (ChristianHoliday::CARNIVAL, "Carnival", carnival),
    (ChristianHoliday::GOOD_FRIDAY, "GoodFriday", good_friday),
    (ChristianHoliday::EASTER, "Easter", easter),
    (ChristianHoliday::EASTER_MONDAY, "EasterMonday", easter_monday),
    (ChristianHoliday::ASCENSION, "Ascension", ascension),
    (ChristianHoliday::PENTECOST, "Pentecost", pentecost),
    (ChristianHoliday::CORPUS_CHRISTI, "CorpusChristi", corpus_christi),
    (ChristianHoliday::ASSUMPTION, "Assumption", assumption),
    (ChristianHoliday::ALL_SAINTS, "AllSaints", all_saints),
    (ChristianHoliday::DAY_OF_THE_DEAD, "DayOfTheDead", day_of_the_dead),
    (ChristianHoliday::IMMACULATE_CONCEPTION, "ImmaculateConception", immaculate_conception),
    (ChristianHoliday::CHRISTMAS, "Christmas", christmas),
];

impl BitOr for ChristianHoliday {
    type Output = ChristianHoliday;

    fn bitor(self, rhs: ChristianHoliday) -> ChristianHoliday {
        ChristianHoliday(self.0 | rhs.0)
    }
}

impl BitOrAssign for ChristianHoliday {
    fn bitor_assign(&mut self, rhs: ChristianHoliday) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for ChristianHoliday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = CATALOG.iter()
            .filter(|(flag, _, _)| self.contains(*flag))
            .map(|(_, key, _)| *key)
            .collect();
        write!(f, "ChristianHoliday({})", names.join(" | "))
    }
}

#[cfg(test)]
mod tests {
    use std::ptr;

    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn catalog_entries_are_singletons() {
        assert!(ptr::eq(christmas(), christmas()));
        assert_eq!(christmas().name(), "Christmas");
    }

    #[test]
    fn catalog_resolution_for_2011() {
        let ymd = |m, d| NaiveDate::from_ymd_opt(2011, m, d).unwrap();
        assert_eq!(carnival().resolve(2011).unwrap(), ymd(3, 8));
        assert_eq!(good_friday().resolve(2011).unwrap(), ymd(4, 22));
        assert_eq!(ascension().resolve(2011).unwrap(), ymd(6, 2));
        assert_eq!(pentecost().resolve(2011).unwrap(), ymd(6, 13));
        assert_eq!(immaculate_conception().resolve(2011).unwrap(), ymd(12, 8));
    }

    #[test]
    fn flag_selection() {
        let selection = ChristianHoliday::NEW_YEAR | ChristianHoliday::CHRISTMAS;
        assert!(selection.contains(ChristianHoliday::CHRISTMAS));
        assert!(!selection.contains(ChristianHoliday::EASTER));
        let names: Vec<String> = selection.holidays().iter().map(|h| h.name().to_owned()).collect();
        assert_eq!(names, vec!["New Year", "Christmas"]);
        assert_eq!(ChristianHoliday::ALL.holidays().len(), 14);
        assert!(ChristianHoliday::NONE.holidays().is_empty());
    }

    #[test]
    fn malformed_flags_are_rejected() {
        assert!(ChristianHoliday::from_bits(ChristianHoliday::ALL.bits()).is_ok());
        assert!(matches!(ChristianHoliday::from_bits(1 << 14), Err(WorkingDayError::InvalidArgument(_))));
        assert_eq!(ChristianHoliday::from_name("GoodFriday").unwrap(), ChristianHoliday::GOOD_FRIDAY);
        assert!(ChristianHoliday::from_name("Hanukkah").is_err());
    }
}
