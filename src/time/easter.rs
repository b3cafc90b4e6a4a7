use chrono::NaiveDate;

/// First year of the Gregorian calendar; the computation below is not
/// meaningful before it.
pub const FIRST_GREGORIAN_YEAR: i32 = 1583;

/// Western (Gregorian) Easter Sunday, using the Meeus/Jones/Butcher
/// algorithm. Integer arithmetic only.
///
/// Returns `None` for years before [`FIRST_GREGORIAN_YEAR`].
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    if year < FIRST_GREGORIAN_YEAR {
        return None;
    }

    // golden number
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    // epact
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;

    let n = h + l - 7 * m + 114;
    let month = (n / 31) as u32;
    let day = (n % 31 + 1) as u32;

    NaiveDate::from_ymd_opt(year, month, day)
}
