//! Gregorian Easter Sunday.
//!
//! Uses the anonymous Gregorian algorithm (Meeus/Jones/Butcher) in integer
//! arithmetic.  Divisions are Euclidean so the formula stays valid for the
//! negative years of the proleptic range.

use crate::date::{check_year, CalendarDate};
use alm_core::errors::Result;
use alm_core::Year;

/// Earliest possible Easter Sunday (month, day).
pub const EARLIEST_EASTER: (u8, u8) = (3, 22);

/// Latest possible Easter Sunday (month, day).
pub const LATEST_EASTER: (u8, u8) = (4, 25);

/// Easter Sunday of `year`.
///
/// Always a Sunday between March 22 and April 25.
///
/// ```
/// use alm_time::{easter_sunday, CalendarDate};
/// assert_eq!(easter_sunday(2024).unwrap(), CalendarDate::from_ymd(2024, 3, 31).unwrap());
/// ```
pub fn easter_sunday(year: Year) -> Result<CalendarDate> {
    check_year(year)?;
    let (month, day) = easter_month_day(year);
    Ok(CalendarDate::from_ymd_unchecked(year, month, day))
}

fn easter_month_day(year: Year) -> (u8, u8) {
    let y = year;
    let a = y.rem_euclid(19);
    let b = y.div_euclid(100);
    let c = y.rem_euclid(100);
    let d = b.div_euclid(4);
    let e = b.rem_euclid(4);
    let f = (b + 8).div_euclid(25);
    let g = (b - f + 1).div_euclid(3);
    // epact-derived distance from March 21 to the paschal full moon
    let h = (19 * a + b - d - g + 15).rem_euclid(30);
    let i = c / 4;
    let k = c % 4;
    // days from the full moon to the following Sunday
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l) / 451;
    let n = h + l - 7 * m + 114;
    ((n / 31) as u8, (n % 31 + 1) as u8)
}
