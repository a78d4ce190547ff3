//! `CalendarDate`: a timezone-free (year, month, day) triple.
//!
//! Arithmetic goes through a proleptic Gregorian *day number*: the count of
//! days since 1970-01-01, negative before it.  The conversion is total over
//! the supported range and strictly monotonic, so ordering, differences and
//! day offsets all agree.
//!
//! # Supported range
//! Years `-9999..=9999` (astronomical numbering, so year 0 is 1 BC).  Any
//! operation whose result would leave that range fails with
//! [`Error::InvalidArgument`].

use std::str::FromStr;

use crate::month::Month;
use crate::weekday::Weekday;
use crate::year_month::YearMonth;
use alm_core::errors::{Error, Result};
use alm_core::{ensure, fail, DayNumber, Year};

/// A calendar date with no time of day and no timezone.
///
/// Field order makes the derived `Ord` chronological.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year: Year,
    month: u8,
    day: u8,
}

// ── Constants ─────────────────────────────────────────────────────────────────

impl CalendarDate {
    /// First supported year.
    pub const MIN_YEAR: Year = -9999;

    /// Last supported year.
    pub const MAX_YEAR: Year = 9999;

    /// Earliest supported date: -9999-01-01.
    pub const MIN: CalendarDate = CalendarDate::from_ymd_unchecked(Self::MIN_YEAR, 1, 1);

    /// Latest supported date: 9999-12-31.
    pub const MAX: CalendarDate = CalendarDate::from_ymd_unchecked(Self::MAX_YEAR, 12, 31);

    /// The Unix epoch, day number 0.
    pub const EPOCH: CalendarDate = CalendarDate::from_ymd_unchecked(1970, 1, 1);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year, month (1–12), and day-of-month.
    pub fn from_ymd(year: Year, month: u8, day: u8) -> Result<Self> {
        check_year(year)?;
        ensure!(
            (1..=12).contains(&month),
            "month {month} out of range [1, 12]"
        );
        let days_in = days_in_month(year, month);
        ensure!(
            (1..=days_in).contains(&day),
            "day {day} out of range [1, {days_in}] for {year:04}-{month:02}"
        );
        Ok(Self { year, month, day })
    }

    /// Create a date from a [`Month`] value.
    pub fn new(year: Year, month: Month, day: u8) -> Result<Self> {
        Self::from_ymd(year, month.number(), day)
    }

    /// Create a date without validation.  Callers guarantee the triple is
    /// a real date inside the supported range.
    pub(crate) const fn from_ymd_unchecked(year: Year, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Inverse of [`CalendarDate::day_number`].
    pub fn from_day_number(n: DayNumber) -> Result<Self> {
        ensure!(
            (Self::MIN.day_number()..=Self::MAX.day_number()).contains(&n),
            "day number {n} outside the supported date range"
        );
        let (y, m, d) = civil_from_days(n);
        // the range check above bounds y to MIN_YEAR..=MAX_YEAR
        Ok(Self::from_ymd_unchecked(y as Year, m, d))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the year.
    pub fn year(&self) -> Year {
        self.year
    }

    /// Return the month.
    pub fn month(&self) -> Month {
        Month::ALL[usize::from(self.month) - 1]
    }

    /// Return the month number (1–12).
    pub fn month_number(&self) -> u8 {
        self.month
    }

    /// Return the day of the month (1–31).
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Return the (year, month) this date belongs to.
    pub fn year_month(&self) -> YearMonth {
        YearMonth::from_parts_unchecked(self.year, self.month())
    }

    /// Days since 1970-01-01 (negative before it).
    pub fn day_number(&self) -> DayNumber {
        days_from_civil(i64::from(self.year), self.month, self.day)
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // 1970-01-01 was a Thursday.
        Weekday::Thursday.shifted(self.day_number())
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        let before: u16 = (1..self.month)
            .map(|m| u16::from(days_in_month(self.year, m)))
            .sum();
        before + u16::from(self.day)
    }

    /// Return `true` if this date falls in a leap year.
    pub fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days (`n` may be negative).
    pub fn add_days(self, n: i64) -> Result<Self> {
        match self.day_number().checked_add(n) {
            Some(target) => Self::from_day_number(target),
            None => fail!("date arithmetic overflow: {self} + {n} days"),
        }
    }

    /// Number of days from `self` to `other`; positive if `other` is later.
    pub fn days_until(self, other: CalendarDate) -> i64 {
        other.day_number() - self.day_number()
    }

    /// The first day of this date's month.
    pub fn first_of_month(self) -> Self {
        Self::from_ymd_unchecked(self.year, self.month, 1)
    }

    /// The last day of this date's month.
    pub fn last_of_month(self) -> Self {
        Self::from_ymd_unchecked(self.year, self.month, days_in_month(self.year, self.month))
    }
}

impl std::ops::Sub<CalendarDate> for CalendarDate {
    type Output = i64;
    fn sub(self, rhs: CalendarDate) -> i64 {
        self.day_number() - rhs.day_number()
    }
}

// ── Display / parsing ─────────────────────────────────────────────────────────

impl std::fmt::Display for CalendarDate {
    /// ISO-8601 calendar date, `YYYY-MM-DD` (with a leading `-` before year 0).
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.year < 0 {
            write!(f, "-{:04}-{:02}-{:02}", -self.year, self.month, self.day)
        } else {
            write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
        }
    }
}

impl std::fmt::Debug for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CalendarDate({self})")
    }
}

impl FromStr for CalendarDate {
    type Err = Error;

    /// Parse an ISO-8601 calendar date (`2024-03-31`, `-0044-03-15`).
    fn from_str(s: &str) -> Result<Self> {
        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let mut parts = body.splitn(3, '-');
        let (Some(y), Some(m), Some(d)) = (parts.next(), parts.next(), parts.next()) else {
            fail!("expected YYYY-MM-DD, got {s:?}");
        };
        if y.len() != 4 || m.len() != 2 || d.len() != 2 {
            fail!("expected YYYY-MM-DD, got {s:?}");
        }
        let parse = |field: &str| -> Result<u32> {
            if !field.bytes().all(|b| b.is_ascii_digit()) {
                fail!("non-digit in date {s:?}");
            }
            field
                .parse::<u32>()
                .map_err(|e| Error::InvalidArgument(format!("cannot parse {s:?}: {e}")))
        };
        let year = parse(y)? as Year;
        let month = parse(m)? as u8;
        let day = parse(d)? as u8;
        Self::from_ymd(if negative { -year } else { year }, month, day)
    }
}

// ── Optional integrations ─────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl serde::Serialize for CalendarDate {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "chrono")]
impl CalendarDate {
    /// Today's date in the local timezone of the host.
    ///
    /// The only place the engine touches the wall clock; everything else
    /// takes dates as explicit arguments.
    pub fn today() -> Result<Self> {
        Self::try_from(chrono::Local::now().date_naive())
    }

    /// Convert to a `chrono::NaiveDate`.
    pub fn to_naive_date(&self) -> Option<chrono::NaiveDate> {
        chrono::NaiveDate::from_ymd_opt(self.year, u32::from(self.month), u32::from(self.day))
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<chrono::NaiveDate> for CalendarDate {
    type Error = Error;

    fn try_from(d: chrono::NaiveDate) -> Result<Self> {
        use chrono::Datelike;
        Self::from_ymd(d.year(), d.month() as u8, d.day() as u8)
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: Year) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.  Returns 0 for a month outside 1–12.
pub fn days_in_month(year: Year, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

pub(crate) fn check_year(year: Year) -> Result<()> {
    ensure!(
        (CalendarDate::MIN_YEAR..=CalendarDate::MAX_YEAR).contains(&year),
        "year {year} out of range [{}, {}]",
        CalendarDate::MIN_YEAR,
        CalendarDate::MAX_YEAR
    );
    Ok(())
}

/// Days since 1970-01-01 for a proleptic Gregorian (y, m, d).
///
/// Years are shifted to start in March so the leap day is the last day of
/// the shifted year; eras are 400-year Gregorian cycles of 146 097 days.
fn days_from_civil(year: i64, month: u8, day: u8) -> DayNumber {
    let m = i64::from(month);
    let d = i64::from(day);
    let y = if m <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y - era * 400; // [0, 399]
    let mp = (m + 9) % 12; // March = 0
    let doy = (153 * mp + 2) / 5 + d - 1; // [0, 365]
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // [0, 146096]
    era * 146_097 + doe - 719_468
}

/// Inverse of [`days_from_civil`].
fn civil_from_days(n: DayNumber) -> (i64, u8, u8) {
    let z = n + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let m = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;
    let y = yoe + era * 400 + i64::from(m <= 2);
    (y, m, d)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
