//! `YearMonth`: a validated (year, month) pair, the unit a month view shows.

use crate::date::{check_year, CalendarDate};
use crate::month::Month;
use crate::weekday::Weekday;
use alm_core::errors::Result;
use alm_core::Year;

/// A month of a specific year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: Year,
    month: Month,
}

impl YearMonth {
    /// Create from a year and a month number (1–12).
    pub fn from_ym(year: Year, month: u8) -> Result<Self> {
        Self::new(year, Month::try_from(month)?)
    }

    /// Create from a year and a [`Month`].
    pub fn new(year: Year, month: Month) -> Result<Self> {
        check_year(year)?;
        Ok(Self { year, month })
    }

    pub(crate) const fn from_parts_unchecked(year: Year, month: Month) -> Self {
        Self { year, month }
    }

    /// Return the year.
    pub fn year(&self) -> Year {
        self.year
    }

    /// Return the month.
    pub fn month(&self) -> Month {
        self.month
    }

    /// Number of days in this month.
    pub fn days_in_month(&self) -> u8 {
        self.month.days_in(self.year)
    }

    /// The first day of the month.
    pub fn first_day(&self) -> CalendarDate {
        CalendarDate::from_ymd_unchecked(self.year, self.month.number(), 1)
    }

    /// The last day of the month.
    pub fn last_day(&self) -> CalendarDate {
        CalendarDate::from_ymd_unchecked(self.year, self.month.number(), self.days_in_month())
    }

    /// Return `true` if `date` lies in this month.
    pub fn contains(&self, date: CalendarDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// The following month.  Fails past December of the last supported year.
    pub fn next(&self) -> Result<Self> {
        match self.month {
            Month::December => Self::new(self.year + 1, Month::January),
            m => Ok(Self::from_parts_unchecked(self.year, m.succ())),
        }
    }

    /// The preceding month.  Fails before January of the first supported year.
    pub fn previous(&self) -> Result<Self> {
        match self.month {
            Month::January => Self::new(self.year - 1, Month::December),
            m => Ok(Self::from_parts_unchecked(self.year, m.pred())),
        }
    }

    /// Return the `n`-th (1-based) `weekday` of this month.
    ///
    /// Returns `None` if `n` is zero or the month has fewer than `n` such
    /// weekdays (e.g. a fifth Wednesday in most Februaries).
    ///
    /// ```
    /// use alm_time::{CalendarDate, Weekday, YearMonth};
    /// let march = YearMonth::from_ym(2024, 3).unwrap();
    /// assert_eq!(
    ///     march.nth_weekday(3, Weekday::Wednesday),
    ///     Some(CalendarDate::from_ymd(2024, 3, 20).unwrap())
    /// );
    /// ```
    pub fn nth_weekday(&self, n: u8, weekday: Weekday) -> Option<CalendarDate> {
        if n == 0 {
            return None;
        }
        let first_wd = self.first_day().weekday();
        // days to advance from the 1st to reach the first occurrence
        let skip = (i16::from(weekday.index()) - i16::from(first_wd.index())).rem_euclid(7);
        let day = 1 + skip + 7 * (i16::from(n) - 1);
        if day > i16::from(self.days_in_month()) {
            return None;
        }
        Some(CalendarDate::from_ymd_unchecked(
            self.year,
            self.month.number(),
            day as u8,
        ))
    }

    /// Return the last `weekday` of this month.
    pub fn last_weekday(&self, weekday: Weekday) -> CalendarDate {
        let last = self.last_day();
        let back = (i16::from(last.weekday().index()) - i16::from(weekday.index())).rem_euclid(7);
        CalendarDate::from_ymd_unchecked(
            self.year,
            self.month.number(),
            last.day() - back as u8,
        )
    }
}

impl From<CalendarDate> for YearMonth {
    fn from(d: CalendarDate) -> Self {
        d.year_month()
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.month, self.year)
    }
}
