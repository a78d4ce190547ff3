//! Holiday lookups by country code.
//!
//! Thin wrappers that resolve the code through the registry and delegate to
//! [`HolidayCalendar`].

use alm_core::errors::Result;
use alm_core::Year;
use alm_time::CalendarDate;

use crate::calendar::HolidayCalendar;
use crate::holiday::Holiday;
use crate::registry;

/// All holidays of `code` in `year`, sorted by date then name.
pub fn holidays(code: &str, year: Year) -> Result<Vec<Holiday>> {
    registry::resolve(code)?.holidays(year)
}

/// The first `count` holidays of `code` on or after `from`.
pub fn upcoming_holidays(code: &str, from: CalendarDate, count: usize) -> Result<Vec<Holiday>> {
    registry::resolve(code)?.upcoming_holidays(from, count)
}

/// Holidays of `code` shown within `[from, to]`.
pub fn holidays_between(code: &str, from: CalendarDate, to: CalendarDate) -> Result<Vec<Holiday>> {
    registry::resolve(code)?.holidays_between(from, to)
}

/// Holidays of `code` shown on `date`; empty if it is an ordinary day.
pub fn holidays_on(code: &str, date: CalendarDate) -> Result<Vec<Holiday>> {
    registry::resolve(code)?.holidays_on(date)
}

/// Return `true` if `date` is a holiday in `code`.
pub fn is_holiday(code: &str, date: CalendarDate) -> Result<bool> {
    registry::resolve(code)?.is_holiday(date)
}

/// The next holiday of `code` on or after `from`.
pub fn next_holiday(code: &str, from: CalendarDate) -> Result<Option<Holiday>> {
    registry::resolve(code)?.next_holiday(from)
}
