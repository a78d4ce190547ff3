//! # alm-time
//!
//! Timezone-free calendar dates and the computations a calendar page needs:
//! month grids, weekday headers, Easter Sunday and an approximate moon
//! phase.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `CalendarDate` and day-number arithmetic.
pub mod date;

/// Gregorian Easter Sunday.
pub mod easter;

/// Month-view date grids.
pub mod grid;

/// `Month`: month of the year.
pub mod month;

/// Approximate lunar phase.
pub mod moon;

/// `WeekStart` and weekday header labels.
pub mod week_start;

/// `Weekday`: day of the week.
pub mod weekday;

/// `YearMonth`: a month of a specific year.
pub mod year_month;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::{days_in_month, is_leap_year, CalendarDate};
pub use easter::easter_sunday;
pub use grid::{build_month_grid, calendar_days, CellKind, GridCell, MonthGrid};
pub use month::Month;
pub use moon::{moon_phase, next_phase, MoonPhase, PhaseName, SYNODIC_MONTH};
pub use week_start::{week_day_labels, week_days, LabelStyle, WeekStart};
pub use weekday::Weekday;
pub use year_month::YearMonth;
