//! # alm-holidays
//!
//! Public-holiday rules and the engine that turns them into dated holidays.
//!
//! ```
//! use alm_holidays::{engine, HolidayCalendar};
//! use alm_time::CalendarDate;
//!
//! let thanksgiving = engine::holidays("US", 2024)
//!     .unwrap()
//!     .into_iter()
//!     .find(|h| h.name == "Thanksgiving Day")
//!     .unwrap();
//! assert_eq!(thanksgiving.date, CalendarDate::from_ymd(2024, 11, 28).unwrap());
//!
//! let us = alm_holidays::registry::resolve("us").unwrap();
//! assert_eq!(us.name(), "United States");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// The `HolidayCalendar` trait and year resolution.
pub mod calendar;

/// Built-in country tables by region.
pub mod countries;

/// Built-in and caller-built holiday sets.
pub mod country;

/// Code-keyed holiday lookups.
pub mod engine;

/// `Holiday`: a resolved, dated holiday.
pub mod holiday;

/// Country code lookup.
pub mod registry;

/// Holiday rules and observance policies.
pub mod rule;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{resolve_year, HolidayCalendar, UPCOMING_HORIZON_YEARS};
pub use country::{CountryHolidaySet, CustomHolidaySet};
pub use holiday::Holiday;
pub use registry::{countries, registered};
pub use rule::{HolidayRule, ObservancePolicy, Occurrence, RuleKind};
