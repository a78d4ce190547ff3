//! # almanac
//!
//! The calendar engine of a productivity dashboard: month-view grids,
//! country public holidays (with Easter-relative feasts and weekend
//! observance), and an approximate moon phase per day.
//!
//! This crate is a **façade** that re-exports the `alm-*` crates and adds
//! the [`Almanac`] service configured by [`Settings`].
//!
//! ```rust
//! use almanac::{Almanac, Settings};
//! use almanac::time::{CalendarDate, WeekStart};
//!
//! let almanac = Almanac::new(Settings::default()).unwrap();
//! let anchor = CalendarDate::from_ymd(2024, 3, 15).unwrap();
//!
//! let days = almanac.calendar_days(anchor, Some(WeekStart::Monday)).unwrap();
//! assert_eq!(days.len(), 35);
//! assert_eq!(days[0].to_string(), "2024-02-26");
//!
//! let next = almanac.countdown("US", anchor).unwrap().unwrap();
//! assert_eq!(next.holiday.name, "Memorial Day");
//! assert_eq!(next.days, 73);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error type, `Result` alias and shared aliases.
pub use alm_core as core;

/// Dates, month grids, weekday labels, Easter and moon phase.
pub use alm_time as time;

/// Holiday rules, country tables and resolution.
pub use alm_holidays as holidays;

/// `tracing` subscriber setup for binaries embedding the engine.
#[cfg(feature = "logging")]
pub mod logging;

/// The `Almanac` service.
pub mod service;

/// Configuration.
pub mod settings;

pub use service::{Almanac, Countdown};
pub use settings::Settings;
