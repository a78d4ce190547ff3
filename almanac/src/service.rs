//! The `Almanac` service: the operations a calendar page calls.
//!
//! Every operation is a pure function of its arguments and the settings the
//! service was built with, so an `Almanac` can be shared freely between
//! threads.

use std::collections::BTreeMap;

use alm_core::errors::Result;
use alm_core::Year;
use alm_holidays::{engine, registry, Holiday};
use alm_time::{
    build_month_grid, calendar_days, moon_phase, week_day_labels, week_days, CalendarDate,
    LabelStyle, MonthGrid, MoonPhase, WeekStart, YearMonth,
};

use serde::Serialize;

use crate::settings::Settings;

/// The next holiday and how many days remain until it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Countdown {
    /// The holiday.
    pub holiday: Holiday,
    /// Days from the reference date (0 if the holiday is today).
    pub days: i64,
}

/// Calendar engine configured by [`Settings`].
#[derive(Debug, Clone, Default)]
pub struct Almanac {
    settings: Settings,
}

impl Almanac {
    /// Build a service after validating `settings`.
    pub fn new(settings: Settings) -> Result<Self> {
        settings.validate()?;
        Ok(Self { settings })
    }

    /// The settings in effect.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    fn week_start_or_default(&self, week_start: Option<WeekStart>) -> WeekStart {
        week_start.unwrap_or(self.settings.week_start)
    }

    // ── Holidays ──────────────────────────────────────────────────────────────

    /// Code → display name of every supported country, ordered by code.
    pub fn countries(&self) -> BTreeMap<&'static str, &'static str> {
        registry::countries()
    }

    /// All holidays of `code` in `year`, ascending.
    pub fn holidays(&self, code: &str, year: Year) -> Result<Vec<Holiday>> {
        engine::holidays(code, year)
    }

    /// The first `count` holidays of `code` on or after `from`.
    pub fn upcoming_holidays(
        &self,
        code: &str,
        from: CalendarDate,
        count: usize,
    ) -> Result<Vec<Holiday>> {
        engine::upcoming_holidays(code, from, count)
    }

    /// The configured number of upcoming holidays of the default country.
    pub fn upcoming_default(&self, from: CalendarDate) -> Result<Vec<Holiday>> {
        engine::upcoming_holidays(
            &self.settings.default_country,
            from,
            self.settings.upcoming_count,
        )
    }

    /// Holidays of `code` shown on `date`.
    pub fn holidays_on(&self, code: &str, date: CalendarDate) -> Result<Vec<Holiday>> {
        engine::holidays_on(code, date)
    }

    /// Holidays of `code` shown within `[from, to]`.
    pub fn holidays_between(
        &self,
        code: &str,
        from: CalendarDate,
        to: CalendarDate,
    ) -> Result<Vec<Holiday>> {
        engine::holidays_between(code, from, to)
    }

    /// The next holiday of `code` on or after `from`, with the days left.
    pub fn countdown(&self, code: &str, from: CalendarDate) -> Result<Option<Countdown>> {
        Ok(engine::next_holiday(code, from)?.map(|holiday| Countdown {
            days: holiday.days_from(from),
            holiday,
        }))
    }

    // ── Month view ────────────────────────────────────────────────────────────

    /// The padded dates of the month containing `anchor`.
    pub fn calendar_days(
        &self,
        anchor: CalendarDate,
        week_start: Option<WeekStart>,
    ) -> Result<Vec<CalendarDate>> {
        calendar_days(anchor, self.week_start_or_default(week_start))
    }

    /// The month grid of `year_month`, with each cell tagged.
    pub fn month_grid(
        &self,
        year_month: YearMonth,
        week_start: Option<WeekStart>,
    ) -> Result<MonthGrid> {
        build_month_grid(year_month, self.week_start_or_default(week_start))
    }

    /// Three-letter weekday headers in column order.
    pub fn week_days(&self, week_start: Option<WeekStart>) -> [&'static str; 7] {
        week_days(self.week_start_or_default(week_start))
    }

    /// Weekday headers in the requested style.
    pub fn week_day_labels(
        &self,
        week_start: Option<WeekStart>,
        style: LabelStyle,
    ) -> [&'static str; 7] {
        week_day_labels(self.week_start_or_default(week_start), style)
    }

    /// Approximate moon phase on `date`.
    pub fn moon_phase(&self, date: CalendarDate) -> MoonPhase {
        moon_phase(date)
    }

    /// Countdown to the next holiday of the default country from today.
    #[cfg(feature = "chrono")]
    pub fn countdown_from_today(&self) -> Result<Option<Countdown>> {
        self.countdown(&self.settings.default_country, CalendarDate::today()?)
    }
}
