//! `HolidayRule`: how a holiday's date is derived for a given year.
//!
//! A rule is one of a closed set of kinds, so a rule that cannot be resolved
//! cannot be written down either.  Each rule carries its own observance
//! policy: two holidays of one country may shift differently.

use std::borrow::Cow;

use alm_core::errors::Result;
use alm_core::{ensure, Year};
use alm_time::{easter_sunday, CalendarDate, Month, Weekday, YearMonth};

use crate::holiday::Holiday;

/// Which occurrence of a weekday within a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Occurrence {
    /// The n-th occurrence counting from the 1st of the month (1-based).
    Nth(u8),
    /// The last occurrence in the month.
    Last,
}

/// How a holiday that falls on a weekend is moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ObservancePolicy {
    /// The holiday is shown on its computed date.
    #[default]
    None,
    /// Saturday moves back to Friday, Sunday forward to Monday.
    ShiftWeekendToWeekday,
}

impl ObservancePolicy {
    /// The observed date for a holiday whose computed date is `raw`.
    pub fn apply(&self, raw: CalendarDate) -> Result<CalendarDate> {
        match self {
            ObservancePolicy::None => Ok(raw),
            ObservancePolicy::ShiftWeekendToWeekday => match raw.weekday() {
                Weekday::Saturday => raw.add_days(-1),
                Weekday::Sunday => raw.add_days(1),
                _ => Ok(raw),
            },
        }
    }
}

/// The date computation of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RuleKind {
    /// Same month and day every year.
    FixedDate {
        /// Month.
        month: Month,
        /// Day of the month.
        day: u8,
    },
    /// The n-th (or last) given weekday of a month, e.g. "last Monday of May".
    NthWeekday {
        /// Month.
        month: Month,
        /// Weekday.
        weekday: Weekday,
        /// Which occurrence.
        occurrence: Occurrence,
    },
    /// A number of days before (negative) or after Easter Sunday.
    EasterOffset(i16),
    /// The first given weekday on or after a fixed day, e.g. "the Monday on
    /// or after May 18".
    WeekdayOnOrAfter {
        /// Month.
        month: Month,
        /// Earliest day of the month.
        day: u8,
        /// Weekday.
        weekday: Weekday,
    },
}

/// A named holiday rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HolidayRule {
    /// Display name of the holiday.
    pub name: Cow<'static, str>,
    /// Date computation.
    pub kind: RuleKind,
    /// Weekend observance policy.
    #[cfg_attr(feature = "serde", serde(default))]
    pub observance: ObservancePolicy,
    /// First year in which the holiday exists, if it was introduced later.
    #[cfg_attr(feature = "serde", serde(default))]
    pub since: Option<Year>,
}

impl HolidayRule {
    const fn with_kind(name: &'static str, kind: RuleKind) -> Self {
        Self {
            name: Cow::Borrowed(name),
            kind,
            observance: ObservancePolicy::None,
            since: None,
        }
    }

    /// A holiday on the same month and day every year.
    pub const fn fixed(name: &'static str, month: Month, day: u8) -> Self {
        Self::with_kind(name, RuleKind::FixedDate { month, day })
    }

    /// A holiday on the `n`-th `weekday` of `month`.
    pub const fn nth_weekday(name: &'static str, month: Month, weekday: Weekday, n: u8) -> Self {
        Self::with_kind(
            name,
            RuleKind::NthWeekday {
                month,
                weekday,
                occurrence: Occurrence::Nth(n),
            },
        )
    }

    /// A holiday on the last `weekday` of `month`.
    pub const fn last_weekday(name: &'static str, month: Month, weekday: Weekday) -> Self {
        Self::with_kind(
            name,
            RuleKind::NthWeekday {
                month,
                weekday,
                occurrence: Occurrence::Last,
            },
        )
    }

    /// A holiday `days` after Easter Sunday (negative for before).
    pub const fn easter_offset(name: &'static str, days: i16) -> Self {
        Self::with_kind(name, RuleKind::EasterOffset(days))
    }

    /// A holiday on the first `weekday` on or after `month`/`day`.
    pub const fn weekday_on_or_after(
        name: &'static str,
        month: Month,
        day: u8,
        weekday: Weekday,
    ) -> Self {
        Self::with_kind(
            name,
            RuleKind::WeekdayOnOrAfter {
                month,
                day,
                weekday,
            },
        )
    }

    /// A rule with a caller-supplied (owned) name.
    pub fn custom(name: impl Into<String>, kind: RuleKind) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            kind,
            observance: ObservancePolicy::None,
            since: None,
        }
    }

    /// Shift this holiday off weekends (Saturday → Friday, Sunday → Monday).
    pub const fn observed(mut self) -> Self {
        self.observance = ObservancePolicy::ShiftWeekendToWeekday;
        self
    }

    /// The holiday only exists from `year` onwards.
    pub const fn since(mut self, year: Year) -> Self {
        self.since = Some(year);
        self
    }

    /// Check that the rule can ever produce a date.
    ///
    /// February 29 is accepted; it simply does not occur in common years.
    pub fn validate(&self) -> Result<()> {
        ensure!(!self.name.trim().is_empty(), "holiday name must not be empty");
        match self.kind {
            RuleKind::FixedDate { month, day } | RuleKind::WeekdayOnOrAfter { month, day, .. } => {
                // a leap year has the longest version of every month
                let max = month.days_in(2000);
                ensure!(
                    (1..=max).contains(&day),
                    "{}: day {day} out of range [1, {max}] for {month}",
                    self.name
                );
            }
            RuleKind::NthWeekday {
                occurrence: Occurrence::Nth(n),
                ..
            } => {
                ensure!(
                    (1..=5).contains(&n),
                    "{}: occurrence {n} out of range [1, 5]",
                    self.name
                );
            }
            RuleKind::NthWeekday { .. } | RuleKind::EasterOffset(_) => {}
        }
        Ok(())
    }

    /// The computed (unshifted) date of the holiday in `year`.
    ///
    /// Returns `Ok(None)` when the holiday does not occur that year: before
    /// [`HolidayRule::since`], February 29 of a common year, or a fifth
    /// weekday the month lacks.
    pub fn raw_date(&self, year: Year) -> Result<Option<CalendarDate>> {
        if self.since.is_some_and(|first| year < first) {
            return Ok(None);
        }
        match self.kind {
            RuleKind::FixedDate { month, day } => {
                let ym = YearMonth::new(year, month)?;
                if day == 0 || day > ym.days_in_month() {
                    return Ok(None);
                }
                CalendarDate::new(year, month, day).map(Some)
            }
            RuleKind::NthWeekday {
                month,
                weekday,
                occurrence,
            } => {
                let ym = YearMonth::new(year, month)?;
                Ok(match occurrence {
                    Occurrence::Nth(n) => ym.nth_weekday(n, weekday),
                    Occurrence::Last => Some(ym.last_weekday(weekday)),
                })
            }
            RuleKind::EasterOffset(days) => easter_sunday(year)?.add_days(i64::from(days)).map(Some),
            RuleKind::WeekdayOnOrAfter {
                month,
                day,
                weekday,
            } => {
                let ym = YearMonth::new(year, month)?;
                if day == 0 || day > ym.days_in_month() {
                    return Ok(None);
                }
                let start = CalendarDate::new(year, month, day)?;
                let skip = (i64::from(weekday.index()) - i64::from(start.weekday().index()))
                    .rem_euclid(7);
                start.add_days(skip).map(Some)
            }
        }
    }

    /// Resolve the rule to a dated holiday in `year`, applying observance.
    pub fn resolve(&self, year: Year) -> Result<Option<Holiday>> {
        let Some(raw) = self.raw_date(year)? else {
            return Ok(None);
        };
        let date = self.observance.apply(raw)?;
        Ok(Some(Holiday {
            date,
            name: self.name.clone(),
            raw_date: raw,
            is_observed: date != raw,
        }))
    }
}
