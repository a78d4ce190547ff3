//! `WeekStart` and the weekday header labels of a month view.
//!
//! A month grid and its header row must agree on which weekday sits in
//! which column.  Both go through [`WeekStart::column_of`] /
//! [`WeekStart::weekday_at`], which are the only place the rotation is
//! defined.

use crate::weekday::Weekday;

/// The weekday shown in the first column of a month view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum WeekStart {
    /// Weeks run Sunday–Saturday.
    Sunday,
    /// Weeks run Monday–Sunday (ISO 8601).
    Monday,
}

impl WeekStart {
    /// The weekday of column 0.
    pub fn weekday(&self) -> Weekday {
        match self {
            WeekStart::Sunday => Weekday::Sunday,
            WeekStart::Monday => Weekday::Monday,
        }
    }

    /// Column (0–6) in which `weekday` appears.
    pub fn column_of(&self, weekday: Weekday) -> u8 {
        (weekday.index() + 7 - self.weekday().index()) % 7
    }

    /// Weekday shown in `column`; columns past 6 wrap around.
    pub fn weekday_at(&self, column: u8) -> Weekday {
        self.weekday().shifted(i64::from(column % 7))
    }
}

impl std::fmt::Display for WeekStart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.weekday())
    }
}

impl std::str::FromStr for WeekStart {
    type Err = alm_core::Error;

    fn from_str(s: &str) -> alm_core::Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "sunday" | "sun" => Ok(WeekStart::Sunday),
            "monday" | "mon" => Ok(WeekStart::Monday),
            _ => Err(alm_core::Error::InvalidArgument(format!(
                "week start must be sunday or monday, got {s:?}"
            ))),
        }
    }
}

/// Style of the weekday header labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelStyle {
    /// Three-letter labels (`"Mon"`).
    Short,
    /// Full names (`"Monday"`).
    Long,
}

/// The seven header labels, starting at `week_start`.
///
/// ```
/// use alm_time::{week_days, WeekStart};
/// assert_eq!(
///     week_days(WeekStart::Monday),
///     ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
/// );
/// ```
pub fn week_days(week_start: WeekStart) -> [&'static str; 7] {
    week_day_labels(week_start, LabelStyle::Short)
}

/// The seven header labels in the given style, starting at `week_start`.
pub fn week_day_labels(week_start: WeekStart, style: LabelStyle) -> [&'static str; 7] {
    std::array::from_fn(|column| {
        let wd = week_start.weekday_at(column as u8);
        match style {
            LabelStyle::Short => wd.short_name(),
            LabelStyle::Long => wd.long_name(),
        }
    })
}
