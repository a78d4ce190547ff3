//! `Holiday`: a rule resolved to a concrete date.

use std::borrow::Cow;

use alm_time::CalendarDate;

/// A dated holiday.
///
/// Ordered by date, then name: the order of holiday lists.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Holiday {
    /// The date the holiday is shown on (after weekend shifting).
    pub date: CalendarDate,
    /// Display name.
    pub name: Cow<'static, str>,
    /// The date the rule computed before shifting.
    pub raw_date: CalendarDate,
    /// `true` iff [`Holiday::date`] differs from [`Holiday::raw_date`].
    pub is_observed: bool,
}

impl Holiday {
    /// Days from `from` until this holiday (negative if already past).
    pub fn days_from(&self, from: CalendarDate) -> i64 {
        from.days_until(self.date)
    }
}

impl std::fmt::Display for Holiday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_observed {
            write!(f, "{} {} (observed)", self.date, self.name)
        } else {
            write!(f, "{} {}", self.date, self.name)
        }
    }
}
