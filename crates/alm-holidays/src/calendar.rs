//! `HolidayCalendar` trait: resolving a rule set into dated holidays.
//!
//! Implementors only supply their rules; listing, ranges and the upcoming
//! view are provided methods, so every rule set resolves the same way.

use alm_core::errors::Result;
use alm_core::Year;
use alm_time::CalendarDate;

use crate::holiday::Holiday;
use crate::rule::{HolidayRule, RuleKind};

/// How many years past `from` an upcoming-holiday search may scan: one full
/// 400-year Gregorian cycle.
pub const UPCOMING_HORIZON_YEARS: Year = 400;

/// A set of holiday rules that can be resolved for any year.
pub trait HolidayCalendar: std::fmt::Debug + Send + Sync {
    /// Country (or calendar) code, e.g. `"US"`.
    fn code(&self) -> &str;

    /// Human-readable name, e.g. `"United States"`.
    fn name(&self) -> &str;

    /// The rules, in table order.
    fn rules(&self) -> &[HolidayRule];

    /// All holidays of `year`, sorted by date then name.
    ///
    /// Two rules producing the same (name, date) collapse into one entry;
    /// different holidays on the same date are all kept.  A holiday shifted
    /// off a weekend is listed in the year of its rule even if the shift
    /// crosses a year boundary.
    fn holidays(&self, year: Year) -> Result<Vec<Holiday>> {
        resolve_year(self.rules(), year)
    }

    /// The first `count` holidays on or after `from`, ascending.
    ///
    /// Walks successive years starting at `from.year()`, merging each year's
    /// list into one (date, name) ordered buffer.  A holiday shifted across
    /// new year can land among the next year's entries, so the buffer is
    /// only cut once `count` entries lie before the earliest date a later
    /// year can show.  Stops early, with a warning, if the rules produce
    /// fewer than `count` holidays within [`UPCOMING_HORIZON_YEARS`] or
    /// before the end of the supported range.
    fn upcoming_holidays(&self, from: CalendarDate, count: usize) -> Result<Vec<Holiday>> {
        let mut out: Vec<Holiday> = Vec::with_capacity(count);
        if count == 0 {
            return Ok(out);
        }
        let lead = earliest_lead(self.rules());
        let last_year = from
            .year()
            .saturating_add(UPCOMING_HORIZON_YEARS)
            .min(CalendarDate::MAX_YEAR);
        for year in from.year()..=last_year {
            out.extend(self.holidays(year)?.into_iter().filter(|h| h.date >= from));
            out.sort();
            out.dedup_by(|a, b| a.date == b.date && a.name == b.name);

            let next_start = CalendarDate::from_ymd(year, 12, 31)?.day_number() + 1 + lead;
            let settled = out
                .iter()
                .take_while(|h| h.date.day_number() < next_start)
                .count();
            if settled >= count {
                out.truncate(count);
                return Ok(out);
            }
        }
        if out.len() >= count {
            out.truncate(count);
            return Ok(out);
        }
        tracing::warn!(
            code = self.code(),
            %from,
            requested = count,
            found = out.len(),
            "upcoming-holiday search exhausted its horizon"
        );
        Ok(out)
    }

    /// All holidays whose (shown) date lies in `[from, to]`, ascending.
    fn holidays_between(&self, from: CalendarDate, to: CalendarDate) -> Result<Vec<Holiday>> {
        if to < from {
            return Ok(Vec::new());
        }
        // neighbouring years can shift a holiday across the boundary
        let first = (from.year() - 1).max(CalendarDate::MIN_YEAR);
        let last = (to.year() + 1).min(CalendarDate::MAX_YEAR);
        let mut out = Vec::new();
        for year in first..=last {
            out.extend(
                self.holidays(year)?
                    .into_iter()
                    .filter(|h| h.date >= from && h.date <= to),
            );
        }
        out.sort();
        out.dedup_by(|a, b| a.date == b.date && a.name == b.name);
        Ok(out)
    }

    /// The holidays shown on `date` (usually none or one).
    fn holidays_on(&self, date: CalendarDate) -> Result<Vec<Holiday>> {
        self.holidays_between(date, date)
    }

    /// Return `true` if at least one holiday is shown on `date`.
    fn is_holiday(&self, date: CalendarDate) -> Result<bool> {
        Ok(!self.holidays_on(date)?.is_empty())
    }

    /// The first holiday on or after `from`, if any.
    fn next_holiday(&self, from: CalendarDate) -> Result<Option<Holiday>> {
        Ok(self.upcoming_holidays(from, 1)?.into_iter().next())
    }
}

/// Resolve `rules` for `year`: shift, sort by (date, name) and drop
/// duplicate (name, date) pairs.
pub fn resolve_year(rules: &[HolidayRule], year: Year) -> Result<Vec<Holiday>> {
    // validates the year even when no rule applies to it
    CalendarDate::from_ymd(year, 1, 1)?;
    let mut out = Vec::with_capacity(rules.len());
    for rule in rules {
        if let Some(holiday) = rule.resolve(year)? {
            tracing::trace!(name = %holiday.name, date = %holiday.date, "resolved rule");
            out.push(holiday);
        }
    }
    out.sort();
    out.dedup_by(|a, b| a.date == b.date && a.name == b.name);
    tracing::debug!(year, rules = rules.len(), holidays = out.len(), "resolved holiday rules");
    Ok(out)
}

/// Lower bound, in days from January 1, of any date `rules` can show for
/// a year.  Never positive; includes the one-day weekend shift back.
fn earliest_lead(rules: &[HolidayRule]) -> i64 {
    // Easter falls on March 22 at the earliest: January 1 + 80 days
    let earliest = rules
        .iter()
        .map(|rule| match rule.kind {
            RuleKind::EasterOffset(days) => 80 + i64::from(days),
            _ => 0,
        })
        .min()
        .unwrap_or(0);
    earliest.min(0) - 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::HolidayRule;
    use alm_time::{Month, Weekday};

    #[derive(Debug)]
    struct Rules(Vec<HolidayRule>);

    impl HolidayCalendar for Rules {
        fn code(&self) -> &str {
            "XX"
        }
        fn name(&self) -> &str {
            "Test"
        }
        fn rules(&self) -> &[HolidayRule] {
            &self.0
        }
    }

    fn date(y: Year, m: u8, d: u8) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn duplicate_rules_collapse() {
        let cal = Rules(vec![
            HolidayRule::fixed("Christmas Day", Month::December, 25),
            HolidayRule::fixed("Christmas Day", Month::December, 25),
        ]);
        assert_eq!(cal.holidays(2024).unwrap().len(), 1);
    }

    #[test]
    fn same_date_different_names_both_kept() {
        // Easter Monday 2011 fell on Anzac Day (April 25)
        let cal = Rules(vec![
            HolidayRule::fixed("Anzac Day", Month::April, 25),
            HolidayRule::easter_offset("Easter Monday", 1),
        ]);
        let hs = cal.holidays(2011).unwrap();
        assert_eq!(hs.len(), 2);
        assert!(hs.iter().all(|h| h.date == date(2011, 4, 25)));
        assert_eq!(hs[0].name, "Anzac Day");
        assert_eq!(hs[1].name, "Easter Monday");
    }

    #[test]
    fn sorted_ascending() {
        let cal = Rules(vec![
            HolidayRule::fixed("Christmas Day", Month::December, 25),
            HolidayRule::fixed("New Year's Day", Month::January, 1),
            HolidayRule::easter_offset("Good Friday", -2),
        ]);
        let hs = cal.holidays(2024).unwrap();
        assert!(hs.windows(2).all(|w| w[0].date <= w[1].date));
        assert_eq!(hs[0].name, "New Year's Day");
    }

    #[test]
    fn empty_rule_set_is_valid() {
        let cal = Rules(Vec::new());
        assert!(cal.holidays(2024).unwrap().is_empty());
        assert!(cal.upcoming_holidays(date(2024, 1, 1), 3).unwrap().is_empty());
        assert_eq!(cal.next_holiday(date(2024, 1, 1)).unwrap(), None);
    }

    #[test]
    fn upcoming_spans_years() {
        let cal = Rules(vec![HolidayRule::fixed("New Year's Day", Month::January, 1)]);
        let hs = cal.upcoming_holidays(date(2024, 6, 1), 3).unwrap();
        let dates: Vec<_> = hs.iter().map(|h| h.date).collect();
        assert_eq!(dates, vec![date(2025, 1, 1), date(2026, 1, 1), date(2027, 1, 1)]);
    }

    #[test]
    fn upcoming_keeps_holidays_sharing_a_shifted_date() {
        // December 31 2023 was a Sunday: observed on Monday January 1 2024
        let cal = Rules(vec![
            HolidayRule::fixed("New Year's Day", Month::January, 1),
            HolidayRule::fixed("New Year's Eve", Month::December, 31).observed(),
        ]);
        let hs = cal.upcoming_holidays(date(2023, 12, 1), 3).unwrap();
        let shown: Vec<_> = hs.iter().map(|h| h.to_string()).collect();
        assert_eq!(
            shown,
            vec![
                "2024-01-01 New Year's Day",
                "2024-01-01 New Year's Eve (observed)",
                "2024-12-31 New Year's Eve",
            ]
        );
        assert_eq!(cal.next_holiday(date(2023, 12, 1)).unwrap().unwrap().name, "New Year's Day");
    }

    #[test]
    fn upcoming_waits_for_easter_feasts_of_the_next_year() {
        // an offset this far back shows the 2025 feast in 2024
        let cal = Rules(vec![
            HolidayRule::easter_offset("Early Feast", -120),
            HolidayRule::fixed("Midyear", Month::July, 1),
        ]);
        let hs = cal.upcoming_holidays(date(2024, 6, 1), 2).unwrap();
        let easter_2025 = alm_time::easter_sunday(2025).unwrap();
        assert_eq!(hs[0].date, date(2024, 7, 1));
        assert_eq!(hs[1].date, easter_2025.add_days(-120).unwrap());
        assert_eq!(hs[1].date.year(), 2024);
    }

    #[test]
    fn upcoming_includes_from() {
        let cal = Rules(vec![HolidayRule::fixed("Christmas Day", Month::December, 25)]);
        let next = cal.next_holiday(date(2024, 12, 25)).unwrap().unwrap();
        assert_eq!(next.date, date(2024, 12, 25));
        assert_eq!(next.days_from(date(2024, 12, 1)), 24);
    }

    #[test]
    fn between_catches_shift_across_new_year() {
        // January 1 2022 was a Saturday: observed on Friday December 31 2021
        let cal = Rules(vec![
            HolidayRule::fixed("New Year's Day", Month::January, 1).observed(),
        ]);
        let hs = cal.holidays_between(date(2021, 12, 1), date(2021, 12, 31)).unwrap();
        assert_eq!(hs.len(), 1);
        assert_eq!(hs[0].date, date(2021, 12, 31));
        assert_eq!(hs[0].raw_date, date(2022, 1, 1));
        assert!(cal.is_holiday(date(2021, 12, 31)).unwrap());
        assert!(!cal.is_holiday(date(2022, 1, 1)).unwrap());
    }

    #[test]
    fn between_reversed_range_is_empty() {
        let cal = Rules(vec![HolidayRule::last_weekday(
            "Memorial Day",
            Month::May,
            Weekday::Monday,
        )]);
        assert!(cal
            .holidays_between(date(2024, 12, 31), date(2024, 1, 1))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn invalid_year_is_an_error() {
        let cal = Rules(Vec::new());
        assert!(cal.holidays(10_000).is_err());
    }
}
