//! Month-grid and weekday-header invariants.
//!
//! The grid must cover its month exactly once in the minimum number of whole
//! weeks, and its columns must line up with the header labels for the same
//! `WeekStart`.

use alm_time::{
    build_month_grid, calendar_days, days_in_month, week_days, CalendarDate, CellKind, WeekStart,
    YearMonth,
};
use proptest::prelude::*;

fn week_start() -> impl Strategy<Value = WeekStart> {
    prop_oneof![Just(WeekStart::Sunday), Just(WeekStart::Monday)]
}

proptest! {
    #[test]
    fn grid_covers_month_in_whole_weeks(
        year in -9000i32..9000,
        month in 1u8..=12,
        ws in week_start(),
    ) {
        let ym = YearMonth::from_ym(year, month).unwrap();
        let grid = build_month_grid(ym, ws).unwrap();
        let cells = grid.cells();

        prop_assert_eq!(cells.len() % 7, 0);
        prop_assert_eq!(cells[0].date.weekday(), ws.weekday());

        // every day of the month exactly once, in order
        let in_month: Vec<_> = cells.iter().filter(|c| c.in_month()).map(|c| c.date).collect();
        prop_assert_eq!(in_month.len(), usize::from(days_in_month(year, month)));
        for (i, d) in in_month.iter().enumerate() {
            prop_assert_eq!(usize::from(d.day()), i + 1);
            prop_assert!(ym.contains(*d));
        }

        // minimum number of weeks: neither the first nor the last row is all padding
        let rows: Vec<_> = grid.weeks().collect();
        prop_assert!(rows[0].iter().any(|c| c.in_month()));
        prop_assert!(rows[rows.len() - 1].iter().any(|c| c.in_month()));

        // consecutive dates
        for pair in cells.windows(2) {
            prop_assert_eq!(pair[0].date.days_until(pair[1].date), 1);
        }
    }

    #[test]
    fn padding_kinds_are_ordered(year in 1900i32..2100, month in 1u8..=12, ws in week_start()) {
        let grid = build_month_grid(YearMonth::from_ym(year, month).unwrap(), ws).unwrap();
        let kinds: Vec<_> = grid.cells().iter().map(|c| c.kind).collect();
        let first_in = kinds.iter().position(|k| *k == CellKind::InMonth).unwrap();
        let last_in = kinds.iter().rposition(|k| *k == CellKind::InMonth).unwrap();
        prop_assert!(first_in < 7);
        prop_assert!(kinds.len() - 1 - last_in < 7);
        prop_assert!(kinds[..first_in].iter().all(|k| *k == CellKind::LeadIn));
        prop_assert!(kinds[last_in + 1..].iter().all(|k| *k == CellKind::LeadOut));
    }

    #[test]
    fn header_labels_match_columns(year in 1900i32..2100, month in 1u8..=12, ws in week_start()) {
        let labels = week_days(ws);
        let grid = build_month_grid(YearMonth::from_ym(year, month).unwrap(), ws).unwrap();
        for row in grid.weeks() {
            for (column, cell) in row.iter().enumerate() {
                prop_assert_eq!(cell.date.weekday().short_name(), labels[column]);
            }
        }
    }
}

#[test]
fn calendar_days_for_any_day_of_month_agree() {
    let first = calendar_days(CalendarDate::from_ymd(2025, 11, 1).unwrap(), WeekStart::Sunday).unwrap();
    let last = calendar_days(CalendarDate::from_ymd(2025, 11, 30).unwrap(), WeekStart::Sunday).unwrap();
    assert_eq!(first, last);
    // November 2025: Saturday 1st to Sunday 30th needs six rows
    assert_eq!(first.len(), 42);
}

#[test]
fn grid_at_year_boundary() {
    let grid = build_month_grid(YearMonth::from_ym(2025, 1).unwrap(), WeekStart::Sunday).unwrap();
    // January 1 2025 is a Wednesday
    assert_eq!(grid.cells()[0].date, CalendarDate::from_ymd(2024, 12, 29).unwrap());
    let grid = build_month_grid(YearMonth::from_ym(2024, 12).unwrap(), WeekStart::Monday).unwrap();
    // December 31 2024 is a Tuesday
    assert_eq!(
        grid.cells().last().unwrap().date,
        CalendarDate::from_ymd(2025, 1, 5).unwrap()
    );
}
