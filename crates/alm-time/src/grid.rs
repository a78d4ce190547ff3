//! `MonthGrid`: the week-aligned run of dates shown by a month view.
//!
//! The grid starts on the `WeekStart` weekday on or before the first of the
//! month and ends on the last column on or after the last of the month.  It
//! always covers whole weeks and never carries a wholly padded week.

use crate::date::CalendarDate;
use crate::week_start::WeekStart;
use crate::year_month::YearMonth;
use alm_core::errors::Result;

/// Where a grid cell sits relative to the focal month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// Trailing days of the previous month.
    LeadIn,
    /// A day of the focal month.
    InMonth,
    /// Leading days of the next month.
    LeadOut,
}

/// One cell of a [`MonthGrid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCell {
    /// The date shown in the cell.
    pub date: CalendarDate,
    /// Whether the date is padding or part of the focal month.
    pub kind: CellKind,
}

impl GridCell {
    /// Return `true` for a day of the focal month.
    pub fn in_month(&self) -> bool {
        self.kind == CellKind::InMonth
    }
}

/// A month view: dates in row-major order, seven per week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    year_month: YearMonth,
    week_start: WeekStart,
    cells: Vec<GridCell>,
}

impl MonthGrid {
    /// The focal month.
    pub fn year_month(&self) -> YearMonth {
        self.year_month
    }

    /// The weekday rotation used to build the grid.
    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    /// All cells, row-major.
    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    /// Number of cells (always a multiple of 7).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false` for a built grid (at least four weeks).
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of week rows (4 to 6).
    pub fn week_count(&self) -> usize {
        self.cells.len() / 7
    }

    /// Iterate over week rows of seven cells.
    pub fn weeks(&self) -> impl Iterator<Item = &[GridCell]> + '_ {
        self.cells.chunks(7)
    }

    /// The dates of all cells, padding included.
    pub fn dates(&self) -> Vec<CalendarDate> {
        self.cells.iter().map(|c| c.date).collect()
    }

    /// The cell showing `date`, if the grid contains it.
    pub fn cell_for(&self, date: CalendarDate) -> Option<&GridCell> {
        let first = self.cells.first()?.date;
        let offset = usize::try_from(first.days_until(date)).ok()?;
        self.cells.get(offset)
    }

    /// `(row, column)` position of `date` in the grid.
    pub fn position_of(&self, date: CalendarDate) -> Option<(usize, usize)> {
        let first = self.cells.first()?.date;
        let offset = usize::try_from(first.days_until(date)).ok()?;
        (offset < self.cells.len()).then_some((offset / 7, offset % 7))
    }
}

/// Build the month grid for `year_month` with columns starting at
/// `week_start`.
///
/// Fails only if the padding would leave the supported date range.
///
/// ```
/// use alm_time::{build_month_grid, WeekStart, YearMonth};
/// // February 2015 starts on a Sunday and has exactly 28 days.
/// let grid = build_month_grid(YearMonth::from_ym(2015, 2).unwrap(), WeekStart::Sunday).unwrap();
/// assert_eq!(grid.len(), 28);
/// ```
pub fn build_month_grid(year_month: YearMonth, week_start: WeekStart) -> Result<MonthGrid> {
    let first = year_month.first_day();
    let last = year_month.last_day();
    let lead_in = week_start.column_of(first.weekday());
    let lead_out = 6 - week_start.column_of(last.weekday());
    let days = year_month.days_in_month();
    let total = usize::from(lead_in) + usize::from(days) + usize::from(lead_out);

    let start = first.add_days(-i64::from(lead_in))?;
    let mut cells = Vec::with_capacity(total);
    for i in 0..total {
        let date = start.add_days(i as i64)?;
        let kind = if date < first {
            CellKind::LeadIn
        } else if date > last {
            CellKind::LeadOut
        } else {
            CellKind::InMonth
        };
        cells.push(GridCell { date, kind });
    }
    debug_assert_eq!(cells.len() % 7, 0);
    Ok(MonthGrid {
        year_month,
        week_start,
        cells,
    })
}

/// The grid dates for the month containing `anchor`.
///
/// Highlighting today or the focal month is left to the caller.
pub fn calendar_days(anchor: CalendarDate, week_start: WeekStart) -> Result<Vec<CalendarDate>> {
    Ok(build_month_grid(anchor.year_month(), week_start)?.dates())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weekday::Weekday;

    fn ym(y: i32, m: u8) -> YearMonth {
        YearMonth::from_ym(y, m).unwrap()
    }

    fn date(y: i32, m: u8, d: u8) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn march_2024_sunday_start() {
        // March 1 2024 is a Friday, March 31 a Sunday
        let grid = build_month_grid(ym(2024, 3), WeekStart::Sunday).unwrap();
        assert_eq!(grid.len(), 42);
        assert_eq!(grid.cells()[0].date, date(2024, 2, 25));
        assert_eq!(grid.cells()[0].kind, CellKind::LeadIn);
        assert_eq!(grid.cells()[5].date, date(2024, 3, 1));
        assert!(grid.cells()[5].in_month());
        assert_eq!(grid.cells()[41].date, date(2024, 4, 6));
        assert_eq!(grid.cells()[41].kind, CellKind::LeadOut);
    }

    #[test]
    fn march_2024_monday_start() {
        let grid = build_month_grid(ym(2024, 3), WeekStart::Monday).unwrap();
        // Monday Feb 26 … Sunday Mar 31: no lead-out week
        assert_eq!(grid.len(), 35);
        assert_eq!(grid.cells()[0].date, date(2024, 2, 26));
        assert_eq!(grid.cells()[34].date, date(2024, 3, 31));
        assert_eq!(grid.cells()[0].date.weekday(), Weekday::Monday);
    }

    #[test]
    fn exact_four_weeks() {
        // February 2015: Sunday 1st to Saturday 28th
        let grid = build_month_grid(ym(2015, 2), WeekStart::Sunday).unwrap();
        assert_eq!(grid.week_count(), 4);
        assert!(grid.cells().iter().all(GridCell::in_month));
        // Monday start needs padding on both sides
        let grid = build_month_grid(ym(2015, 2), WeekStart::Monday).unwrap();
        assert_eq!(grid.week_count(), 5);
    }

    #[test]
    fn positions() {
        let grid = build_month_grid(ym(2024, 3), WeekStart::Sunday).unwrap();
        assert_eq!(grid.position_of(date(2024, 3, 1)), Some((0, 5)));
        assert_eq!(grid.position_of(date(2024, 3, 31)), Some((5, 0)));
        assert_eq!(grid.position_of(date(2024, 2, 1)), None);
        assert_eq!(grid.position_of(date(2024, 5, 1)), None);
        assert_eq!(
            grid.cell_for(date(2024, 4, 1)).map(|c| c.kind),
            Some(CellKind::LeadOut)
        );
        let rows: Vec<_> = grid.weeks().collect();
        assert_eq!(rows.len(), 6);
        assert!(rows.iter().all(|r| r.len() == 7));
    }

    #[test]
    fn calendar_days_uses_anchor_month() {
        let days = calendar_days(date(2024, 3, 17), WeekStart::Monday).unwrap();
        assert_eq!(days.len(), 35);
        assert_eq!(days[0], date(2024, 2, 26));
    }

    #[test]
    fn padding_outside_range_fails() {
        // -9999-01-01 is a Monday; a Sunday-first grid needs -10000-12-31
        assert!(build_month_grid(ym(-9999, 1), WeekStart::Sunday).is_err());
        assert!(build_month_grid(ym(-9999, 1), WeekStart::Monday).is_ok());
    }
}
