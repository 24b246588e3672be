//! Month-grid reconstruction.
//!
//! [`month_grid`] projects flat shift and blocked-time lists onto a fixed
//! 42-cell (6-week) grid: the cells run from the Sunday on or before the
//! first of the displayed month through the following six weeks, so every
//! month renders with the same shape regardless of where its first day
//! falls. [`CalendarView`] layers month navigation on top.
//!
//! Everything here is pure: the grid is rebuilt from already-fetched lists
//! and never triggers a network call. Navigation assumes the loaded lists
//! span the whole user history rather than one month at a time.

use chrono::{Datelike, Duration, Months, NaiveDate};

use shiftplan_core::day::utc_day;
use shiftplan_store::models::{BlockedTime, Shift};

/// Cells per grid: six full weeks.
pub const GRID_CELLS: usize = 42;

/// One grid cell: a calendar date plus everything rendered on it.
#[derive(Debug, Clone)]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// Active shifts whose day matches `date`.
    pub shifts: Vec<Shift>,
    /// Active blocked times whose day matches `date`.
    pub blocked_times: Vec<BlockedTime>,
    pub is_today: bool,
    /// Whether the cell belongs to the displayed month rather than the
    /// leading or trailing filler week.
    pub is_current_month: bool,
    pub is_blocked: bool,
}

/// Build the 42-cell grid for the month containing `month`.
///
/// `month` may be any date inside the displayed month. Soft-deleted
/// entries are skipped even if a caller passes an unfiltered list.
pub fn month_grid(
    month: NaiveDate,
    today: NaiveDate,
    shifts: &[Shift],
    blocked: &[BlockedTime],
) -> Vec<CalendarDay> {
    let first = first_of_month(month);
    let start = first - Duration::days(i64::from(first.weekday().num_days_from_sunday()));

    (0..GRID_CELLS as i64)
        .map(|offset| {
            let date = start + Duration::days(offset);

            let day_shifts: Vec<Shift> = shifts
                .iter()
                .filter(|s| !s.deleted && utc_day(s.date) == date)
                .cloned()
                .collect();
            let day_blocked: Vec<BlockedTime> = blocked
                .iter()
                .filter(|b| !b.deleted && utc_day(b.date) == date)
                .cloned()
                .collect();

            CalendarDay {
                date,
                is_today: date == today,
                is_current_month: date.year() == first.year() && date.month() == first.month(),
                is_blocked: !day_blocked.is_empty(),
                shifts: day_shifts,
                blocked_times: day_blocked,
            }
        })
        .collect()
}

/// Month navigation over a cached pair of lists.
///
/// Holds the displayed month and the last data handed to [`set_data`];
/// every navigation or data change rebuilds the grid synchronously.
///
/// [`set_data`]: CalendarView::set_data
#[derive(Debug)]
pub struct CalendarView {
    displayed: NaiveDate,
    today: NaiveDate,
    shifts: Vec<Shift>,
    blocked_times: Vec<BlockedTime>,
    grid: Vec<CalendarDay>,
}

impl CalendarView {
    /// A view of the month containing `today`, with no data yet.
    pub fn new(today: NaiveDate) -> Self {
        let mut view = Self {
            displayed: first_of_month(today),
            today,
            shifts: Vec::new(),
            blocked_times: Vec::new(),
            grid: Vec::new(),
        };
        view.rebuild();
        view
    }

    /// Replace the backing lists and rebuild the grid.
    pub fn set_data(&mut self, shifts: Vec<Shift>, blocked_times: Vec<BlockedTime>) {
        self.shifts = shifts;
        self.blocked_times = blocked_times;
        self.rebuild();
    }

    pub fn previous_month(&mut self) {
        self.displayed = self
            .displayed
            .checked_sub_months(Months::new(1))
            .unwrap_or(self.displayed);
        self.rebuild();
    }

    pub fn next_month(&mut self) {
        self.displayed = self
            .displayed
            .checked_add_months(Months::new(1))
            .unwrap_or(self.displayed);
        self.rebuild();
    }

    pub fn go_to_today(&mut self) {
        self.displayed = first_of_month(self.today);
        self.rebuild();
    }

    /// First day of the displayed month.
    pub fn displayed_month(&self) -> NaiveDate {
        self.displayed
    }

    pub fn grid(&self) -> &[CalendarDay] {
        &self.grid
    }

    fn rebuild(&mut self) {
        self.grid = month_grid(self.displayed, self.today, &self.shifts, &self.blocked_times);
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}
