// Calendar grid service
// Builds the padded 7-column month grid for the promotion planner

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::calendar_event::CalendarEvent;
use crate::utils::date::days_in_month;

pub const DAYS_PER_WEEK: usize = 7;

/// One grid slot. `date == None` is a padding cell outside the month.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarCell {
    pub date: Option<NaiveDate>,
    pub events: Vec<CalendarEvent>,
}

impl CalendarCell {
    fn blank() -> Self {
        Self {
            date: None,
            events: Vec::new(),
        }
    }
}

/// A month's worth of cells, leading blanks included. Rebuilt whole
/// whenever the displayed month changes.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub cells: Vec<CalendarCell>,
}

impl MonthGrid {
    pub fn rows(&self) -> usize {
        self.cells.len().div_ceil(DAYS_PER_WEEK)
    }

    /// Cell holding the given day of the month, if it exists.
    pub fn cell_for_day(&self, day: u32) -> Option<&CalendarCell> {
        self.cells
            .iter()
            .find(|cell| cell.date.map(|d| d.day()) == Some(day))
    }
}

/// The requested month does not exist on the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidMonthError {
    pub year: i32,
    pub month: u32,
}

impl std::fmt::Display for InvalidMonthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "no such month: {}-{:02}", self.year, self.month)
    }
}

impl std::error::Error for InvalidMonthError {}

/// Produces the day-cell grid a month view renders from.
#[derive(Debug, Clone, Copy, Default)]
pub struct CalendarGridBuilder {
    pad_to_full_weeks: bool,
}

impl CalendarGridBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pad the tail with blank cells so the grid is a whole number of
    /// rows; hosts that want a fixed 5/6-row height turn this on.
    pub fn pad_to_full_weeks(mut self, pad: bool) -> Self {
        self.pad_to_full_weeks = pad;
        self
    }

    /// Build the grid for `year`/`month` (1-12).
    ///
    /// Leading blanks fill the columns before the 1st (Sunday = column 0);
    /// each day cell carries the events active that day in input order.
    pub fn build(
        &self,
        year: i32,
        month: u32,
        events: &[CalendarEvent],
    ) -> Result<MonthGrid, InvalidMonthError> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(InvalidMonthError { year, month })?;
        let day_count = days_in_month(year, month).ok_or(InvalidMonthError { year, month })?;

        let leading_blanks = first.weekday().num_days_from_sunday() as usize;
        let mut cells = Vec::with_capacity(leading_blanks + day_count as usize + DAYS_PER_WEEK);
        cells.extend(std::iter::repeat_with(CalendarCell::blank).take(leading_blanks));

        for day in 0..day_count {
            let date = first + Duration::days(day as i64);
            let active: Vec<CalendarEvent> = events
                .iter()
                .filter(|event| event.covers(date))
                .cloned()
                .collect();
            cells.push(CalendarCell {
                date: Some(date),
                events: active,
            });
        }

        if self.pad_to_full_weeks {
            while cells.len() % DAYS_PER_WEEK != 0 {
                cells.push(CalendarCell::blank());
            }
        }

        Ok(MonthGrid { year, month, cells })
    }
}
