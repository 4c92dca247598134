// Time window module
// Promotion active interval [start, end)

use chrono::{DateTime, Local};

use crate::utils::date::is_same_day;

const MS_PER_HOUR: f64 = 3_600_000.0;

/// A single promotion's active interval, half-open `[start, end)`.
///
/// Constructed once from API timestamps at fetch time and never mutated;
/// a re-fetch replaces the window wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    start: DateTime<Local>,
    end: DateTime<Local>,
}

impl TimeWindow {
    /// Build a window from two absolute timestamps.
    ///
    /// # Returns
    /// `InvalidRangeError` when `end <= start`.
    pub fn new(start: DateTime<Local>, end: DateTime<Local>) -> Result<Self, InvalidRangeError> {
        if end <= start {
            return Err(InvalidRangeError { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> DateTime<Local> {
        self.start
    }

    pub fn end(&self) -> DateTime<Local> {
        self.end
    }

    /// Window length in hours, fractional.
    pub fn duration_hours(&self) -> f64 {
        (self.end - self.start).num_milliseconds() as f64 / MS_PER_HOUR
    }

    pub fn contains(&self, instant: DateTime<Local>) -> bool {
        self.start <= instant && instant < self.end
    }

    /// Whether the window opens on the same calendar day as `reference`.
    pub fn starts_on_day_of(&self, reference: DateTime<Local>) -> bool {
        is_same_day(self.start, reference)
    }
}

/// Rejected construction: the window would end at or before it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidRangeError {
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
}

impl std::fmt::Display for InvalidRangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "window end ({}) must be after start ({})",
            self.end, self.start
        )
    }
}

impl std::error::Error for InvalidRangeError {}
