// Timeline layout service
// Places flash-sale windows on the 24-hour axis of a reference day

mod palette;

use chrono::{DateTime, Local, Timelike};

use crate::models::settings::TimelineSettings;
use crate::models::time_window::TimeWindow;

pub use palette::{FALLBACK_COLOR, FALLBACK_LABEL};

const MS_PER_DAY: f64 = 86_400_000.0;

/// Render-ready placement for one window on the day axis.
///
/// `position_percent + width_percent` may exceed 100 when the window runs
/// past midnight; clipping is the render boundary's job, not the model's.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineBlock {
    pub position_percent: f64,
    pub width_percent: f64,
    pub band_label: String,
    pub color: String,
}

/// Maps day-anchored time windows to horizontal percentages.
#[derive(Debug, Clone)]
pub struct TimelineLayoutEngine {
    settings: TimelineSettings,
}

impl Default for TimelineLayoutEngine {
    fn default() -> Self {
        Self::new(TimelineSettings::default())
    }
}

impl TimelineLayoutEngine {
    pub fn new(settings: TimelineSettings) -> Self {
        Self { settings }
    }

    pub fn min_width_percent(&self) -> f64 {
        self.settings.min_width_percent
    }

    /// Lay out `windows` against the day beginning at `day_start`.
    ///
    /// Pure: identical input yields identical output, order preserved.
    /// Windows anchored to other days are the caller's to filter (see
    /// [`windows_on_day`]); any that slip through are still placed, with
    /// their position clamped to the day's edges.
    pub fn layout_day(
        &self,
        windows: &[TimeWindow],
        day_start: DateTime<Local>,
    ) -> Vec<TimelineBlock> {
        windows
            .iter()
            .map(|window| self.block_for(window, day_start))
            .collect()
    }

    fn block_for(&self, window: &TimeWindow, day_start: DateTime<Local>) -> TimelineBlock {
        let offset_ms = (window.start() - day_start).num_milliseconds() as f64;
        let position_percent = (offset_ms / MS_PER_DAY * 100.0).clamp(0.0, 100.0);

        let raw_width = window.duration_hours() / 24.0 * 100.0;
        let width_percent = raw_width.max(self.settings.min_width_percent);

        let (band_label, color) =
            palette::color_for_hour(&self.settings.bands, window.start().hour());

        TimelineBlock {
            position_percent,
            width_percent,
            band_label,
            color,
        }
    }
}

/// The subset of `windows` that open on the same calendar day as
/// `day_start`, preserving order.
pub fn windows_on_day(windows: &[TimeWindow], day_start: DateTime<Local>) -> Vec<TimeWindow> {
    windows
        .iter()
        .filter(|w| w.starts_on_day_of(day_start))
        .copied()
        .collect()
}
