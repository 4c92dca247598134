// Display settings model
// Tunable tables behind the timeline, calendar and map renderings

use serde::{Deserialize, Serialize};

/// A named time-of-day band on the 24-hour axis, `[start_hour, end_hour)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourBand {
    pub label: String,
    pub start_hour: u32,
    pub end_hour: u32,
    pub color: String,
}

impl HourBand {
    pub fn contains(&self, hour: u32) -> bool {
        self.start_hour <= hour && hour < self.end_hour
    }
}

/// One row of the choropleth breakpoint table. `to == None` means +infinity
/// (the table's last, open-ended class).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breakpoint {
    #[serde(default)]
    pub from: f64,
    #[serde(default)]
    pub to: Option<f64>,
    pub color: String,
    pub label: String,
}

impl Breakpoint {
    pub fn matches(&self, value: f64) -> bool {
        match self.to {
            // Zero class: from == to == 0 matches exactly zero
            Some(to) if to == self.from => value == self.from,
            Some(to) => self.from <= value && value < to,
            None => self.from <= value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineSettings {
    /// Floor so sub-hour promotions stay clickable.
    pub min_width_percent: f64,
    pub bands: Vec<HourBand>,
}

impl Default for TimelineSettings {
    fn default() -> Self {
        Self {
            min_width_percent: default_min_width_percent(),
            bands: default_bands(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarSettings {
    /// Pad the grid with trailing blanks to whole weeks.
    pub pad_to_full_weeks: bool,
}

impl Default for CalendarSettings {
    fn default() -> Self {
        Self {
            pad_to_full_weeks: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChoroplethSettings {
    pub breakpoints: Vec<Breakpoint>,
    pub neutral_color: String,
    pub neutral_label: String,
}

impl Default for ChoroplethSettings {
    fn default() -> Self {
        Self {
            breakpoints: default_breakpoints(),
            neutral_color: "#E5E7EB".to_string(),
            neutral_label: "no data".to_string(),
        }
    }
}

/// All render-tuning knobs in one place, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub timeline: TimelineSettings,
    pub calendar: CalendarSettings,
    pub choropleth: ChoroplethSettings,
}

impl DisplaySettings {
    /// Validate the loaded tables before any service consumes them.
    pub fn validate(&self) -> Result<(), SettingsValidationError> {
        if self.timeline.min_width_percent <= 0.0 || self.timeline.min_width_percent > 100.0 {
            return Err(SettingsValidationError::MinWidthOutOfRange);
        }
        if self.timeline.bands.is_empty() {
            return Err(SettingsValidationError::EmptyBands);
        }
        let mut previous_end = 0u32;
        for band in &self.timeline.bands {
            if band.start_hour >= band.end_hour || band.end_hour > 24 {
                return Err(SettingsValidationError::BandOutOfRange(band.label.clone()));
            }
            if band.start_hour < previous_end {
                return Err(SettingsValidationError::BandOverlap(band.label.clone()));
            }
            if !is_valid_hex_color(&band.color) {
                return Err(SettingsValidationError::InvalidColor(band.color.clone()));
            }
            previous_end = band.end_hour;
        }

        if self.choropleth.breakpoints.is_empty() {
            return Err(SettingsValidationError::EmptyBreakpoints);
        }
        let mut previous_from = f64::NEG_INFINITY;
        for bp in &self.choropleth.breakpoints {
            if bp.from < previous_from {
                return Err(SettingsValidationError::BreakpointsNotAscending(
                    bp.label.clone(),
                ));
            }
            if let Some(to) = bp.to {
                if to < bp.from {
                    return Err(SettingsValidationError::BreakpointsNotAscending(
                        bp.label.clone(),
                    ));
                }
            }
            if !is_valid_hex_color(&bp.color) {
                return Err(SettingsValidationError::InvalidColor(bp.color.clone()));
            }
            previous_from = bp.from;
        }
        Ok(())
    }
}

/// Validation errors for display settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsValidationError {
    MinWidthOutOfRange,
    EmptyBands,
    BandOutOfRange(String),
    BandOverlap(String),
    EmptyBreakpoints,
    BreakpointsNotAscending(String),
    InvalidColor(String),
}

impl std::fmt::Display for SettingsValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MinWidthOutOfRange => {
                write!(f, "timeline.min_width_percent must be in (0, 100]")
            }
            Self::EmptyBands => write!(f, "timeline band table cannot be empty"),
            Self::BandOutOfRange(label) => {
                write!(f, "band '{}' has hours outside 0..=24", label)
            }
            Self::BandOverlap(label) => write!(f, "band '{}' overlaps the previous band", label),
            Self::EmptyBreakpoints => write!(f, "choropleth breakpoint table cannot be empty"),
            Self::BreakpointsNotAscending(label) => {
                write!(f, "breakpoint '{}' breaks ascending order", label)
            }
            Self::InvalidColor(color) => {
                write!(f, "invalid color '{}' (use hex like #FF0000)", color)
            }
        }
    }
}

impl std::error::Error for SettingsValidationError {}

/// Check if a string is a valid hex color code.
pub(crate) fn is_valid_hex_color(color: &str) -> bool {
    let color = color.trim();
    if !color.starts_with('#') {
        return false;
    }
    let hex = &color[1..];
    matches!(hex.len(), 3 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit())
}

pub(crate) fn default_min_width_percent() -> f64 {
    2.5
}

/// Time-of-day bands the storefront ships with.
pub(crate) fn default_bands() -> Vec<HourBand> {
    let band = |label: &str, start_hour, end_hour, color: &str| HourBand {
        label: label.to_string(),
        start_hour,
        end_hour,
        color: color.to_string(),
    };
    vec![
        band("midnight", 0, 6, "#3B4A6B"),
        band("morning", 6, 11, "#5BA8A0"),
        band("lunch", 11, 15, "#F59E0B"),
        band("afternoon", 15, 18, "#E8804C"),
        band("evening", 18, 23, "#B5485D"),
        band("night", 23, 24, "#4C3A66"),
    ]
}

/// Sales-amount breakpoints the province map ships with.
pub(crate) fn default_breakpoints() -> Vec<Breakpoint> {
    let bp = |from: f64, to: Option<f64>, color: &str, label: &str| Breakpoint {
        from,
        to,
        color: color.to_string(),
        label: label.to_string(),
    };
    vec![
        bp(0.0, Some(0.0), "#F3F4F6", "zero"),
        bp(1.0, Some(10_000.0), "#BFDBFE", "light"),
        bp(10_000.0, Some(50_000.0), "#60A5FA", "medium"),
        bp(50_000.0, Some(200_000.0), "#2563EB", "heavy"),
        bp(200_000.0, None, "#1E3A8A", "top"),
    ]
}
