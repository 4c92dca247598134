// Calendar event module
// Dated promotion entry shown on the monthly planning grid

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Promotion category tag carried by calendar entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    Flash,
    Coupon,
    Other,
}

impl EventKind {
    /// Map the API's free-form `type` tag onto a known kind.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "flash" | "flash_sale" | "flashsale" => Self::Flash,
            "coupon" => Self::Coupon,
            _ => Self::Other,
        }
    }

    /// CSS class the rendering layer keys its styling on.
    pub fn color_class(&self) -> &'static str {
        match self {
            Self::Flash => "promo-flash",
            Self::Coupon => "promo-coupon",
            Self::Other => "promo-other",
        }
    }
}

/// A promotion entry anchored to a calendar day.
///
/// Occupies every grid cell from `anchor_date` through
/// `anchor_date + duration_days - 1` inclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: i64,
    pub title: String,
    pub anchor_date: NaiveDate,
    pub duration_days: u32,
    pub kind: EventKind,
    pub color_class: String,
}

impl CalendarEvent {
    /// Create an event with validation.
    ///
    /// # Returns
    /// `Err` when the title is empty or `duration_days` is zero.
    pub fn new(
        id: i64,
        title: impl Into<String>,
        anchor_date: NaiveDate,
        duration_days: u32,
        kind: EventKind,
    ) -> Result<Self, String> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err("Event title cannot be empty".to_string());
        }
        if duration_days == 0 {
            return Err("Event duration must be at least one day".to_string());
        }
        Ok(Self {
            id,
            title,
            anchor_date,
            duration_days,
            kind,
            color_class: kind.color_class().to_string(),
        })
    }

    /// Last calendar day the event occupies.
    pub fn last_day(&self) -> NaiveDate {
        // Defensive floor for records constructed without validation
        let span = self.duration_days.max(1) as i64;
        self.anchor_date + Duration::days(span - 1)
    }

    pub fn covers(&self, date: NaiveDate) -> bool {
        self.anchor_date <= date && date <= self.last_day()
    }
}
