// Promotion module
// Flash sale record as consumed from the storefront API

use chrono::{DateTime, Local};

use super::time_window::TimeWindow;

/// Lifecycle of a flash sale relative to some instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaleStatus {
    Upcoming,
    Running,
    Ended,
}

/// A time-boxed discount promotion.
///
/// The upstream record may carry precomputed layout hints; those are
/// discarded at ingestion and the layout engine derives them again, so a
/// `FlashSale` only holds what the API owns: identity, the active window,
/// and the merchandiser's on/off switch.
#[derive(Debug, Clone, PartialEq)]
pub struct FlashSale {
    pub id: i64,
    pub name: String,
    pub window: TimeWindow,
    pub is_active: bool,
}

impl FlashSale {
    /// Create a flash sale with validation.
    pub fn new(
        id: i64,
        name: impl Into<String>,
        window: TimeWindow,
        is_active: bool,
    ) -> Result<Self, String> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err("Flash sale name cannot be empty".to_string());
        }
        Ok(Self {
            id,
            name,
            window,
            is_active,
        })
    }

    /// Status derived from the window, never from upstream strings.
    pub fn status_at(&self, now: DateTime<Local>) -> SaleStatus {
        if now < self.window.start() {
            SaleStatus::Upcoming
        } else if now < self.window.end() {
            SaleStatus::Running
        } else {
            SaleStatus::Ended
        }
    }

    /// A sale counts down while it is switched on and not yet over.
    pub fn counts_down_at(&self, now: DateTime<Local>) -> bool {
        self.is_active && self.status_at(now) != SaleStatus::Ended
    }
}
