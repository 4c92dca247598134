use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

const MS_PER_HOUR: i64 = 3_600_000;
const MS_PER_MINUTE: i64 = 60_000;
const MS_PER_SECOND: i64 = 1_000;

/// Ticker lifecycle. A ticker never leaves `Expired`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CountdownPhase {
    Active,
    Expired,
}

/// Remaining time broken down for display. All fields are non-negative;
/// hours are uncapped (a three-day sale shows 72+ hours).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownState {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl CountdownState {
    pub const ZERO: Self = Self {
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Breakdown of `end_at - now`, floored to zero once the end has passed.
    ///
    /// Always recomputed from the absolute end timestamp, so a missed tick
    /// self-corrects on the next one.
    pub fn remaining(end_at: DateTime<Local>, now: DateTime<Local>) -> Self {
        let ms = (end_at - now).num_milliseconds();
        if ms <= 0 {
            return Self::ZERO;
        }
        Self {
            hours: ms / MS_PER_HOUR,
            minutes: (ms / MS_PER_MINUTE) % 60,
            seconds: (ms / MS_PER_SECOND) % 60,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}
