// Countdown service
// Per-promotion remaining-time tickers driven by the host event loop

mod board;
mod models;

pub use board::CountdownBoard;
pub use models::{CountdownPhase, CountdownState};

use chrono::{DateTime, Local};

/// Live countdown for one promotion's end timestamp.
///
/// The host calls [`CountdownTicker::tick`] from its event loop as often as
/// it likes; the ticker emits at most one update per wall-clock second and
/// pins its output at all-zero once the end has passed. There is no
/// accumulated state to drift: every emission is recomputed from the
/// absolute end timestamp.
#[derive(Debug, Clone)]
pub struct CountdownTicker {
    end_at: DateTime<Local>,
    phase: CountdownPhase,
    last_emit_second: Option<i64>,
    emitted_final: bool,
}

impl CountdownTicker {
    pub fn new(end_at: DateTime<Local>, now: DateTime<Local>) -> Self {
        let phase = if end_at > now {
            CountdownPhase::Active
        } else {
            CountdownPhase::Expired
        };
        Self {
            end_at,
            phase,
            last_emit_second: None,
            emitted_final: false,
        }
    }

    pub fn end_at(&self) -> DateTime<Local> {
        self.end_at
    }

    pub fn phase(&self) -> CountdownPhase {
        self.phase
    }

    /// Current breakdown without advancing the ticker.
    pub fn sample(&self, now: DateTime<Local>) -> CountdownState {
        CountdownState::remaining(self.end_at, now)
    }

    /// Advance to `now`, returning a state when the display should update.
    ///
    /// Emits once per second while active, emits the final all-zero state
    /// exactly once on expiry, then stays silent. Repeated calls within
    /// the same second return `None`.
    pub fn tick(&mut self, now: DateTime<Local>) -> Option<CountdownState> {
        if self.phase == CountdownPhase::Expired && self.emitted_final {
            return None;
        }

        let second = now.timestamp();
        if self.last_emit_second == Some(second) {
            return None;
        }
        self.last_emit_second = Some(second);

        let state = CountdownState::remaining(self.end_at, now);
        if state.is_zero() {
            self.phase = CountdownPhase::Expired;
            self.emitted_final = true;
        }
        Some(state)
    }
}
