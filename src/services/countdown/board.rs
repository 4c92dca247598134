use chrono::{DateTime, Local};

use super::models::{CountdownPhase, CountdownState};
use super::CountdownTicker;

/// Owns one ticker per promotion currently on screen.
///
/// The host re-declares the visible set whenever it changes; tickers for
/// promotions that dropped out are removed outright, so hidden promotions
/// never keep periodic work alive. Tickers share no state and tick
/// independently.
#[derive(Debug, Default)]
pub struct CountdownBoard {
    tickers: Vec<(i64, CountdownTicker)>,
}

impl CountdownBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tickers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickers.is_empty()
    }

    pub fn phase_of(&self, id: i64) -> Option<CountdownPhase> {
        self.tickers
            .iter()
            .find(|(ticker_id, _)| *ticker_id == id)
            .map(|(_, ticker)| ticker.phase())
    }

    /// Reconcile against the promotions currently displayed.
    ///
    /// `visible` pairs each promotion id with its end timestamp. New ids
    /// get a fresh ticker; ids no longer present are cancelled; an id whose
    /// end timestamp changed (a re-fetch moved the sale) is restarted.
    pub fn sync_visible(&mut self, visible: &[(i64, DateTime<Local>)], now: DateTime<Local>) {
        let before = self.tickers.len();
        self.tickers
            .retain(|(id, ticker)| visible.iter().any(|(vid, end)| vid == id && *end == ticker.end_at()));
        let cancelled = before - self.tickers.len();
        if cancelled > 0 {
            log::debug!("Cancelled {} countdown ticker(s)", cancelled);
        }

        for (id, end_at) in visible {
            if !self.tickers.iter().any(|(tid, _)| tid == id) {
                self.tickers.push((*id, CountdownTicker::new(*end_at, now)));
            }
        }
    }

    /// Tick every ticker, collecting the updates due this pass.
    pub fn tick_all(&mut self, now: DateTime<Local>) -> Vec<(i64, CountdownState)> {
        self.tickers
            .iter_mut()
            .filter_map(|(id, ticker)| ticker.tick(now).map(|state| (*id, state)))
            .collect()
    }
}
