// Session service
// Explicit owner of the per-user UI state the storefront keeps client-side

mod persistence;

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// How many recently-viewed product ids are kept, newest first.
pub const RECENTLY_VIEWED_CAP: usize = 10;

/// Serializable state that survives restarts.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SessionSnapshot {
    #[serde(default)]
    pub collected_coupons: BTreeSet<i64>,
    #[serde(default)]
    pub recently_viewed: Vec<i64>,
}

/// Coupon set, recently-viewed list and the one-per-session popup flag.
///
/// Init: read the snapshot file on construction, defaulting when absent.
/// Mutation: every user action writes straight through to disk; a failed
/// write is logged and the in-memory state stays authoritative. The popup
/// flag is deliberately not persisted, so each process shows the promo
/// popup at most once.
#[derive(Debug)]
pub struct SessionStore {
    path: PathBuf,
    collected_coupons: BTreeSet<i64>,
    recently_viewed: Vec<i64>,
    popup_shown: bool,
}

impl SessionStore {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let snapshot = persistence::load_snapshot(&path)?;
        log::info!(
            "Loaded session state from {}: {} coupon(s), {} viewed",
            path.display(),
            snapshot.collected_coupons.len(),
            snapshot.recently_viewed.len()
        );
        Ok(Self {
            path,
            collected_coupons: snapshot.collected_coupons,
            recently_viewed: snapshot.recently_viewed,
            popup_shown: false,
        })
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            collected_coupons: self.collected_coupons.clone(),
            recently_viewed: self.recently_viewed.clone(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Collect a coupon. Returns false when it was already collected.
    pub fn collect_coupon(&mut self, coupon_id: i64) -> bool {
        if !self.collected_coupons.insert(coupon_id) {
            return false;
        }
        self.persist();
        true
    }

    pub fn has_coupon(&self, coupon_id: i64) -> bool {
        self.collected_coupons.contains(&coupon_id)
    }

    pub fn collected_coupons(&self) -> &BTreeSet<i64> {
        &self.collected_coupons
    }

    /// Record a product view: moves the id to the front, dedups, caps.
    pub fn record_viewed(&mut self, product_id: i64) {
        self.recently_viewed.retain(|id| *id != product_id);
        self.recently_viewed.insert(0, product_id);
        self.recently_viewed.truncate(RECENTLY_VIEWED_CAP);
        self.persist();
    }

    pub fn recently_viewed(&self) -> &[i64] {
        &self.recently_viewed
    }

    /// Returns true the first time per process, false afterwards.
    pub fn mark_popup_shown(&mut self) -> bool {
        if self.popup_shown {
            return false;
        }
        self.popup_shown = true;
        true
    }

    pub fn popup_shown(&self) -> bool {
        self.popup_shown
    }

    fn persist(&self) {
        if let Err(err) = persistence::save_snapshot(&self.path, &self.snapshot()) {
            log::warn!("Failed to persist session state: {:#}", err);
        }
    }
}
