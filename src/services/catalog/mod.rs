// Catalog service
// Fetches promotion data from the storefront API and validates it on the
// way into the domain models

mod fetcher;
pub mod ingest;

pub use fetcher::StorefrontClient;
pub use ingest::IngestReport;

use serde::Deserialize;
use thiserror::Error;

use crate::models::calendar_event::CalendarEvent;
use crate::models::promotion::FlashSale;
use crate::models::region::RegionMetric;

/// Flash sale as the API serves it. Older payloads carry precomputed
/// layout hints; they are accepted here and ignored by ingestion, which
/// recomputes layout locally.
#[derive(Debug, Clone, Deserialize)]
pub struct RawFlashSale {
    pub id: i64,
    pub name: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub timeline_position_percent: Option<f64>,
    #[serde(default)]
    pub timeline_width_percent: Option<f64>,
    #[serde(default)]
    pub timeline_color: Option<String>,
    #[serde(default)]
    pub duration_hours: Option<f64>,
}

/// Calendar entry as served by the promotions endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPromotionEvent {
    pub id: i64,
    #[serde(alias = "name")]
    pub title: String,
    #[serde(alias = "start")]
    pub date: String,
    /// Duration in days.
    #[serde(default = "default_duration")]
    pub duration: i64,
    #[serde(rename = "type", default)]
    pub kind: String,
}

fn default_duration() -> i64 {
    1
}

/// Province aggregate as served by the stats endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRegionMetric {
    pub name: String,
    #[serde(default)]
    pub value: f64,
    #[serde(default)]
    pub order_count: u64,
    #[serde(default)]
    pub top_product: Option<String>,
    #[serde(default)]
    pub top_products_list: Vec<String>,
}

/// Failures at the API boundary.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("storefront API base URL must use HTTPS")]
    InsecureUrl,
    #[error("request to {endpoint} failed")]
    Network {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{endpoint} returned HTTP {status}")]
    Status { endpoint: String, status: u16 },
    #[error("{endpoint} response too large ({bytes} bytes > {limit} bytes)")]
    ResponseTooLarge {
        endpoint: String,
        bytes: usize,
        limit: usize,
    },
    #[error("failed to decode {endpoint} payload")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Seam between the HTTP client and everything downstream of it.
#[cfg_attr(test, mockall::automock)]
pub trait PromotionSource {
    fn flash_sales(&self) -> Result<Vec<RawFlashSale>, CatalogError>;
    fn promotion_events(&self) -> Result<Vec<RawPromotionEvent>, CatalogError>;
    fn region_metrics(&self) -> Result<Vec<RawRegionMetric>, CatalogError>;
}

/// All validated promotion data for one refresh, with the per-feed
/// rejection tallies so a dashboard can surface data quality.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub flash_sales: Vec<FlashSale>,
    pub calendar_events: Vec<CalendarEvent>,
    pub region_metrics: Vec<RegionMetric>,
    pub flash_sale_report: IngestReport,
    pub calendar_report: IngestReport,
    pub region_report: IngestReport,
}

/// Pull all three feeds through ingestion.
///
/// A failed fetch aborts the refresh; the previous catalog stays on
/// screen and the host decides when to retry.
pub fn refresh_catalog(source: &dyn PromotionSource) -> Result<Catalog, CatalogError> {
    let (flash_sales, flash_sale_report) = ingest::flash_sales(source.flash_sales()?);
    let (calendar_events, calendar_report) = ingest::calendar_events(source.promotion_events()?);
    let (region_metrics, region_report) = ingest::region_metrics(source.region_metrics()?);

    log::info!(
        "Catalog refreshed: {} flash sale(s), {} calendar event(s), {} region(s), {} rejection(s)",
        flash_sales.len(),
        calendar_events.len(),
        region_metrics.len(),
        flash_sale_report.rejected_total()
            + calendar_report.rejected_total()
            + region_report.rejected_total(),
    );

    Ok(Catalog {
        flash_sales,
        calendar_events,
        region_metrics,
        flash_sale_report,
        calendar_report,
        region_report,
    })
}
