// Integration tests covering the fetch-validate-layout pipeline
mod fixtures;

use chrono::Duration;

use promo_board::models::region::MetricKind;
use promo_board::services::calendar::CalendarGridBuilder;
use promo_board::services::catalog::{
    self, ingest, CatalogError, PromotionSource, RawFlashSale, RawPromotionEvent, RawRegionMetric,
};
use promo_board::services::choropleth::ChoroplethBucketer;
use promo_board::services::countdown::CountdownBoard;
use promo_board::services::session::SessionStore;
use promo_board::services::settings;
use promo_board::services::timeline::{windows_on_day, TimelineLayoutEngine};

use fixtures::{dates, payloads};

/// Serves canned payloads the way the HTTP client would.
struct InMemorySource;

impl PromotionSource for InMemorySource {
    fn flash_sales(&self) -> Result<Vec<RawFlashSale>, CatalogError> {
        Ok(serde_json::from_str(payloads::flash_sales_mixed()).unwrap())
    }

    fn promotion_events(&self) -> Result<Vec<RawPromotionEvent>, CatalogError> {
        Ok(serde_json::from_str(payloads::promotion_events_april()).unwrap())
    }

    fn region_metrics(&self) -> Result<Vec<RawRegionMetric>, CatalogError> {
        Ok(serde_json::from_str(payloads::region_metrics_three_provinces()).unwrap())
    }
}

#[test]
fn test_feed_to_timeline_blocks() {
    fixtures::init_logger();

    let raw: Vec<RawFlashSale> = serde_json::from_str(payloads::flash_sales_mixed()).unwrap();
    let (sales, report) = ingest::flash_sales(raw);

    // Only the well-formed sale survives ingestion
    assert_eq!(sales.len(), 1);
    assert_eq!(report.bad_timestamp, 1);
    assert_eq!(report.inverted_range, 1);

    let day_start = dates::april_15_2024_midnight();
    let windows: Vec<_> = sales.iter().map(|s| s.window).collect();
    let todays = windows_on_day(&windows, day_start);
    let blocks = TimelineLayoutEngine::default().layout_day(&todays, day_start);

    assert_eq!(blocks.len(), 1);
    assert!((blocks[0].position_percent - 37.5).abs() < 1e-9);
    assert_eq!(blocks[0].band_label, "morning");
}

#[test]
fn test_feed_to_month_grid() {
    fixtures::init_logger();

    let raw: Vec<RawPromotionEvent> =
        serde_json::from_str(payloads::promotion_events_april()).unwrap();
    let (events, report) = ingest::calendar_events(raw);

    // The zero-duration record is rejected at the boundary
    assert_eq!(events.len(), 2);
    assert_eq!(report.bad_duration, 1);

    let grid = CalendarGridBuilder::new()
        .pad_to_full_weeks(true)
        .build(2024, 4, &events)
        .unwrap();

    // April 2024 starts on a Monday: one leading blank, 35 cells padded
    assert_eq!(grid.cells.len(), 35);
    assert!(grid.cells[0].date.is_none());

    // The two-day flash covers the 15th and 16th
    let flash_days: Vec<u32> = (1..=30)
        .filter(|day| {
            grid.cell_for_day(*day)
                .map(|cell| cell.events.iter().any(|e| e.id == 10))
                .unwrap_or(false)
        })
        .collect();
    assert_eq!(flash_days, vec![15, 16]);

    // Coupon week spans April 8-14
    let coupon_cell = grid.cell_for_day(10).unwrap();
    assert!(coupon_cell.events.iter().any(|e| e.id == 11));
}

#[test]
fn test_feed_to_choropleth_view() {
    fixtures::init_logger();

    let raw: Vec<RawRegionMetric> =
        serde_json::from_str(payloads::region_metrics_three_provinces()).unwrap();
    let (regions, _) = ingest::region_metrics(raw);
    let view = ChoroplethBucketer::default().classify(&regions, MetricKind::Sales);

    assert_eq!(view.classes[0].region, "Guangdong");
    assert_eq!(view.classes[0].label, "heavy");
    assert_eq!(view.classes[1].label, "light");
    assert_eq!(view.classes[2].label, "zero");

    // Worst skips the zero province while Hunan has sales
    assert_eq!(view.classes[view.worst.unwrap()].region, "Hunan");
}

#[test]
fn test_refresh_catalog_drives_countdowns() {
    fixtures::init_logger();

    let catalog = catalog::refresh_catalog(&InMemorySource).unwrap();
    let now = dates::at(8, 0);

    let visible: Vec<_> = catalog
        .flash_sales
        .iter()
        .filter(|sale| sale.counts_down_at(now))
        .map(|sale| (sale.id, sale.window.end()))
        .collect();

    let mut board = CountdownBoard::new();
    board.sync_visible(&visible, now);
    let updates = board.tick_all(now);

    assert_eq!(updates.len(), 1);
    // Two hours until the morning sale closes at 10:00
    assert_eq!(updates[0].1.hours, 2);
    assert_eq!(updates[0].1.minutes, 0);

    // Sale leaves the screen: its ticker goes with it
    board.sync_visible(&[], now + Duration::seconds(1));
    assert!(board.is_empty());
    assert!(board.tick_all(now + Duration::seconds(2)).is_empty());
}

#[test]
fn test_session_state_survives_restart() {
    fixtures::init_logger();

    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("state").join("session.json");

    {
        let mut store = SessionStore::load(&path).unwrap();
        store.collect_coupon(101);
        store.record_viewed(7);
        store.record_viewed(9);
        assert!(store.mark_popup_shown());
    }

    let store = SessionStore::load(&path).unwrap();
    assert!(store.has_coupon(101));
    assert_eq!(store.recently_viewed(), &[9, 7]);
    // Popup eligibility is per process, not persisted
    assert!(!store.popup_shown());
}

#[test]
fn test_display_settings_flow_into_engine() {
    fixtures::init_logger();

    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("display.toml");
    std::fs::write(&path, "[timeline]\nmin_width_percent = 6.0\n").unwrap();

    let display = settings::load(&path).unwrap();
    let engine = TimelineLayoutEngine::new(display.timeline);

    let day_start = dates::april_15_2024_midnight();
    let window = promo_board::models::time_window::TimeWindow::new(
        dates::at(9, 0),
        dates::at(9, 5),
    )
    .unwrap();
    let blocks = engine.layout_day(&[window], day_start);

    // Five-minute sale widened to the configured floor
    assert!((blocks[0].width_percent - 6.0).abs() < f64::EPSILON);
}
