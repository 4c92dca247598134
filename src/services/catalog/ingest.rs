//! Validation gate between raw API records and the domain models.
//!
//! Every record either becomes a model or is rejected with a logged
//! reason; nothing malformed reaches the layout services, so they never
//! see NaN positions or zero-day spans.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

use crate::models::calendar_event::{CalendarEvent, EventKind};
use crate::models::promotion::FlashSale;
use crate::models::region::RegionMetric;
use crate::models::time_window::TimeWindow;

use super::{RawFlashSale, RawPromotionEvent, RawRegionMetric};

/// Rejection tally for one feed, counted by reason.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestReport {
    pub accepted: usize,
    pub bad_timestamp: usize,
    pub inverted_range: usize,
    pub bad_duration: usize,
    pub bad_value: usize,
}

impl IngestReport {
    pub fn rejected_total(&self) -> usize {
        self.bad_timestamp + self.inverted_range + self.bad_duration + self.bad_value
    }
}

/// Parse an API timestamp: RFC 3339 first, then the offset-less form
/// Django emits when timezone support is off.
fn parse_timestamp(value: &str) -> Option<DateTime<Local>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Local));
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S"))
        .ok()
        .and_then(|naive| naive.and_local_timezone(Local).earliest())
}

pub fn flash_sales(raw: Vec<RawFlashSale>) -> (Vec<FlashSale>, IngestReport) {
    let mut report = IngestReport::default();
    let mut accepted = Vec::with_capacity(raw.len());

    for record in raw {
        let (Some(start), Some(end)) = (
            parse_timestamp(&record.start_time),
            parse_timestamp(&record.end_time),
        ) else {
            log::warn!(
                "Rejected flash sale {}: unparsable timestamp ({} / {})",
                record.id,
                record.start_time,
                record.end_time
            );
            report.bad_timestamp += 1;
            continue;
        };

        let window = match TimeWindow::new(start, end) {
            Ok(window) => window,
            Err(err) => {
                log::warn!("Rejected flash sale {}: {}", record.id, err);
                report.inverted_range += 1;
                continue;
            }
        };

        match FlashSale::new(record.id, record.name, window, record.is_active) {
            Ok(sale) => {
                report.accepted += 1;
                accepted.push(sale);
            }
            Err(reason) => {
                log::warn!("Rejected flash sale {}: {}", record.id, reason);
                report.bad_value += 1;
            }
        }
    }

    (accepted, report)
}

pub fn calendar_events(raw: Vec<RawPromotionEvent>) -> (Vec<CalendarEvent>, IngestReport) {
    let mut report = IngestReport::default();
    let mut accepted = Vec::with_capacity(raw.len());

    for record in raw {
        let Ok(anchor) = NaiveDate::parse_from_str(&record.date, "%Y-%m-%d") else {
            log::warn!(
                "Rejected calendar event {}: unparsable date '{}'",
                record.id,
                record.date
            );
            report.bad_timestamp += 1;
            continue;
        };

        let duration_days = match u32::try_from(record.duration) {
            Ok(days) if days >= 1 => days,
            _ => {
                log::warn!(
                    "Rejected calendar event {}: duration {} day(s)",
                    record.id,
                    record.duration
                );
                report.bad_duration += 1;
                continue;
            }
        };

        let kind = EventKind::from_tag(&record.kind);
        match CalendarEvent::new(record.id, record.title, anchor, duration_days, kind) {
            Ok(event) => {
                report.accepted += 1;
                accepted.push(event);
            }
            Err(reason) => {
                log::warn!("Rejected calendar event {}: {}", record.id, reason);
                report.bad_value += 1;
            }
        }
    }

    (accepted, report)
}

pub fn region_metrics(raw: Vec<RawRegionMetric>) -> (Vec<RegionMetric>, IngestReport) {
    let mut report = IngestReport::default();
    let mut accepted = Vec::with_capacity(raw.len());

    for record in raw {
        if !record.value.is_finite() {
            log::warn!("Rejected region '{}': non-finite value", record.name);
            report.bad_value += 1;
            continue;
        }
        if record.name.trim().is_empty() {
            log::warn!("Rejected region metric with empty name");
            report.bad_value += 1;
            continue;
        }

        report.accepted += 1;
        accepted.push(RegionMetric {
            name: record.name,
            value: record.value,
            order_count: record.order_count,
            top_product: record.top_product,
            top_products_list: record.top_products_list,
        });
    }

    (accepted, report)
}
