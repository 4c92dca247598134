// Test fixtures - reusable test data
// Canned dates and API payloads shared across integration tests

#![allow(dead_code)]

use chrono::{DateTime, Local, TimeZone};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Sample instants for testing
pub mod dates {
    use super::*;

    /// Returns April 15, 2024 at midnight local time
    pub fn april_15_2024_midnight() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 4, 15, 0, 0, 0).unwrap()
    }

    /// Returns April 15, 2024 at noon local time
    pub fn april_15_2024_noon() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 4, 15, 12, 0, 0).unwrap()
    }

    pub fn at(hour: u32, minute: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 4, 15, hour, minute, 0).unwrap()
    }
}

/// Sample storefront API payloads for testing
pub mod payloads {
    /// Three flash sales: one valid morning sale, one with a broken
    /// timestamp, one with an inverted range.
    pub fn flash_sales_mixed() -> &'static str {
        r#"[
            {
                "id": 1,
                "name": "Morning rush",
                "start_time": "2024-04-15T09:00:00",
                "end_time": "2024-04-15T10:00:00",
                "is_active": true,
                "status": "upcoming"
            },
            {
                "id": 2,
                "name": "Broken clock",
                "start_time": "soon",
                "end_time": "2024-04-15T12:00:00",
                "is_active": true
            },
            {
                "id": 3,
                "name": "Backwards",
                "start_time": "2024-04-15T18:00:00",
                "end_time": "2024-04-15T17:00:00",
                "is_active": true
            }
        ]"#
    }

    pub fn promotion_events_april() -> &'static str {
        r#"[
            {"id": 10, "title": "Mid-month flash", "date": "2024-04-15", "duration": 2, "type": "flash"},
            {"id": 11, "name": "Coupon week", "start": "2024-04-08", "duration": 7, "type": "coupon"},
            {"id": 12, "title": "Ghost", "date": "2024-04-20", "duration": 0, "type": "flash"}
        ]"#
    }

    pub fn region_metrics_three_provinces() -> &'static str {
        r#"[
            {"name": "Guangdong", "value": 90000.0, "order_count": 300, "top_product": "Keyboard", "top_products_list": ["Keyboard", "Mouse"]},
            {"name": "Hunan", "value": 9999.0, "order_count": 80},
            {"name": "Qinghai", "value": 0.0, "order_count": 0}
        ]"#
    }
}
