// Property-based tests for the layout and countdown invariants

use chrono::{DateTime, Duration, Local, TimeZone};
use proptest::prelude::*;

use promo_board::models::calendar_event::{CalendarEvent, EventKind};
use promo_board::models::time_window::TimeWindow;
use promo_board::services::calendar::{CalendarGridBuilder, DAYS_PER_WEEK};
use promo_board::services::countdown::CountdownState;
use promo_board::services::timeline::TimelineLayoutEngine;

fn day_start() -> DateTime<Local> {
    Local.with_ymd_and_hms(2024, 4, 15, 0, 0, 0).unwrap()
}

proptest! {
    /// Position stays on the axis and width never drops below the
    /// clickability floor, wherever the window starts.
    #[test]
    fn prop_block_geometry_bounded(
        start_minutes in -1_440i64..2_880,
        duration_minutes in 1i64..4_320,
    ) {
        let start = day_start() + Duration::minutes(start_minutes);
        let end = start + Duration::minutes(duration_minutes);
        let window = TimeWindow::new(start, end).unwrap();

        let engine = TimelineLayoutEngine::default();
        let blocks = engine.layout_day(&[window], day_start());

        prop_assert!(blocks[0].position_percent >= 0.0);
        prop_assert!(blocks[0].position_percent <= 100.0);
        prop_assert!(blocks[0].width_percent >= engine.min_width_percent());
    }

    /// Re-running the engine on identical input yields identical output.
    #[test]
    fn prop_layout_idempotent(
        start_minutes in 0i64..1_440,
        duration_minutes in 1i64..720,
    ) {
        let start = day_start() + Duration::minutes(start_minutes);
        let window = TimeWindow::new(start, start + Duration::minutes(duration_minutes)).unwrap();

        let engine = TimelineLayoutEngine::default();
        let first = engine.layout_day(&[window], day_start());
        let second = engine.layout_day(&[window], day_start());
        prop_assert_eq!(first, second);
    }

    /// Countdown output is never negative and its parts stay in range;
    /// past the end it is pinned at zero.
    #[test]
    fn prop_countdown_never_negative(offset_ms in -864_000_000i64..864_000_000) {
        let now = day_start();
        let end = now + Duration::milliseconds(offset_ms);
        let state = CountdownState::remaining(end, now);

        prop_assert!(state.hours >= 0);
        prop_assert!((0..60).contains(&state.minutes));
        prop_assert!((0..60).contains(&state.seconds));
        if offset_ms <= 0 {
            prop_assert!(state.is_zero());
        }
    }

    /// The countdown breakdown reassembles to the truncated remaining time.
    #[test]
    fn prop_countdown_breakdown_reassembles(offset_ms in 1i64..864_000_000) {
        let now = day_start();
        let state = CountdownState::remaining(now + Duration::milliseconds(offset_ms), now);
        let reassembled = state.hours * 3_600 + state.minutes * 60 + state.seconds;
        prop_assert_eq!(reassembled, offset_ms / 1_000);
    }

    /// A padded grid is always whole weeks; an unpadded one always holds
    /// every day of the month after the leading blanks.
    #[test]
    fn prop_grid_shape(year in 2020i32..2030, month in 1u32..=12) {
        let padded = CalendarGridBuilder::new()
            .pad_to_full_weeks(true)
            .build(year, month, &[])
            .unwrap();
        prop_assert_eq!(padded.cells.len() % DAYS_PER_WEEK, 0);

        let bare = CalendarGridBuilder::new().build(year, month, &[]).unwrap();
        let dated = bare.cells.iter().filter(|c| c.date.is_some()).count();
        let expected = promo_board::utils::date::days_in_month(year, month).unwrap() as usize;
        prop_assert_eq!(dated, expected);
    }

    /// An event fully inside the month occupies exactly duration_days cells.
    #[test]
    fn prop_event_cell_count(anchor_day in 1u32..=20, duration_days in 1u32..=8) {
        let anchor = chrono::NaiveDate::from_ymd_opt(2024, 4, anchor_day).unwrap();
        let event = CalendarEvent::new(1, "Sale", anchor, duration_days, EventKind::Flash).unwrap();
        let grid = CalendarGridBuilder::new().build(2024, 4, &[event]).unwrap();

        let occupied = grid
            .cells
            .iter()
            .filter(|cell| !cell.events.is_empty())
            .count();
        prop_assert_eq!(occupied, duration_days as usize);
    }

    /// Grid construction is idempotent under events.
    #[test]
    fn prop_grid_idempotent(anchor_day in 1u32..=28, duration_days in 1u32..=5) {
        let anchor = chrono::NaiveDate::from_ymd_opt(2024, 4, anchor_day).unwrap();
        let event = CalendarEvent::new(9, "Repeat", anchor, duration_days, EventKind::Coupon).unwrap();
        let builder = CalendarGridBuilder::new();
        let first = builder.build(2024, 4, std::slice::from_ref(&event)).unwrap();
        let second = builder.build(2024, 4, std::slice::from_ref(&event)).unwrap();
        prop_assert_eq!(first, second);
    }
}
