/// Time-of-day band lookup for timeline blocks.
///
/// A block's color comes from the band its window *starts* in; this is a
/// plain range lookup over a small ordered table, nothing adaptive.
use crate::models::settings::HourBand;

/// Color and label used when no band claims the hour.
pub const FALLBACK_LABEL: &str = "other";
pub const FALLBACK_COLOR: &str = "#9CA3AF";

pub(super) fn band_for_hour(bands: &[HourBand], hour: u32) -> Option<&HourBand> {
    bands.iter().find(|band| band.contains(hour))
}

/// Resolve (label, color) for a start hour, falling back to the neutral
/// pair when the table leaves the hour uncovered.
pub(super) fn color_for_hour(bands: &[HourBand], hour: u32) -> (String, String) {
    match band_for_hour(bands, hour) {
        Some(band) => (band.label.clone(), band.color.clone()),
        None => (FALLBACK_LABEL.to_string(), FALLBACK_COLOR.to_string()),
    }
}
