// Choropleth service
// Classifies province aggregates into map color buckets and ranks them

use crate::models::region::{MetricKind, RegionMetric};
use crate::models::settings::ChoroplethSettings;

/// One region's render-ready classification.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionClass {
    pub region: String,
    pub value: f64,
    pub color: String,
    pub label: String,
    /// 1-based, descending by value.
    pub rank: usize,
}

/// Classified regions sorted best-first, with the highlighted extremes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChoroplethView {
    pub classes: Vec<RegionClass>,
    /// Index of the top region in `classes`, if any regions exist.
    pub best: Option<usize>,
    /// Index of the lowest region worth highlighting: the last with a
    /// nonzero value, or the true minimum when every value is zero.
    pub worst: Option<usize>,
}

/// Assigns breakpoint classes; display never hard-fails on bad data, so a
/// value no breakpoint claims gets the neutral bucket instead of an error.
#[derive(Debug, Clone)]
pub struct ChoroplethBucketer {
    settings: ChoroplethSettings,
}

impl Default for ChoroplethBucketer {
    fn default() -> Self {
        Self::new(ChoroplethSettings::default())
    }
}

impl ChoroplethBucketer {
    pub fn new(settings: ChoroplethSettings) -> Self {
        Self { settings }
    }

    /// Classify and rank `regions` by the selected metric.
    pub fn classify(&self, regions: &[RegionMetric], metric: MetricKind) -> ChoroplethView {
        let mut classes: Vec<RegionClass> = regions
            .iter()
            .map(|region| {
                let value = region.metric(metric);
                let (color, label) = self.bucket_for(value);
                RegionClass {
                    region: region.name.clone(),
                    value,
                    color,
                    label,
                    rank: 0,
                }
            })
            .collect();

        // Stable sort keeps input order among equal values
        classes.sort_by(|a, b| b.value.total_cmp(&a.value));
        for (index, class) in classes.iter_mut().enumerate() {
            class.rank = index + 1;
        }

        let best = if classes.is_empty() { None } else { Some(0) };
        let worst = if classes.is_empty() {
            None
        } else {
            classes
                .iter()
                .rposition(|class| class.value > 0.0)
                .or(Some(classes.len() - 1))
        };

        ChoroplethView {
            classes,
            best,
            worst,
        }
    }

    /// First breakpoint matching the value wins; non-finite values and
    /// values below the table fall into the neutral bucket.
    fn bucket_for(&self, value: f64) -> (String, String) {
        if value.is_finite() {
            if let Some(bp) = self
                .settings
                .breakpoints
                .iter()
                .find(|bp| bp.matches(value))
            {
                return (bp.color.clone(), bp.label.clone());
            }
        }
        (
            self.settings.neutral_color.clone(),
            self.settings.neutral_label.clone(),
        )
    }
}
