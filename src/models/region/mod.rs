// Region module
// Province-level sales aggregates for the admin map

use serde::{Deserialize, Serialize};

/// Which aggregate the map colors by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetricKind {
    Sales,
    OrderCount,
}

/// One province's aggregates as reported by the stats endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionMetric {
    pub name: String,
    /// Sales amount in the storefront's currency unit.
    pub value: f64,
    pub order_count: u64,
    pub top_product: Option<String>,
    pub top_products_list: Vec<String>,
}

impl RegionMetric {
    pub fn metric(&self, kind: MetricKind) -> f64 {
        match kind {
            MetricKind::Sales => self.value,
            MetricKind::OrderCount => self.order_count as f64,
        }
    }
}
