use std::thread;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use super::{CatalogError, PromotionSource, RawFlashSale, RawPromotionEvent, RawRegionMetric};

const FLASH_SALES_PATH: &str = "/api/flash-sales/";
const PROMOTIONS_PATH: &str = "/api/promotions/calendar/";
const REGION_STATS_PATH: &str = "/api/stats/provinces/";

/// Blocking JSON client for the storefront API.
///
/// One-shot requests with a bounded retry, a response size cap and no
/// in-flight de-duplication; callers own any caching.
pub struct StorefrontClient {
    client: Client,
    base_url: String,
    max_response_bytes: usize,
    max_retries: usize,
    retry_delay_ms: u64,
}

impl StorefrontClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, CatalogError> {
        let base_url = base_url.into();
        if !base_url.starts_with("https://") {
            return Err(CatalogError::InsecureUrl);
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(20))
            .build()
            .map_err(|source| CatalogError::Network {
                endpoint: base_url.clone(),
                source,
            })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            max_response_bytes: 2 * 1024 * 1024,
            max_retries: 2,
            retry_delay_ms: 400,
        })
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, CatalogError> {
        let mut last_error = None;

        for attempt in 0..=self.max_retries {
            match self.fetch_once(path) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    if attempt < self.max_retries {
                        log::warn!(
                            "Fetch attempt {} failed for {}: {}",
                            attempt + 1,
                            path,
                            err
                        );
                        thread::sleep(Duration::from_millis(self.retry_delay_ms));
                    }
                    last_error = Some(err);
                }
            }
        }

        Err(last_error.unwrap_or(CatalogError::Status {
            endpoint: path.to_string(),
            status: 0,
        }))
    }

    fn fetch_once<T: DeserializeOwned>(&self, path: &str) -> Result<T, CatalogError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|source| CatalogError::Network {
                endpoint: path.to_string(),
                source,
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(CatalogError::Status {
                endpoint: path.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .map_err(|source| CatalogError::Network {
                endpoint: path.to_string(),
                source,
            })?;

        if bytes.len() > self.max_response_bytes {
            return Err(CatalogError::ResponseTooLarge {
                endpoint: path.to_string(),
                bytes: bytes.len(),
                limit: self.max_response_bytes,
            });
        }

        serde_json::from_slice(&bytes).map_err(|source| CatalogError::Decode {
            endpoint: path.to_string(),
            source,
        })
    }
}

impl PromotionSource for StorefrontClient {
    fn flash_sales(&self) -> Result<Vec<RawFlashSale>, CatalogError> {
        self.get_json(FLASH_SALES_PATH)
    }

    fn promotion_events(&self) -> Result<Vec<RawPromotionEvent>, CatalogError> {
        self.get_json(PROMOTIONS_PATH)
    }

    fn region_metrics(&self) -> Result<Vec<RawRegionMetric>, CatalogError> {
        self.get_json(REGION_STATS_PATH)
    }
}
