use crate::core::cache::Cache;
use crate::core::config::CmsProviderConfig;
use crate::core::{BaseData, CompanyProfile, ComponentDataProvider};
use crate::providers::util::with_retry;
use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Fetches component data for a company from the CMS.
///
/// Responses are cached per company slug for `cache_ttl_secs`. A company the
/// CMS does not know about yields empty base data.
pub struct CmsDataProvider {
    base_url: String,
    retries: usize,
    retry_delay_ms: u64,
    cache_ttl: Duration,
    cache: Arc<Cache<String, BaseData>>,
    client: reqwest::Client,
}

impl CmsDataProvider {
    pub fn new(config: &CmsProviderConfig, cache: Arc<Cache<String, BaseData>>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("irsite/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build HTTP client for CMS")?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            retries: config.retries,
            retry_delay_ms: config.retry_delay_ms,
            cache_ttl: Duration::from_secs(config.cache_ttl_secs),
            cache,
            client,
        })
    }

    async fn fetch(&self, slug: &str) -> Result<BaseData> {
        let url = format!("{}/companies/{}/component-data", self.base_url, slug);
        debug!("Requesting component data from {}", url);

        let result = with_retry(
            || async {
                self.client
                    .get(&url)
                    .send()
                    .await
                    .and_then(|r| r.error_for_status())
            },
            self.retries,
            self.retry_delay_ms,
        )
        .await;

        let response = match result {
            Ok(response) => response,
            Err(e) if e.status() == Some(StatusCode::NOT_FOUND) => {
                warn!("CMS has no component data for {}, using empty data", slug);
                return Ok(BaseData::default());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to fetch component data for: {slug}"));
            }
        };

        let response_text = response
            .text()
            .await
            .with_context(|| format!("Failed to get response text for: {slug}"))?;

        if response_text.trim().is_empty() {
            return Err(anyhow!("Received empty CMS response for: {}", slug));
        }

        let data: BaseData = serde_json::from_str(&response_text).with_context(|| {
            format!("Failed to parse CMS response for: {slug}. Response: '{response_text}'")
        })?;

        debug!(
            "Fetched component data for {}: {} analyst(s), {} extra field(s)",
            slug,
            data.analysts.as_ref().map_or(0, Vec::len),
            data.extra.len()
        );
        Ok(data)
    }
}

#[async_trait]
impl ComponentDataProvider for CmsDataProvider {
    async fn prepare_component_data(
        &self,
        company: &CompanyProfile,
        include_cms: bool,
    ) -> Result<BaseData> {
        if !include_cms {
            debug!("CMS disabled for {}, using empty data", company.name);
            return Ok(BaseData::default());
        }

        let slug = company.slug();
        if let Some(cached) = self.cache.get(&slug).await {
            return Ok(cached);
        }

        let data = self.fetch(&slug).await?;
        self.cache
            .put(slug, data.clone(), Some(self.cache_ttl))
            .await;
        Ok(data)
    }
}
