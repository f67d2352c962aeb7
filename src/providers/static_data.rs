use crate::core::config::SiteConfig;
use crate::core::{BaseData, CompanyProfile, ComponentDataProvider};
use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use tracing::debug;

/// Serves base data straight from the configuration, keyed by company slug.
#[derive(Debug, Clone, Default)]
pub struct StaticDataProvider {
    data: HashMap<String, BaseData>,
}

impl StaticDataProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_sites(sites: &[SiteConfig]) -> Self {
        let data = sites
            .iter()
            .filter_map(|site| {
                site.data
                    .as_ref()
                    .map(|data| (site.company.slug(), data.clone()))
            })
            .collect();
        Self { data }
    }
}

#[async_trait]
impl ComponentDataProvider for StaticDataProvider {
    async fn prepare_component_data(
        &self,
        company: &CompanyProfile,
        _include_cms: bool,
    ) -> Result<BaseData> {
        let slug = company.slug();
        let data = self.data.get(&slug).cloned().unwrap_or_default();
        debug!(
            "Static component data for {}: {} field(s)",
            slug,
            data.extra.len() + usize::from(data.analysts.is_some())
        );
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_data_by_company() {
        let sites: Vec<SiteConfig> = serde_yaml::from_str(
            r#"
- company:
    name: "Acme Robotics"
    tickerSymbol: "ACME"
  data:
    analysts:
      - name: "Jane Doe"
- company:
    name: "Globex"
"#,
        )
        .unwrap();
        let provider = StaticDataProvider::from_sites(&sites);

        let acme = provider
            .prepare_component_data(&sites[0].company, true)
            .await
            .unwrap();
        assert_eq!(acme.analysts.unwrap()[0].name.as_deref(), Some("Jane Doe"));

        let globex = provider
            .prepare_component_data(&sites[1].company, true)
            .await
            .unwrap();
        assert_eq!(globex, BaseData::default());
    }

    #[tokio::test]
    async fn test_empty_provider() {
        let provider = StaticDataProvider::new();
        let data = provider
            .prepare_component_data(&CompanyProfile::new("Initech"), false)
            .await
            .unwrap();
        assert!(data.analysts.is_none());
    }
}
