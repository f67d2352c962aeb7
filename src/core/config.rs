use crate::core::company::CompanyProfile;
use crate::core::component_data::BaseData;
use crate::core::composer::TemplateSpec;
use crate::core::theme::ThemeSpec;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

/// One page to render: a company, its optional theme and template.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SiteConfig {
    pub company: CompanyProfile,
    #[serde(default)]
    pub theme: Option<ThemeSpec>,
    #[serde(default)]
    pub template: Option<TemplateSpec>,
    /// Base data served when no CMS is configured.
    #[serde(default)]
    pub data: Option<BaseData>,
}

fn default_retries() -> usize {
    3
}

fn default_retry_delay_ms() -> u64 {
    500
}

fn default_cache_ttl_secs() -> u64 {
    300
}

fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CmsProviderConfig {
    pub base_url: String,
    #[serde(default = "default_retries")]
    pub retries: usize,
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
    /// Upper bound for a single CMS request, connect through body.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ProvidersConfig {
    pub cms: Option<CmsProviderConfig>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    pub sites: Vec<SiteConfig>,
    #[serde(default)]
    pub providers: ProvidersConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("io", "irsite", "irsite")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config with {} site(s)", config.sites.len());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::composer::TemplateKey;

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r##"
sites:
  - company:
      name: "Acme Robotics"
      tickerSymbol: "ACME"
      foundedYear: 2019
      primaryColor: "#112233"
    theme:
      colors:
        background: "#0B1120"
      typography:
        primaryFont: "Inter"
    template:
      key: growthEngine
  - company:
      name: "Globex"
      foundedYear: "unknown"
    data:
      analysts:
        - name: "Jane Doe"
          firm: "Morgan & Co"
      marketData:
        exchange: "NYSE"
providers:
  cms:
    base_url: "https://cms.example.com"
    retries: 1
"##;

        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.sites.len(), 2);

        let acme = &config.sites[0];
        assert_eq!(acme.company.name, "Acme Robotics");
        assert_eq!(acme.company.founded_year, Some(2019));
        let theme = acme.theme.as_ref().unwrap();
        assert_eq!(
            theme.colors.as_ref().unwrap().background.as_deref(),
            Some("#0B1120")
        );
        assert_eq!(acme.template.as_ref().unwrap().key, TemplateKey::GrowthEngine);

        let globex = &config.sites[1];
        assert!(globex.theme.is_none());
        assert!(globex.template.is_none());
        assert!(globex.company.founded_year.is_none());
        let data = globex.data.as_ref().unwrap();
        assert_eq!(
            data.analysts.as_ref().unwrap()[0].name.as_deref(),
            Some("Jane Doe")
        );
        assert!(data.extra.contains_key("marketData"));

        let cms = config.providers.cms.unwrap();
        assert_eq!(cms.base_url, "https://cms.example.com");
        assert_eq!(cms.retries, 1);
        assert_eq!(cms.retry_delay_ms, 500);
        assert_eq!(cms.cache_ttl_secs, 300);
        assert_eq!(cms.timeout_secs, 30);
    }

    #[test]
    fn test_config_without_providers() {
        let yaml_str = r#"
sites:
  - company:
      name: "Initech"
"#;
        let config: AppConfig = serde_yaml::from_str(yaml_str).unwrap();
        assert!(config.providers.cms.is_none());
        assert_eq!(config.sites[0].company.name, "Initech");
    }

    #[test]
    fn test_load_from_missing_path_fails() {
        let result = AppConfig::load_from_path("/nonexistent/irsite/config.yaml");
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to read config file")
        );
    }
}
