pub mod cli;
pub mod core;
pub mod providers;

use crate::core::cache::Cache;
use crate::core::config::AppConfig;
use crate::core::{ComponentDataProvider, JsonComposer};
use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, info};

pub enum AppCommand {
    Render,
    Theme,
    Css,
}

fn data_provider(config: &AppConfig) -> Result<Box<dyn ComponentDataProvider + Send + Sync>> {
    match &config.providers.cms {
        Some(cms) => {
            info!("Using CMS at {}", cms.base_url);
            let cache = Arc::new(Cache::new());
            Ok(Box::new(providers::CmsDataProvider::new(cms, cache)?))
        }
        None => {
            debug!("No CMS configured, serving data from config");
            Ok(Box::new(providers::StaticDataProvider::from_sites(
                &config.sites,
            )))
        }
    }
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("irsite starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    match command {
        AppCommand::Render => {
            let provider = data_provider(&config)?;
            let composer = JsonComposer::pretty();
            cli::render::run(&config.sites, provider.as_ref(), &composer).await
        }
        AppCommand::Theme => {
            cli::theme::run(&config.sites);
            Ok(())
        }
        AppCommand::Css => {
            cli::theme::run_css(&config.sites);
            Ok(())
        }
    }
}
