//! Base component data and the collaborator that prepares it

use crate::core::company::CompanyProfile;
use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Analyst coverage entry. Records come from the CMS as-is, so every field is
/// optional and `price_target` keeps whatever JSON the source sent
/// (`120`, `118.5`, `"$150"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analyst {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firm: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_target: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Content prepared for a company before any template merges its own data.
///
/// Only `analysts` is interpreted; everything else (market data, press
/// releases, ...) is carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BaseData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysts: Option<Vec<Analyst>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[async_trait]
pub trait ComponentDataProvider: Send + Sync {
    /// Prepares base data for `company`. `include_cms` enables content
    /// managed in the CMS on top of what the company record provides.
    async fn prepare_component_data(
        &self,
        company: &CompanyProfile,
        include_cms: bool,
    ) -> Result<BaseData>;
}
