//! Component descriptors and the composition engine seam.

use crate::core::content::ComposedContent;
use crate::core::render::CompositionRequest;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::fmt::Display;

/// Template identity used to pick a component cluster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemplateKey {
    #[default]
    #[serde(rename = "growthEngine")]
    GrowthEngine,
}

impl Display for TemplateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                TemplateKey::GrowthEngine => "growthEngine",
            }
        )
    }
}

impl TemplateKey {
    /// CSS class applied to the page shell next to `ir-site`.
    pub fn shell_class(&self) -> &'static str {
        match self {
            TemplateKey::GrowthEngine => "growth-engine",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateSpec {
    #[serde(default)]
    pub key: TemplateKey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Opaque instruction for the composition engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentDescriptor {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
    pub props: Value,
}

impl ComponentDescriptor {
    fn new(kind: &str, id: &str, props: Value) -> Self {
        Self {
            kind: kind.to_string(),
            id: id.to_string(),
            props,
        }
    }
}

pub struct ComponentClusters;

impl ComponentClusters {
    pub fn for_template(key: TemplateKey, content: &ComposedContent) -> Vec<ComponentDescriptor> {
        match key {
            TemplateKey::GrowthEngine => Self::growth_engine(content),
        }
    }

    /// Category point of view, metric carousel, growth narrative, then the
    /// investor and contact sections the header navigation links to.
    pub fn growth_engine(content: &ComposedContent) -> Vec<ComponentDescriptor> {
        let mut investors = content.passthrough.clone();
        investors.insert("analysts".to_string(), json!(content.analysts));

        vec![
            ComponentDescriptor::new("hero", "overview", json!({ "highlights": content.highlights })),
            ComponentDescriptor::new("metricCarousel", "metrics", json!({ "kpis": content.kpis })),
            ComponentDescriptor::new(
                "growthTimeline",
                "growth",
                json!({ "milestones": content.milestones }),
            ),
            ComponentDescriptor::new("investorRelations", "investors", Value::Object(investors)),
            ComponentDescriptor::new("contact", "contact", json!({})),
        ]
    }
}

/// The engine that turns a composition request into rendered output.
pub trait ComponentComposer: Send + Sync {
    fn compose(&self, request: &CompositionRequest) -> Result<String>;
}

/// Emits the composition request as JSON for a downstream renderer.
#[derive(Debug, Clone, Default)]
pub struct JsonComposer {
    pub pretty: bool,
}

impl JsonComposer {
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl ComponentComposer for JsonComposer {
    fn compose(&self, request: &CompositionRequest) -> Result<String> {
        let output = if self.pretty {
            serde_json::to_string_pretty(request)
        } else {
            serde_json::to_string(request)
        };
        output.with_context(|| format!("Failed to serialize page for {}", request.company.name))
    }
}
