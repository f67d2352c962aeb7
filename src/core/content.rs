//! Content composition for the Growth Engine page.
//!
//! Merges the base data prepared by the content service with the fixed
//! narrative tables below. The tables are plain data so tests can swap them.

use crate::core::company::CompanyProfile;
use crate::core::component_data::{Analyst, BaseData};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Year used for milestones when the company has no founding year.
pub const DEFAULT_FOUNDED_YEAR: i32 = 2020;

/// Keys owned by the template; base data entries with these names are dropped.
const TEMPLATE_KEYS: [&str; 4] = ["highlights", "milestones", "kpis", "analysts"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MilestoneCategory {
    Founding,
    Funding,
    Milestone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Flat,
}

/// A milestone whose year is relative to the founding year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MilestoneTemplate {
    pub id: &'static str,
    pub year_offset: i32,
    pub title: &'static str,
    pub description: &'static str,
    pub category: MilestoneCategory,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub id: String,
    pub year: i32,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub category: MilestoneCategory,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Kpi {
    pub label: String,
    #[serde(rename = "gaapValue")]
    pub value: String,
    pub change: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_percent: Option<String>,
    pub period: String,
    pub trend: Trend,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KpiTemplate {
    pub label: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub change_percent: Option<&'static str>,
    pub period: &'static str,
    pub trend: Trend,
}

impl From<&KpiTemplate> for Kpi {
    fn from(t: &KpiTemplate) -> Self {
        Kpi {
            label: t.label.to_string(),
            value: t.value.to_string(),
            change: t.change.to_string(),
            change_percent: t.change_percent.map(str::to_string),
            period: t.period.to_string(),
            trend: t.trend,
        }
    }
}

pub const GROWTH_ENGINE_HIGHLIGHTS: [&str; 5] = [
    "Rapid revenue growth with consistent YoY expansion",
    "Strong product-market fit validated by customer retention",
    "Expanding into new markets with proven business model",
    "Leading technology platform with competitive moat",
    "Experienced leadership team with track record of scaling",
];

pub const GROWTH_ENGINE_MILESTONES: [MilestoneTemplate; 3] = [
    MilestoneTemplate {
        id: "founding",
        year_offset: 0,
        title: "Company Founded",
        description: "Started with a vision to transform the industry",
        category: MilestoneCategory::Founding,
    },
    MilestoneTemplate {
        id: "series-a",
        year_offset: 1,
        title: "Series A Funding",
        description: "Raised $10M to accelerate product development",
        category: MilestoneCategory::Funding,
    },
    MilestoneTemplate {
        id: "growth",
        year_offset: 2,
        title: "Rapid Growth Phase",
        description: "Expanded to 50+ employees and 1000+ customers",
        category: MilestoneCategory::Milestone,
    },
];

pub const GROWTH_ENGINE_KPIS: [KpiTemplate; 3] = [
    KpiTemplate {
        label: "ARR",
        value: "$50M",
        change: "+150%",
        change_percent: Some("150.0"),
        period: "FY 2024",
        trend: Trend::Up,
    },
    KpiTemplate {
        label: "YoY Growth",
        value: "+85%",
        change: "+15%",
        change_percent: Some("15.0"),
        period: "Q4 2024",
        trend: Trend::Up,
    },
    KpiTemplate {
        label: "TAM",
        value: "$5B",
        change: "Expanding",
        change_percent: None,
        period: "Addressable Market",
        trend: Trend::Up,
    },
];

/// Fallback tables used when no richer source supplies the content.
#[derive(Debug, Clone, Copy)]
pub struct ContentDefaults<'a> {
    pub highlights: &'a [&'static str],
    pub milestones: &'a [MilestoneTemplate],
    pub kpis: &'a [KpiTemplate],
    pub founded_year: i32,
}

impl ContentDefaults<'static> {
    pub fn growth_engine() -> Self {
        Self {
            highlights: &GROWTH_ENGINE_HIGHLIGHTS,
            milestones: &GROWTH_ENGINE_MILESTONES,
            kpis: &GROWTH_ENGINE_KPIS,
            founded_year: DEFAULT_FOUNDED_YEAR,
        }
    }
}

impl Default for ContentDefaults<'static> {
    fn default() -> Self {
        Self::growth_engine()
    }
}

/// Render-time content handed to the component clusters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComposedContent {
    /// Base data fields that the template does not own, kept verbatim.
    #[serde(flatten)]
    pub passthrough: Map<String, Value>,
    pub highlights: Vec<String>,
    pub milestones: Vec<Milestone>,
    pub kpis: Vec<Kpi>,
    pub analysts: Vec<Analyst>,
}

/// Composes page content with the Growth Engine defaults.
pub fn compose_content(company: &CompanyProfile, base: &BaseData) -> ComposedContent {
    compose_content_with(company, base, &ContentDefaults::growth_engine())
}

pub fn compose_content_with(
    company: &CompanyProfile,
    base: &BaseData,
    defaults: &ContentDefaults<'_>,
) -> ComposedContent {
    let founded_year = company.founded_year.unwrap_or(defaults.founded_year);

    let milestones = defaults
        .milestones
        .iter()
        .map(|m| Milestone {
            id: m.id.to_string(),
            year: founded_year.saturating_add(m.year_offset),
            title: m.title.to_string(),
            description: m.description.to_string(),
            category: m.category,
        })
        .collect();

    let analysts = match &base.analysts {
        Some(analysts) if !analysts.is_empty() => analysts.clone(),
        _ => Vec::new(),
    };

    let mut passthrough = base.extra.clone();
    for key in TEMPLATE_KEYS {
        passthrough.remove(key);
    }

    ComposedContent {
        passthrough,
        highlights: defaults.highlights.iter().map(|h| h.to_string()).collect(),
        milestones,
        kpis: defaults.kpis.iter().map(Kpi::from).collect(),
        analysts,
    }
}
