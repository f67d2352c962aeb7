//! Company profile as supplied by the external company store.

use serde::{Deserialize, Deserializer, Serialize};

/// Identifying and branding fields for the company a page is rendered for.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticker_symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    /// Zero, non-numeric and missing values all deserialize to `None`.
    #[serde(
        default,
        deserialize_with = "deserialize_founded_year",
        skip_serializing_if = "Option::is_none"
    )]
    pub founded_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_font_family: Option<String>,
}

impl CompanyProfile {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Stable identifier used when asking collaborators for company data.
    ///
    /// Built from the ticker when one is set, otherwise from the name. Every
    /// run of non-alphanumeric characters collapses into a single `-`, so the
    /// slug is always safe as a URL path segment.
    pub fn slug(&self) -> String {
        self.ticker_symbol
            .as_deref()
            .map(slugify)
            .filter(|slug| !slug.is_empty())
            .unwrap_or_else(|| slugify(&self.name))
    }
}

fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    for c in value.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_end_matches('-').to_string()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum YearRepr {
    Int(i64),
    Float(f64),
    Text(String),
    Other(serde::de::IgnoredAny),
}

impl YearRepr {
    fn into_year(self) -> Option<i32> {
        let year = match self {
            YearRepr::Int(n) => i32::try_from(n).ok(),
            YearRepr::Float(f) if f.is_finite() && f.fract() == 0.0 => i32::try_from(f as i64).ok(),
            YearRepr::Float(_) => None,
            YearRepr::Text(s) => s.trim().parse::<i32>().ok(),
            YearRepr::Other(_) => None,
        };
        year.filter(|y| *y != 0)
    }
}

fn deserialize_founded_year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<YearRepr>::deserialize(deserializer)?;
    Ok(raw.and_then(YearRepr::into_year))
}
