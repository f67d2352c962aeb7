//! Theme resolution: turns an optional theme and a company profile into a
//! fully populated set of style tokens.

use crate::core::company::CompanyProfile;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PRIMARY_COLOR: &str = "#0F172A";
pub const DEFAULT_ACCENT_COLOR: &str = "#8B5CF6";
pub const DEFAULT_BACKGROUND_COLOR: &str = "#667eea";
pub const DEFAULT_TEXT_COLOR: &str = "#FFFFFF";
pub const DEFAULT_PRIMARY_FONT: &str = "Space Grotesk";

/// Alpha suffix appended to the text colour for the header border.
const HEADER_BORDER_ALPHA: &str = "20";
/// Alpha suffix appended to the accent colour for the ticker badge.
const TICKER_BADGE_ALPHA: &str = "30";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeColors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeTypography {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_font: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_font: Option<String>,
}

/// Optional styling overrides. Either section may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<ThemeColors>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typography: Option<ThemeTypography>,
}

/// Final style tokens. Every field is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedTheme {
    pub primary_color: String,
    pub accent_color: String,
    pub background_color: String,
    pub text_color: String,
    pub primary_font: String,
    pub secondary_font: String,
}

/// Returns the first candidate that is present and neither empty nor
/// whitespace-only. Returned values are not trimmed.
///
/// Candidates are evaluated in order and evaluation stops at the first hit,
/// so lazily built iterators only compute what they need.
pub fn first_present<'a, I>(candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    candidates
        .into_iter()
        .flatten()
        .find(|value| !value.trim().is_empty())
}

/// Resolves the style tokens for a page.
///
/// Theme values win over company branding, which wins over the built-in
/// literals. The secondary font falls back to the resolved primary font.
pub fn resolve_theme(theme: Option<&ThemeSpec>, company: &CompanyProfile) -> ResolvedTheme {
    let colors = theme.and_then(|t| t.colors.as_ref());
    let typography = theme.and_then(|t| t.typography.as_ref());

    let primary_color = first_present([
        colors.and_then(|c| c.primary.as_deref()),
        company.primary_color.as_deref(),
    ])
    .unwrap_or(DEFAULT_PRIMARY_COLOR);

    let accent_color = first_present([
        colors.and_then(|c| c.accent.as_deref()),
        company.accent_color.as_deref(),
    ])
    .unwrap_or(DEFAULT_ACCENT_COLOR);

    let background_color = first_present([colors.and_then(|c| c.background.as_deref())])
        .unwrap_or(DEFAULT_BACKGROUND_COLOR);

    let text_color =
        first_present([colors.and_then(|c| c.text.as_deref())]).unwrap_or(DEFAULT_TEXT_COLOR);

    let primary_font = first_present([
        typography.and_then(|t| t.primary_font.as_deref()),
        company.primary_font_family.as_deref(),
    ])
    .unwrap_or(DEFAULT_PRIMARY_FONT);

    let secondary_font = first_present([
        typography.and_then(|t| t.secondary_font.as_deref()),
        company.secondary_font_family.as_deref(),
    ])
    .unwrap_or(primary_font);

    ResolvedTheme {
        primary_color: primary_color.to_string(),
        accent_color: accent_color.to_string(),
        background_color: background_color.to_string(),
        text_color: text_color.to_string(),
        primary_font: primary_font.to_string(),
        secondary_font: secondary_font.to_string(),
    }
}

/// Inline style attributes for the page shell and its header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineStyles {
    pub shell: Vec<(String, String)>,
    pub header_border_color: String,
    pub title_color: String,
    pub nav_link_color: String,
    pub ticker_badge_background: String,
    pub ticker_badge_color: String,
}

impl ResolvedTheme {
    /// CSS custom properties in declaration order.
    pub fn css_variables(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("--primary-color", self.primary_color.as_str()),
            ("--accent-color", self.accent_color.as_str()),
            ("--background-color", self.background_color.as_str()),
            ("--text-color", self.text_color.as_str()),
            ("--primary-font", self.primary_font.as_str()),
            ("--secondary-font", self.secondary_font.as_str()),
        ]
    }

    pub fn root_style_block(&self) -> String {
        let mut block = String::from(":root {\n");
        for (name, value) in self.css_variables() {
            block.push_str(&format!("  {name}: {value};\n"));
        }
        block.push('}');
        block
    }

    pub fn inline_styles(&self) -> InlineStyles {
        InlineStyles {
            shell: vec![
                ("background".to_string(), self.background_color.clone()),
                ("color".to_string(), self.text_color.clone()),
                ("font-family".to_string(), self.primary_font.clone()),
                ("min-height".to_string(), "100vh".to_string()),
            ],
            header_border_color: format!("{}{HEADER_BORDER_ALPHA}", self.text_color),
            title_color: self.text_color.clone(),
            nav_link_color: self.text_color.clone(),
            ticker_badge_background: format!("{}{TICKER_BADGE_ALPHA}", self.accent_color),
            ticker_badge_color: self.text_color.clone(),
        }
    }
}
