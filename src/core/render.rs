//! Page assembly: joins composed content, resolved theme and header into the
//! request handed to the composition engine.

use crate::core::company::CompanyProfile;
use crate::core::component_data::{BaseData, ComponentDataProvider};
use crate::core::composer::{
    ComponentClusters, ComponentComposer, ComponentDescriptor, TemplateSpec,
};
use crate::core::content::{ComposedContent, compose_content};
use crate::core::theme::{InlineStyles, ResolvedTheme, ThemeSpec, resolve_theme};
use anyhow::Result;
use serde::Serialize;
use tracing::{debug, info};

const NAV_LINKS: [(&str, &str); 3] = [
    ("Growth", "#growth"),
    ("Investors", "#investors"),
    ("Contact", "#contact"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Logo {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageHeader {
    pub logo: Option<Logo>,
    pub title: String,
    pub ticker_badge: Option<String>,
    pub nav: Vec<NavLink>,
}

impl PageHeader {
    pub fn for_company(company: &CompanyProfile) -> Self {
        let present = |v: &Option<String>| {
            v.as_deref()
                .filter(|s| !s.trim().is_empty())
                .map(str::to_string)
        };

        PageHeader {
            logo: present(&company.logo_url).map(|src| Logo {
                src,
                alt: format!("{} Logo", company.name),
            }),
            title: company.name.clone(),
            ticker_badge: present(&company.ticker_symbol),
            nav: NAV_LINKS
                .iter()
                .map(|(label, href)| NavLink {
                    label: label.to_string(),
                    href: href.to_string(),
                })
                .collect(),
        }
    }
}

/// Everything the composition engine needs to render one page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositionRequest {
    pub template: TemplateSpec,
    pub theme: Option<ThemeSpec>,
    pub company: CompanyProfile,
    pub shell_class: String,
    pub header: PageHeader,
    pub resolved_theme: ResolvedTheme,
    pub root_style: String,
    pub inline_styles: InlineStyles,
    pub content: ComposedContent,
    pub components: Vec<ComponentDescriptor>,
}

/// Builds the composition request from already prepared base data.
///
/// The theme is resolved once; the `:root` variables and the inline styles
/// are both derived from that single value.
pub fn assemble_page(
    company: &CompanyProfile,
    template: Option<&TemplateSpec>,
    theme: Option<&ThemeSpec>,
    base: &BaseData,
) -> CompositionRequest {
    let template = template.cloned().unwrap_or_default();
    let content = compose_content(company, base);
    let components = ComponentClusters::for_template(template.key, &content);
    let resolved_theme = resolve_theme(theme, company);
    debug!(
        template = %template.key,
        components = components.len(),
        analysts = content.analysts.len(),
        "Assembled page for {}",
        company.name
    );

    CompositionRequest {
        shell_class: format!("ir-site {}", template.key.shell_class()),
        template,
        theme: theme.cloned(),
        company: company.clone(),
        header: PageHeader::for_company(company),
        root_style: resolved_theme.root_style_block(),
        inline_styles: resolved_theme.inline_styles(),
        resolved_theme,
        content,
        components,
    }
}

/// Renders one page. Errors from the data provider are returned unchanged.
pub async fn render_page(
    company: &CompanyProfile,
    template: Option<&TemplateSpec>,
    theme: Option<&ThemeSpec>,
    data_provider: &(dyn ComponentDataProvider + Send + Sync),
    composer: &(dyn ComponentComposer + Send + Sync),
) -> Result<String> {
    info!("Rendering page for {}", company.name);
    let base = data_provider.prepare_component_data(company, true).await?;
    let request = assemble_page(company, template, theme, &base);
    composer.compose(&request)
}
