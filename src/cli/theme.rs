use super::ui;
use crate::core::config::SiteConfig;
use crate::core::{ResolvedTheme, resolve_theme};
use comfy_table::Cell;

fn site_themes(sites: &[SiteConfig]) -> Vec<(&SiteConfig, ResolvedTheme)> {
    sites
        .iter()
        .map(|site| (site, resolve_theme(site.theme.as_ref(), &site.company)))
        .collect()
}

pub fn display_as_table(site: &SiteConfig, theme: &ResolvedTheme) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![ui::header_cell("Variable"), ui::header_cell("Value")]);
    for (name, value) in theme.css_variables() {
        table.add_row(vec![Cell::new(name), ui::token_cell(value)]);
    }

    let mut output = format!(
        "Site: {}\n\n",
        ui::style_text(&site.company.name, ui::StyleType::Title)
    );
    output.push_str(&table.to_string());
    if theme.secondary_font == theme.primary_font {
        output.push_str(&format!(
            "\n{}",
            ui::style_text(
                "Secondary font falls back to the primary font",
                ui::StyleType::Subtle
            )
        ));
    }
    output
}

/// Prints the resolved style tokens of every site.
pub fn run(sites: &[SiteConfig]) {
    let themes = site_themes(sites);
    let count = themes.len();
    for (i, (site, theme)) in themes.into_iter().enumerate() {
        println!("{}", display_as_table(site, &theme));
        if i + 1 < count {
            ui::print_separator();
        }
    }
}

/// Prints the `:root` custom property block of every site.
pub fn run_css(sites: &[SiteConfig]) {
    for (site, theme) in site_themes(sites) {
        println!("/* {} */", site.company.name);
        println!("{}\n", theme.root_style_block());
    }
}
