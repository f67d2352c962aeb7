use super::ui;
use crate::core::config::SiteConfig;
use crate::core::{ComponentComposer, ComponentDataProvider, render_page};
use anyhow::{Result, anyhow};
use futures::future::join_all;
use tracing::error;

/// Renders every site concurrently and prints the composed pages in
/// configuration order.
pub async fn run(
    sites: &[SiteConfig],
    data_provider: &(dyn ComponentDataProvider + Send + Sync),
    composer: &(dyn ComponentComposer + Send + Sync),
) -> Result<()> {
    if sites.is_empty() {
        println!("No sites configured.");
        return Ok(());
    }

    let pb = ui::new_progress_bar(sites.len() as u64, true);
    pb.set_message("Rendering pages...");

    let render_futures = sites.iter().map(|site| {
        let pb_clone = pb.clone();
        async move {
            let res = render_page(
                &site.company,
                site.template.as_ref(),
                site.theme.as_ref(),
                data_provider,
                composer,
            )
            .await;
            pb_clone.inc(1);
            res
        }
    });

    let results = join_all(render_futures).await;
    pb.finish_and_clear();

    let mut failures = 0;
    for (site, result) in sites.iter().zip(results) {
        match result {
            Ok(page) => println!("{page}"),
            Err(e) => {
                failures += 1;
                error!(site = %site.company.name, error = %e, "Page render failed");
                eprintln!(
                    "{}",
                    ui::style_text(
                        &format!("Failed to render {}: {e:#}", site.company.name),
                        ui::StyleType::Error
                    )
                );
            }
        }
    }

    if failures > 0 {
        return Err(anyhow!("{} of {} page(s) failed to render", failures, sites.len()));
    }
    Ok(())
}
