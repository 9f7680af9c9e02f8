//! Site build command.

use std::path::Path;

use anyhow::{Context, Result};
use folio_site::{SiteBuilder, SiteConfig};

/// Run the build command.
pub fn run(root: &Path) -> Result<()> {
    let config = SiteConfig::load(root).context("Failed to load site configuration")?;

    let report = SiteBuilder::new(config)
        .build_all()
        .context("Site build failed")?;

    tracing::info!(
        "Built {} pages ({} skipped) in {}ms",
        report.pages_built,
        report.pages_skipped.len(),
        report.duration_ms
    );

    if !report.pages_skipped.is_empty() {
        tracing::warn!("Skipped: {}", report.pages_skipped.join(", "));
    }

    Ok(())
}
