use anyhow::Context;
use savvy_core::{config::SiteConfig, io, paths};
use std::path::Path;

/// Scaffold a site workspace: `site.yaml` plus the content directories the
/// tooling writes into. Idempotent; existing files are left alone.
pub fn run(root: &Path) -> anyhow::Result<()> {
    println!("Initializing site in: {}", root.display());

    for dir in [paths::CONTENT_DIR, paths::PAGES_DIR, paths::LAB_PAGES_DIR] {
        let p = root.join(dir);
        io::ensure_dir(&p).with_context(|| format!("failed to create {}", p.display()))?;
    }

    let config_path = paths::site_config_path(root);
    if config_path.exists() {
        println!("  exists:  {}", paths::SITE_FILE);
    } else {
        SiteConfig::default()
            .save(root)
            .context("failed to write site.yaml")?;
        println!("  created: {}", paths::SITE_FILE);
    }

    println!("\nNext: set {} and run `savvy serve`.", savvy_core::config::PROJECT_ID_ENV);
    Ok(())
}
