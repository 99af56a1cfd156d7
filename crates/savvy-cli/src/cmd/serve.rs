use anyhow::Context;
use savvy_core::config::SiteConfig;
use std::path::Path;

/// Start the site server. Port precedence: flag, then `site.yaml`.
pub fn run(root: &Path, port: Option<u16>, no_open: bool) -> anyhow::Result<()> {
    let config = SiteConfig::load(root).context("failed to load site.yaml")?;
    let port = port.unwrap_or(config.server.port);

    let rt = tokio::runtime::Runtime::new()?;
    let root_buf = root.to_path_buf();
    rt.block_on(savvy_server::serve(config, root_buf, port, !no_open))
}
