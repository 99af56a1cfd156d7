use anyhow::Context;
use savvy_core::scaffold;
use std::path::Path;

/// Scaffold a page manifest for a lab project id. The id is not checked
/// against any data set; the manifest is the source of truth once written.
pub fn run(root: &Path, project_id: &str, force: bool) -> anyhow::Result<()> {
    let path = scaffold::generate_project_page(root, project_id, force)
        .with_context(|| format!("failed to generate page for '{project_id}'"))?;

    println!("Generated: {}", path.display());
    println!("Serve it at: /savvy-lab/project/{project_id}");
    Ok(())
}
