use crate::output::{print_json, print_table};
use anyhow::Context;
use savvy_core::client::ContentClient;
use savvy_core::config::SiteConfig;
use savvy_core::seed::{self, SeedTarget};
use std::path::Path;
use std::str::FromStr;

/// Push fixture documents into the CMS, one sequential `create` per item.
/// Individual failures are reported and skipped; the command still exits 0
/// so a partially seeded dataset is inspectable rather than fatal.
pub fn run(
    root: &Path,
    target: Option<&str>,
    dry_run: bool,
    json: bool,
) -> anyhow::Result<()> {
    let target = match target {
        Some(t) => SeedTarget::from_str(t)
            .with_context(|| format!("unknown seed target '{t}' (lab | impact | hub | all)"))?,
        None => SeedTarget::All,
    };

    if dry_run {
        return list_fixtures(target, json);
    }

    let config = SiteConfig::load(root).context("failed to load site.yaml")?;
    let token = SiteConfig::write_token()?;
    let client = ContentClient::new(&config.cms).with_token(token);

    let rt = tokio::runtime::Runtime::new()?;
    let report = rt.block_on(seed::run(&client, target));

    if json {
        print_json(&serde_json::json!({
            "target": target.as_str(),
            "created": report.created,
            "failed": report.failed,
        }))?;
        return Ok(());
    }

    println!(
        "Seeded {} of {} documents ({})",
        report.created.len(),
        report.total(),
        target.as_str()
    );
    for (title, error) in &report.failed {
        println!("  failed: {title} — {error}");
    }
    Ok(())
}

fn list_fixtures(target: SeedTarget, json: bool) -> anyhow::Result<()> {
    let fixtures = seed::fixtures_for(target);

    if json {
        print_json(&fixtures)?;
        return Ok(());
    }

    let rows: Vec<Vec<String>> = fixtures
        .iter()
        .map(|doc| {
            vec![
                doc.doc_type.to_string(),
                doc.route_key().to_string(),
                doc.category.clone().unwrap_or_default(),
                doc.title.clone(),
            ]
        })
        .collect();
    print_table(&["TYPE", "SLUG", "CATEGORY", "TITLE"], rows);
    println!("\n{} documents ({} target, dry run)", fixtures.len(), target.as_str());
    Ok(())
}
