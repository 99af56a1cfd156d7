use crate::error::{Result, SavvyError};
use crate::io;
use crate::paths;
use crate::slug::validate_slug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// PageManifest
// ---------------------------------------------------------------------------

/// A checked-in page definition for one lab project. When a manifest
/// exists for a slug, the project detail route renders it instead of
/// querying the CMS. The escape hatch for launches that need bespoke copy
/// before the document lands in the CMS.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageManifest {
    pub project: String,
    pub title: String,
    #[serde(default)]
    pub hero: Hero,
    #[serde(default)]
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta: Option<PageCta>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Hero {
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub subheadline: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageCta {
    pub label: String,
    pub href: String,
}

impl PageManifest {
    /// Load the manifest for a project slug, if one has been generated.
    pub fn load(root: &Path, project_id: &str) -> Result<Option<Self>> {
        let path = paths::lab_page_manifest(root, project_id);
        if !path.exists() {
            return Ok(None);
        }
        let data = std::fs::read_to_string(&path)?;
        let manifest: PageManifest = serde_yaml::from_str(&data)?;
        Ok(Some(manifest))
    }
}

// ---------------------------------------------------------------------------
// Scaffolding
// ---------------------------------------------------------------------------

fn title_case(id: &str) -> String {
    id.split('-')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn page_template(project_id: &str) -> String {
    let title = title_case(project_id);
    format!(
        "# Generated by `savvy generate-page`. Edit freely; the server prefers\n\
         # this manifest over a CMS lookup for /savvy-lab/project/{project_id}.\n\
         project: {project_id}\n\
         title: {title}\n\
         hero:\n\
         \x20 headline: {title}\n\
         \x20 subheadline: A Savvy Lab product.\n\
         body: |\n\
         \x20 Write the product story here.\n\
         cta:\n\
         \x20 label: Explore the Lab\n\
         \x20 href: /savvy-lab\n"
    )
}

/// Write a fresh page manifest for a lab project id, creating intermediate
/// directories. The id is only checked for slug shape; whether it exists
/// in any data set is deliberately not verified.
pub fn generate_project_page(root: &Path, project_id: &str, force: bool) -> Result<PathBuf> {
    validate_slug(project_id)?;

    let path = paths::lab_page_manifest(root, project_id);
    if path.exists() && !force {
        return Err(SavvyError::PageExists(path.display().to_string()));
    }
    io::atomic_write(&path, page_template(project_id).as_bytes())?;
    Ok(path)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn generates_manifest_at_computed_path() {
        let dir = TempDir::new().unwrap();
        let path = generate_project_page(dir.path(), "vynl", false).unwrap();
        assert_eq!(
            path,
            dir.path().join("content/pages/savvy-lab/project/vynl/page.yaml")
        );
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("project: vynl"));
        assert!(content.contains("title: Vynl"));
    }

    #[test]
    fn generated_manifest_parses_back() {
        let dir = TempDir::new().unwrap();
        generate_project_page(dir.path(), "palette-pipeline", false).unwrap();
        let manifest = PageManifest::load(dir.path(), "palette-pipeline").unwrap().unwrap();
        assert_eq!(manifest.project, "palette-pipeline");
        assert_eq!(manifest.title, "Palette Pipeline");
        assert_eq!(manifest.hero.headline, "Palette Pipeline");
        assert!(manifest.cta.is_some());
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        generate_project_page(dir.path(), "vynl", false).unwrap();
        let err = generate_project_page(dir.path(), "vynl", false).unwrap_err();
        assert!(matches!(err, SavvyError::PageExists(_)));

        // --force overwrites in place.
        generate_project_page(dir.path(), "vynl", true).unwrap();
    }

    #[test]
    fn rejects_non_slug_ids() {
        let dir = TempDir::new().unwrap();
        assert!(generate_project_page(dir.path(), "Not A Slug", false).is_err());
        assert!(generate_project_page(dir.path(), "", false).is_err());
    }

    #[test]
    fn load_returns_none_when_absent() {
        let dir = TempDir::new().unwrap();
        assert!(PageManifest::load(dir.path(), "ghost").unwrap().is_none());
    }
}
