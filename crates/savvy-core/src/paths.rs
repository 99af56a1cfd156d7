use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Site layout constants
// ---------------------------------------------------------------------------

pub const SITE_FILE: &str = "site.yaml";
pub const CONTENT_DIR: &str = "content";
pub const PAGES_DIR: &str = "content/pages";
pub const LAB_PAGES_DIR: &str = "content/pages/savvy-lab/project";

pub const PAGE_MANIFEST: &str = "page.yaml";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn site_config_path(root: &Path) -> PathBuf {
    root.join(SITE_FILE)
}

pub fn pages_dir(root: &Path) -> PathBuf {
    root.join(PAGES_DIR)
}

pub fn lab_page_dir(root: &Path, project_id: &str) -> PathBuf {
    root.join(LAB_PAGES_DIR).join(project_id)
}

pub fn lab_page_manifest(root: &Path, project_id: &str) -> PathBuf {
    lab_page_dir(root, project_id).join(PAGE_MANIFEST)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
