use std::path::{Path, PathBuf};

/// Resolve the site root directory.
///
/// Priority:
/// 1. `--root` flag / `SAVVY_ROOT` env var (passed in as `explicit`)
/// 2. Walk upward from `cwd` looking for `site.yaml`
/// 3. Walk upward from `cwd` looking for `.git/`
/// 4. Fall back to `cwd`
pub fn resolve_root(explicit: Option<&Path>) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    walk_up(&cwd, |dir| dir.join(savvy_core::paths::SITE_FILE).is_file())
        .or_else(|| walk_up(&cwd, |dir| dir.join(".git").is_dir()))
        .unwrap_or(cwd)
}

fn walk_up(from: &Path, is_root: impl Fn(&Path) -> bool) -> Option<PathBuf> {
    let mut dir = from;
    loop {
        if is_root(dir) {
            return Some(dir.to_path_buf());
        }
        dir = dir.parent()?;
    }
}
