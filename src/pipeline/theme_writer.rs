// Writes index.theme for a converted theme and installs it for the user

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::model::IndexTheme;

use super::fs_ops::copy_dir_all;

pub const INDEX_THEME_FILE: &str = "index.theme";
pub const CURSORS_DIR: &str = "cursors";

pub fn write_index_theme(theme_dir: &Path, index: &IndexTheme) -> Result<PathBuf> {
    let path = theme_dir.join(INDEX_THEME_FILE);
    fs::write(&path, index.render())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

/// `~/.icons`, where X and most desktops look for per-user cursor themes.
pub fn user_icons_dir() -> Result<PathBuf> {
    let home_dir =
        dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?;
    Ok(home_dir.join(".icons"))
}

/// Copy a finished theme to `icons_dir/<name>`, replacing any earlier copy.
pub fn install_theme(theme_dir: &Path, icons_dir: &Path, name: &str) -> Result<PathBuf> {
    let target = icons_dir.join(name);

    if is_same_dir(&target, theme_dir) {
        return Ok(target);
    }

    if target.exists() {
        fs::remove_dir_all(&target)
            .with_context(|| format!("Failed to remove old {}", target.display()))?;
    }
    fs::create_dir_all(&target)?;

    let cursors_src = theme_dir.join(CURSORS_DIR);
    if cursors_src.exists() {
        copy_dir_all(&cursors_src, &target.join(CURSORS_DIR))
            .with_context(|| format!("Failed to copy cursors into {}", target.display()))?;
    }

    let index_src = theme_dir.join(INDEX_THEME_FILE);
    if index_src.exists() {
        fs::copy(&index_src, target.join(INDEX_THEME_FILE))?;
    }

    Ok(target)
}

// Compares resolved paths when both exist
fn is_same_dir(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
