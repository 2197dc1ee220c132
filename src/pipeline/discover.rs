// Input tree scanning: theme directories, cursor files and descriptors

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::model::{CursorFile, CursorFormat, Theme};

const PRIMARY_DESCRIPTOR: &str = "install.inf";
const DESCRIPTOR_EXTENSION: &str = "inf";

/// Immediate subdirectories of `input_dir`, sorted by name.
pub fn find_theme_dirs(input_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for entry in WalkDir::new(input_dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry
            .with_context(|| format!("Failed to scan input directory {}", input_dir.display()))?;
        if entry.file_type().is_dir() {
            dirs.push(entry.into_path());
        }
    }
    Ok(dirs)
}

fn list_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.with_context(|| format!("Failed to scan {}", dir.display()))?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .is_some_and(|e| e.to_string_lossy().eq_ignore_ascii_case(ext))
}

/// Gather a theme: every `.cur` file, then every `.ani` file (each in name
/// order), plus `install.inf` or, failing that, the first `*.inf`.
pub fn scan_theme(dir: &Path) -> Result<Theme> {
    let files = list_files(dir)?;

    let mut cursor_files = Vec::new();
    for format in [CursorFormat::Cur, CursorFormat::Ani] {
        cursor_files.extend(
            files
                .iter()
                .filter(|p| has_extension(p, format.extension()))
                .filter_map(|p| CursorFile::new(p.clone())),
        );
    }

    let descriptor = files
        .iter()
        .find(|p| {
            p.file_name()
                .is_some_and(|n| n.to_string_lossy().eq_ignore_ascii_case(PRIMARY_DESCRIPTOR))
        })
        .or_else(|| files.iter().find(|p| has_extension(p, DESCRIPTOR_EXTENSION)))
        .cloned();

    let name = dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "theme".to_string());

    Ok(Theme {
        name,
        cursor_files,
        descriptor,
    })
}
