use std::path::PathBuf;

use crate::model::Role;
use crate::pipeline::classify::ClassifiedBy;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ThemeSummary {
    pub name: String,
    pub output_dir: PathBuf,
    pub converted: usize,
    pub total: usize,
    pub skipped: usize,
    pub failed: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub enum RunMsg {
    // Run level
    InputDirCreated(PathBuf),
    NoThemes(PathBuf),
    RunStarted(usize),
    RunCompleted(PathBuf),

    // Theme level
    ThemeStarted(String),
    DescriptorFound(PathBuf),
    NoCursorFiles(String),
    IndexThemeWritten(PathBuf),
    ThemeCompleted(ThemeSummary),
    ThemeInstalled { name: String, path: PathBuf },

    // File level
    Converting {
        file: String,
        role: Role,
        by: ClassifiedBy,
        aliases: Vec<String>,
    },
    Unresolved(String),
    NoMapping { file: String, role: Role },
    ConversionFailed { file: String, error: String },

    // General
    Warning(String),
}
