use std::path::PathBuf;

use super::cursor::CursorFile;

/// One input theme directory, gathered for a single processing pass.
#[derive(Clone, Debug, Default)]
pub struct Theme {
    pub name: String,
    pub cursor_files: Vec<CursorFile>,
    pub descriptor: Option<PathBuf>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IndexTheme {
    pub name: String,
    pub comment: String,
    pub inherits: String,
}

impl IndexTheme {
    pub fn for_theme(name: &str, inherits: &str) -> Self {
        Self {
            name: name.to_string(),
            comment: format!("Converted Windows cursor theme: {}", name),
            inherits: inherits.to_string(),
        }
    }

    pub fn render(&self) -> String {
        format!(
            "[Icon Theme]\n\
             Name={}\n\
             Comment={}\n\
             Inherits={}\n",
            self.name, self.comment, self.inherits
        )
    }
}
