// install.inf lookup for Windows cursor schemes

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::model::Role;

/// Text of a theme's `install.inf`, kept for the duration of one theme.
#[derive(Clone, Debug, Default)]
pub struct Descriptor {
    text: String,
}

impl Descriptor {
    pub fn from_text<S: Into<String>>(text: S) -> Self {
        Self { text: text.into() }
    }

    /// Load a descriptor. Bytes that are not UTF-8 are replaced, not rejected.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path)
            .with_context(|| format!("Failed to read descriptor {}", path.display()))?;
        Ok(Self::from_text(String::from_utf8_lossy(&bytes)))
    }

    /// Left-hand key of the first line containing `= "<file_name>"`.
    pub fn key_for(&self, file_name: &str) -> Option<&str> {
        let needle = format!("= \"{}\"", file_name);
        self.text
            .lines()
            .find(|line| line.contains(&needle))
            .and_then(|line| line.split('=').next())
            .map(str::trim)
    }

    pub fn role_for(&self, file_name: &str) -> Option<Role> {
        self.key_for(file_name).and_then(Role::from_descriptor_key)
    }
}
