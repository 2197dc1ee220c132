use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::model::mapping::CursorMapping;
use crate::pipeline::converter::{ConversionOptions, DEFAULT_CONVERTER};

pub const DEFAULT_INHERITS: &str = "core";
pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Clone, Debug)]
pub struct Config {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub converter: PathBuf,
    pub conversion: ConversionOptions,
    pub inherits: String,
    pub mapping: CursorMapping,
    pub install: bool,
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("input"),
            output_dir: PathBuf::from("output"),
            converter: PathBuf::from(DEFAULT_CONVERTER),
            conversion: ConversionOptions::default(),
            inherits: DEFAULT_INHERITS.to_string(),
            mapping: CursorMapping::default(),
            install: false,
            quiet: false,
        }
    }
}

/// On-disk configuration. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub input_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub converter: Option<PathBuf>,
    pub inherits: Option<String>,
    pub scale: Option<f32>,
    pub shadow: Option<bool>,
    pub install: Option<bool>,
    /// Role name -> replacement alias list
    pub aliases: BTreeMap<String, Vec<String>>,
}

impl FileConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))
    }
}

/// `<config dir>/cur2xtheme/config.toml`, e.g. `~/.config/cur2xtheme/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("cur2xtheme").join(CONFIG_FILE_NAME))
}

/// Load an explicit config file, or the default one when it exists.
pub fn load_file_config(explicit: Option<&Path>) -> Result<FileConfig> {
    match explicit {
        Some(path) => FileConfig::load_from_file(path),
        None => match default_config_path() {
            Some(path) if path.is_file() => FileConfig::load_from_file(path),
            _ => Ok(FileConfig::default()),
        },
    }
}

impl Config {
    pub fn from_file_config(file: FileConfig) -> Result<Self> {
        let defaults = Config::default();

        let mut conversion = ConversionOptions::new();
        if let Some(scale) = file.scale {
            conversion = conversion.with_scale(scale);
        }
        if file.shadow.unwrap_or(false) {
            conversion = conversion.with_shadow();
        }

        Ok(Self {
            input_dir: file.input_dir.unwrap_or(defaults.input_dir),
            output_dir: file.output_dir.unwrap_or(defaults.output_dir),
            converter: file.converter.unwrap_or(defaults.converter),
            conversion,
            inherits: file.inherits.unwrap_or(defaults.inherits),
            mapping: defaults.mapping.with_overrides(&file.aliases)?,
            install: file.install.unwrap_or(defaults.install),
            quiet: false,
        })
    }
}
