// Pipeline worker: walks the input tree and converts one theme at a time

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::config::{Config, DEFAULT_INHERITS};
use crate::event::{RunMsg, ThemeSummary};
use crate::model::{CursorFile, CursorMapping, IndexTheme, Theme};
use crate::pipeline::classify::classify;
use crate::pipeline::converter::ExternalConverter;
use crate::pipeline::descriptor::Descriptor;
use crate::pipeline::discover::{find_theme_dirs, scan_theme};
use crate::pipeline::fs_ops::ensure_dir;
use crate::pipeline::theme_writer::{CURSORS_DIR, install_theme, user_icons_dir, write_index_theme};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileOutcome {
    Converted,
    Skipped,
    Failed,
}

pub struct PipelineWorker {
    converter: ExternalConverter,
    mapping: CursorMapping,
    inherits: String,
    install_dir: Option<PathBuf>,
}

impl PipelineWorker {
    pub fn new(converter: ExternalConverter, mapping: CursorMapping) -> Self {
        Self {
            converter,
            mapping,
            inherits: DEFAULT_INHERITS.to_string(),
            install_dir: None,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let converter = ExternalConverter::new(config.converter.clone())
            .with_options(config.conversion.clone());
        let mut worker = Self::new(converter, config.mapping.clone())
            .with_inherits(config.inherits.clone());
        if config.install {
            worker = worker.with_install_dir(user_icons_dir()?);
        }
        Ok(worker)
    }

    pub fn with_inherits<S: Into<String>>(mut self, inherits: S) -> Self {
        self.inherits = inherits.into();
        self
    }

    pub fn with_install_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.install_dir = Some(dir.into());
        self
    }

    pub fn converter(&self) -> &ExternalConverter {
        &self.converter
    }

    /// Convert every theme directory under `input_dir` into `output_dir`.
    /// A missing input directory is created and nothing else happens.
    pub fn run<F>(
        &self,
        input_dir: &Path,
        output_dir: &Path,
        log_fn: &mut F,
    ) -> Result<Vec<ThemeSummary>>
    where
        F: FnMut(RunMsg),
    {
        if !input_dir.exists() {
            ensure_dir(input_dir)
                .with_context(|| format!("Failed to create {}", input_dir.display()))?;
            log_fn(RunMsg::InputDirCreated(input_dir.to_path_buf()));
            return Ok(Vec::new());
        }

        ensure_dir(output_dir)
            .with_context(|| format!("Failed to create {}", output_dir.display()))?;

        let theme_dirs = find_theme_dirs(input_dir)?;
        if theme_dirs.is_empty() {
            log_fn(RunMsg::NoThemes(input_dir.to_path_buf()));
            return Ok(Vec::new());
        }

        log_fn(RunMsg::RunStarted(theme_dirs.len()));

        let mut summaries = Vec::with_capacity(theme_dirs.len());
        for theme_dir in &theme_dirs {
            let theme = match scan_theme(theme_dir) {
                Ok(theme) => theme,
                Err(e) => {
                    log_fn(RunMsg::Warning(format!("{:#}", e)));
                    continue;
                }
            };

            let summary = match self.process_theme(&theme, output_dir, log_fn) {
                Ok(summary) => summary,
                Err(e) => {
                    log_fn(RunMsg::Warning(format!(
                        "Failed to write theme {}: {:#}",
                        theme.name, e
                    )));
                    continue;
                }
            };

            if let Some(icons_dir) = &self.install_dir {
                match install_theme(&summary.output_dir, icons_dir, &theme.name) {
                    Ok(path) => log_fn(RunMsg::ThemeInstalled {
                        name: theme.name.clone(),
                        path,
                    }),
                    Err(e) => log_fn(RunMsg::Warning(format!(
                        "Failed to install {}: {:#}",
                        theme.name, e
                    ))),
                }
            }

            summaries.push(summary);
        }

        log_fn(RunMsg::RunCompleted(output_dir.to_path_buf()));
        Ok(summaries)
    }

    pub fn process_theme<F>(
        &self,
        theme: &Theme,
        output_root: &Path,
        log_fn: &mut F,
    ) -> Result<ThemeSummary>
    where
        F: FnMut(RunMsg),
    {
        log_fn(RunMsg::ThemeStarted(theme.name.clone()));

        let theme_out = output_root.join(&theme.name);
        let cursors_dir = theme_out.join(CURSORS_DIR);
        ensure_dir(&cursors_dir)
            .with_context(|| format!("Failed to create {}", cursors_dir.display()))?;

        let descriptor = theme.descriptor.as_deref().and_then(|path| {
            match Descriptor::load(path) {
                Ok(desc) => {
                    log_fn(RunMsg::DescriptorFound(path.to_path_buf()));
                    Some(desc)
                }
                Err(e) => {
                    log_fn(RunMsg::Warning(format!("{:#}", e)));
                    None
                }
            }
        });

        let mut summary = ThemeSummary {
            name: theme.name.clone(),
            output_dir: theme_out.clone(),
            total: theme.cursor_files.len(),
            ..Default::default()
        };

        if theme.cursor_files.is_empty() {
            log_fn(RunMsg::NoCursorFiles(theme.name.clone()));
        }

        for file in &theme.cursor_files {
            match self.process_file(file, descriptor.as_ref(), &cursors_dir, log_fn) {
                FileOutcome::Converted => summary.converted += 1,
                FileOutcome::Skipped => summary.skipped += 1,
                FileOutcome::Failed => summary.failed += 1,
            }
        }

        log_fn(RunMsg::ThemeCompleted(summary.clone()));

        let index = IndexTheme::for_theme(&theme.name, &self.inherits);
        let index_path = write_index_theme(&theme_out, &index)?;
        log_fn(RunMsg::IndexThemeWritten(index_path));

        Ok(summary)
    }

    pub fn process_file<F>(
        &self,
        file: &CursorFile,
        descriptor: Option<&Descriptor>,
        cursors_dir: &Path,
        log_fn: &mut F,
    ) -> FileOutcome
    where
        F: FnMut(RunMsg),
    {
        let file_name = file.file_name();

        let Some(class) = classify(&file_name, descriptor) else {
            log_fn(RunMsg::Unresolved(file_name));
            return FileOutcome::Skipped;
        };

        let aliases = self.mapping.expand(class.role);
        if aliases.is_empty() {
            log_fn(RunMsg::NoMapping {
                file: file_name,
                role: class.role,
            });
            return FileOutcome::Skipped;
        }

        match file.sniff() {
            Ok(Some(found)) if found != file.format => log_fn(RunMsg::Warning(format!(
                "{} looks like a .{} file",
                file_name,
                found.extension()
            ))),
            Ok(None) => log_fn(RunMsg::Warning(format!(
                "{} does not look like a Windows cursor",
                file_name
            ))),
            _ => {}
        }

        log_fn(RunMsg::Converting {
            file: file_name.clone(),
            role: class.role,
            by: class.by,
            aliases: aliases.to_vec(),
        });

        match self.converter.convert(&file.path, cursors_dir, aliases) {
            Ok(artifact) => {
                if !artifact.is_xcursor {
                    log_fn(RunMsg::Warning(format!(
                        "Output for {} is not a valid Xcursor file",
                        file_name
                    )));
                }
                FileOutcome::Converted
            }
            Err(e) => {
                log_fn(RunMsg::ConversionFailed {
                    file: file_name,
                    error: e.to_string(),
                });
                FileOutcome::Failed
            }
        }
    }
}
