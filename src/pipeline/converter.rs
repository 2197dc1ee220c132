// Drives the external win2xcur-compatible converter for a single cursor file

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use thiserror::Error;
use xcursor::parser::parse_xcursor;

pub const DEFAULT_CONVERTER: &str = "win2xcur";

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("{program} is not installed or not in PATH ({detail})")]
    ConverterMissing { program: String, detail: String },

    #[error("failed to launch {program}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("{program} failed with {status}: {stderr}")]
    ConverterFailed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("{program} produced no output for {}", .input.display())]
    NoOutput { program: String, input: PathBuf },

    #[error(transparent)]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversionOptions {
    pub scale: Option<f32>,
    pub shadow: bool,
}

impl ConversionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn with_shadow(mut self) -> Self {
        self.shadow = true;
        self
    }

    fn to_args(&self) -> Vec<OsString> {
        let mut args = Vec::new();
        if self.shadow {
            args.push("--shadow".into());
        }
        if let Some(scale) = self.scale {
            args.push("--scale".into());
            args.push(scale.to_string().into());
        }
        args
    }
}

/// What the converter left behind, after it was copied under every alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedArtifact {
    pub is_xcursor: bool,
}

#[derive(Debug, Clone)]
pub struct ExternalConverter {
    program: PathBuf,
    options: ConversionOptions,
}

impl ExternalConverter {
    pub fn new<P: Into<PathBuf>>(program: P) -> Self {
        Self {
            program: program.into(),
            options: ConversionOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ConversionOptions) -> Self {
        self.options = options;
        self
    }

    fn program_name(&self) -> String {
        self.program.display().to_string()
    }

    /// Run `<program> --help` once to make sure the tool is usable.
    pub fn check(&self) -> Result<(), ConvertError> {
        let status = Command::new(&self.program)
            .arg("--help")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match status {
            Ok(status) if status.success() => Ok(()),
            Ok(status) => Err(ConvertError::ConverterMissing {
                program: self.program_name(),
                detail: format!("--help exited with {}", status),
            }),
            Err(e) => Err(ConvertError::ConverterMissing {
                program: self.program_name(),
                detail: e.to_string(),
            }),
        }
    }

    fn command(&self, out_dir: &Path, input: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(self.options.to_args())
            .arg("-o")
            .arg(out_dir)
            .arg(input)
            .stdin(Stdio::null());
        cmd
    }

    /// Convert `input` in a private scratch directory and copy the result to
    /// `dest_dir/<alias>` for every alias. Existing files are overwritten.
    /// The scratch directory is removed on every return path.
    pub fn convert(
        &self,
        input: &Path,
        dest_dir: &Path,
        aliases: &[String],
    ) -> Result<ConvertedArtifact, ConvertError> {
        let scratch = tempfile::Builder::new().prefix("cur2xtheme-").tempdir()?;

        let output = self
            .command(scratch.path(), input)
            .output()
            .map_err(|source| ConvertError::Spawn {
                program: self.program_name(),
                source,
            })?;

        if !output.status.success() {
            return Err(ConvertError::ConverterFailed {
                program: self.program_name(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let artifact = first_artifact(scratch.path())?.ok_or_else(|| ConvertError::NoOutput {
            program: self.program_name(),
            input: input.to_path_buf(),
        })?;

        let data = fs::read(&artifact)?;
        for alias in aliases {
            fs::copy(&artifact, dest_dir.join(alias))?;
        }

        Ok(ConvertedArtifact {
            is_xcursor: parse_xcursor(&data).is_some(),
        })
    }
}

// First regular, non-hidden file in name order
fn first_artifact(dir: &Path) -> io::Result<Option<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let hidden = entry.file_name().to_string_lossy().starts_with('.');
        if !hidden && entry.file_type()?.is_file() {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files.into_iter().next())
}
