use anyhow::Result;
use clap::Parser;
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::process::ExitCode;

use cur2xtheme::config::{Config, load_file_config};
use cur2xtheme::console;
use cur2xtheme::pipeline::converter::ExternalConverter;
use cur2xtheme::PipelineWorker;

const EXIT_CONVERTER_MISSING: u8 = 1;

#[derive(Parser)]
#[command(name = "cur2xtheme")]
#[command(about = "Convert Windows cursor themes into Linux Xcursor themes", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory holding one subdirectory per Windows theme
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Directory that receives the converted themes
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Converter executable (win2xcur compatible)
    #[arg(long)]
    converter: Option<PathBuf>,

    /// Config file (defaults to ~/.config/cur2xtheme/config.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Theme named in the Inherits= line of index.theme
    #[arg(long)]
    inherits: Option<String>,

    /// Scale factor passed to the converter
    #[arg(long)]
    scale: Option<f32>,

    /// Ask the converter to add a drop shadow
    #[arg(long)]
    shadow: bool,

    /// Copy each converted theme into ~/.icons
    #[arg(long)]
    install: bool,

    /// Print the role to alias table as TOML and exit
    #[arg(long)]
    print_mapping: bool,

    /// Only report themes and problems
    #[arg(short, long)]
    quiet: bool,
}

fn build_config(cli: &Cli) -> Result<Config> {
    let file = load_file_config(cli.config.as_deref())?;
    let mut config = Config::from_file_config(file)?;

    if let Some(input) = &cli.input {
        config.input_dir = input.clone();
    }
    if let Some(output) = &cli.output {
        config.output_dir = output.clone();
    }
    if let Some(converter) = &cli.converter {
        config.converter = converter.clone();
    }
    if let Some(inherits) = &cli.inherits {
        config.inherits = inherits.clone();
    }
    if let Some(scale) = cli.scale {
        config.conversion = config.conversion.with_scale(scale);
    }
    if cli.shadow {
        config.conversion = config.conversion.with_shadow();
    }
    config.install |= cli.install;
    config.quiet = cli.quiet;

    Ok(config)
}

/// Exit code to stop with when the converter cannot be run.
fn converter_exit_code(converter: &ExternalConverter) -> Option<u8> {
    match converter.check() {
        Ok(()) => None,
        Err(e) => {
            console::converter_missing(&e);
            Some(EXIT_CONVERTER_MISSING)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = build_config(&cli)?;

    if cli.print_mapping {
        print!("{}", config.mapping.to_toml_string()?);
        return Ok(ExitCode::SUCCESS);
    }

    console::banner();

    let worker = PipelineWorker::from_config(&config)?;
    if let Some(code) = converter_exit_code(worker.converter()) {
        return Ok(ExitCode::from(code));
    }

    let quiet = config.quiet;
    worker.run(&config.input_dir, &config.output_dir, &mut |msg| {
        console::print_msg(&msg, quiet)
    })?;

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red(), e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_converter_exits_with_one() {
        let dir = tempfile::tempdir().unwrap();
        let converter = ExternalConverter::new(dir.path().join("win2xcur"));

        assert_eq!(converter_exit_code(&converter), Some(1));
    }

    #[test]
    fn test_cli_overrides_config() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        std::fs::write(
            &config_path,
            "converter = \"/opt/win2xcur\"\ninherits = \"core\"\n",
        )
        .unwrap();

        let cli = Cli::parse_from([
            "cur2xtheme",
            "--config",
            config_path.to_str().unwrap(),
            "--inherits",
            "Adwaita",
            "--output",
            "themes",
        ]);
        let config = build_config(&cli).unwrap();

        assert_eq!(config.converter, PathBuf::from("/opt/win2xcur"));
        assert_eq!(config.inherits, "Adwaita");
        assert_eq!(config.output_dir, PathBuf::from("themes"));
    }
}
