// Terminal rendering of pipeline messages

use owo_colors::OwoColorize;

use crate::event::RunMsg;
use crate::pipeline::classify::ClassifiedBy;
use crate::pipeline::converter::ConvertError;

pub fn banner() {
    println!("{}", "Windows to Linux Cursor Converter".blue());
    println!("{}", "=================================".blue());
}

pub fn converter_missing(err: &ConvertError) {
    eprintln!("{}", format!("Error: {}", err).red());
    eprintln!(
        "{}",
        "Please install win2xcur from: https://github.com/quantum5/win2xcur".yellow()
    );
}

/// Print one message. `quiet` drops per-file progress but keeps problems.
pub fn print_msg(msg: &RunMsg, quiet: bool) {
    match msg {
        RunMsg::InputDirCreated(dir) => {
            println!("{}", format!("Created input directory: {}", dir.display()).yellow());
            println!(
                "{}",
                "Please place your Windows cursor folders (with .cur/.ani files and install.inf) in this directory"
                    .blue()
            );
            println!("{}", "Each cursor theme should be in its own subfolder".blue());
        }
        RunMsg::NoThemes(dir) => {
            println!(
                "{}",
                format!("No cursor theme directories found in {}", dir.display()).yellow()
            );
            println!(
                "{}",
                "Please create subdirectories in the input directory for each cursor theme".blue()
            );
        }
        RunMsg::RunStarted(count) => {
            println!("{}", format!("Found {} cursor theme(s) to process", count).green());
        }
        RunMsg::RunCompleted(dir) => {
            println!("{}", "Conversion completed!".green());
            println!(
                "{}",
                format!("Converted cursor themes are available in: {}", dir.display()).blue()
            );
            println!(
                "{}",
                "To install a theme, copy it to ~/.icons/ or /usr/share/icons/".blue()
            );
        }
        RunMsg::ThemeStarted(name) => {
            println!("{}", format!("Processing cursor theme: {}", name).green());
        }
        RunMsg::DescriptorFound(path) => {
            if !quiet {
                println!("{}", format!("  Using descriptor {}", path.display()).blue());
            }
        }
        RunMsg::NoCursorFiles(name) => {
            println!("{}", format!("  No cursor files found in {}", name).yellow());
        }
        RunMsg::IndexThemeWritten(_) => {
            if !quiet {
                println!("{}", "  Created index.theme file".blue());
            }
            println!();
        }
        RunMsg::ThemeCompleted(summary) => {
            println!(
                "{}",
                format!(
                    "  Converted {}/{} cursor files",
                    summary.converted, summary.total
                )
                .green()
            );
        }
        RunMsg::ThemeInstalled { name, path } => {
            println!("{}", format!("  Installed {} to {}", name, path.display()).green());
        }
        RunMsg::Converting {
            file,
            role,
            by,
            aliases,
        } => {
            if !quiet {
                let via = match by {
                    ClassifiedBy::Descriptor => "install.inf",
                    ClassifiedBy::FileName => "file name",
                };
                println!(
                    "{}",
                    format!("  Converting {} -> {} ({} via {})", role, aliases.join(" "), file, via)
                        .blue()
                );
            }
        }
        RunMsg::Unresolved(file) => {
            println!("{}", format!("    Skipping unmapped cursor: {}", file).yellow());
        }
        RunMsg::NoMapping { file, role } => {
            println!(
                "{}",
                format!("    No mapping found for: {} ({})", role, file).yellow()
            );
        }
        RunMsg::ConversionFailed { file, error } => {
            println!("{}", format!("    Failed to convert: {}", file).red());
            println!("{}", format!("      {}", error).red());
        }
        RunMsg::Warning(text) => {
            println!("{}", format!("    Warning: {}", text).yellow());
        }
    }
}
