//! CLI Application logic

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::config::Settings;
use crate::manual::{self, ManualContent};
use crate::pitch;

#[derive(Parser)]
#[command(name = "findoc")]
#[command(author, version, about = "FinApp user manual and pitch deck generator", long_about = None)]
struct Cli {
    /// Settings file (default: findoc.toml in the working directory, if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the user manual (.docx)
    Manual {
        /// Output directory (overrides [output].dir)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Manual content TOML (default: the built-in FinApp manual)
        #[arg(long)]
        content: Option<PathBuf>,
    },

    /// Generate the pitch deck (.pptx)
    Pitch {
        /// Output directory (overrides [output].dir)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate both the manual and the pitch deck
    All {
        /// Output directory (overrides [output].dir)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Manual content TOML (default: the built-in FinApp manual)
        #[arg(long)]
        content: Option<PathBuf>,
    },
}

/// Install the stderr log subscriber; `RUST_LOG` overrides the `info` default
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Run the CLI application
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let cwd = std::env::current_dir().context("Failed to read the working directory")?;
    let mut settings = Settings::load(cli.config.as_deref(), &cwd)?;

    match cli.command {
        Commands::Manual { output, content } => {
            apply_output(&mut settings, output);
            let path = manual_command(&settings, content.as_deref())?;
            println!("{}", path.display());
        }
        Commands::Pitch { output } => {
            apply_output(&mut settings, output);
            let path = pitch_command(&settings)?;
            println!("{}", path.display());
        }
        Commands::All { output, content } => {
            apply_output(&mut settings, output);
            for path in all_command(&settings, content.as_deref())? {
                println!("{}", path.display());
            }
        }
    }

    Ok(())
}

fn apply_output(settings: &mut Settings, output: Option<PathBuf>) {
    if let Some(dir) = output {
        settings.output.dir = dir;
    }
}

/// Generate the manual into the configured directory and return its path
pub fn manual_command(settings: &Settings, content: Option<&Path>) -> Result<PathBuf> {
    let content = ManualContent::load(content)?;
    let bytes = manual::render(&content, settings)?;

    let path = settings.output.manual_path();
    write_output(&path, &bytes)?;
    Ok(path)
}

/// Generate the pitch deck into the configured directory and return its path
pub fn pitch_command(settings: &Settings) -> Result<PathBuf> {
    let bytes = pitch::render(settings)?;

    let path = settings.output.pitch_path();
    write_output(&path, &bytes)?;
    Ok(path)
}

/// Generate both files; the manual comes first
pub fn all_command(settings: &Settings, content: Option<&Path>) -> Result<Vec<PathBuf>> {
    Ok(vec![
        manual_command(settings, content)?,
        pitch_command(settings)?,
    ])
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
        debug!(dir = %dir.display(), "Output directory ready");
    }

    fs::write(path, bytes).with_context(|| format!("Failed to write {}", path.display()))?;
    info!(path = %path.display(), bytes = bytes.len(), "Wrote");
    Ok(())
}
