//! Iconbake CLI - Command-line tool for preparing game-asset icons.
//!
//! This is the main entry point for the Iconbake command-line application.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use iconbake::dds::dds_path_for;
use iconbake::prelude::*;

/// Iconbake - game-asset icon preparation tool
#[derive(Parser)]
#[command(name = "iconbake")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an image to an uncompressed DDS texture
    Convert {
        /// Input image (PNG, JPEG or BMP)
        #[arg(short, long)]
        input: PathBuf,

        /// Output DDS file (defaults to the input with a .dds extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Slice a grid sprite sheet into numbered icons
    Slice {
        /// Sprite sheet image
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, env = "ICONBAKE_ART_DIR")]
        output: PathBuf,

        /// File name prefix of the icons
        #[arg(long, default_value = TemplateSet::DEFAULT_PREFIX)]
        prefix: String,

        /// Grid rows
        #[arg(long, default_value_t = SpriteSheet::DEFAULT_GRID)]
        rows: u32,

        /// Grid columns
        #[arg(long, default_value_t = SpriteSheet::DEFAULT_GRID)]
        columns: u32,

        /// Write DDS icons instead of PNG
        #[arg(long)]
        dds: bool,
    },

    /// Fill missing icon slots with copies of an existing file
    Placeholders {
        /// File to copy (usually an existing DDS icon)
        #[arg(short, long)]
        source: PathBuf,

        /// Icon directory
        #[arg(short, long, env = "ICONBAKE_ART_DIR")]
        dir: PathBuf,

        /// File name prefix of the icons
        #[arg(long, default_value = TemplateSet::DEFAULT_PREFIX)]
        prefix: String,

        /// Number of icons
        #[arg(long, default_value_t = TemplateSet::DEFAULT_COUNT)]
        count: u32,
    },

    /// Convert numbered PNG icons in a directory to DDS
    ConvertTemplates {
        /// Icon directory
        #[arg(short, long, env = "ICONBAKE_ART_DIR")]
        dir: PathBuf,

        /// File name prefix of the icons
        #[arg(long, default_value = TemplateSet::DEFAULT_PREFIX)]
        prefix: String,

        /// Number of icons
        #[arg(long, default_value_t = TemplateSet::DEFAULT_COUNT)]
        count: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Only initialize logging if verbose or RUST_LOG is set
    if cli.verbose || std::env::var("RUST_LOG").is_ok() {
        let directive = if cli.verbose { "iconbake=debug" } else { "iconbake=warn" };
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive(directive.parse()?))
            .init();
    }

    match cli.command {
        Commands::Convert { input, output } => {
            let output = output.unwrap_or_else(|| dds_path_for(&input));
            cmd_convert(&input, &output)?;
        }
        Commands::Slice {
            input,
            output,
            prefix,
            rows,
            columns,
            dds,
        } => {
            let set = TemplateSet::new(output).with_prefix(prefix);
            let format = if dds { CellFormat::Dds } else { CellFormat::Png };
            cmd_slice(&input, &set, rows, columns, format)?;
        }
        Commands::Placeholders {
            source,
            dir,
            prefix,
            count,
        } => {
            let set = TemplateSet::new(dir).with_prefix(prefix).with_count(count);
            cmd_placeholders(&source, &set)?;
        }
        Commands::ConvertTemplates { dir, prefix, count } => {
            let set = TemplateSet::new(dir).with_prefix(prefix).with_count(count);
            cmd_convert_templates(&set)?;
        }
    }

    Ok(())
}

fn cmd_convert(input: &Path, output: &Path) -> Result<()> {
    let done = convert_png_to_dds(input, output).context("Failed to convert image")?;

    println!(
        "Converted {} -> {} ({}x{}, {} bytes)",
        input.display(),
        output.display(),
        done.width,
        done.height,
        done.bytes_written
    );

    Ok(())
}

fn cmd_slice(
    input: &Path,
    set: &TemplateSet,
    rows: u32,
    columns: u32,
    format: CellFormat,
) -> Result<()> {
    let sheet = SpriteSheet::open(input)
        .context("Failed to open sprite sheet")?
        .with_grid(rows, columns);

    let (cell_width, cell_height) = sheet.cell_size().context("Invalid sprite sheet grid")?;
    println!("Cell size: {}x{}", cell_width, cell_height);

    let written = sheet
        .extract_to(set, format)
        .context("Failed to extract icons")?;

    for path in &written {
        println!("Saved {}", path.display());
    }
    println!("\nExtracted {} icons to {}", written.len(), set.dir().display());

    Ok(())
}

fn cmd_placeholders(source: &Path, set: &TemplateSet) -> Result<()> {
    let report =
        create_template_placeholders(source, set).context("Failed to create placeholders")?;

    for path in &report.created {
        println!("Created placeholder: {}", path.display());
    }
    for path in &report.skipped {
        println!("Already exists: {}", path.display());
    }
    println!(
        "\n{} created, {} already present",
        report.created.len(),
        report.skipped.len()
    );

    Ok(())
}

fn cmd_convert_templates(set: &TemplateSet) -> Result<()> {
    println!("Converting {} icons in {}", set.count(), set.dir().display());

    let pb = ProgressBar::new(u64::from(set.count()));
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("#>-"),
    );

    let start = Instant::now();
    let report = convert_templates_with_progress(set, |_| pb.inc(1));
    pb.finish_with_message("Done");

    for path in &report.missing {
        println!("Warning: {} not found", path.display());
    }
    for (path, err) in &report.failed {
        eprintln!("Error converting {}: {}", path.display(), err);
    }
    println!(
        "Converted {} icons in {:?} ({} missing, {} errors)",
        report.converted.len(),
        start.elapsed(),
        report.missing.len(),
        report.failed.len()
    );

    if !report.is_success() {
        anyhow::bail!("{} conversions failed", report.failed.len());
    }

    Ok(())
}
