//! pdfeed CLI - turn PDF documents into ordered content feeds

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use pdfeed::feed::timeline;
use pdfeed::render::feed_to_text;
use pdfeed::{
    detect_format_from_bytes, extract_bytes, to_json, ExtractOptions, ExtractionResult,
    ExtractionStats, JsonFormat, LopdfSource, PageSource,
};

#[derive(Parser)]
#[command(name = "pdfeed")]
#[command(version)]
#[command(about = "Turn PDF documents into ordered content feeds", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract pages and content items as JSON
    Extract {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        #[command(flatten)]
        tuning: Tuning,
    },

    /// Print content items as a newest-first feed
    Feed {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Show at most this many entries
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        #[command(flatten)]
        tuning: Tuning,
    },

    /// Show document information and extraction statistics
    Info {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

/// Pipeline settings shared by the extracting subcommands.
#[derive(clap::Args)]
struct Tuning {
    /// Maximum characters per text chunk
    #[arg(long, default_value_t = pdfeed::pipeline::DEFAULT_MAX_CHUNK_CHARS)]
    max_chars: usize,

    /// Skip page rendering
    #[arg(long)]
    text_only: bool,

    /// Render scale for page images (used when built with `pdfium`)
    #[arg(long, default_value_t = pdfeed::pipeline::DEFAULT_SCALE)]
    scale: f32,

    /// Password for encrypted documents
    #[arg(long, env = "PDFEED_PASSWORD", hide_env_values = true)]
    password: Option<String>,
}

impl Tuning {
    fn to_options(&self) -> ExtractOptions {
        let mut options = ExtractOptions::new()
            .with_max_chunk_chars(self.max_chars)
            .with_scale(self.scale);
        if self.text_only {
            options = options.text_only();
        }
        if let Some(ref password) = self.password {
            options = options.with_password(password.clone());
        }
        options
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            input,
            output,
            compact,
            tuning,
        } => cmd_extract(&input, output.as_deref(), compact, &tuning),
        Commands::Feed {
            input,
            limit,
            tuning,
        } => cmd_feed(&input, limit, &tuning),
        Commands::Info { input } => cmd_info(&input),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Run the pipeline with a spinner on stderr.
fn run_pipeline(
    input: &Path,
    options: &ExtractOptions,
) -> Result<ExtractionResult, Box<dyn std::error::Error>> {
    let data = fs::read(input)?;
    log::debug!("read {} bytes from {}", data.len(), input.display());

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(format!("Extracting {}...", input.display()));

    let result = extract_bytes(&data, options);

    if result.success {
        pb.finish_with_message(format!("Extracted {} pages", result.pages().len()));
    } else {
        pb.finish_and_clear();
    }
    Ok(result)
}

fn cmd_extract(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    tuning: &Tuning,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = run_pipeline(input, &tuning.to_options())?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let json = to_json(&result, format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    match result.error {
        Some(message) => Err(message.into()),
        None => Ok(()),
    }
}

fn cmd_feed(
    input: &Path,
    limit: Option<usize>,
    tuning: &Tuning,
) -> Result<(), Box<dyn std::error::Error>> {
    let pages = run_pipeline(input, &tuning.to_options())?.into_result()?;

    let mut entries = timeline(&pages);
    if let Some(limit) = limit {
        entries.truncate(limit);
    }

    if entries.is_empty() {
        println!("{}", "No content items".yellow());
    } else {
        println!("{}", feed_to_text(&entries));
    }

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(input)?;
    let format = detect_format_from_bytes(&data)?;
    let source = LopdfSource::load_bytes(&data)?;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Format".bold(), format);
    println!("{}: {} bytes", "Size".bold(), data.len());
    println!("{}: {}", "Pages".bold(), source.page_count());
    println!(
        "{}: {}",
        "Encrypted".bold(),
        if source.is_encrypted() { "Yes" } else { "No" }
    );

    let options = ExtractOptions::new().text_only();
    let pages = extract_bytes(&data, &options).into_result()?;
    let stats = ExtractionStats::from_pages(&pages, options.chunk_limits);

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Text items".bold(), stats.text_item_count);
    println!("{}: {}", "Image items".bold(), stats.image_item_count);
    println!("{}: {}", "Empty pages".bold(), stats.empty_page_count);
    println!("{}: {}", "Characters".bold(), stats.char_count);

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "pdfeed".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("PDF content feed extraction tool");
    println!();
    println!("License: MIT");
}
