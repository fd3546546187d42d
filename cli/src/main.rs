//! mdtables CLI - Markdown table extraction tool

use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use mdtables::render::to_json;
use mdtables::{
    CollisionPolicy, ConvertEvent, ConvertOptions, ConvertReport, Converter, Delimiter,
    JsonFormat, ParseOptions, SeparatorMode,
};

#[derive(Parser)]
#[command(name = "mdtables")]
#[command(version)]
#[command(
    about = "Recursively search a directory for Markdown files and extract their tables as delimited files",
    long_about = "Recursively search a directory for Markdown files containing tables and \
                  extract each table as a delimited file. All files are written flat into \
                  the output directory, named <stem>_table_<n>.<ext>, without regard to the \
                  original directory structure."
)]
struct Cli {
    /// Directory to search for Markdown tables
    #[arg(value_name = "SOURCE_DIR")]
    source: PathBuf,

    /// Existing directory to write converted tables to
    #[arg(value_name = "OUTPUT_DIR")]
    output: PathBuf,

    /// Delimiter between cells [default: tab]. An empty value is rejected, and
    /// a literal "\t" means tab rather than a two-character custom separator
    #[arg(long, default_value = "\t", hide_default_value = true, value_parser = parse_delimiter)]
    sep: Delimiter,

    /// Extension of Markdown source files
    #[arg(long, default_value = "md", value_name = "EXT")]
    ext: String,

    /// What to do when two tables map to the same output file
    #[arg(long, value_enum, default_value = "overwrite")]
    on_collision: CollisionMode,

    /// Only drop the second table line when it is a `|---|` separator row
    #[arg(long)]
    detect_separator: bool,

    /// Print the run report as JSON
    #[arg(long)]
    json: bool,

    /// Suppress progress and summary output
    #[arg(short, long)]
    quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum CollisionMode {
    /// Replace the earlier file (warns)
    Overwrite,
    /// Append _2, _3, ... to the later file name
    Suffix,
    /// Stop with an error
    Fail,
}

impl From<CollisionMode> for CollisionPolicy {
    fn from(mode: CollisionMode) -> Self {
        match mode {
            CollisionMode::Overwrite => CollisionPolicy::Overwrite,
            CollisionMode::Suffix => CollisionPolicy::Suffix,
            CollisionMode::Fail => CollisionPolicy::Fail,
        }
    }
}

fn parse_delimiter(s: &str) -> Result<Delimiter, String> {
    Delimiter::parse(s).map_err(|e| e.to_string())
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if let Err(e) = cmd_extract(&cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_extract(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let separator_mode = if cli.detect_separator {
        SeparatorMode::Detect
    } else {
        SeparatorMode::Positional
    };
    let options = ConvertOptions::new()
        .with_delimiter(cli.sep.clone())
        .with_extension(cli.ext.as_str())
        .with_collision_policy(cli.on_collision.into())
        .with_parse_options(ParseOptions::new().with_separator_mode(separator_mode));

    log::debug!(
        "Converting {} into {} (delimiter {})",
        cli.source.display(),
        cli.output.display(),
        options.delimiter
    );

    let pb = if cli.quiet || cli.json {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(0)
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let converter = Converter::new(options);
    let result = converter.convert_to_directory(&cli.source, &cli.output, |event| match event {
        ConvertEvent::Scanned { total } => pb.set_length(total as u64),
        ConvertEvent::FileStarted { path } => pb.set_message(path.display().to_string()),
        ConvertEvent::FileFinished { .. } => pb.inc(1),
    });
    let report = match result {
        Ok(report) => report,
        Err(e) => {
            pb.abandon();
            return Err(e.into());
        }
    };
    pb.finish_and_clear();

    if cli.json {
        println!("{}", to_json(&report, JsonFormat::Pretty)?);
    } else if !cli.quiet {
        print_summary(&report, &cli.output);
    }

    Ok(())
}

fn print_summary(report: &ConvertReport, output: &Path) {
    println!(
        "{} {} table(s) from {} of {} file(s)",
        "Extracted".green().bold(),
        report.tables_found,
        report.files_with_tables,
        report.files_scanned
    );

    let count = report.written.len();
    for (i, path) in report.written.iter().enumerate() {
        let branch = if i + 1 == count { "└─" } else { "├─" };
        let shown = path.strip_prefix(output).unwrap_or(path);
        println!("  {} {}", branch.dimmed(), shown.display());
    }

    if report.collisions > 0 {
        println!(
            "{} {} output name collision(s)",
            "Warning:".yellow().bold(),
            report.collisions
        );
    }
}
