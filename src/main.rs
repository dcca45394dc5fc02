/// File Comparer - a positional line-by-line file comparison tool
///
/// The main entry point for the comparer application. It parses command-line
/// arguments, resolves the configuration and prints or exports the report.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use colored::Colorize;
use log::{info, LevelFilter};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use file_comparer::config::{self, Config, Overrides};
use file_comparer::utils::output_formatter;
use file_comparer::{ComparisonReport, LineComparer};

/// Command line argument structure
#[derive(Parser, Debug)]
#[command(
    name = "file_comparer",
    version,
    about = "Compare two text files line by line",
    long_about = "Compares two text files by line position only:
- line N of the first file is compared with line N of the second
- lines past the end of the shorter file are reported as missing from it
- no realignment is done after an inserted or deleted line"
)]
struct Args {
    /// First file (default: output.txt)
    #[arg(name = "file_a")]
    file_a: Option<PathBuf>,

    /// Second file (default: real.txt)
    #[arg(name = "file_b")]
    file_b: Option<PathBuf>,

    /// Path to JSON configuration file
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Name shown for the first file (default: its path)
    #[arg(long = "label-a")]
    label_a: Option<String>,

    /// Name shown for the second file (default: its path)
    #[arg(long = "label-b")]
    label_b: Option<String>,

    /// Output in markdown format (wrapped in triple backticks)
    #[arg(long = "md", action = ArgAction::SetTrue)]
    md: bool,

    /// Suppress terminal output
    #[arg(long = "quiet", action = ArgAction::SetTrue)]
    quiet: bool,

    /// Show only summary information
    #[arg(long = "summary-only", action = ArgAction::SetTrue)]
    summary_only: bool,

    /// Disable colored output
    #[arg(long = "no-color", action = ArgAction::SetTrue)]
    no_color: bool,

    /// Exit with status 1 when the files differ (errors always exit with 2)
    #[arg(long = "fail-on-diff", action = ArgAction::SetTrue)]
    fail_on_diff: bool,

    /// Export results to JSON file
    #[arg(long = "json")]
    json: Option<PathBuf>,

    /// Export results to HTML report
    #[arg(long = "html")]
    html: Option<PathBuf>,

    /// Export results to CSV file
    #[arg(long = "csv")]
    csv: Option<PathBuf>,

    /// Directory to store all output files
    #[arg(long = "output-dir")]
    output_dir: Option<PathBuf>,

    /// Set logging level (default: WARN)
    #[arg(long = "log-level", default_value = "warn")]
    log_level: LevelFilter,

    /// Log file path (default: standard error)
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

/// Exit status when the files differ and `--fail-on-diff` is set
const EXIT_DIFFERENT: u8 = 1;
/// Exit status when the comparison could not run
const EXIT_TROUBLE: u8 = 2;

/// Main entry point function
fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(identical) if args.fail_on_diff && !identical => ExitCode::from(EXIT_DIFFERENT),
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red(), e);
            ExitCode::from(EXIT_TROUBLE)
        }
    }
}

/// Run one comparison; returns whether the files are identical
fn run(args: &Args) -> Result<bool> {
    setup_logging(args)?;

    if args.no_color {
        colored::control::set_override(false);
    }

    // Resolve file paths and labels
    let file_config = config::load_config(args.config.as_deref())?;
    let config = Config::resolve(
        file_config,
        Overrides {
            file_a: args.file_a.clone(),
            file_b: args.file_b.clone(),
            label_a: args.label_a.clone(),
            label_b: args.label_b.clone(),
        },
    );

    // Both files are read in full before anything is printed
    let comparer = LineComparer::new(config.label_a.as_str(), config.label_b.as_str());
    let report = comparer.compare_with_summary(&config.file_a, &config.file_b)?;

    export_all_results(&report, args)?;

    if !args.quiet {
        if args.summary_only {
            print!("{}", output_formatter::format_summary(&report));
        } else if args.md {
            print!(
                "{}",
                output_formatter::format_report(
                    &report.differences,
                    comparer.label_a(),
                    comparer.label_b(),
                    true
                )
            );
        } else {
            output_formatter::print_report(&report.differences, comparer.label_a(), comparer.label_b());
        }
    }

    Ok(report.is_identical())
}

/// Set up logging to standard error or to the requested log file
fn setup_logging(args: &Args) -> Result<()> {
    let mut builder = env_logger::Builder::new();

    builder.filter_level(args.log_level);

    builder.format(|buf, record| {
        use chrono::Local;
        use std::io::Write;
        writeln!(
            buf,
            "{} - {} - {} - {}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    if let Some(log_file) = &args.log_file {
        let file = File::create(log_file)
            .with_context(|| format!("Failed to create log file: {}", log_file.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();

    Ok(())
}

/// Export the report in every format requested on the command line
fn export_all_results(report: &ComparisonReport, args: &Args) -> Result<()> {
    if let Some(output_dir) = &args.output_dir {
        std::fs::create_dir_all(output_dir)
            .with_context(|| format!("Failed to create output directory: {}", output_dir.display()))?;
    }

    if let Some(json_path) = &args.json {
        let json_path = generate_output_path(args, json_path);
        output_formatter::export_results_json(report, &json_path)?;
        info!("Wrote JSON report to {}", json_path.display());
    }

    if let Some(html_path) = &args.html {
        let html_path = generate_output_path(args, html_path);
        output_formatter::create_html_report(report, &html_path)?;
        info!("Wrote HTML report to {}", html_path.display());
    }

    if let Some(csv_path) = &args.csv {
        let csv_path = generate_output_path(args, csv_path);
        output_formatter::create_csv_report(report, &csv_path)?;
        info!("Wrote CSV report to {}", csv_path.display());
    }

    Ok(())
}

/// Place relative export paths inside the output directory, if one is set
fn generate_output_path(args: &Args, path: &Path) -> PathBuf {
    match &args.output_dir {
        Some(output_dir) if path.is_relative() => output_dir.join(path),
        _ => path.to_path_buf(),
    }
}
