//! CLI entry point for linetally

use std::path::PathBuf;
use std::process;

use clap::Parser;
use linetally::{ExclusionConfig, ReportConfig, absolute_path, generate_report, write_report};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "linetally")]
#[command(about = "Generate a line count report for a codebase")]
#[command(version)]
struct Args {
    /// Path to analyze (default: current directory)
    path: Option<PathBuf>,

    /// Output file name
    #[arg(short = 'o', long = "output", default_value = "LINE_COUNT.md")]
    output: PathBuf,

    /// Number of top files to show in the summary table
    #[arg(short = 'n', long = "top-n", default_value = "10")]
    top_n: usize,

    /// Show debug diagnostics on stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn setup_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("linetally=debug,warn")
        } else {
            EnvFilter::new("linetally=info,warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

fn main() {
    let args = Args::parse();
    setup_logging(args.verbose);

    let root = match &args.path {
        Some(path) => absolute_path(path),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    };

    if !root.is_dir() {
        eprintln!("linetally: {}", linetally::Error::NotADirectory(root));
        process::exit(1);
    }

    println!("Analyzing files in: {}...", root.display());

    let exclusions = ExclusionConfig::default();
    let report = generate_report(&root, &exclusions, ReportConfig::with_top_n(args.top_n))
        .unwrap_or_else(|e| {
            eprintln!("linetally: {}", e);
            process::exit(1);
        });

    let output = absolute_path(&args.output);
    if let Err(e) = write_report(&output, &report) {
        eprintln!("linetally: {}", e);
        process::exit(1);
    }

    println!("Report generated successfully: {}", output.display());
}
