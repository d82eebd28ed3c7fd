//! docsieve CLI - persona-driven PDF section ranking

use std::fs;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use docsieve::{Docsieve, JsonFormat, RankMethod, Report};

#[derive(Parser)]
#[command(name = "docsieve")]
#[command(version)]
#[command(
    about = "Extract and rank PDF sections for a persona's job-to-be-done",
    long_about = None
)]
struct Cli {
    /// Input manifest (JSON with documents, persona, job_to_be_done)
    #[arg(value_name = "MANIFEST")]
    manifest: PathBuf,

    /// Output file (stdout if not specified)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Directory manifest filenames are resolved against
    #[arg(long, value_name = "DIR", default_value = "PDFs")]
    base_dir: PathBuf,

    /// How many top-ranked sections to keep
    #[arg(long, default_value = "5")]
    top_k: usize,

    /// Scoring method for the ranking pass
    #[arg(long, value_enum, default_value = "cosine")]
    method: Method,

    /// Output compact JSON
    #[arg(long)]
    compact: bool,

    /// Extract documents on a thread pool
    #[arg(long)]
    parallel: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Method {
    /// Cosine similarity (default)
    Cosine,
    /// Raw dot product
    Dot,
    /// Negative Euclidean distance
    Euclidean,
}

impl From<Method> for RankMethod {
    fn from(method: Method) -> Self {
        match method {
            Method::Cosine => RankMethod::Cosine,
            Method::Dot => RankMethod::Dot,
            Method::Euclidean => RankMethod::Euclidean,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message("Extracting and ranking sections...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let mut builder = Docsieve::new()
        .with_base_dir(&cli.base_dir)
        .with_top_k(cli.top_k)
        .with_rank_method(cli.method.into());
    if cli.parallel {
        builder = builder.parallel();
    }
    let report = builder.run(&cli.manifest)?;

    pb.finish_and_clear();

    let format = if cli.compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let json = report.to_json(format)?;

    match &cli.output {
        Some(path) => {
            fs::write(path, &json)?;
            print_summary(&report, path);
        }
        None => println!("{}", json),
    }

    Ok(())
}

fn print_summary(report: &Report, output: &PathBuf) {
    println!("{}", "Done!".green().bold());
    println!(
        "  {} {} document(s) listed",
        "├─".dimmed(),
        report.metadata.input_documents.len()
    );
    println!(
        "  {} {} section(s) kept",
        "├─".dimmed(),
        report.extracted_sections.len()
    );
    println!("  {} {}", "└─".dimmed(), output.display());
}
