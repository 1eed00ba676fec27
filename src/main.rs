use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use quire::{FilterParams, PageSize, ReportEngine};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(version, about = "Generate bookstore reports as CSV, JSON, XML or PDF")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one report from a catalog file
    Generate {
        /// JSON catalog holding books, authors, users and stores
        #[arg(short, long)]
        catalog: PathBuf,

        /// Report kind, e.g. books or books-by-author
        #[arg(short, long)]
        kind: String,

        /// Output format: csv, json, xml or pdf
        #[arg(short, long)]
        format: String,

        /// Keep at most this many records (0 keeps all)
        #[arg(long)]
        limit: Option<usize>,

        /// Earliest creation date to include (YYYY-MM-DD)
        #[arg(long)]
        start_date: Option<NaiveDate>,

        /// Latest creation date to include (YYYY-MM-DD)
        #[arg(long)]
        end_date: Option<NaiveDate>,

        /// Author for the books-by-author report
        #[arg(long)]
        author_id: Option<i64>,

        /// Output path; `-` writes to stdout. Defaults to the report's file name.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// PDF page size: a4, letter or legal
        #[arg(long, default_value = "a4")]
        page_size: PageSize,
    },
    /// List the supported output formats
    Formats,
    /// List the report kinds
    Kinds {
        /// Include kinds reserved for administrators
        #[arg(long)]
        admin: bool,
    },
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Command::Generate {
            catalog,
            kind,
            format,
            limit,
            start_date,
            end_date,
            author_id,
            output,
            page_size,
        } => {
            let engine = ReportEngine::builder()
                .with_catalog_file(&catalog)?
                .with_page_size(page_size)
                .build()?;

            let params = FilterParams {
                start_date,
                end_date,
                limit,
                author_id,
            };
            let report = engine.generate_named(&kind, &format, &params)?;

            let output = output.unwrap_or_else(|| PathBuf::from(report.file_name()));
            if output.as_os_str() == "-" {
                io::stdout().write_all(&report.bytes)?;
            } else {
                fs::write(&output, &report.bytes)?;
                eprintln!(
                    "Wrote {} records to {} ({})",
                    report.record_count,
                    output.display(),
                    report.content_type
                );
            }
        }
        Command::Formats => {
            let engine = ReportEngine::builder()
                .with_catalog(quire::InMemoryCatalog::new())
                .build()?;
            for format in engine.available_formats() {
                println!("{:<5} {:<18} {}", format, format.content_type(), format.file_extension());
            }
        }
        Command::Kinds { admin } => {
            let engine = ReportEngine::builder()
                .with_catalog(quire::InMemoryCatalog::new())
                .build()?;
            for kind in engine.available_kinds(admin) {
                println!("{}", kind);
            }
        }
    }
    Ok(())
}
