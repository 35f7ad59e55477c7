//! gamebook-sample - write the built-in sample story as XML and HTML

use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gamebook::{Format, sample_book};

#[derive(Parser)]
#[command(name = "gamebook-sample")]
#[command(version, about = "Write the sample gamebook as <PATH>.xml and <PATH>.html", long_about = None)]
#[command(after_help = "EXAMPLES:
    gamebook-sample hero        Write hero.xml and hero.html")]
struct Cli {
    /// Output path without extension
    #[arg(value_name = "PATH")]
    path: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    match write_sample(&cli.path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn write_sample(base: &str) -> gamebook::Result<()> {
    let book = sample_book();

    let xml_path = format!("{base}.{}", Format::Structured.extension());
    book.save(&xml_path)?;
    info!(path = %xml_path, "wrote structured document");

    let html_path = format!("{base}.{}", Format::Presentational.extension());
    book.export(&html_path)?;
    info!(path = %html_path, "wrote presentational document");

    Ok(())
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
