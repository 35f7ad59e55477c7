//! gamebook - print a stored gamebook

use std::process::ExitCode;

use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use gamebook::Book;

#[derive(Parser)]
#[command(name = "gamebook")]
#[command(version, about = "Load a gamebook and print its XML document", long_about = None)]
#[command(after_help = "EXAMPLES:
    gamebook hero.xml           Print the book stored in hero.xml")]
struct Cli {
    /// Structured (XML) gamebook file
    #[arg(value_name = "BOOKFILE")]
    bookfile: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    match play(&cli.bookfile) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn play(path: &str) -> gamebook::Result<()> {
    let book = Book::open(path)?;

    for issue in book.validate() {
        warn!(%issue, "link check");
    }

    print!("{book}");
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
