mod commands;
mod logging;
mod output;

use clap::Parser;
use commands::extract::BackendChoice;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "folio",
    version,
    about = "Extract page text and tables from a PDF as JSON"
)]
struct Cli {
    /// Path to the PDF file
    pdf_path: PathBuf,

    /// Extract at most this many pages, starting from the first
    #[arg(default_value_t = folio_core::DEFAULT_MAX_PAGES)]
    max_pages: usize,

    /// Extraction backend
    #[arg(short, long, value_enum, default_value = "auto", env = "FOLIO_BACKEND")]
    backend: BackendChoice,

    /// Write the JSON to a file instead of stdout
    #[arg(short = 'O', long = "out", value_name = "FILE")]
    out: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let result = commands::extract::run(cli.pdf_path, cli.max_pages, cli.backend, cli.out);

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
