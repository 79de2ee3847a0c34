use folio_core::error::FolioError;
use folio_core::extraction::lopdf_backend::LopdfBackend;
use folio_core::extraction::pdftotext::PdftotextBackend;
use folio_core::extraction::{AutoBackend, PdfBackend};
use folio_core::model::ExtractionResult;
use std::path::PathBuf;

use crate::output;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum BackendChoice {
    /// pdftotext if installed, otherwise lopdf
    Auto,
    /// poppler's pdftotext/pdfinfo (layout text, table detection)
    Pdftotext,
    /// pure-Rust lopdf (no external tools)
    Lopdf,
}

impl BackendChoice {
    pub fn build(self) -> Box<dyn PdfBackend> {
        match self {
            BackendChoice::Auto => Box::new(AutoBackend::new()),
            BackendChoice::Pdftotext => Box::new(PdftotextBackend::new()),
            BackendChoice::Lopdf => Box::new(LopdfBackend::new()),
        }
    }
}

/// Extract the document and emit JSON. Extraction failures are part of the
/// JSON; only writing the output can fail here.
pub fn run(
    pdf_file: PathBuf,
    max_pages: usize,
    backend: BackendChoice,
    output_file: Option<PathBuf>,
) -> Result<(), FolioError> {
    let backend = backend.build();
    tracing::info!(backend = backend.backend_name(), max_pages, "extracting {}", pdf_file.display());

    let result = folio_core::extract(&pdf_file, max_pages, backend.as_ref());

    match output_file {
        Some(path) => {
            std::fs::write(&path, output::json::render(&result)?)?;
            eprintln!("{}, written to {}", summary(&result), path.display());
        }
        None => output::json::print(&result)?,
    }

    Ok(())
}

fn summary(result: &ExtractionResult) -> String {
    match result {
        ExtractionResult::Success { total_pages, pages } => {
            let tables: usize = pages.iter().map(|p| p.tables.len()).sum();
            format!(
                "Extracted {} of {} page(s), {} table(s)",
                pages.len(),
                total_pages,
                tables
            )
        }
        ExtractionResult::Failure { error } => format!("Extraction failed ({error})"),
    }
}
