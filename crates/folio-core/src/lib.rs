pub mod error;
pub mod extraction;
pub mod model;

use std::fs::File;
use std::io::Read;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use error::FolioError;
use extraction::PdfBackend;
use model::{ExtractionResult, PageResult};

/// Page limit used when the caller does not give one.
pub const DEFAULT_MAX_PAGES: usize = 50;

/// How far into the file the `%PDF-` header may appear.
const SIGNATURE_WINDOW: u64 = 1024;

/// Main API entry point: extract text and tables from the first
/// `max_pages` pages of the PDF at `path`.
///
/// Never fails: any error opening or reading the document, including a
/// panic inside the backend, is returned as [`ExtractionResult::Failure`].
/// The document handle is dropped before this returns.
pub fn extract(path: &Path, max_pages: usize, backend: &dyn PdfBackend) -> ExtractionResult {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        try_extract(path, max_pages, backend)
    }));

    match outcome {
        Ok(Ok(result)) => result,
        Ok(Err(e)) => {
            tracing::warn!(path = %path.display(), backend = backend.backend_name(), "extraction failed: {e}");
            ExtractionResult::failure(e.to_string())
        }
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            tracing::warn!(path = %path.display(), backend = backend.backend_name(), "backend panicked: {message}");
            ExtractionResult::failure(format!("PDF extraction failed: {message}"))
        }
    }
}

fn try_extract(
    path: &Path,
    max_pages: usize,
    backend: &dyn PdfBackend,
) -> Result<ExtractionResult, FolioError> {
    check_pdf_signature(path)?;

    let mut doc = backend.open(path)?;
    let total_pages = doc.page_count();
    let limit = total_pages.min(max_pages);

    let mut pages = Vec::with_capacity(limit);
    for index in 0..limit {
        let content = doc.page(index)?;
        tracing::debug!(
            page = index + 1,
            chars = content.text.len(),
            tables = content.tables.len(),
            "extracted page"
        );
        pages.push(PageResult {
            page_number: index + 1,
            text: content.text,
            tables: content.tables,
        });
    }

    tracing::info!(
        backend = backend.backend_name(),
        total_pages,
        extracted = pages.len(),
        "extraction complete"
    );

    Ok(ExtractionResult::Success { total_pages, pages })
}

/// Refuse files that do not carry a `%PDF-` header near the start.
pub fn check_pdf_signature(path: &Path) -> Result<(), FolioError> {
    let mut head = Vec::new();
    File::open(path)?
        .take(SIGNATURE_WINDOW)
        .read_to_end(&mut head)?;

    if head.windows(5).any(|w| w == b"%PDF-") {
        Ok(())
    } else {
        Err(FolioError::NotAPdf(path.display().to_string()))
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "backend panicked".to_string()
    }
}
