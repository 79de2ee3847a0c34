pub mod lopdf_backend;
pub mod pdftotext;
pub mod table;

use std::path::Path;

use crate::error::FolioError;
use crate::model::Table;

/// Content extracted from a single page of a PDF.
#[derive(Debug, Clone)]
pub struct PageContent {
    pub text: String,
    pub tables: Vec<Table>,
}

/// An open PDF. Dropping it releases whatever the backend holds.
pub trait PdfDocument {
    /// Number of pages as reported by the backend.
    fn page_count(&self) -> usize;

    /// Extract text and tables for the page at a 0-based `index`.
    fn page(&mut self, index: usize) -> Result<PageContent, FolioError>;
}

/// Trait for PDF extraction backends.
pub trait PdfBackend: Send + Sync {
    /// Open the document at `path`.
    fn open(&self, path: &Path) -> Result<Box<dyn PdfDocument>, FolioError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Picks pdftotext when poppler is installed, lopdf otherwise.
pub struct AutoBackend {
    inner: Box<dyn PdfBackend>,
}

impl AutoBackend {
    pub fn new() -> Self {
        Self::with_probe(pdftotext::PdftotextBackend::is_available)
    }

    /// Choose the backend using `pdftotext_available` instead of looking
    /// for the executable.
    pub fn with_probe(pdftotext_available: fn() -> bool) -> Self {
        let inner: Box<dyn PdfBackend> = if pdftotext_available() {
            Box::new(pdftotext::PdftotextBackend::new())
        } else {
            tracing::info!("pdftotext not available, falling back to lopdf");
            Box::new(lopdf_backend::LopdfBackend::new())
        };
        AutoBackend { inner }
    }
}

impl Default for AutoBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfBackend for AutoBackend {
    fn open(&self, path: &Path) -> Result<Box<dyn PdfDocument>, FolioError> {
        self.inner.open(path)
    }

    fn backend_name(&self) -> &str {
        self.inner.backend_name()
    }
}

pub(crate) fn check_index(index: usize, page_count: usize) -> Result<(), FolioError> {
    if index >= page_count {
        return Err(FolioError::PageOutOfRange { index, page_count });
    }
    Ok(())
}
