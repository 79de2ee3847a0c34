//! Pure-Rust backend built on [lopdf](https://crates.io/crates/lopdf).
//!
//! Needs no external tools. lopdf's text extraction does not keep column
//! alignment, so table detection rarely finds anything on its output.

use std::path::Path;

use lopdf::Document;

use crate::error::FolioError;
use crate::extraction::table::detect_tables;
use crate::extraction::{check_index, PageContent, PdfBackend, PdfDocument};

pub struct LopdfBackend;

impl LopdfBackend {
    pub fn new() -> Self {
        LopdfBackend
    }
}

impl Default for LopdfBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfBackend for LopdfBackend {
    fn open(&self, path: &Path) -> Result<Box<dyn PdfDocument>, FolioError> {
        let inner = Document::load(path)?;
        let doc = LopdfDocument::new(inner);
        tracing::debug!(path = %path.display(), page_count = doc.page_count(), "opened with lopdf");
        Ok(Box::new(doc))
    }

    fn backend_name(&self) -> &str {
        "lopdf"
    }
}

/// A loaded lopdf document.
pub struct LopdfDocument {
    inner: Document,
    /// lopdf page numbers (1-based) in document order.
    page_numbers: Vec<u32>,
}

impl LopdfDocument {
    pub fn new(inner: Document) -> Self {
        let page_numbers = inner.get_pages().keys().copied().collect();
        LopdfDocument {
            inner,
            page_numbers,
        }
    }
}

impl PdfDocument for LopdfDocument {
    fn page_count(&self) -> usize {
        self.page_numbers.len()
    }

    fn page(&mut self, index: usize) -> Result<PageContent, FolioError> {
        check_index(index, self.page_count())?;
        let text = self.inner.extract_text(&[self.page_numbers[index]])?;
        let tables = detect_tables(&text);

        Ok(PageContent { text, tables })
    }
}

impl Drop for LopdfDocument {
    fn drop(&mut self) {
        tracing::debug!(page_count = self.page_numbers.len(), "released document");
    }
}
