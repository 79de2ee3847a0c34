#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("not a PDF file: {0}")]
    NotAPdf(String),

    #[error("{tool} not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound { tool: &'static str },

    #[error("{tool} failed with exit code {code}: {stderr}")]
    PdftotextFailed {
        tool: &'static str,
        code: i32,
        stderr: String,
    },

    #[error("could not read page count from pdfinfo: {0}")]
    PdfInfo(String),

    #[error("failed to read PDF: {0}")]
    Lopdf(String),

    #[error("page index {index} out of range (document has {page_count} pages)")]
    PageOutOfRange { index: usize, page_count: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<lopdf::Error> for FolioError {
    fn from(e: lopdf::Error) -> Self {
        FolioError::Lopdf(e.to_string())
    }
}
