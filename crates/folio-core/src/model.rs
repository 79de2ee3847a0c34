use serde::{Deserialize, Serialize};

/// A single table cell. `None` when the detected column is empty on that row.
pub type Cell = Option<String>;

/// Rows of cells, top to bottom.
pub type Table = Vec<Vec<Cell>>;

/// Outcome of one extraction run.
///
/// Serialized untagged, so the JSON is either
/// `{"total_pages": .., "pages": [..]}` or `{"error": ".."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExtractionResult {
    Success {
        /// Page count reported by the backend, not clamped by the page limit.
        total_pages: usize,
        pages: Vec<PageResult>,
    },
    Failure {
        error: String,
    },
}

impl ExtractionResult {
    pub fn failure(message: impl Into<String>) -> Self {
        ExtractionResult::Failure {
            error: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ExtractionResult::Failure { .. })
    }

    /// Extracted pages, empty for the error variant.
    pub fn pages(&self) -> &[PageResult] {
        match self {
            ExtractionResult::Success { pages, .. } => pages,
            ExtractionResult::Failure { .. } => &[],
        }
    }

    pub fn total_pages(&self) -> Option<usize> {
        match self {
            ExtractionResult::Success { total_pages, .. } => Some(*total_pages),
            ExtractionResult::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ExtractionResult::Success { .. } => None,
            ExtractionResult::Failure { error } => Some(error),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResult {
    /// 1-based.
    pub page_number: usize,
    pub text: String,
    pub tables: Vec<Table>,
}
