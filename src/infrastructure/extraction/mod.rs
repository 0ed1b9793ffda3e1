pub mod native;

pub use native::NativePdfExtractor;

use serde_json::{Map, Value};

/// Raw result of text extraction, before the document service assembles the
/// page/offset bookkeeping around it.
#[derive(Debug, Clone)]
pub struct ExtractedText {
    /// One entry per page, in document order. Pages with no extractable text
    /// are present as empty strings so page numbering stays aligned.
    pub pages: Vec<String>,
    /// Document information dictionary (title, author, ...), best effort.
    pub metadata: Map<String, Value>,
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("failed to parse PDF: {0}")]
    Parse(String),
    #[error("failed to extract text: {0}")]
    Extract(String),
}

/// Contract for the PDF text-extraction collaborator.
///
/// Implementations do blocking work; callers run them on a blocking task.
pub trait PdfExtractor: Send + Sync {
    fn extract(&self, data: &[u8]) -> Result<ExtractedText, ExtractionError>;
}
