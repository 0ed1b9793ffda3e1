use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One page of an uploaded document. Page numbers are 1-based and
/// sequential, matching source document order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    pub page_number: u32,
    pub text: String,
    pub char_count: usize,
}

/// The extracted-text artifact for an uploaded PDF. Written once at upload
/// time and never mutated; a re-upload produces a fresh document id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedDocument {
    pub document_id: String,
    pub filename: String,
    pub full_text: String,
    pub pages: Vec<Page>,
    #[serde(default)]
    pub metadata: Map<String, Value>,
    pub total_pages: usize,
    pub total_chars: usize,
}

impl ExtractedDocument {
    /// Assemble the artifact from raw per-page text. Full text is the pages
    /// joined with blank lines, trimmed.
    pub fn from_pages(
        document_id: String,
        filename: String,
        page_texts: Vec<String>,
        metadata: Map<String, Value>,
    ) -> Self {
        let pages: Vec<Page> = page_texts
            .iter()
            .enumerate()
            .map(|(index, text)| Page {
                page_number: index as u32 + 1,
                text: text.clone(),
                char_count: text.chars().count(),
            })
            .collect();

        let full_text = page_texts.join("\n\n").trim().to_string();
        let total_chars = full_text.chars().count();
        let total_pages = pages.len();

        Self {
            document_id,
            filename,
            full_text,
            pages,
            metadata,
            total_pages,
            total_chars,
        }
    }
}
