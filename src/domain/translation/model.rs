use crate::domain::document::Page;
use serde::{Deserialize, Serialize};

/// Result of translating one piece of text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationResult {
    pub translated_text: String,
    /// Resolved source language, lower-cased. Stays at the requested value
    /// (usually "auto") when the provider did not detect one.
    pub source_lang: String,
    pub target_lang: String,
    pub service: String,
}

/// Outcome of translating one chunk of a document. Failures are data, not
/// errors: one bad chunk must not abort its siblings.
#[derive(Debug, Clone)]
pub enum ChunkOutcome {
    Translated {
        chunk_index: usize,
        result: TranslationResult,
    },
    Failed {
        chunk_index: usize,
        error: String,
        original_text: String,
    },
}

impl ChunkOutcome {
    pub fn chunk_index(&self) -> usize {
        match self {
            Self::Translated { chunk_index, .. } | Self::Failed { chunk_index, .. } => *chunk_index,
        }
    }

    pub fn as_translated(&self) -> Option<&TranslationResult> {
        match self {
            Self::Translated { result, .. } => Some(result),
            Self::Failed { .. } => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// One page of a translated document, paired with its original text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslatedPage {
    pub page_number: u32,
    pub original_text: String,
    pub translated_text: String,
    pub char_count: usize,
}

/// The translation artifact for a `(document_id, target_lang)` pair.
/// Overwritten, never merged, when the same pair is translated again.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentTranslation {
    pub document_id: String,
    pub source_lang: String,
    pub target_lang: String,
    pub service: String,
    pub original_text: String,
    pub translated_text: String,
    /// Duplicate of `translated_text`, kept for client compatibility.
    pub full_text: String,
    pub pages: Vec<TranslatedPage>,
    pub total_pages: usize,
    pub total_chars: usize,
    pub original_pages: Vec<Page>,
}
