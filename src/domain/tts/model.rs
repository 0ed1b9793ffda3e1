use serde::{Deserialize, Serialize};

/// Average speaking speed used for the advisory duration estimate.
const DEFAULT_WORDS_PER_MINUTE: f64 = 150.0;

/// A synthesized audio file on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioFile {
    pub audio_path: String,
    pub language: String,
    pub service: String,
    pub file_size: u64,
    /// Provider-dependent; gtts does not report one.
    #[serde(default)]
    pub duration: Option<f64>,
}

/// One narrated sentence segment, aligned by ordinal position to its
/// original-language counterpart. `original_text` is empty when the original
/// text produced fewer segments than the translation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioSegment {
    pub segment_id: u32,
    pub audio_path: String,
    pub language: String,
    pub service: String,
    pub file_size: u64,
    #[serde(default)]
    pub duration: Option<f64>,
    pub text: String,
    pub start_char: usize,
    pub end_char: usize,
    #[serde(default)]
    pub original_text: String,
}

/// Outcome of narrating one segment. Serialized untagged so manifests keep
/// the flat per-entry shape clients already parse.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SegmentOutcome {
    Audio(AudioSegment),
    Failed {
        segment_id: u32,
        error: String,
        text: String,
    },
}

impl SegmentOutcome {
    pub fn as_audio(&self) -> Option<&AudioSegment> {
        match self {
            Self::Audio(segment) => Some(segment),
            Self::Failed { .. } => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Persisted per-document narration manifest; overwritten on regeneration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentManifest {
    pub document_id: String,
    pub language: String,
    pub segment_type: String,
    pub segments: Vec<SegmentOutcome>,
}

/// Narration of a document as sentence segments.
#[derive(Debug, Clone, Serialize)]
pub struct SegmentNarration {
    pub document_id: String,
    pub language: String,
    pub segment_type: String,
    pub total_segments: usize,
    pub segments: Vec<SegmentOutcome>,
    /// Directory under the audio root holding the segment files.
    pub audio_directory: String,
}

/// Narration of a document, either per-sentence or as one full file.
#[derive(Debug, Clone)]
pub enum DocumentNarration {
    Segments(SegmentNarration),
    Full {
        audio: AudioFile,
        audio_filename: String,
    },
}

/// Estimate audio duration in seconds from a naive whitespace word count.
/// Advisory only; never validated against the actual audio.
pub fn estimate_duration(text: &str, words_per_minute: Option<f64>) -> f64 {
    let words_per_minute = words_per_minute.unwrap_or(DEFAULT_WORDS_PER_MINUTE);
    let word_count = text.split_whitespace().count() as f64;
    word_count / words_per_minute * 60.0
}
