use serde::{Deserialize, Serialize};

/// A sentence-level unit of text with its position in the reconstructed
/// source string. Used to pair narrated audio with on-screen highlighting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub id: u32,
    pub text: String,
    pub start_char: usize,
    pub end_char: usize,
}

/// Split text into sentences on whitespace that follows `.`, `!` or `?`.
///
/// This is deliberately a heuristic: abbreviations, decimal numbers and
/// quoted punctuation all produce extra splits. Callers accept ambiguous
/// boundaries as-is.
pub fn split_into_sentences(text: &str) -> Vec<String> {
    let boundary = regex::Regex::new(r"[.!?]\s+").unwrap();

    let mut sentences = Vec::new();
    let mut last = 0;
    for mat in boundary.find_iter(text) {
        // The match starts at the punctuation character; keep it with the
        // sentence and drop the trailing whitespace.
        let end = mat.start() + 1;
        let sentence = text[last..end].trim();
        if !sentence.is_empty() {
            sentences.push(sentence.to_string());
        }
        last = mat.end();
    }

    let tail = text[last..].trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }

    sentences
}

/// Split text into chunks of at most `max_chars` characters without breaking
/// sentences.
///
/// Sentences are packed greedily left to right with one joining space. A
/// single sentence longer than `max_chars` is emitted as its own chunk, so
/// the bound is advisory rather than hard.
pub fn split_into_chunks(text: &str, max_chars: usize) -> Vec<String> {
    if text.chars().count() <= max_chars {
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();
    let mut current = String::new();
    // Running length in characters, counting the trailing space after each
    // packed sentence.
    let mut current_len = 0usize;

    for sentence in split_into_sentences(text) {
        let sentence_len = sentence.chars().count();
        if current_len + sentence_len + 1 <= max_chars {
            current.push_str(&sentence);
            current.push(' ');
            current_len += sentence_len + 1;
        } else {
            if !current.is_empty() {
                chunks.push(current.trim().to_string());
            }
            current = format!("{} ", sentence);
            current_len = sentence_len + 1;
        }
    }

    if !current.trim().is_empty() {
        chunks.push(current.trim().to_string());
    }

    chunks
}

/// Split text into sentence segments with character positions.
///
/// Ids are dense (0..n-1) over the retained non-empty sentences. Offsets are
/// computed against the segment-local reconstruction of the text, with one
/// space assumed between sentences; they are not guaranteed to match offsets
/// in the original string when it contained runs of whitespace.
pub fn create_sentence_segments(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut cursor = 0usize;

    for sentence in split_into_sentences(text) {
        let sentence_len = sentence.chars().count();
        segments.push(Segment {
            id: segments.len() as u32,
            text: sentence,
            start_char: cursor,
            end_char: cursor + sentence_len,
        });
        cursor += sentence_len + 1;
    }

    segments
}
