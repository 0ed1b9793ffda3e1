pub mod document;
pub mod segmenter;
pub mod translation;
pub mod tts;
