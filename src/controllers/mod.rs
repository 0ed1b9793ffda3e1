pub mod document;
pub mod health;
pub mod translate;
pub mod tts;
