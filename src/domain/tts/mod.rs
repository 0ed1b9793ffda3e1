pub mod error;
pub mod model;
pub mod service;

pub use error::TtsServiceError;
pub use model::{
    estimate_duration, AudioFile, AudioSegment, DocumentNarration, SegmentManifest,
    SegmentNarration, SegmentOutcome,
};
pub use service::{GeneratedAudio, TtsService, TtsServiceApi};
