pub mod error;
pub mod model;
pub mod naming;
pub mod service;

pub use error::DocumentServiceError;
pub use model::{ExtractedDocument, Page};
pub use service::{DocumentService, DocumentServiceApi};
