use super::{ExtractedText, ExtractionError, PdfExtractor};
use lopdf::{Document, Object};
use serde_json::{Map, Value};

/// PDF extractor backed by the `pdf-extract` crate for page text and `lopdf`
/// for the information dictionary.
pub struct NativePdfExtractor;

impl NativePdfExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NativePdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor for NativePdfExtractor {
    fn extract(&self, data: &[u8]) -> Result<ExtractedText, ExtractionError> {
        if data.len() < 4 || &data[0..4] != b"%PDF" {
            return Err(ExtractionError::Parse("missing %PDF header".to_string()));
        }

        let pages = pdf_extract::extract_text_from_mem_by_pages(data)
            .map_err(|e| ExtractionError::Extract(e.to_string()))?;

        // Metadata is best effort: a broken info dictionary must not fail
        // the upload.
        let metadata = read_info_dictionary(data).unwrap_or_default();

        Ok(ExtractedText { pages, metadata })
    }
}

/// Read the trailer's Info dictionary into a JSON map.
fn read_info_dictionary(data: &[u8]) -> Option<Map<String, Value>> {
    let document = Document::load_mem(data).ok()?;
    let info_ref = document.trailer.get(b"Info").ok()?;
    let info_id = info_ref.as_reference().ok()?;
    let info = document.get_object(info_id).ok()?.as_dict().ok()?;

    let mut metadata = Map::new();
    for (key, value) in info.iter() {
        if let Object::String(bytes, _) = value {
            metadata.insert(
                String::from_utf8_lossy(key).to_string(),
                Value::String(decode_pdf_string(bytes)),
            );
        }
    }

    Some(metadata)
}

/// PDF text strings are either UTF-16BE with a BOM or PDFDocEncoding; the
/// latter is close enough to Latin-1 for info-dictionary purposes.
fn decode_pdf_string(bytes: &[u8]) -> String {
    if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
        let utf16: Vec<u16> = bytes[2..]
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        String::from_utf16_lossy(&utf16)
    } else {
        bytes.iter().map(|&b| b as char).collect()
    }
}
