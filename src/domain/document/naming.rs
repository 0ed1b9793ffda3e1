use chrono::Utc;
use uuid::Uuid;

/// Check if a filename carries one of the allowed extensions
pub fn allowed_file(filename: &str, allowed_extensions: &[&str]) -> bool {
    match filename.rsplit_once('.') {
        Some((_, extension)) => allowed_extensions.contains(&extension.to_lowercase().as_str()),
        None => false,
    }
}

/// Sanitize a filename: keep alphanumerics, dashes, underscores and dots,
/// replace spaces with underscores, drop everything else.
pub fn sanitize_filename(filename: &str) -> String {
    filename
        .chars()
        .map(|c| if c == ' ' { '_' } else { c })
        .filter(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '.'))
        .collect()
}

/// Derive a unique stored filename: `stem_YYYYMMDD_HHMMSS_random8hex.ext`.
/// The timestamp plus random suffix stands in for collision handling; a
/// second upload of the same file gets an independent identity.
pub fn unique_filename(filename: &str) -> String {
    let (stem, extension) = match filename.rsplit_once('.') {
        Some((stem, extension)) => (stem, Some(extension)),
        None => (filename, None),
    };

    let timestamp = Utc::now().format("%Y%m%d_%H%M%S");
    let suffix: String = Uuid::new_v4().simple().to_string().chars().take(8).collect();

    match extension {
        Some(extension) => format!("{}_{}_{}.{}", stem, timestamp, suffix, extension),
        None => format!("{}_{}_{}", stem, timestamp, suffix),
    }
}
