//! SKU watchlist input.
//!
//! The watchlist is a plain text file, one keycode per line. Keycodes are
//! opaque strings — Kmart uses both numeric (`65463499`) and alphanumeric
//! (`S168428`) forms — so no format validation is applied.

use std::path::Path;

use crate::ConfigError;

/// Read the SKU watchlist from `path`.
///
/// Lines are trimmed of surrounding whitespace; blank lines are skipped.
/// File order is preserved — the check loop queries in exactly this order.
///
/// # Errors
///
/// Returns [`ConfigError::SkuFile`] if the file cannot be read. This is the
/// one fatal error in the program: the caller is expected to stop before any
/// query is issued.
pub fn load_skus(path: &Path) -> Result<Vec<String>, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::SkuFile {
        path: path.display().to_string(),
        source: e,
    })?;

    let skus: Vec<String> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect();

    tracing::debug!(path = %path.display(), count = skus.len(), "loaded SKU watchlist");
    Ok(skus)
}
