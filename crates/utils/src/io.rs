//! I/O utilities

use std::path::Path;

/// Get the lowercased extension of a file path
pub fn get_extension(path: impl AsRef<Path>) -> Option<String> {
    path.as_ref()
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase())
}
