//! Text utilities

/// Truncate text to at most `max_chars` characters (never shorter than the
/// `...` marker), trying to break at a word boundary.
///
/// Used for log previews of request and response bodies.
pub fn truncate_smart(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    // leave room for the ellipsis
    let keep = max_chars.saturating_sub(3);
    let cut = text
        .char_indices()
        .nth(keep)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len());
    let head = &text[..cut];

    match head.rfind(' ') {
        Some(last_space) if last_space > 0 => head[..last_space].to_string() + "...",
        _ => head.to_string() + "...",
    }
}
