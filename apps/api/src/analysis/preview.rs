/// Number of characters of full text returned to the caller.
pub const PREVIEW_CHARS: usize = 500;

pub const TRUNCATION_MARKER: &str = "...";

/// First `PREVIEW_CHARS` characters of `text`, with `TRUNCATION_MARKER`
/// appended when anything was cut.
pub fn build_preview(text: &str) -> String {
    match text.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}{TRUNCATION_MARKER}", &text[..cut]),
        None => text.to_string(),
    }
}
