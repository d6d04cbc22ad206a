const CONTENT_PREVIEW_CHARS: usize = 500;
const TITLE_PREVIEW_CHARS: usize = 200;

/// Build the display snippet for a result: the first 500 characters of cached
/// content when present, otherwise the title capped at 200 characters. An
/// ellipsis marks truncation. Counts characters, not bytes, so multi-byte
/// text is never split mid code point.
pub fn content_preview(title: &str, cached: Option<&str>) -> String {
    match cached {
        Some(content) => truncate_chars(content, CONTENT_PREVIEW_CHARS),
        None => truncate_chars(title, TITLE_PREVIEW_CHARS),
    }
}

fn truncate_chars(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let mut out: String = text.chars().take(limit).collect();
    out.push_str("...");
    out
}
