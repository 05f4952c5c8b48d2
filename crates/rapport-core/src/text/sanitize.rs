//! Normalization applied to chat text before it is stored

use std::sync::OnceLock;

use regex::Regex;

static WHITESPACE_RUN: OnceLock<Regex> = OnceLock::new();

fn whitespace_run() -> &'static Regex {
    WHITESPACE_RUN.get_or_init(|| Regex::new(r"\s+").expect("static whitespace pattern"))
}

/// Flatten line breaks, collapse whitespace runs, trim, and cut to `max_chars`
/// characters (not bytes)
pub fn sanitize_message(text: &str, max_chars: usize) -> String {
    let flattened = text.replace(['\r', '\n'], " ");
    let collapsed = whitespace_run().replace_all(&flattened, " ");
    collapsed.trim().chars().take(max_chars).collect()
}
