//! Plain-text helpers shared by the selector scan and the fallback path.

use regex::Regex;
use scraper::ElementRef;
use std::sync::LazyLock;

static LINE_BREAK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r\n?").expect("valid line break regex"));

static HORIZONTAL_SPACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t\x0B\x0C\r]+").expect("valid horizontal space regex"));

/// Collapses the whitespace noise typical of shop markup into clean lines.
///
/// Line breaks survive as single `\n` separators; every other run of
/// horizontal whitespace (including the full-width space U+3000) becomes one
/// ASCII space. Lines are trimmed and blank lines dropped, so the output has
/// no leading, trailing or repeated separators. Applying it twice yields the
/// same string.
pub fn normalize_whitespace(text: &str) -> String {
    let text = LINE_BREAK_REGEX.replace_all(text, "\n");
    let text = text.replace('\u{3000}', " ");
    let text = HORIZONTAL_SPACE_REGEX.replace_all(&text, " ");

    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Visible text of an element: each descendant text node trimmed, empty ones
/// skipped, the rest joined with line breaks.
pub fn visible_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn char_len(text: &str) -> usize {
    text.chars().count()
}
