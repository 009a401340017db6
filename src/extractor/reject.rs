use crate::extractor::text::char_len;

/// Descriptions must be longer than this many characters.
pub const MIN_DESCRIPTION_CHARS: usize = 80;

/// Selector candidates must strictly exceed the threshold.
pub fn should_reject(text: &str) -> bool {
    char_len(text) <= MIN_DESCRIPTION_CHARS
}

/// Whole-page fallback output is accepted at the threshold itself.
pub fn should_reject_fallback(text: &str) -> bool {
    char_len(text) < MIN_DESCRIPTION_CHARS
}
