/// How competing selector matches are resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExtractionPolicy {
    /// First qualifying match, in include-selector order then document order.
    #[default]
    FirstMatch,
    /// Longest qualifying match across every include selector. Ties keep the
    /// earlier match.
    Longest,
}
