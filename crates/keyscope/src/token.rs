//! The annotated field record produced by parsing.

/// One parsed field: the raw bytes it covers, what it is, and what it means.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token {
    /// Hex of the exact bytes this field occupies, without prefix.
    pub raw_hex: String,
    pub title: String,
    pub description: String,
    /// Interpreted display form of the bytes.
    pub value: String,
}

impl Token {
    /// The supplementary sentence: everything after the first line of the description.
    ///
    /// Empty when the description is a single line.
    pub fn flavor_text(&self) -> &str {
        self.description
            .split_once('\n')
            .map_or("", |(_, rest)| rest)
    }
}
