//! The closed set of input formats and ordered detection across them.

use crate::{errors::FormatError, token::Token, xpub::XpubParser};

/// A supported input format. Each variant answers the same two questions:
/// does it recognize an input, and what tokens does the input parse into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Base58 serialized extended key.
    ExtendedKey,
}

impl Format {
    /// All formats, in detection order.
    pub const ALL: [Format; 1] = [Format::ExtendedKey];

    pub fn name(self) -> &'static str {
        match self {
            Format::ExtendedKey => "extended key",
        }
    }

    pub fn recognizes(self, input: &str) -> bool {
        match self {
            Format::ExtendedKey => XpubParser.recognizes(input),
        }
    }

    pub fn parse(self, input: &str) -> Result<Vec<Token>, FormatError> {
        match self {
            Format::ExtendedKey => XpubParser.parse(input),
        }
    }

    /// First format in [Format::ALL] that recognizes `input`.
    pub fn detect(input: &str) -> Option<Format> {
        let found = Format::ALL.into_iter().find(|format| format.recognizes(input));
        if found.is_none() {
            log::debug!("no format recognizes input of {} chars", input.len());
        }

        found
    }
}

/// Parses `input` with the first format that recognizes it.
pub fn parse_any(input: &str) -> Result<(Format, Vec<Token>), FormatError> {
    let format =
        Format::detect(input).ok_or_else(|| FormatError::Unrecognized(input.to_string()))?;
    Ok((format, format.parse(input)?))
}
