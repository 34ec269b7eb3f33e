//! Extended key (xpub, ltub, zpub, ...) layout and parser.
//!
//! A serialized extended key is 82 bytes once base58-decoded:
//!
//! | Field       | Bytes     | Value                       |
//! |-------------|-----------|-----------------------------|
//! | Version     | `[0,4)`   | decimal                     |
//! | Depth       | `[4,5)`   | decimal and hex             |
//! | Fingerprint | `[5,9)`   | hex                         |
//! | Index       | `[9,13)`  | decimal and hex             |
//! | Chaincode   | `[13,45)` | hex                         |
//! | Keydata     | `[45,78)` | hex                         |
//! | Checksum    | `[78,82)` | hex                         |
//!
//! Nothing is verified: the checksum, version prefix, depth and index are described,
//! not validated.

use std::sync::LazyLock;

use crate::{
    base58,
    errors::{CompileError, FormatError},
    field::FieldSpec,
    render::Render,
    schema::Schema,
    token::Token,
};

/// Decoded length of a serialized extended key.
pub const XPUB_LEN: usize = 82;

pub const XPUB_LAYOUT: [FieldSpec; 7] = [
    FieldSpec::new(
        "Version",
        "The version gives information into what kind of key is encoded.\n\
         This is also what gives an XPUB its distinct form (XPUB, LTUB, ZPUB).",
        0,
        4,
        Render::Decimal,
    ),
    FieldSpec::new(
        "Depth",
        "The Depth byte tells you have what generation key this is.\n\
         In other words it tells you how many parent keys or ancestors lead up to this key.",
        4,
        1,
        Render::DecimalWithHex,
    ),
    FieldSpec::new(
        "Fingerprint",
        "The Fingerprint is used to verify the parent key.",
        5,
        4,
        Render::Hex,
    ),
    FieldSpec::new(
        "Index",
        "The Index tells you what child of the parent key this is.\n\
         Each parent can support up to 2^32 child keys.",
        9,
        4,
        Render::DecimalWithHex,
    ),
    FieldSpec::new(
        "Chaincode",
        "The Chaincode is used to deterministically derive child keys of this key.",
        13,
        32,
        Render::Hex,
    ),
    FieldSpec::new(
        "Keydata",
        "The Keydata is the actual bytes of this extended key.\n\
         If the first byte is 0x00 you know that this is a public child key. \
         Otherwise, this is a private child.",
        45,
        33,
        Render::Hex,
    ),
    FieldSpec::new(
        "Checksum",
        "The Checksum is used to verify that the other data was encoded and transmitted properly.",
        78,
        4,
        Render::Hex,
    ),
];

static XPUB_SCHEMA: LazyLock<Result<Schema, CompileError>> =
    LazyLock::new(|| Schema::compile(&XPUB_LAYOUT));

/// The compiled extended key layout.
pub fn schema() -> Result<&'static Schema, CompileError> {
    XPUB_SCHEMA.as_ref().map_err(Clone::clone)
}

/// Decodes `input` from base58 and splits it into the seven extended key fields.
pub fn tokenize(input: &str) -> Result<Vec<Token>, FormatError> {
    let decoded = base58::decode(input);
    tokenize_bytes(input, &decoded)
}

/// Splits already-decoded bytes. `input` is only carried into errors.
pub fn tokenize_bytes(input: &str, decoded: &[u8]) -> Result<Vec<Token>, FormatError> {
    // Reads only fail when the buffer is shorter than the layout.
    schema()?
        .parse(decoded)
        .map_err(|_| FormatError::InvalidLength {
            input: input.to_string(),
            len: decoded.len(),
        })
}

/// Parser for base58 extended keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct XpubParser;

impl XpubParser {
    /// True iff [XpubParser::parse] succeeds on `input`.
    pub fn recognizes(&self, input: &str) -> bool {
        tokenize(input).is_ok()
    }

    pub fn parse(&self, input: &str) -> Result<Vec<Token>, FormatError> {
        tokenize(input)
    }
}
