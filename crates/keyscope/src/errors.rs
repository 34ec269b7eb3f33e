//! Error types for layout compilation, byte reading and format parsing.

use thiserror::Error;

/// Errors produced when compiling [crate::field::FieldSpec]s into a [crate::schema::Schema].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// The layout has no fields.
    #[error("layout has no fields")]
    EmptyLayout,
    /// A field covers zero bytes.
    #[error("field `{0}` has zero length")]
    EmptyField(String),
    /// A numerically rendered field is wider than 64 bits.
    #[error("field `{title}` is {len} bytes wide, numeric fields hold at most 8")]
    NumericFieldTooWide { title: String, len: usize },
    /// A field's end offset does not fit in `usize`.
    #[error("field `{title}` ends past the addressable range")]
    LayoutTooLong { title: String },
    /// A field does not start where the previous one ended (gap or overlap).
    #[error("field `{title}` starts at byte {found}, expected {expected}")]
    NonContiguous {
        title: String,
        expected: usize,
        found: usize,
    },
}

/// Errors produced when reading bytes (e.g. during [crate::schema::Schema::parse]).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReadError {
    /// Requested byte range is beyond the end of the data.
    #[error("byte range out of bounds")]
    OutOfBounds,
    /// Input data is shorter than the schema's total length.
    #[error("packet is {actual} bytes, layout needs {needed}")]
    PacketTooShort { needed: usize, actual: usize },
}

/// Errors surfaced by format parsers to their callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The input decoded to fewer bytes than the format's layout covers.
    ///
    /// Malformed base58 decodes to an empty buffer and lands here as well.
    #[error("{input} is not a valid xpub ({len} bytes decoded)")]
    InvalidLength { input: String, len: usize },
    /// The format's built-in layout failed to compile.
    #[error("invalid layout: {0}")]
    Layout(#[from] CompileError),
    /// No supported format recognizes the input.
    #[error("no supported format recognizes {0}")]
    Unrecognized(String),
}
