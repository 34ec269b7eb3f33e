//! # keyscope
//!
//! Field-by-field inspection of base58 serialized extended keys.
//!
//! An extended key string is decoded from base58 and split along a fixed byte layout
//! (version, depth, fingerprint, index, chaincode, keydata, checksum) into [Token]s.
//! Each token carries the raw hex of its bytes, a title, an explanatory description
//! and a display value. Nothing is verified: the tool describes structure, it does not
//! validate keys.
//!
//! Layouts are declarative: [field::FieldSpec]s are compiled into a [schema::Schema]
//! that tiles a byte buffer with no gaps or overlaps, so other fixed-layout formats can
//! reuse the same machinery.
//!
//! ## Example
//!
//! ```
//! use keyscope::xpub::XpubParser;
//!
//! let input = "1".repeat(82); // 82 zero bytes
//! assert!(XpubParser.recognizes(&input));
//!
//! let tokens = XpubParser.parse(&input).unwrap();
//! assert_eq!(tokens[0].title, "Version");
//! assert_eq!(tokens[1].value, "0 (0x00)");
//! ```

pub mod base58;
pub mod bytes;
pub mod compiled;
pub mod errors;
pub mod field;
pub mod format;
pub mod render;
pub mod schema;
#[cfg(feature = "serde")]
pub mod serde;
pub mod token;
pub mod xpub;

pub use errors::FormatError;
pub use format::{Format, parse_any};
pub use token::Token;
