//! Display rendering for a field's bytes.

use crate::bytes::{to_prefixed_hex, uint_be};

/// How a field's bytes are turned into its display value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Render {
    /// Unsigned big-endian integer in decimal, e.g. `76067358`.
    Decimal,
    /// Decimal followed by the raw bytes in hex, e.g. `0 (0x00)`.
    DecimalWithHex,
    /// The raw bytes as `0x`-prefixed hex.
    #[default]
    Hex,
}

impl Render {
    /// Whether this render reads the bytes as an integer.
    pub fn is_numeric(self) -> bool {
        matches!(self, Render::Decimal | Render::DecimalWithHex)
    }

    /// Renders `bytes`. Numeric renders expect at most 8 bytes, which
    /// [crate::schema::Schema::compile] guarantees.
    pub fn apply(self, bytes: &[u8]) -> String {
        match self {
            Render::Decimal => uint_be(bytes).to_string(),
            Render::DecimalWithHex => {
                format!("{} ({})", uint_be(bytes), to_prefixed_hex(bytes))
            }
            Render::Hex => to_prefixed_hex(bytes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal() {
        assert_eq!(Render::Decimal.apply(&[0x04, 0x88, 0xb2, 0x1e]), "76067358");
        assert_eq!(Render::Decimal.apply(&[0x00, 0x00, 0x00, 0x00]), "0");
    }

    #[test]
    fn test_decimal_with_hex_keeps_field_width() {
        assert_eq!(Render::DecimalWithHex.apply(&[0x00]), "0 (0x00)");
        assert_eq!(
            Render::DecimalWithHex.apply(&[0x80, 0x00, 0x00, 0x01]),
            "2147483649 (0x80000001)"
        );
    }

    #[test]
    fn test_hex() {
        assert_eq!(Render::Hex.apply(&[0xde, 0xad, 0xbe, 0xef]), "0xdeadbeef");
    }

    #[test]
    fn test_is_numeric() {
        assert!(Render::Decimal.is_numeric());
        assert!(Render::DecimalWithHex.is_numeric());
        assert!(!Render::Hex.is_numeric());
    }
}
