//! Base58 decoding at the input boundary.
//!
//! Characters outside the bitcoin alphabet do not raise an error here: the input
//! decodes to an empty buffer and the layout's length check rejects it.

/// Decodes `input` with the bitcoin base58 alphabet. Leading `1`s become leading
/// `0x00` bytes. Malformed input yields an empty buffer.
pub fn decode(input: &str) -> Vec<u8> {
    match bs58::decode(input).into_vec() {
        Ok(bytes) => {
            log::trace!("decoded {} base58 chars into {} bytes", input.len(), bytes.len());
            bytes
        }
        Err(err) => {
            log::trace!("base58 decode failed: {err}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode() {
        assert_eq!(decode("2g"), vec![0x61]);
        assert_eq!(decode("a3gV"), vec![0x62, 0x62, 0x62]);
    }

    #[test]
    fn test_leading_zeros_preserved() {
        assert_eq!(decode("111"), vec![0x00, 0x00, 0x00]);
        assert_eq!(decode("12g"), vec![0x00, 0x61]);
    }

    #[test]
    fn test_empty() {
        assert!(decode("").is_empty());
    }

    #[test]
    fn test_invalid_character_yields_empty() {
        // `0`, `O`, `I` and `l` are not in the alphabet.
        assert!(decode("0OIl").is_empty());
        assert!(decode("xpub0").is_empty());
    }
}
