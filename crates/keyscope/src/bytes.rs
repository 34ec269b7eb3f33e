//! Low-level byte range reads and hex helpers.
//!
//! All integers are read big-endian and unsigned.

use crate::errors::ReadError;

/// Returns the `len` bytes starting at `offset`.
pub fn slice_at(data: &[u8], offset: usize, len: usize) -> Result<&[u8], ReadError> {
    let end = offset.checked_add(len).ok_or(ReadError::OutOfBounds)?;
    data.get(offset..end).ok_or(ReadError::OutOfBounds)
}

/// Folds up to 8 bytes into an unsigned big-endian value. Callers keep `bytes` within 8.
pub fn uint_be(bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .fold(0u64, |acc, &byte| (acc << 8) | u64::from(byte))
}

/// Lowercase hex without prefix.
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Lowercase hex with a `0x` prefix.
pub fn to_prefixed_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_at() {
        let data = [0x01, 0x02, 0x03];
        assert_eq!(slice_at(&data, 1, 2).unwrap(), &[0x02, 0x03]);
    }

    #[test]
    fn test_slice_at_out_of_bounds() {
        let data = [0x01, 0x02, 0x03];
        assert_eq!(slice_at(&data, 2, 2).unwrap_err(), ReadError::OutOfBounds);
    }

    #[test]
    fn test_slice_at_offset_overflow() {
        let data = [0x01];
        assert_eq!(
            slice_at(&data, usize::MAX, 2).unwrap_err(),
            ReadError::OutOfBounds
        );
    }

    #[test]
    fn test_uint_be() {
        assert_eq!(uint_be(&[0x04, 0x88, 0xb2, 0x1e]), 76067358);
        assert_eq!(uint_be(&[]), 0);
    }

    #[test]
    fn test_uint_be_high_bit_is_not_sign() {
        assert_eq!(uint_be(&[0xff, 0xff, 0xff, 0xff]), u32::MAX as u64);
        assert_eq!(uint_be(&[0xff; 8]), u64::MAX);
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(to_hex(&[0x00, 0xab]), "00ab");
        assert_eq!(to_prefixed_hex(&[0x00, 0xab]), "0x00ab");
        assert_eq!(to_prefixed_hex(&[]), "0x");
    }
}
