use alloc::vec::Vec;

use num::bigint::BigInt;

use crate::Error;

/// Convert a big-endian byte string into the little-endian sequence of
/// 32-bit words the array-seeding routine consumes
///
/// Words are built four bytes at a time counting from the end of the
/// stream, most significant byte first within each word, so the most
/// significant byte of the whole number lands in the top byte of the
/// highest-indexed word
pub fn words_from_bytes(bytes: &[u8]) -> Vec<u32> {
    let source_len = bytes.len();
    let mut words = Vec::with_capacity((source_len + 3) / 4);

    let mut i = 0_usize;
    while i < source_len {
        let pos = source_len - 1 - i;
        let mut v = 0_u32;
        for j in 0..4 {
            if i + j >= source_len {
                break;
            }
            v |= (bytes[pos - j] as u32) << (j * 8);
        }
        words.push(v);
        i += 4;
    }

    words
}

/// Parse a string of pure hex digits (no implied "0x") as a
/// base-16 big integer
///
/// errors: returns Error on empty and malformed strings
pub fn parse_hex(hex: &str) -> Result<BigInt, Error> {
    BigInt::parse_bytes(hex.as_bytes(), 16).ok_or(Error::ParseHex)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_single_partial_word() {
        assert_eq!(words_from_bytes(&[0x12]), [0x12]);
        assert_eq!(words_from_bytes(&[0x12, 0x34]), [0x1234]);
        assert_eq!(words_from_bytes(&[0x12, 0x34, 0x56]), [0x123456]);
        assert_eq!(words_from_bytes(&[0x12, 0x34, 0x56, 0x78]), [0x12345678]);
    }

    #[test]
    fn check_word_order_is_little_endian() {
        // 0x0102030405060708 splits into low word first
        let bytes = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
        assert_eq!(words_from_bytes(&bytes), [0x05060708, 0x01020304]);

        // the leading partial word ends up last
        let bytes = [0xaa, 0x05, 0x06, 0x07, 0x08];
        assert_eq!(words_from_bytes(&bytes), [0x05060708, 0xaa]);
    }

    #[test]
    fn check_empty_input() {
        assert!(words_from_bytes(&[]).is_empty());
    }

    #[test]
    fn check_parse_hex() {
        assert_eq!(
            parse_hex("deadbeef").unwrap(),
            BigInt::from(0xdead_beef_u32)
        );
        assert_eq!(parse_hex("0").unwrap(), BigInt::from(0));

        assert_eq!(parse_hex(""), Err(Error::ParseHex));
        assert_eq!(parse_hex("0x12"), Err(Error::ParseHex));
        assert_eq!(parse_hex("wxyz"), Err(Error::ParseHex));
    }
}
