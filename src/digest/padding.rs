use super::block::BLOCK_LEN;

/// Offset within the final block where the 8-byte length field starts.
const LENGTH_FIELD_OFFSET: usize = BLOCK_LEN - 8;

/// Pads a message so its length is a whole number of 64-byte blocks.
///
/// Appends a single `0x80` byte, then the fewest `0x00` bytes that leave the length at 56 modulo
/// 64, then the message length in bits as a big-endian `u64`.
///
/// The length field carries all 64 bits of the bit length. Lengths of 2^64 bits or more wrap,
/// which cannot happen for a message that fits in memory.
///
/// # Examples
///
/// ```rust
/// use file_digest_service::digest::pad;
///
/// let padded = pad(b"abc");
/// assert_eq!(padded.len(), 64);
/// assert_eq!(padded[3], 0x80);
/// assert_eq!(padded[63], 24);
/// ```
pub fn pad(message: &[u8]) -> Vec<u8> {
    let bit_length = (message.len() as u64).wrapping_mul(8);
    pad_with_bit_length(message, bit_length)
}

/// Pads `message` as `pad` does, but writes `bit_length` into the length field.
///
/// This lets callers (and tests) exercise the length field for sizes that would be impractical to
/// allocate.
pub fn pad_with_bit_length(message: &[u8], bit_length: u64) -> Vec<u8> {
    let zeros = (LENGTH_FIELD_OFFSET + BLOCK_LEN - (message.len() + 1) % BLOCK_LEN) % BLOCK_LEN;
    let mut padded = Vec::with_capacity(message.len() + 1 + zeros + 8);
    padded.extend_from_slice(message);
    padded.push(0x80);
    padded.resize(padded.len() + zeros, 0x00);
    padded.extend_from_slice(&bit_length.to_be_bytes());
    padded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padded_length_is_block_multiple() {
        for len in 0..200 {
            let message = vec![0xab; len];
            let padded = pad(&message);
            assert_eq!(padded.len() % BLOCK_LEN, 0, "message length {}", len);
            assert_eq!(&padded[..len], &message[..]);
            assert_eq!(padded[len], 0x80);
        }
    }

    #[test]
    fn test_single_block_boundary() {
        // 55 bytes + 0x80 + length field fill one block exactly
        assert_eq!(pad(&[0u8; 55]).len(), 64);
        // 56 bytes leave no room for the length field
        assert_eq!(pad(&[0u8; 56]).len(), 128);
        assert_eq!(pad(&[0u8; 64]).len(), 128);
        assert_eq!(pad(&[0u8; 119]).len(), 128);
        assert_eq!(pad(&[0u8; 120]).len(), 192);
    }

    #[test]
    fn test_empty_message() {
        let padded = pad(b"");
        let mut expected = [0u8; 64];
        expected[0] = 0x80;
        assert_eq!(padded, expected.to_vec());
    }

    #[test]
    fn test_zero_fill_between_marker_and_length() {
        let padded = pad(b"hello");
        assert!(padded[6..56].iter().all(|&b| b == 0));
        assert_eq!(&padded[56..], &40u64.to_be_bytes());
    }

    #[test]
    fn test_length_field_keeps_high_bits() {
        // 2^32 bits is where a 32-bit length field would wrap to zero
        let padded = pad_with_bit_length(b"", 1u64 << 32);
        assert_eq!(&padded[56..], &[0, 0, 0, 1, 0, 0, 0, 0]);

        let padded = pad_with_bit_length(b"x", 0x0123_4567_89ab_cdef);
        assert_eq!(&padded[56..], &[0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef]);
    }
}
