use std::fmt;

/// Length of a SHA-256 digest in bytes.
pub const DIGEST_LEN: usize = 32;

/// Length of a SHA-256 digest rendered as hex.
pub const HEX_LEN: usize = DIGEST_LEN * 2;

/// A finished SHA-256 digest: the final 8-word hash state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest {
    words: [u32; 8],
}

impl Digest {
    pub(crate) fn from_state(words: [u32; 8]) -> Self {
        Self { words }
    }

    /// The 8 state words, in state order.
    pub fn words(&self) -> [u32; 8] {
        self.words
    }

    /// The digest as 32 bytes, each word big-endian, in state order.
    pub fn to_bytes(&self) -> [u8; DIGEST_LEN] {
        let mut bytes = [0u8; DIGEST_LEN];
        for (chunk, word) in bytes.chunks_exact_mut(4).zip(self.words) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        bytes
    }

    /// Renders the digest as 64 lowercase hex characters.
    ///
    /// Each word contributes exactly 8 digits (leading zeros kept), so the output length never
    /// varies.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_keeps_leading_zeros() {
        let digest = Digest::from_state([0, 1, 0xf, 0x10, 0xabc, 0x00ff_0000, 0x0a0b_0c0d, u32::MAX]);
        let hex = digest.to_hex();
        assert_eq!(hex.len(), HEX_LEN);
        assert_eq!(
            hex,
            "00000000000000010000000f0000001000000abc00ff00000a0b0c0dffffffff"
        );
    }

    #[test]
    fn test_hex_is_lowercase() {
        let hex = Digest::from_state([0xdead_beef; 8]).to_hex();
        assert!(hex.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
        assert_eq!(hex, "deadbeef".repeat(8));
    }

    #[test]
    fn test_bytes_are_big_endian_words() {
        let digest = Digest::from_state([0x0102_0304, 0, 0, 0, 0, 0, 0, 0x0a0b_0c0d]);
        let bytes = digest.to_bytes();
        assert_eq!(&bytes[..4], &[1, 2, 3, 4]);
        assert_eq!(&bytes[28..], &[0x0a, 0x0b, 0x0c, 0x0d]);
    }

    #[test]
    fn test_display_matches_hex() {
        let digest = Digest::from_state([0x1234_5678; 8]);
        assert_eq!(digest.to_string(), digest.to_hex());
    }
}
