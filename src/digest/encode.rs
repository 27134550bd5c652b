use clap::ValueEnum;
use std::fmt;

/// How text (such as a password) is turned into message bytes before hashing.
///
/// `Latin1` reproduces the byte encoder the service has always used: every character contributes
/// exactly one byte, its code point truncated to the low 8 bits. This is lossless for U+0000 to
/// U+00FF only. Characters above U+00FF collide with unrelated characters (U+0100 hashes like
/// U+0000), which is a known limitation kept for compatibility with existing stored hashes.
///
/// `Utf8` hashes the standard UTF-8 encoding of the text. It agrees with `Latin1` on ASCII input
/// and differs on everything else, so switching an existing store between the two invalidates
/// every non-ASCII password.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum TextEncoding {
    #[default]
    Latin1,
    Utf8,
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextEncoding::Latin1 => write!(f, "latin1"),
            TextEncoding::Utf8 => write!(f, "utf8"),
        }
    }
}

/// Converts text into the byte sequence that gets hashed.
///
/// Character order is preserved. With `TextEncoding::Latin1` the output has exactly one byte per
/// character.
///
/// # Examples
///
/// ```rust
/// use file_digest_service::digest::{encode_text, TextEncoding};
///
/// assert_eq!(encode_text("abc", TextEncoding::Latin1), b"abc".to_vec());
/// assert_eq!(encode_text("é", TextEncoding::Latin1), vec![0xe9]);
/// assert_eq!(encode_text("é", TextEncoding::Utf8), vec![0xc3, 0xa9]);
/// ```
pub fn encode_text(text: &str, encoding: TextEncoding) -> Vec<u8> {
    match encoding {
        // Truncation is intentional, see `TextEncoding::Latin1`.
        TextEncoding::Latin1 => text.chars().map(|c| c as u32 as u8).collect(),
        TextEncoding::Utf8 => text.as_bytes().to_vec(),
    }
}
