use super::block::blocks;
use super::compress::compress;
use super::constants::INITIAL_STATE;
use super::encode::{encode_text, TextEncoding};
use super::padding::pad;
use super::schedule::expand;
use super::types::Digest;

/// Computes the SHA-256 digest of `message`.
///
/// Pads the message, then folds every block into a fresh copy of the initial state. All working
/// memory is local to the call.
///
/// # Examples
///
/// ```rust
/// use file_digest_service::digest::digest;
///
/// let d = digest(b"abc");
/// assert_eq!(
///     d.to_hex(),
///     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
/// );
/// ```
pub fn digest(message: &[u8]) -> Digest {
    let padded = pad(message);
    let mut state = INITIAL_STATE;
    for block in blocks(&padded) {
        compress(&mut state, &expand(block));
    }
    Digest::from_state(state)
}

/// Computes the SHA-256 digest of `message` as 64 lowercase hex characters.
pub fn digest_hex(message: &[u8]) -> String {
    digest(message).to_hex()
}

/// Encodes `text` with `encoding` and returns the hex digest of the result.
///
/// # Examples
///
/// ```rust
/// use file_digest_service::digest::{digest_text, TextEncoding};
///
/// assert_eq!(
///     digest_text("hello", TextEncoding::Latin1),
///     "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
/// );
/// ```
pub fn digest_text(text: &str, encoding: TextEncoding) -> String {
    digest_hex(&encode_text(text, encoding))
}
