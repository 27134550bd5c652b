use std::iter::FusedIterator;
use std::slice::ChunksExact;

/// Size of one SHA-256 message block in bytes (512 bits).
pub const BLOCK_LEN: usize = 64;

/// Lazy iterator over the 64-byte blocks of a padded message, first to last.
///
/// Cloning the iterator restarts from the clone's position without touching the underlying bytes.
#[derive(Debug, Clone)]
pub struct Blocks<'a> {
    chunks: ChunksExact<'a, u8>,
}

/// Splits a padded message into 64-byte blocks.
///
/// `padded` is expected to come from `pad`, whose output is always a whole number of blocks. Any
/// trailing partial block is not yielded.
pub fn blocks(padded: &[u8]) -> Blocks<'_> {
    debug_assert_eq!(padded.len() % BLOCK_LEN, 0, "padded message is not block aligned");
    Blocks {
        chunks: padded.chunks_exact(BLOCK_LEN),
    }
}

impl<'a> Iterator for Blocks<'a> {
    type Item = &'a [u8; BLOCK_LEN];

    fn next(&mut self) -> Option<Self::Item> {
        self.chunks.next().and_then(|chunk| chunk.try_into().ok())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for Blocks<'_> {}

impl FusedIterator for Blocks<'_> {}
