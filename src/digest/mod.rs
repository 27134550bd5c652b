//! # SHA-256 Digest Engine
//!
//! This module implements SHA-256 from scratch: a pure function from an arbitrary-length byte
//! sequence to a 32-byte digest, built on the Merkle–Damgård construction. The message is padded
//! to a multiple of 512 bits, split into 64-byte blocks, and each block is folded into an 8-word
//! running state by the compression function.
//!
//! ## Usage
//!
//! The main entry points are `digest` (bytes to `Digest`), `digest_hex` (bytes to a 64-character
//! lowercase hex string) and `digest_text` (text to hex, through the configured `TextEncoding`).
//!
//! Every call owns its working state, so the engine can be called from any number of threads or
//! tasks at once without coordination.
//!
//! ## Submodules
//!
//! - **constants**: Round constants and the initial hash state.
//! - **encode**: Converts text into message bytes.
//! - **padding**: Pads a message to a whole number of blocks.
//! - **block**: Splits a padded message into 64-byte blocks.
//! - **schedule**: Expands one block into the 64-word message schedule.
//! - **compress**: The 64-round compression function.
//! - **types**: The `Digest` value and its hex formatting.
//! - **engine**: Ties the stages together.

mod block;
mod compress;
mod constants;
mod encode;
mod engine;
mod padding;
mod schedule;
mod types;

pub use block::{blocks, Blocks, BLOCK_LEN};
pub use compress::compress;
pub use constants::{INITIAL_STATE, ROUND_CONSTANTS};
pub use encode::{encode_text, TextEncoding};
pub use engine::{digest, digest_hex, digest_text};
pub use padding::{pad, pad_with_bit_length};
pub use schedule::expand;
pub use types::{Digest, DIGEST_LEN, HEX_LEN};
