//! # Flat-File User Store
//!
//! This module persists registered users in a line-oriented file: one JSON object per line holding
//! the username, the hex digest of the password and the registration time. The whole file is
//! loaded into memory when the store is opened, and each registration appends exactly one line.
//!
//! Password digests are stored unsalted, so two users with the same password share the same
//! stored digest.
//!
//! ## Submodules
//!
//! - **users**: The `UserStore` itself and its error type.
//! - **types**: Defines the persisted `UserRecord`.

mod types;
mod users;

pub use types::UserRecord;
pub use users::{StoreError, UserStore};
