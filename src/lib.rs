//! File Digest Service Library
//!
//! This library provides a from-scratch SHA-256 engine, a flat-file user store, and the axum
//! service that exposes both over HTTP: hash an uploaded file, or register and log in users whose
//! passwords are kept as SHA-256 digests.
//!

pub mod digest;
pub mod logging;
pub mod service;
pub mod store;
