//! # Sealed video
//! Client side codec for patient videos which are sealed with AES-GCM before upload and opened
//! in the therapist dashboard before playback.
//!
//! An encrypted video is a single frame `nonce (12 bytes) || cipher text || tag (16 bytes)`,
//! sealed without associated data. The key travels as a base64 string next to the download URL.
//!
//! ```rust
//! use sealed_video::{decrypt_video, encrypt_video};
//!
//! let base64_key = "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA=";
//! let encrypted = encrypt_video("hello world", base64_key).unwrap();
//! assert_eq!(encrypted.as_ref().len(), 12 + 11 + 16);
//!
//! let decrypted = decrypt_video(&encrypted, base64_key).unwrap();
//! assert_eq!(decrypted, b"hello world");
//! ```
//!
//! # Optional features
//!
//! Using optional features `sealed-video` allows to configure different crypto libraries.
//! Be aware that those features are mutually exlusive, if multiple are configured `sealed-video` issues a compiler error.
//!
//! - **`rust-crypto`** *(enabled by default)* — Uses the pure Rust [aes-gcm](https://crates.io/crates/aes-gcm) crate of the RustCrypto project,
//! all AES key sizes are supported.
//! - **`ring`** — Uses the [ring](https://crates.io/crates/ring) library which allows compilation to Wasm32.
//! AES-192-GCM keys are not supported.
//! - **`openssl`** — Uses the [rust-openssl](https://crates.io/crates/openssl) crate, which provides bindings to OpenSSL.
//! Per default the OpenSSL library is locally compiled and then statically linked. The build process requires a C compiler,
//! `perl` (and `perl-core`), and `make`.

#![deny(clippy::missing_panics_doc)]
#![deny(
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
#![warn(
    // missing_docs,
    clippy::doc_markdown,
    clippy::semicolon_if_nothing_returned,
    clippy::single_match_else,
    clippy::inconsistent_struct_constructor,
    clippy::map_unwrap_or,
    clippy::match_same_arms
)]

mod cipher_engine;
mod crypto;
#[cfg(test)]
mod util;

/// the view-video flow around the codec: download info, transport abstraction, decryption
pub mod download;
/// error definitions
pub mod error;
pub mod frame;
pub mod key;
pub mod video;

pub use crypto::cipher_suite::CipherSuite;
pub use video::{decrypt_video, encrypt_video};

#[cfg(test)]
pub mod test_vectors;
