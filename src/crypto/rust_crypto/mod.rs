//! RustCrypto-based cryptographic operations.
//!
//! This module uses pure Rust implementations from the RustCrypto project.

mod aead;

use crate::{crypto::cipher_suite::CipherSuite, error::VideoCryptError};

/// AEAD implementation using RustCrypto libraries.
///
/// Supports all AES-GCM key sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aead {
    cipher_suite: CipherSuite,
}

impl TryFrom<CipherSuite> for Aead {
    type Error = VideoCryptError;

    fn try_from(cipher_suite: CipherSuite) -> Result<Self, Self::Error> {
        Ok(Self { cipher_suite })
    }
}
