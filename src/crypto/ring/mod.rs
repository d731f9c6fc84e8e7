//! Ring backend implementation for AES-GCM operations.

mod aead;

use crate::{crypto::cipher_suite::CipherSuite, error::VideoCryptError};

/// AEAD implementation using the ring library.
///
/// Supports AES-128-GCM and AES-256-GCM only (ring does not provide AES-192).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aead {
    cipher_suite: CipherSuite,
}

impl TryFrom<CipherSuite> for Aead {
    type Error = VideoCryptError;

    fn try_from(cipher_suite: CipherSuite) -> Result<Self, Self::Error> {
        match cipher_suite {
            CipherSuite::AesGcm128 | CipherSuite::AesGcm256 => Ok(Self { cipher_suite }),
            CipherSuite::AesGcm192 => Err(VideoCryptError::UnsupportedCipherSuite),
        }
    }
}
