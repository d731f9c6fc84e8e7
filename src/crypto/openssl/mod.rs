//! OpenSSL-based cryptographic operations.

mod aead;

use crate::{crypto::cipher_suite::CipherSuite, error::VideoCryptError};

/// AEAD implementation using the OpenSSL bindings.
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
