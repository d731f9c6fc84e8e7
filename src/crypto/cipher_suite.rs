use std::fmt;

use crate::{
    error::{Result, VideoCryptError},
    frame::{AUTH_TAG_LEN, NONCE_LEN},
};

/// Depicts which AES-GCM variant is used for encryption.
/// The variant follows from the length of the imported key.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum CipherSuite {
    /// AES GCM with a 128 bit key
    AesGcm128,
    /// AES GCM with a 192 bit key, not available with the `ring` backend
    AesGcm192,
    /// AES GCM with a 256 bit key
    AesGcm256,
}

impl CipherSuite {
    /// Selects the cipher suite matching a raw key length in bytes.
    pub fn from_key_len(key_len: usize) -> Result<Self> {
        match key_len {
            16 => Ok(CipherSuite::AesGcm128),
            24 => Ok(CipherSuite::AesGcm192),
            32 => Ok(CipherSuite::AesGcm256),
            len => Err(VideoCryptError::InvalidKeyLength(len)),
        }
    }

    /// Raw key length in bytes
    pub const fn key_len(&self) -> usize {
        match self {
            CipherSuite::AesGcm128 => 16,
            CipherSuite::AesGcm192 => 24,
            CipherSuite::AesGcm256 => 32,
        }
    }

    pub const fn nonce_len(&self) -> usize {
        NONCE_LEN
    }

    pub const fn auth_tag_len(&self) -> usize {
        AUTH_TAG_LEN
    }
}

impl fmt::Display for CipherSuite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CipherSuite::AesGcm128 => "AES-128-GCM",
            CipherSuite::AesGcm192 => "AES-192-GCM",
            CipherSuite::AesGcm256 => "AES-256-GCM",
        };
        f.write_str(name)
    }
}
