use std::fmt;

use base64::{
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    Engine,
};
use zeroize::Zeroizing;

use crate::{
    crypto::{
        aead::{AeadDecrypt, AeadEncrypt},
        buffer::EncryptionBufferView,
        cipher_suite::CipherSuite,
        secret::Secret,
    },
    error::{Result, VideoCryptError},
    frame::Nonce,
};

// standard alphabet, padding optional like the browser's `atob`
const BASE64_KEY: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// The single operation an imported key may be used for.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum KeyCapability {
    /// sealing plaintext into an encrypted frame
    Encrypt,
    /// opening an encrypted frame
    Decrypt,
}

impl fmt::Display for KeyCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyCapability::Encrypt => f.write_str("encrypt"),
            KeyCapability::Decrypt => f.write_str("decrypt"),
        }
    }
}

/// An imported AES-GCM key, restricted to one [`KeyCapability`].
///
/// The raw key bytes cannot be read back, they are redacted in the `Debug` output and
/// wiped when the key is dropped.
///
/// The key is generic over:
/// - `A`: The AEAD implementation of the selected crypto backend
#[derive(Clone, Debug)]
pub struct SymmetricKey<A> {
    pub(crate) aead: A,
    pub(crate) secret: Secret,
    pub(crate) cipher_suite: CipherSuite,
    pub(crate) capability: KeyCapability,
}

impl<A> SymmetricKey<A>
where
    A: TryFrom<CipherSuite, Error = VideoCryptError>,
{
    /// Imports a key transported as a standard base64 string.
    /// Surrounding whitespace is ignored, padding is optional.
    ///
    /// May fail with
    /// - [`VideoCryptError::InvalidKeyEncoding`]
    /// - [`VideoCryptError::InvalidKeyLength`]
    /// - [`VideoCryptError::UnsupportedCipherSuite`]
    pub fn import(base64_key: &str, capability: KeyCapability) -> Result<Self> {
        let key_material = BASE64_KEY
            .decode(base64_key.trim())
            .map(Zeroizing::new)
            .map_err(|err| {
                log::debug!("Failed to decode base64 key: {err}");
                VideoCryptError::InvalidKeyEncoding
            })?;

        Self::from_raw(key_material.as_slice(), capability)
    }

    /// Imports raw key bytes of 16, 24 or 32 bytes, selecting AES-128/192/256-GCM.
    ///
    /// May fail with
    /// - [`VideoCryptError::InvalidKeyLength`]
    /// - [`VideoCryptError::UnsupportedCipherSuite`]
    pub fn from_raw<M>(key_material: M, capability: KeyCapability) -> Result<Self>
    where
        M: AsRef<[u8]>,
    {
        let key_material = key_material.as_ref();
        let cipher_suite = CipherSuite::from_key_len(key_material.len())?;
        let aead = A::try_from(cipher_suite)?;
        log::trace!("Imported {cipher_suite} key to {capability}");

        Ok(Self {
            aead,
            secret: Secret::new(key_material.to_vec()),
            cipher_suite,
            capability,
        })
    }
}

impl<A> SymmetricKey<A> {
    /// Returns the operation this key was imported for.
    pub fn capability(&self) -> KeyCapability {
        self.capability
    }

    /// Returns the cipher suite variant of this key.
    pub fn cipher_suite(&self) -> CipherSuite {
        self.cipher_suite
    }

    pub(crate) fn ensure_capability(&self, expected: KeyCapability) -> Result<()> {
        if self.capability == expected {
            Ok(())
        } else {
            log::debug!(
                "Refusing to {expected} with a key imported to {}",
                self.capability
            );
            Err(VideoCryptError::WrongKeyCapability {
                expected,
                actual: self.capability,
            })
        }
    }
}

impl<A> SymmetricKey<A>
where
    A: AeadEncrypt,
{
    pub(crate) fn seal(&self, nonce: &Nonce, buffer: EncryptionBufferView) -> Result<()> {
        self.ensure_capability(KeyCapability::Encrypt)?;
        self.aead.encrypt(&self.secret, nonce, buffer)
    }

    pub(crate) fn generate_nonce(&self) -> Result<Nonce> {
        self.aead.generate_nonce()
    }
}

impl<A> SymmetricKey<A>
where
    A: AeadDecrypt,
{
    pub(crate) fn open(&self, nonce: &Nonce, io_buffer: &mut [u8]) -> Result<()> {
        self.ensure_capability(KeyCapability::Decrypt)?;
        self.aead.decrypt(&self.secret, nonce, io_buffer)
    }
}
