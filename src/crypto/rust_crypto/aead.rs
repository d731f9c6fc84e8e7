//! AEAD implementation for RustCrypto backend.

use super::Aead;
use crate::{
    crypto::{
        aead::{AeadDecrypt, AeadEncrypt},
        buffer::EncryptionBufferView,
        cipher_suite::CipherSuite,
        secret::Secret,
    },
    error::{Result, VideoCryptError},
    frame::{Nonce, NONCE_LEN},
};
use aes_gcm::{
    aead::{consts::U12, generic_array::GenericArray, AeadCore, AeadInPlace, KeyInit},
    aes::Aes192,
    Aes128Gcm, Aes256Gcm, AesGcm,
};

type Aes192Gcm = AesGcm<Aes192, U12>;

impl AeadEncrypt for Aead {
    fn encrypt(&self, secret: &Secret, nonce: &Nonce, buffer: EncryptionBufferView) -> Result<()> {
        match self.cipher_suite {
            CipherSuite::AesGcm128 => encrypt_in_place_detached::<Aes128Gcm>(secret, nonce, buffer),
            CipherSuite::AesGcm192 => encrypt_in_place_detached::<Aes192Gcm>(secret, nonce, buffer),
            CipherSuite::AesGcm256 => encrypt_in_place_detached::<Aes256Gcm>(secret, nonce, buffer),
        }
    }

    fn generate_nonce(&self) -> Result<Nonce> {
        let mut nonce = [0u8; NONCE_LEN];
        getrandom::getrandom(&mut nonce).map_err(|err| {
            log::debug!("Random source failed: {err}");
            VideoCryptError::NonceGenerationFailure
        })?;

        Ok(nonce)
    }
}

impl AeadDecrypt for Aead {
    fn decrypt(&self, secret: &Secret, nonce: &Nonce, io_buffer: &mut [u8]) -> Result<()> {
        let tag_len = self.cipher_suite.auth_tag_len();
        match self.cipher_suite {
            CipherSuite::AesGcm128 => {
                decrypt_in_place_detached::<Aes128Gcm>(secret, nonce, io_buffer, tag_len)
            }
            CipherSuite::AesGcm192 => {
                decrypt_in_place_detached::<Aes192Gcm>(secret, nonce, io_buffer, tag_len)
            }
            CipherSuite::AesGcm256 => {
                decrypt_in_place_detached::<Aes256Gcm>(secret, nonce, io_buffer, tag_len)
            }
        }
    }
}

fn encrypt_in_place_detached<A>(
    secret: &Secret,
    nonce: &Nonce,
    buffer_view: EncryptionBufferView,
) -> Result<()>
where
    A: AeadInPlace + AeadCore<NonceSize = U12> + KeyInit,
{
    let algo = init_from_secret::<A>(secret)?;
    let tag = algo
        .encrypt_in_place_detached(GenericArray::from_slice(nonce), &[], buffer_view.cipher_text)
        .map_err(|err| {
            log::debug!("Encryption failed: {err}");
            VideoCryptError::EncryptionFailure
        })?;
    buffer_view.tag.copy_from_slice(tag.as_slice());

    Ok(())
}

fn decrypt_in_place_detached<A>(
    secret: &Secret,
    nonce: &Nonce,
    io_buffer: &mut [u8],
    tag_len: usize,
) -> Result<()>
where
    A: AeadInPlace + AeadCore<NonceSize = U12> + KeyInit,
{
    if io_buffer.len() < tag_len {
        return Err(VideoCryptError::InvalidInputLength(io_buffer.len()));
    }
    let encrypted_len = io_buffer.len() - tag_len;
    let (encrypted, tag) = io_buffer.split_at_mut(encrypted_len);

    let algo = init_from_secret::<A>(secret)?;
    algo.decrypt_in_place_detached(
        GenericArray::from_slice(nonce),
        &[],
        encrypted,
        GenericArray::from_slice(tag),
    )
    .map_err(|err| {
        log::debug!("Decryption failed: {err}");
        VideoCryptError::AuthenticationFailed
    })
}

fn init_from_secret<A>(secret: &Secret) -> Result<A>
where
    A: KeyInit,
{
    let key = secret.key();
    A::new_from_slice(key).map_err(|_| VideoCryptError::InvalidKeyLength(key.len()))
}
