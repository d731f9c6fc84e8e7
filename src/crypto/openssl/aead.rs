use openssl::symm::Cipher;

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

impl AeadEncrypt for Aead {
    fn encrypt(&self, secret: &Secret, nonce: &Nonce, buffer: EncryptionBufferView) -> Result<()> {
        // TODO this allocates a new vec, use the openssl Crypter API to seal in place
        let out = openssl::symm::encrypt_aead(
            self.cipher_suite.into(),
            secret.key(),
            Some(nonce),
            &[],
            buffer.cipher_text,
            buffer.tag,
        )
        .map_err(|err| {
            log::debug!("Encryption failed, OpenSSL error stack: {err}");
            VideoCryptError::EncryptionFailure
        })?;

        debug_assert!(
            out.len() == buffer.cipher_text.len(),
            "For a symmetric encryption it is given that the output has the same length as the input"
        );
        buffer.cipher_text.copy_from_slice(&out);

        Ok(())
    }

    fn generate_nonce(&self) -> Result<Nonce> {
        let mut nonce = [0u8; NONCE_LEN];
        openssl::rand::rand_bytes(&mut nonce).map_err(|err| {
            log::debug!("Random source failed, OpenSSL error stack: {err}");
            VideoCryptError::NonceGenerationFailure
        })?;

        Ok(nonce)
    }
}

impl AeadDecrypt for Aead {
    fn decrypt(&self, secret: &Secret, nonce: &Nonce, io_buffer: &mut [u8]) -> Result<()> {
        let tag_len = self.cipher_suite.auth_tag_len();
        if io_buffer.len() < tag_len {
            return Err(VideoCryptError::InvalidInputLength(io_buffer.len()));
        }

        let encrypted_len = io_buffer.len() - tag_len;
        let (encrypted, tag) = io_buffer.split_at(encrypted_len);

        let out = openssl::symm::decrypt_aead(
            self.cipher_suite.into(),
            secret.key(),
            Some(nonce),
            &[],
            encrypted,
            tag,
        )
        .map_err(|err| {
            log::debug!("Decryption failed, OpenSSL error stack: {err}");
            VideoCryptError::AuthenticationFailed
        })?;

        debug_assert!(
            out.len() == encrypted_len,
            "For a symmetric encryption it is given that the output has the same length as the input"
        );
        io_buffer[..encrypted_len].copy_from_slice(&out);

        Ok(())
    }
}

impl From<CipherSuite> for Cipher {
    fn from(cipher_suite: CipherSuite) -> Self {
        match cipher_suite {
            CipherSuite::AesGcm128 => Cipher::aes_128_gcm(),
            CipherSuite::AesGcm192 => Cipher::aes_192_gcm(),
            CipherSuite::AesGcm256 => Cipher::aes_256_gcm(),
        }
    }
}
