use ring::{
    aead::{Aad, LessSafeKey, Nonce as RingNonce, UnboundKey},
    rand::{SecureRandom, SystemRandom},
};

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

impl Aead {
    fn algorithm(&self) -> Result<&'static ring::aead::Algorithm> {
        match self.cipher_suite {
            CipherSuite::AesGcm128 => Ok(&ring::aead::AES_128_GCM),
            CipherSuite::AesGcm256 => Ok(&ring::aead::AES_256_GCM),
            CipherSuite::AesGcm192 => Err(VideoCryptError::UnsupportedCipherSuite),
        }
    }

    fn less_safe_key(&self, secret: &Secret) -> Result<LessSafeKey> {
        let key = secret.key();
        let unbound_key = UnboundKey::new(self.algorithm()?, key)
            .map_err(|_| VideoCryptError::InvalidKeyLength(key.len()))?;

        Ok(LessSafeKey::new(unbound_key))
    }
}

impl AeadEncrypt for Aead {
    fn encrypt(&self, secret: &Secret, nonce: &Nonce, buffer: EncryptionBufferView) -> Result<()> {
        let key = self.less_safe_key(secret)?;
        let auth_tag = key
            .seal_in_place_separate_tag(
                RingNonce::assume_unique_for_key(*nonce),
                Aad::empty(),
                buffer.cipher_text,
            )
            .map_err(|_| VideoCryptError::EncryptionFailure)?;

        buffer.tag.copy_from_slice(auth_tag.as_ref());

        Ok(())
    }

    fn generate_nonce(&self) -> Result<Nonce> {
        let mut nonce = [0u8; NONCE_LEN];
        SystemRandom::new().fill(&mut nonce).map_err(|_| {
            log::debug!("System random source failed");
            VideoCryptError::NonceGenerationFailure
        })?;

        Ok(nonce)
    }
}

impl AeadDecrypt for Aead {
    fn decrypt(&self, secret: &Secret, nonce: &Nonce, io_buffer: &mut [u8]) -> Result<()> {
        if io_buffer.len() < self.cipher_suite.auth_tag_len() {
            return Err(VideoCryptError::InvalidInputLength(io_buffer.len()));
        }

        let key = self.less_safe_key(secret)?;
        key.open_in_place(
            RingNonce::assume_unique_for_key(*nonce),
            Aad::empty(),
            io_buffer,
        )
        .map_err(|_| {
            log::debug!("Tags mismatching, discarding frame.");
            VideoCryptError::AuthenticationFailed
        })?;

        Ok(())
    }
}
