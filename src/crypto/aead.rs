use crate::{crypto::secret::Secret, error::Result, frame::Nonce};

use super::buffer::EncryptionBufferView;

/// AES-GCM sealing as provided by a crypto backend. The associated data is always empty.
pub trait AeadEncrypt {
    /// Encrypts `buffer.cipher_text` in place and writes the authentication tag into `buffer.tag`.
    fn encrypt(&self, secret: &Secret, nonce: &Nonce, buffer: EncryptionBufferView) -> Result<()>;

    /// Draws a fresh nonce from the backend's cryptographically secure random source.
    fn generate_nonce(&self) -> Result<Nonce>;
}

/// AES-GCM opening as provided by a crypto backend. The associated data is always empty.
pub trait AeadDecrypt {
    /// Authenticates and decrypts `io_buffer` (cipher text followed by the tag) in place.
    /// On success the leading `io_buffer.len() - tag_len` bytes hold the plaintext.
    fn decrypt(&self, secret: &Secret, nonce: &Nonce, io_buffer: &mut [u8]) -> Result<()>;
}

#[cfg(test)]
mod test {
    use super::{AeadDecrypt, AeadEncrypt};
    use crate::{
        crypto::{buffer::EncryptionBufferView, cipher_suite::CipherSuite, secret::Secret},
        error::VideoCryptError,
        frame::AUTH_TAG_LEN,
        key::Aead,
        test_vectors::{get_gcm_test_vector, GcmTest},
        util::test::assert_bytes_eq,
    };

    use rand::Rng;
    use test_case::test_case;

    fn aead_for(test_vec: &GcmTest) -> (Aead, Secret) {
        let cipher_suite = CipherSuite::from_key_len(test_vec.key.len()).unwrap();
        (
            Aead::try_from(cipher_suite).unwrap(),
            Secret::new(test_vec.key.clone()),
        )
    }

    #[test]
    fn encrypt_random_frame() {
        let mut data = vec![0u8; 1024 + AUTH_TAG_LEN];
        rand::rng().fill(&mut data[..1024]);
        let aead = Aead::try_from(CipherSuite::AesGcm256).unwrap();
        let secret = Secret::new(vec![7u8; 32]);
        let nonce = aead.generate_nonce().unwrap();

        let view = EncryptionBufferView::split_off_tag(&mut data, AUTH_TAG_LEN).unwrap();
        aead.encrypt(&secret, &nonce, view).unwrap();
    }

    #[test_case("aes_gcm_128_empty"; "aes_gcm_128_empty")]
    #[test_case("aes_gcm_128_zero_block"; "aes_gcm_128_zero_block")]
    #[cfg_attr(not(feature = "ring"), test_case("aes_gcm_192_empty"; "aes_gcm_192_empty"))]
    #[cfg_attr(not(feature = "ring"), test_case("aes_gcm_192_zero_block"; "aes_gcm_192_zero_block"))]
    #[test_case("aes_gcm_256_empty"; "aes_gcm_256_empty")]
    #[test_case("aes_gcm_256_zero_block"; "aes_gcm_256_zero_block")]
    fn encrypt_test_vector(name: &str) {
        let test_vec = get_gcm_test_vector(name);
        let (aead, secret) = aead_for(test_vec);

        let mut io_buffer = test_vec.plain_text.clone();
        io_buffer.resize(test_vec.plain_text.len() + AUTH_TAG_LEN, 0);
        let view = EncryptionBufferView::split_off_tag(&mut io_buffer, AUTH_TAG_LEN).unwrap();

        aead.encrypt(&secret, &test_vec.nonce, view).unwrap();

        let (cipher_text, tag) = io_buffer.split_at(test_vec.plain_text.len());
        assert_bytes_eq(cipher_text, &test_vec.cipher_text);
        assert_bytes_eq(tag, &test_vec.tag);
    }

    #[test_case("aes_gcm_128_empty"; "aes_gcm_128_empty")]
    #[test_case("aes_gcm_128_zero_block"; "aes_gcm_128_zero_block")]
    #[cfg_attr(not(feature = "ring"), test_case("aes_gcm_192_empty"; "aes_gcm_192_empty"))]
    #[cfg_attr(not(feature = "ring"), test_case("aes_gcm_192_zero_block"; "aes_gcm_192_zero_block"))]
    #[test_case("aes_gcm_256_empty"; "aes_gcm_256_empty")]
    #[test_case("aes_gcm_256_zero_block"; "aes_gcm_256_zero_block")]
    fn decrypt_test_vector(name: &str) {
        let test_vec = get_gcm_test_vector(name);
        let (aead, secret) = aead_for(test_vec);

        let mut io_buffer = [test_vec.cipher_text.as_slice(), test_vec.tag.as_slice()].concat();
        aead.decrypt(&secret, &test_vec.nonce, &mut io_buffer).unwrap();

        assert_bytes_eq(
            &io_buffer[..test_vec.plain_text.len()],
            &test_vec.plain_text,
        );
    }

    #[test]
    fn reject_modified_tag() {
        let test_vec = get_gcm_test_vector("aes_gcm_256_zero_block");
        let (aead, secret) = aead_for(test_vec);

        let mut io_buffer = [test_vec.cipher_text.as_slice(), test_vec.tag.as_slice()].concat();
        let last = io_buffer.len() - 1;
        io_buffer[last] ^= 0x01;

        assert_eq!(
            aead.decrypt(&secret, &test_vec.nonce, &mut io_buffer),
            Err(VideoCryptError::AuthenticationFailed)
        );
    }

    #[test]
    fn generated_nonces_differ() {
        let aead = Aead::try_from(CipherSuite::AesGcm128).unwrap();
        let first = aead.generate_nonce().unwrap();
        let second = aead.generate_nonce().unwrap();

        assert_ne!(first, second);
    }
}
