//! AES-GCM transforms of a [`SymmetricKey`].
//!
//! Both directions are single shot and stateless. Encryption draws a fresh nonce for every
//! call, it can not be supplied by the caller. Decryption is all or nothing, on any failure
//! no plaintext is handed out.

use crate::{
    crypto::{
        aead::{AeadDecrypt, AeadEncrypt},
        buffer::EncryptionBufferView,
    },
    error::{Result, VideoCryptError},
    frame::{
        join_frame, split_frame, EncryptedFrame, EncryptedFrameView, FrameBuffer, Nonce, Truncate,
    },
    key::{symmetric_key::SymmetricKey, KeyCapability},
};

impl<A> SymmetricKey<A>
where
    A: AeadEncrypt,
{
    /// Encrypts the plaintext under a fresh random nonce, returning `nonce || cipher text || tag`.
    ///
    /// May fail with
    /// - [`VideoCryptError::WrongKeyCapability`]
    /// - [`VideoCryptError::NonceGenerationFailure`]
    pub fn encrypt<P>(&self, plaintext: P) -> Result<EncryptedFrame>
    where
        P: AsRef<[u8]>,
    {
        let plaintext = plaintext.as_ref();
        self.ensure_capability(KeyCapability::Encrypt)?;

        let nonce = self.generate_nonce()?;
        let tag_len = self.cipher_suite.auth_tag_len();
        log::trace!(
            "Encrypting {} bytes with {}",
            plaintext.len(),
            self.cipher_suite
        );

        let mut io_buffer = Vec::with_capacity(plaintext.len() + tag_len);
        io_buffer.extend_from_slice(plaintext);
        io_buffer.resize(plaintext.len() + tag_len, 0);

        let buffer_view = EncryptionBufferView::split_off_tag(&mut io_buffer, tag_len)
            .ok_or(VideoCryptError::EncryptionFailure)?;
        self.seal(&nonce, buffer_view)?;

        join_frame(&nonce, &io_buffer)
    }

    /// Encrypts the plaintext like [`SymmetricKey::encrypt`], but writes the frame into the provided buffer.
    pub fn encrypt_into<'obuf, P, F>(
        &self,
        plaintext: P,
        buffer: &'obuf mut F,
    ) -> Result<EncryptedFrameView<'obuf>>
    where
        P: AsRef<[u8]>,
        F: FrameBuffer,
    {
        let plaintext = plaintext.as_ref();
        self.ensure_capability(KeyCapability::Encrypt)?;

        let nonce = self.generate_nonce()?;
        let nonce_len = self.cipher_suite.nonce_len();
        let tag_len = self.cipher_suite.auth_tag_len();
        let frame_len = nonce_len + plaintext.len() + tag_len;

        log::trace!("Trying to allocate frame buffer of size {frame_len}");
        let io_buffer: &'obuf mut [u8] = buffer.allocate(frame_len)?.as_mut();

        let (nonce_buffer, remain) = io_buffer.split_at_mut(nonce_len);
        nonce_buffer.copy_from_slice(&nonce);
        remain[..plaintext.len()].copy_from_slice(plaintext);

        let buffer_view = EncryptionBufferView::split_off_tag(remain, tag_len)
            .ok_or(VideoCryptError::EncryptionFailure)?;
        self.seal(&nonce, buffer_view)?;

        let io_buffer: &'obuf [u8] = io_buffer;
        EncryptedFrameView::try_new(io_buffer)
    }
}

impl<A> SymmetricKey<A>
where
    A: AeadDecrypt,
{
    /// Authenticates and decrypts the cipher text (followed by its 16 byte tag) with the given nonce.
    /// The returned plaintext is 16 bytes shorter than the input.
    ///
    /// May fail with
    /// - [`VideoCryptError::WrongKeyCapability`]
    /// - [`VideoCryptError::InvalidInputLength`]
    /// - [`VideoCryptError::AuthenticationFailed`]
    pub fn decrypt(&self, nonce: &Nonce, ciphertext_with_tag: &[u8]) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.decrypt_into(nonce, ciphertext_with_tag, &mut buffer)?;

        Ok(buffer)
    }

    /// Decrypts like [`SymmetricKey::decrypt`], but writes the plaintext into the provided buffer.
    /// On failure the buffer is truncated to zero, no unauthenticated bytes remain in it.
    pub fn decrypt_into<'obuf, F>(
        &self,
        nonce: &Nonce,
        ciphertext_with_tag: &[u8],
        buffer: &'obuf mut F,
    ) -> Result<&'obuf [u8]>
    where
        F: FrameBuffer,
    {
        self.ensure_capability(KeyCapability::Decrypt)?;

        let tag_len = self.cipher_suite.auth_tag_len();
        let cipher_text_len = ciphertext_with_tag.len();
        if cipher_text_len < tag_len {
            log::debug!("Cipher text of {cipher_text_len} bytes cannot hold a tag");
            return Err(VideoCryptError::InvalidInputLength(cipher_text_len));
        }
        let plain_text_len = cipher_text_len - tag_len;

        log::trace!(
            "Decrypting {cipher_text_len} bytes with {}",
            self.cipher_suite
        );
        let io_buffer = buffer.allocate(cipher_text_len)?;
        io_buffer.as_mut().copy_from_slice(ciphertext_with_tag);

        if let Err(err) = self.open(nonce, io_buffer.as_mut()) {
            io_buffer.truncate(0);
            return Err(err);
        }
        io_buffer.truncate(plain_text_len);

        let io_buffer: &'obuf F::BufferSlice = io_buffer;
        Ok(io_buffer.as_ref())
    }

    /// Splits a complete encrypted frame and decrypts it.
    ///
    /// May fail with
    /// - [`VideoCryptError::FrameTooShort`]
    /// - [`VideoCryptError::WrongKeyCapability`]
    /// - [`VideoCryptError::AuthenticationFailed`]
    pub fn decrypt_frame<D>(&self, frame: D) -> Result<Vec<u8>>
    where
        D: AsRef<[u8]>,
    {
        let (nonce, ciphertext_with_tag) = split_frame(frame.as_ref())?;
        self.decrypt(&nonce, ciphertext_with_tag)
    }
}
