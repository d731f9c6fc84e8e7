use crate::{
    crypto::aead::AeadDecrypt,
    error::{Result, VideoCryptError},
    key::symmetric_key::SymmetricKey,
};

use super::{split_frame, FrameBuffer, Nonce, NONCE_LEN};

/// A view on a buffer holding an encrypted frame, e.g. a downloaded video.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncryptedFrameView<'buf> {
    nonce: Nonce,
    cipher_text: &'buf [u8],
}

impl<'ibuf> EncryptedFrameView<'ibuf> {
    /// Creates a view on `nonce || cipher text || tag`.
    /// Fails with [`VideoCryptError::FrameTooShort`] if the data cannot hold nonce and tag.
    pub fn try_new<D>(data: &'ibuf D) -> Result<Self>
    where
        D: AsRef<[u8]> + ?Sized,
    {
        let (nonce, cipher_text) = split_frame(data.as_ref())?;
        log::trace!(
            "EncryptedFrame with cipher text of {} bytes",
            cipher_text.len()
        );

        Ok(Self { nonce, cipher_text })
    }

    pub fn nonce(&self) -> &Nonce {
        &self.nonce
    }

    /// Cipher text followed by the authentication tag
    pub fn cipher_text(&self) -> &'ibuf [u8] {
        self.cipher_text
    }

    /// Decrypts the frame into a newly allocated plaintext buffer.
    pub fn decrypt<A>(&self, key: &SymmetricKey<A>) -> Result<Vec<u8>>
    where
        A: AeadDecrypt,
    {
        key.decrypt(&self.nonce, self.cipher_text)
    }

    /// Decrypts the frame into the provided buffer, returning the plaintext part of it.
    pub fn decrypt_into<'obuf, A, F>(
        &self,
        key: &SymmetricKey<A>,
        buffer: &'obuf mut F,
    ) -> Result<&'obuf [u8]>
    where
        A: AeadDecrypt,
        F: FrameBuffer,
    {
        key.decrypt_into(&self.nonce, self.cipher_text, buffer)
    }
}

impl<'buf> TryFrom<&'buf [u8]> for EncryptedFrameView<'buf> {
    type Error = VideoCryptError;

    fn try_from(data: &'buf [u8]) -> Result<Self> {
        EncryptedFrameView::try_new(data)
    }
}

impl<'buf> TryFrom<&'buf Vec<u8>> for EncryptedFrameView<'buf> {
    type Error = VideoCryptError;

    fn try_from(data: &'buf Vec<u8>) -> Result<Self> {
        EncryptedFrameView::try_new(data)
    }
}

/// An encrypted frame owning its buffer, as produced by encryption.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncryptedFrame {
    nonce: Nonce,
    buffer: Vec<u8>,
}

impl EncryptedFrame {
    /// Copies `nonce || cipher text || tag` into a new frame.
    /// Fails with [`VideoCryptError::FrameTooShort`] if the data cannot hold nonce and tag.
    pub fn try_new<D>(data: D) -> Result<Self>
    where
        D: AsRef<[u8]>,
    {
        EncryptedFrame::try_from(data.as_ref().to_vec())
    }

    pub fn nonce(&self) -> &Nonce {
        &self.nonce
    }

    /// Cipher text followed by the authentication tag
    pub fn cipher_text(&self) -> &[u8] {
        &self.buffer[NONCE_LEN..]
    }

    pub fn as_view(&self) -> EncryptedFrameView<'_> {
        EncryptedFrameView {
            nonce: self.nonce,
            cipher_text: self.cipher_text(),
        }
    }

    /// Decrypts the frame into a newly allocated plaintext buffer.
    pub fn decrypt<A>(&self, key: &SymmetricKey<A>) -> Result<Vec<u8>>
    where
        A: AeadDecrypt,
    {
        self.as_view().decrypt(key)
    }

    /// Decrypts the frame into the provided buffer, returning the plaintext part of it.
    pub fn decrypt_into<'obuf, A, F>(
        &self,
        key: &SymmetricKey<A>,
        buffer: &'obuf mut F,
    ) -> Result<&'obuf [u8]>
    where
        A: AeadDecrypt,
        F: FrameBuffer,
    {
        self.as_view().decrypt_into(key, buffer)
    }

    /// Returns the complete frame as bytes, e.g. for upload.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }
}

impl TryFrom<Vec<u8>> for EncryptedFrame {
    type Error = VideoCryptError;

    fn try_from(buffer: Vec<u8>) -> Result<Self> {
        let (nonce, _) = split_frame(&buffer)?;

        Ok(Self { nonce, buffer })
    }
}

impl From<EncryptedFrameView<'_>> for EncryptedFrame {
    fn from(view: EncryptedFrameView<'_>) -> Self {
        let mut buffer = Vec::with_capacity(NONCE_LEN + view.cipher_text.len());
        buffer.extend_from_slice(&view.nonce);
        buffer.extend_from_slice(view.cipher_text);

        Self {
            nonce: view.nonce,
            buffer,
        }
    }
}

impl AsRef<[u8]> for EncryptedFrame {
    fn as_ref(&self) -> &[u8] {
        self.buffer.as_slice()
    }
}
