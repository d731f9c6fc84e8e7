//! # Frame codec
//!
//! An encrypted video travels as a single frame:
//!
//! ```text
//! EncryptedFrame := NONCE (12 bytes) || CIPHERTEXT (N bytes) || TAG (16 bytes)
//! ```
//!
//! The cipher text has the same length as the plaintext, the tag is the AES-GCM
//! authentication tag over the cipher text with empty associated data.
//!
//! Two representations are available:
//! - [`EncryptedFrameView`] borrows any byte slice, e.g. a downloaded body
//! - [`EncryptedFrame`] owns its buffer, as returned by encryption
//!
//! For decryption into caller owned memory a buffer implementing [`FrameBuffer`] can be
//! provided. For convenience, this trait has already been implemented for `Vec<u8>`.
//!
//! ## Example
//!
//! ```rust
//! use sealed_video::{
//!     frame::EncryptedFrameView,
//!     key::{KeyCapability, SymmetricKey},
//! };
//!
//! let base64_key = "AAECAwQFBgcICQoLDA0ODw==";
//! let enc_key = SymmetricKey::import(base64_key, KeyCapability::Encrypt).unwrap();
//! let dec_key = SymmetricKey::import(base64_key, KeyCapability::Decrypt).unwrap();
//!
//! let encrypted = enc_key.encrypt("Something secret").unwrap();
//!
//! let mut decrypt_buffer = Vec::new();
//! let frame = EncryptedFrameView::try_new(&encrypted).unwrap();
//! let decrypted = frame.decrypt_into(&dec_key, &mut decrypt_buffer).unwrap();
//!
//! assert_eq!(decrypted, b"Something secret");
//! ```

mod encrypted_frame;
mod frame_buffer;

pub use encrypted_frame::{EncryptedFrame, EncryptedFrameView};
pub use frame_buffer::{FrameBuffer, Truncate};

use crate::error::{Result, VideoCryptError};

/// Length of the nonce prefix in bytes
pub const NONCE_LEN: usize = 12;
/// Length of the trailing authentication tag in bytes
pub const AUTH_TAG_LEN: usize = 16;
/// Length of a frame carrying an empty plaintext
pub const MIN_FRAME_LEN: usize = NONCE_LEN + AUTH_TAG_LEN;

/// AES-GCM nonce, unique per encryption with the same key
pub type Nonce = [u8; NONCE_LEN];

/// Splits an encrypted frame into its nonce and the cipher text with the trailing tag.
/// The second part is returned unmodified, the tag is verified during decryption only.
///
/// Fails with [`VideoCryptError::FrameTooShort`] if the frame cannot hold nonce and tag.
pub fn split_frame(frame: &[u8]) -> Result<(Nonce, &[u8])> {
    if frame.len() < MIN_FRAME_LEN {
        log::debug!(
            "Encrypted frame of {} bytes is shorter than {MIN_FRAME_LEN} bytes",
            frame.len()
        );
        return Err(VideoCryptError::FrameTooShort(frame.len()));
    }

    let (nonce, cipher_text) = frame.split_at(NONCE_LEN);
    let nonce = nonce
        .try_into()
        .map_err(|_| VideoCryptError::InvalidNonceLength(nonce.len()))?;

    Ok((nonce, cipher_text))
}

/// Assembles `nonce || ciphertext_with_tag` into a newly allocated frame.
/// Both inputs are copied, later changes to them do not affect the frame.
///
/// Fails with [`VideoCryptError::InvalidNonceLength`] unless the nonce has exactly 12 bytes
/// and with [`VideoCryptError::FrameTooShort`] if `ciphertext_with_tag` cannot hold a tag.
pub fn join_frame(nonce: &[u8], ciphertext_with_tag: &[u8]) -> Result<EncryptedFrame> {
    if nonce.len() != NONCE_LEN {
        return Err(VideoCryptError::InvalidNonceLength(nonce.len()));
    }

    let mut buffer = Vec::with_capacity(nonce.len() + ciphertext_with_tag.len());
    buffer.extend_from_slice(nonce);
    buffer.extend_from_slice(ciphertext_with_tag);
    log::trace!("Joined encrypted frame of {} bytes", buffer.len());

    EncryptedFrame::try_from(buffer)
}
