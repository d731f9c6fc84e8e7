//! One shot helpers taking the key as it is transported, a base64 string.

use crate::{
    error::Result,
    frame::EncryptedFrame,
    key::{import_key, KeyCapability},
};

/// Imports the base64 key for decryption and opens a complete encrypted video frame.
///
/// May fail with every key import, framing and decryption error, see [`crate::error::VideoCryptError`].
pub fn decrypt_video<D>(encrypted: D, base64_key: &str) -> Result<Vec<u8>>
where
    D: AsRef<[u8]>,
{
    let encrypted = encrypted.as_ref();
    log::debug!("Decrypting video of {} bytes", encrypted.len());

    let key = import_key(base64_key, KeyCapability::Decrypt)?;
    key.decrypt_frame(encrypted)
}

/// Imports the base64 key for encryption and seals the video under a fresh nonce.
pub fn encrypt_video<P>(plaintext: P, base64_key: &str) -> Result<EncryptedFrame>
where
    P: AsRef<[u8]>,
{
    let plaintext = plaintext.as_ref();
    log::debug!("Encrypting video of {} bytes", plaintext.len());

    let key = import_key(base64_key, KeyCapability::Encrypt)?;
    key.encrypt(plaintext)
}
