use crate::key::KeyCapability;

/// Represents either success(T) or an failure ([`VideoCryptError`])
pub type Result<T> = std::result::Result<T, VideoCryptError>;

/// Represents an error which has occured in the sealed-video library.
///
/// None of the failures are retried internally, a caller treats any of them as
/// "video unavailable" and may start the whole fetch and decrypt flow again.
#[derive(PartialEq, Eq, Debug, thiserror::Error)]
pub enum VideoCryptError {
    /// the key string is not valid standard base64
    #[error("Key is not valid base64")]
    InvalidKeyEncoding,

    /// the decoded key is not 16, 24 or 32 bytes long
    #[error("Key of {0} bytes is not a valid AES key length")]
    InvalidKeyLength(usize),

    /// the key was imported for the other operation
    #[error("Key imported to {actual} cannot be used to {expected}")]
    WrongKeyCapability {
        /// capability the operation needs
        expected: KeyCapability,
        /// capability the key was imported with
        actual: KeyCapability,
    },

    /// an encrypted frame is shorter than nonce and tag together
    #[error("Encrypted frame of {0} bytes is too short")]
    FrameTooShort(usize),

    /// a nonce which is not exactly 12 bytes long
    #[error("Nonce of {0} bytes has an invalid length")]
    InvalidNonceLength(usize),

    /// cipher text is shorter than the authentication tag
    #[error("Cipher text of {0} bytes is shorter than the authentication tag")]
    InvalidInputLength(usize),

    /// the authentication tag did not verify, the frame is corrupted, tampered or the key does not match
    #[error("Failed to authenticate encrypted frame")]
    AuthenticationFailed,

    /// Failed to encrypt a frame with AEAD
    #[error("Failed to Encrypt")]
    EncryptionFailure,

    /// the random source could not provide a nonce
    #[error("Unable to generate a nonce")]
    NonceGenerationFailure,

    /// The cipher suite is not supported by the current crypto backend
    #[error("Cipher suite is not supported by this backend")]
    UnsupportedCipherSuite,

    /// the download info payload could not be parsed
    #[error("Invalid download info: {0}")]
    InvalidDownloadInfo(String),

    /// the video source failed to deliver download info or the encrypted video
    #[error("Transport failure: {0}")]
    Transport(String),
}
