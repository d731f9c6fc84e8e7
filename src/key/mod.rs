//! Key import as used by the video download flow: a base64 string, as delivered next to the
//! download URL, becomes a [`SymmetricKey`] usable for exactly one [`KeyCapability`].

/// Generic key implementation
pub mod symmetric_key;

pub use symmetric_key::KeyCapability;

use crate::error::Result;

// Type aliases for the selected crypto backend
cfg_if::cfg_if! {
    if #[cfg(all(feature = "rust-crypto", not(feature = "ring"), not(feature = "openssl")))] {
        /// AEAD implementation using the RustCrypto crypto backend.
        pub type Aead = crate::crypto::rust_crypto::Aead;
        /// Symmetric key using the RustCrypto backend.
        pub type SymmetricKey = symmetric_key::SymmetricKey<Aead>;
    } else if #[cfg(all(feature = "ring", not(feature = "rust-crypto"), not(feature = "openssl")))] {
        /// AEAD implementation using the ring crypto backend.
        pub type Aead = crate::crypto::ring::Aead;
        /// Symmetric key using the ring crypto backend.
        pub type SymmetricKey = symmetric_key::SymmetricKey<Aead>;
    } else if #[cfg(all(feature = "openssl", not(feature = "rust-crypto"), not(feature = "ring")))] {
        /// AEAD implementation using the OpenSSL crypto backend.
        pub type Aead = crate::crypto::openssl::Aead;
        /// Symmetric key using the OpenSSL crypto backend.
        pub type SymmetricKey = symmetric_key::SymmetricKey<Aead>;
    } else {
        /// AEAD implementation using the RustCrypto crypto backend.
        pub type Aead = crate::crypto::rust_crypto::Aead;
        /// Symmetric key using the RustCrypto backend.
        pub type SymmetricKey = symmetric_key::SymmetricKey<Aead>;
    }
}

/// Imports a base64 encoded key for the given capability with the configured crypto backend,
/// see [`symmetric_key::SymmetricKey::import`].
pub fn import_key(base64_key: &str, capability: KeyCapability) -> Result<SymmetricKey> {
    SymmetricKey::import(base64_key, capability)
}
