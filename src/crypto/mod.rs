pub mod aead;
pub mod buffer;
pub mod cipher_suite;
pub mod secret;

cfg_if::cfg_if! {
if #[cfg(all(feature = "rust-crypto", not(feature = "ring"), not(feature = "openssl")))] {
    pub(crate) mod rust_crypto;
}
else if #[cfg(all(feature = "ring", not(feature = "rust-crypto"), not(feature = "openssl")))] {
    pub(crate) mod ring;
}
else if #[cfg(all(feature = "openssl", not(feature = "rust-crypto"), not(feature = "ring")))] {
    pub(crate) mod openssl;
} else {
    compile_error!("Exactly one crypto backend has to be configured: `rust-crypto`, `ring` or `openssl`.");
    pub(crate) mod rust_crypto;
}
}
