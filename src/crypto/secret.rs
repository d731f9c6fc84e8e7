use std::fmt;

use zeroize::Zeroizing;

/// Raw AES key material, wiped from memory on drop.
#[derive(Clone)]
pub struct Secret {
    key: Zeroizing<Vec<u8>>,
}

impl Secret {
    pub(crate) fn new(key: Vec<u8>) -> Self {
        Self {
            key: Zeroizing::new(key),
        }
    }

    pub(crate) fn key(&self) -> &[u8] {
        self.key.as_slice()
    }
}

// key bytes must never end up in a log line
impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secret")
            .field("key_len", &self.key.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod test {
    use super::Secret;

    #[test]
    fn debug_output_redacts_key() {
        let secret = Secret::new(vec![0xAB; 16]);
        let debug = format!("{secret:?}");

        assert!(debug.contains("key_len: 16"));
        assert!(!debug.contains("171"));
        assert!(!debug.to_lowercase().contains("ab"));
    }
}
