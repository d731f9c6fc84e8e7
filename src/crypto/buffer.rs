/// A view into a buffer for AEAD encryption operations.
/// The cipher text is sealed in place, the tag is written behind it.
pub struct EncryptionBufferView<'a> {
    /// The plaintext to encrypt.
    pub cipher_text: &'a mut [u8],
    /// The buffer for the authentication tag.
    pub tag: &'a mut [u8],
}

impl<'a> EncryptionBufferView<'a> {
    /// Splits `io_buffer` into the cipher text and the trailing tag of `tag_len` bytes.
    /// Returns `None` if the buffer cannot hold the tag.
    pub fn split_off_tag(io_buffer: &'a mut [u8], tag_len: usize) -> Option<Self> {
        let cipher_text_len = io_buffer.len().checked_sub(tag_len)?;
        let (cipher_text, tag) = io_buffer.split_at_mut(cipher_text_len);

        Some(Self { cipher_text, tag })
    }
}

#[cfg(test)]
mod test {
    use super::EncryptionBufferView;

    #[test]
    fn split_encryption_buffer() {
        let mut buffer = [5u8, 6, 7, 8, 9, 0, 0];
        let view = EncryptionBufferView::split_off_tag(&mut buffer, 2).unwrap();

        assert_eq!(view.cipher_text, [5, 6, 7, 8, 9]);
        assert_eq!(view.tag.len(), 2);
    }

    #[test]
    fn reject_buffer_shorter_than_tag() {
        let mut buffer = [0u8; 3];
        assert!(EncryptionBufferView::split_off_tag(&mut buffer, 4).is_none());
    }
}
