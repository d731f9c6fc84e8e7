use crate::error::Result;

/// Memory a frame is encrypted or decrypted into.
pub trait FrameBuffer {
    type BufferSlice: AsMut<[u8]> + AsRef<[u8]> + Truncate;
    fn allocate<'buf>(&'buf mut self, size: usize) -> Result<&'buf mut Self::BufferSlice>;
}

/// Shrinks an allocated buffer, e.g. to drop the authentication tag after decryption.
pub trait Truncate {
    fn truncate(&mut self, size: usize);
}

impl FrameBuffer for Vec<u8> {
    type BufferSlice = Self;
    fn allocate<'buf>(&'buf mut self, size: usize) -> Result<&'buf mut Self::BufferSlice> {
        log::trace!("Allocating buffer of size {size}");
        self.resize(size, 0);
        Ok(self)
    }
}

impl Truncate for Vec<u8> {
    fn truncate(&mut self, size: usize) {
        self.truncate(size);
    }
}
