pub mod test {
    use pretty_assertions::assert_eq;

    /// Compares byte slices by their hex rendering.
    #[allow(clippy::missing_panics_doc)]
    pub fn assert_bytes_eq(actual: &[u8], expected: &[u8]) {
        assert_eq!(hex::encode(actual), hex::encode(expected));
    }
}
