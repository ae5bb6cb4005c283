//! Low-level byte scanning utilities

/// Find the first null byte in a slice.
///
/// Text chunk bodies use a null byte to terminate the keyword; absence of
/// one is a parse failure for that chunk, not for the container.
pub fn find_nul(bytes: &[u8]) -> Option<usize> {
    bytes.iter().position(|&b| b == 0)
}
