//! Custom error types for the pngmeta-reader crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum PngMetaError {
    /// An error originating from I/O operations.
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    /// The stream does not begin with the 8-byte PNG signature.
    #[error("Not a PNG file: signature mismatch")]
    NotPng,

    /// The container held no extractable text chunks.
    #[error("No text metadata found")]
    NoMetadata,

    /// A compressed text body is too small to hold a keyword, method byte
    /// and payload.
    #[error("Compressed text body too short: {len} bytes")]
    FieldTooShort { len: usize },

    /// A text body is missing the null byte that terminates its keyword.
    #[error("Missing keyword terminator in text chunk body")]
    MissingKeywordTerminator,

    /// The compression method byte is not 0 (deflate), the only defined value.
    #[error("Unsupported compression method: {0}")]
    UnsupportedCompressionMethod(u8),

    /// The deflate stream could not be decoded to completion, often due to
    /// corrupted data.
    #[error("Decompression failed: {0}")]
    DecompressionError(String),
}

/// A convenience `Result` type alias using the crate's `PngMetaError` type.
pub type Result<T> = std::result::Result<T, PngMetaError>;
