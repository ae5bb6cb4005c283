//! # pngmeta-reader
//!
//! A reader for the text metadata embedded in PNG files.
//! Recovers `tEXt` (verbatim) and `zTXt` (deflate-compressed) chunks into a
//! single ordered document, keyed the way tools like Stable Diffusion
//! front-ends write their generation parameters.

pub mod pngmeta;

// Re-export the main types for convenience
pub use pngmeta::{
    error::{PngMetaError, Result},
    extract_from_file, extract_text_chunks, inflate_text_payload, is_png, read_signature,
    models::{ChunkType, MetadataDocument, RawChunk, TextField},
    ChunkReader, TextFields, PNG_SIGNATURE,
};
