//! Core PNG text-metadata extraction module

pub mod error;
pub mod models;
mod chunks;
mod inflate;
mod text;
mod utils;

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use log::{debug, info, warn};

use error::{PngMetaError, Result};
use models::{ChunkType, MetadataDocument, TextField};

pub use chunks::ChunkReader;
pub use inflate::inflate_text_payload;

/// The fixed 8-byte signature that opens every PNG stream.
pub const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Consume 8 bytes from the source and test them against the PNG signature.
///
/// A short read counts as a mismatch; any other I/O failure propagates.
pub fn read_signature(source: &mut impl Read) -> Result<bool> {
    let mut sig = [0u8; 8];
    match source.read_exact(&mut sig) {
        Ok(()) => Ok(sig == PNG_SIGNATURE),
        Err(e) if e.kind() == ErrorKind::UnexpectedEof => Ok(false),
        Err(e) => Err(e.into()),
    }
}

/// Check whether the file at `path` starts with the PNG signature.
///
/// This is the pre-filter used to reject candidates cheaply before
/// committing to a full scan; any failure to open or read counts as
/// "not a PNG".
pub fn is_png(path: impl AsRef<Path>) -> bool {
    File::open(path)
        .ok()
        .and_then(|mut file| read_signature(&mut file).ok())
        .unwrap_or(false)
}

/// Extract all text metadata from an open PNG byte source.
///
/// The source must be positioned at the start of the stream, and is only
/// ever advanced. Scanning stops at the `IEND` terminator or wherever the
/// stream runs short; everything gathered up to that point is kept.
///
/// # Errors
/// Returns an error if:
/// - The first 8 bytes are not the PNG signature (nothing further is read)
/// - No chunk contributed an entry
/// - A read fails for a reason other than reaching end-of-stream
pub fn extract_text_chunks(source: &mut impl Read) -> Result<MetadataDocument> {
    if !read_signature(source)? {
        return Err(PngMetaError::NotPng);
    }

    let mut document = MetadataDocument::default();
    for field in TextFields::new(source) {
        document.entries.push(field?);
    }

    if document.is_empty() {
        return Err(PngMetaError::NoMetadata);
    }
    debug!("Extracted {} text field(s)", document.len());
    Ok(document)
}

/// Open the file at `path` and extract its text metadata.
pub fn extract_from_file(path: impl AsRef<Path>) -> Result<MetadataDocument> {
    let path = path.as_ref();
    info!("Scanning PNG file: {}", path.display());
    let mut file = File::open(path)?;
    extract_text_chunks(&mut file)
}

/// Iterator over the text fields of one PNG stream.
///
/// Yields one `TextField` per contributing `tEXt`/`zTXt` chunk, in on-wire
/// order, and stops at the `IEND` terminator or at end-of-stream. Other
/// chunk types are consumed whole to stay framed for the next iteration.
/// Malformed text chunks are skipped, so one corrupt field cannot abort
/// extraction of the rest of the container.
pub struct TextFields<R> {
    chunks: ChunkReader<R>,
    done: bool,
}

impl<R: Read> TextFields<R> {
    /// Wrap a source positioned immediately after the PNG signature.
    pub fn new(source: R) -> Self {
        Self {
            chunks: ChunkReader::new(source),
            done: false,
        }
    }
}

impl<R: Read> Iterator for TextFields<R> {
    type Item = Result<TextField>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            let chunk = match self.chunks.next_chunk() {
                Ok(Some(chunk)) => chunk,
                Ok(None) => break,
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            };

            match chunk.chunk_type {
                ChunkType::TEXT => {
                    if let Some(field) = text::parse_text_chunk(&chunk.data) {
                        return Some(Ok(field));
                    }
                    debug!("tEXt chunk without keyword terminator, skipped");
                }
                ChunkType::COMPRESSED_TEXT => {
                    match text::parse_compressed_text_chunk(&chunk.data) {
                        Ok(field) => return Some(Ok(field)),
                        Err(e) => warn!("Skipping undecodable zTXt chunk: {}", e),
                    }
                }
                ChunkType::IMAGE_END => {
                    self.done = true;
                }
                _ => {}
            }
        }
        None
    }
}
