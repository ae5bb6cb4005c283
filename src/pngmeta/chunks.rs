//! Chunk framing for the PNG container.

use std::io::{ErrorKind, Read};

use byteorder::{BigEndian, ReadBytesExt};
use log::{debug, trace};

use super::error::Result;
use super::models::{ChunkType, RawChunk};

/// Reads the length-prefixed, type-tagged, CRC-trailed chunk records that
/// follow the PNG signature.
///
/// Chunk structure:
/// - 4 bytes: Data length (big-endian)
/// - 4 bytes: Type tag (ASCII)
/// - N bytes: Data
/// - 4 bytes: CRC (consumed, not verified)
pub struct ChunkReader<R> {
    source: R,
}

impl<R: Read> ChunkReader<R> {
    /// Wrap a source positioned at the first chunk's length field.
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Read the next chunk.
    ///
    /// Returns `Ok(None)` when the stream ends, including when it ends in
    /// the middle of a chunk: a declared length that overruns the remaining
    /// bytes takes the same path as a clean end-of-stream, so whatever was
    /// extracted before it is kept.
    pub fn next_chunk(&mut self) -> Result<Option<RawChunk>> {
        let length = match self.source.read_u32::<BigEndian>() {
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let mut tag = [0u8; 4];
        if !self.read_fully(&mut tag)? {
            return Ok(None);
        }
        let chunk_type = ChunkType(tag);
        trace!("Chunk {}: {} data bytes", chunk_type, length);

        let mut data = vec![0u8; length as usize];
        if !self.read_fully(&mut data)? {
            debug!("Stream ended inside {} data, stopping", chunk_type);
            return Ok(None);
        }

        // Skip CRC
        let mut crc = [0u8; 4];
        if !self.read_fully(&mut crc)? {
            debug!("Stream ended inside {} CRC, stopping", chunk_type);
            return Ok(None);
        }

        Ok(Some(RawChunk { chunk_type, data }))
    }

    /// `read_exact` with a short read folded into `Ok(false)`.
    fn read_fully(&mut self, buf: &mut [u8]) -> Result<bool> {
        match self.source.read_exact(buf) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
