//! Core data structures for PNG text-chunk extraction.

use std::fmt;

/// A four-byte ASCII chunk type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkType(pub [u8; 4]);

impl ChunkType {
    /// Verbatim text chunk (`tEXt`): keyword, null terminator, raw value.
    pub const TEXT: ChunkType = ChunkType(*b"tEXt");
    /// Compressed text chunk (`zTXt`): keyword, null terminator, one
    /// compression method byte, deflate payload.
    pub const COMPRESSED_TEXT: ChunkType = ChunkType(*b"zTXt");
    /// Terminator chunk (`IEND`): signals end of container regardless of
    /// any bytes that may follow.
    pub const IMAGE_END: ChunkType = ChunkType(*b"IEND");
}

impl fmt::Display for ChunkType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

/// One framed chunk as read from the wire.
///
/// Lives for a single scan iteration. The four CRC bytes trailing every
/// chunk are consumed during framing and never stored; this crate does
/// not verify them.
#[derive(Debug)]
pub struct RawChunk {
    pub chunk_type: ChunkType,
    pub data: Vec<u8>,
}

/// A single recovered keyword/value pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextField {
    pub keyword: String,
    pub text: String,
}

/// The ordered metadata document assembled from one container.
///
/// Entries appear in on-wire chunk order. A document with zero entries
/// means "no metadata found", which is distinct from a document holding an
/// entry whose text is empty.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MetadataDocument {
    pub entries: Vec<TextField>,
}

impl MetadataDocument {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl fmt::Display for MetadataDocument {
    /// Renders `"<keyword>: <text>"` entries separated by exactly one
    /// blank line.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, field) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, "\n\n")?;
            }
            write!(f, "{}: {}", field.keyword, field.text)?;
        }
        Ok(())
    }
}
