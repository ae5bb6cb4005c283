//! Parsing of text-bearing chunk bodies.

use super::error::{PngMetaError, Result};
use super::inflate;
use super::models::TextField;
use super::utils::find_nul;

/// Parse a verbatim text (`tEXt`) chunk body.
///
/// Body structure: `keyword-bytes 0x00 value-bytes`, the value running to
/// the end of the body with no further decoding. A body with no null byte
/// has no keyword boundary and contributes nothing.
pub fn parse_text_chunk(body: &[u8]) -> Option<TextField> {
    let nul = find_nul(body)?;
    Some(TextField {
        keyword: String::from_utf8_lossy(&body[..nul]).into_owned(),
        text: String::from_utf8_lossy(&body[nul + 1..]).into_owned(),
    })
}

/// Parse a compressed text (`zTXt`) chunk body.
///
/// Body structure: `keyword-bytes 0x00 method-byte compressed-payload`.
/// The full body is handed to the inflate adapter, which re-locates the
/// keyword terminator and validates the method byte.
pub fn parse_compressed_text_chunk(body: &[u8]) -> Result<TextField> {
    let nul = find_nul(body).ok_or(PngMetaError::MissingKeywordTerminator)?;
    let text = inflate::inflate_text_payload(body)?;
    Ok(TextField {
        keyword: String::from_utf8_lossy(&body[..nul]).into_owned(),
        text,
    })
}
