//! Streaming inflate of compressed text payloads.

use flate2::{Decompress, FlushDecompress, Status};
use log::trace;

use super::error::{PngMetaError, Result};
use super::utils::find_nul;

/// Smallest body that can hold a keyword, terminator, method byte and a
/// meaningful deflate payload.
const MIN_BODY_LEN: usize = 10;

/// Inflate output buffer size. Generation parameters from typical
/// producers run to a few KiB, so one round usually suffices.
const OUT_BUF_SIZE: usize = 128 * 1024;

/// Upper bound on decompress rounds for a single payload.
const MAX_ROUNDS: usize = 8 * 1024;

/// Decode a `zTXt` chunk body into its text.
///
/// The body is the full chunk data: keyword, null terminator, one
/// compression method byte, then the compressed payload. Only method 0
/// (deflate) is defined; the stream itself is zlib-wrapped.
///
/// A fresh decompressor session is created per payload, never reused, and
/// dropped on every exit path.
///
/// # Errors
/// - `FieldTooShort` if the body cannot hold all three sub-fields
/// - `MissingKeywordTerminator` if no null byte leaves room for a payload
/// - `UnsupportedCompressionMethod` for any method byte other than 0
/// - `DecompressionError` if the stream is corrupt, truncated, or never
///   reaches its end marker
pub fn inflate_text_payload(body: &[u8]) -> Result<String> {
    if body.len() < MIN_BODY_LEN {
        return Err(PngMetaError::FieldTooShort { len: body.len() });
    }

    // The terminator must leave room for the method byte and payload.
    let nul = match find_nul(body) {
        Some(pos) if pos < body.len() - 2 => pos,
        _ => return Err(PngMetaError::MissingKeywordTerminator),
    };

    let method = body[nul + 1];
    if method != 0 {
        return Err(PngMetaError::UnsupportedCompressionMethod(method));
    }
    let compressed = &body[nul + 2..];

    trace!("Inflating {} compressed bytes", compressed.len());

    let mut decoder = Decompress::new(true);
    let mut out = Vec::new();
    let mut buf = vec![0u8; OUT_BUF_SIZE];
    let mut in_pos = 0usize;

    for _ in 0..MAX_ROUNDS {
        let before_in = decoder.total_in() as usize;
        let before_out = decoder.total_out() as usize;

        let status = decoder
            .decompress(&compressed[in_pos..], &mut buf, FlushDecompress::None)
            .map_err(|e| PngMetaError::DecompressionError(e.to_string()))?;

        let consumed = decoder.total_in() as usize - before_in;
        let produced = decoder.total_out() as usize - before_out;
        in_pos += consumed;

        if produced != 0 {
            out.extend_from_slice(&buf[..produced]);
        }

        match status {
            Status::StreamEnd => {
                trace!("Inflated to {} bytes", out.len());
                return Ok(String::from_utf8_lossy(&out).into_owned());
            }
            Status::Ok | Status::BufError => {
                if consumed == 0 && produced == 0 {
                    return Err(PngMetaError::DecompressionError(
                        "stream ended without a deflate end marker".to_string(),
                    ));
                }
            }
        }
    }

    Err(PngMetaError::DecompressionError(format!(
        "no stream end after {} rounds",
        MAX_ROUNDS
    )))
}
