//! Payload decoding: gzip sniffing and UTF-8 validation.

use std::io::Read;

use bytes::Bytes;
use flate2::read::GzDecoder;
use snafu::ResultExt;

use crate::error::{DecompressSnafu, InvalidEncodingSnafu, Result};

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Decode a raw payload into log text.
///
/// Payloads starting with the gzip magic bytes are decompressed first.
/// Either a decompression failure or invalid UTF-8 is fatal: nothing is
/// written downstream.
pub fn decode_payload(payload: Bytes) -> Result<String> {
    let raw = if payload.starts_with(&GZIP_MAGIC) {
        let mut decoder = GzDecoder::new(&payload[..]);
        let mut decompressed = Vec::new();
        decoder
            .read_to_end(&mut decompressed)
            .context(DecompressSnafu)?;
        decompressed
    } else {
        payload.to_vec()
    };

    String::from_utf8(raw).context(InvalidEncodingSnafu)
}
