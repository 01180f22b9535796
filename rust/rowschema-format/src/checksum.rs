//! Checksummed message framing: `len:u32 | payload | checksum:u32`, little-endian.

use rowschema_common::{Result, error::ErrorKind, verify_data};

use crate::defs::{CHECKSUM_SIZE, MESSAGE_LEN_SIZE, MESSAGE_MIN_SIZE};

/// Checksum of a buffer: the 64-bit xxh3 hash folded to 32 bits.
pub fn compute(buf: &[u8]) -> u32 {
    let h = xxhash_rust::xxh3::xxh3_64(buf);
    (h as u32) ^ ((h >> 32) as u32)
}

/// Validates a sealed message and returns its payload.
///
/// The message must hold exactly one frame: trailing bytes after the
/// checksum are rejected along with truncated frames.
///
/// # Errors
///
/// `InvalidFormat` for a malformed frame, `ChecksumMismatch` when the
/// payload does not hash to the stored checksum.
pub fn open_message<'a>(message: &'a [u8], element: &str) -> Result<&'a [u8]> {
    verify_data!(message, message.len() >= MESSAGE_MIN_SIZE);
    let (len_bytes, rest) = message.split_at(MESSAGE_LEN_SIZE);
    let size = read_u32(len_bytes) as usize;
    verify_data!(size, size + MESSAGE_MIN_SIZE == message.len());
    let (payload, checksum) = rest.split_at(size);
    validate_buffer(payload, read_u32(checksum), element)?;
    Ok(payload)
}

/// Compares the checksum of `buf` against `checksum`.
pub fn validate_buffer(buf: &[u8], checksum: u32, element: &str) -> Result<()> {
    if compute(buf) == checksum {
        Ok(())
    } else {
        log::debug!("checksum mismatch for {element} ({} bytes)", buf.len());
        Err(ErrorKind::ChecksumMismatch {
            element: element.to_string(),
        }
        .into())
    }
}

/// Frames `payload` into a freshly allocated sealed message.
pub fn seal_message(payload: &[u8]) -> Vec<u8> {
    let mut message = Vec::with_capacity(MESSAGE_LEN_SIZE + payload.len() + CHECKSUM_SIZE);
    message.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    message.extend_from_slice(payload);
    message.extend_from_slice(&compute(payload).to_le_bytes());
    message
}

fn read_u32(bytes: &[u8]) -> u32 {
    let mut buf = [0u8; 4];
    buf.copy_from_slice(&bytes[..4]);
    u32::from_le_bytes(buf)
}
