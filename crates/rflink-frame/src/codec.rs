use bytes::{BufMut, BytesMut};

use crate::error::{FrameError, Result};

/// Bytes counted by the length field besides the payload: dest + src.
pub const ADDRESS_BYTES: usize = 2;

/// Quality bytes (RSSI, LQI) the radio appends after the counted region.
pub const QUALITY_BYTES: usize = 2;

/// Largest payload the one-byte length field can encode.
///
/// The length field counts the two address bytes plus the payload, so the
/// bound is `255 - 2 = 253`. Firmware documentation that says "255" is
/// counting loosely; 254- and 255-byte payloads would wrap the field.
pub const MAX_PAYLOAD: usize = u8::MAX as usize - ADDRESS_BYTES;

/// Encode the counted region of a frame into the wire format.
///
/// Wire format (quality bytes are appended by the radio, not encoded here):
/// ```text
/// ┌────────────┬──────────┬──────────┬───────────────┐
/// │ Length (1B)│ Dest (1B)│ Src (1B) │ Payload       │
/// │ 2 + len    │          │          │ (len bytes)   │
/// └────────────┴──────────┴──────────┴───────────────┘
/// ```
pub fn encode_frame(dest: u8, src: u8, payload: &[u8], dst: &mut BytesMut) -> Result<()> {
    if payload.len() > MAX_PAYLOAD {
        return Err(FrameError::PayloadTooLarge {
            size: payload.len(),
            max: MAX_PAYLOAD,
        });
    }
    dst.reserve(1 + ADDRESS_BYTES + payload.len());
    dst.put_u8((ADDRESS_BYTES + payload.len()) as u8);
    dst.put_u8(dest);
    dst.put_u8(src);
    dst.put_slice(payload);
    Ok(())
}
