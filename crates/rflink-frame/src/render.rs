use std::io::{self, Write};

use bytes::BytesMut;

use crate::codec::encode_frame;
use crate::frame::RadioFrame;

/// How a frame is rendered to a byte sink.
///
/// Purely a presentation concern; the codec's correctness contract is the
/// same under every format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// The wire bytes (length, dest, src, payload) followed by the two
    /// quality bytes, exactly as they came off the channel.
    #[default]
    Raw,
    /// One human-readable line with decoded addresses, hex payload,
    /// RSSI and LQI.
    Annotated,
}

/// Write `frame` to `sink` in the frame's output format.
///
/// A given frame renders byte-identically on every call.
pub fn render(frame: &RadioFrame, sink: &mut dyn Write) -> io::Result<()> {
    match frame.output_format {
        OutputFormat::Raw => {
            let mut wire = BytesMut::new();
            encode_frame(
                frame.dest_address,
                frame.src_address,
                &frame.payload,
                &mut wire,
            )
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err.to_string()))?;
            sink.write_all(&wire)?;
            sink.write_all(&[frame.rssi, frame.lqi])
        }
        OutputFormat::Annotated => {
            writeln!(
                sink,
                "dest=0x{:02X} src=0x{:02X} len={} payload=[{}] rssi={} lqi={}",
                frame.dest_address,
                frame.src_address,
                frame.payload.len(),
                hex(&frame.payload),
                frame.rssi,
                frame.lqi,
            )
        }
    }
}

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}
