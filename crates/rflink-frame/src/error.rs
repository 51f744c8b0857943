use rflink_channel::ChannelError;

/// Errors that can occur during frame encoding/decoding.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// The length byte cannot cover the two mandatory address bytes.
    #[error("malformed frame: length byte {n} cannot cover the two address bytes")]
    BadLength { n: u8 },

    /// The RX FIFO holds fewer bytes than the length byte claims.
    #[error("truncated frame: length byte claims {expected} more bytes, RX FIFO holds {available}")]
    Truncated { expected: usize, available: usize },

    /// The payload exceeds what the one-byte length field can encode.
    #[error("payload too large ({size} bytes, max {max})")]
    PayloadTooLarge { size: usize, max: usize },

    /// The channel reported an error mid-operation (short read/write, busy radio).
    #[error("channel failure: {0}")]
    Channel(#[from] ChannelError),
}

pub type Result<T> = std::result::Result<T, FrameError>;
