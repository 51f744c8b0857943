/// Errors that can occur on the transceiver command channel.
#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    /// A read was issued against an empty RX FIFO (short read).
    #[error("RX FIFO underrun: requested a byte but the FIFO is empty")]
    Underrun,

    /// A write was issued against a full TX FIFO.
    #[error("TX FIFO overrun: FIFO holds {capacity} bytes and is full")]
    Overrun { capacity: usize },

    /// The radio cannot accept a transmission right now.
    #[error("radio busy: transmit strobe rejected")]
    Busy,

    /// An I/O error occurred on the underlying command interface.
    #[error("channel I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ChannelError>;
