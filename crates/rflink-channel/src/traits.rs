use crate::error::Result;

/// Synchronous byte-level access to a transceiver's RX/TX FIFOs.
///
/// Every operation maps to one command on the module's control interface
/// and may block for the duration of that command. The trait carries no
/// timeout or retry machinery of its own; a backing implementation that
/// needs either surfaces them as ordinary [`ChannelError`] results.
///
/// Implementations are used exclusively and non-reentrantly during a
/// single codec call. Sharing a channel across threads is the caller's
/// problem to lock.
///
/// [`ChannelError`]: crate::error::ChannelError
pub trait FifoChannel {
    /// Number of bytes currently held in the RX FIFO.
    ///
    /// Callers use this to decide whether a complete frame is available
    /// before asking the codec to decode one.
    fn bytes_available(&self) -> usize;

    /// Pop one byte from the RX FIFO.
    ///
    /// Fails with [`ChannelError::Underrun`] when the FIFO is empty.
    ///
    /// [`ChannelError::Underrun`]: crate::error::ChannelError::Underrun
    fn read_byte(&mut self) -> Result<u8>;

    /// Push one byte into the TX FIFO.
    ///
    /// Fails with [`ChannelError::Overrun`] when the FIFO is full.
    ///
    /// [`ChannelError::Overrun`]: crate::error::ChannelError::Overrun
    fn write_byte(&mut self, byte: u8) -> Result<()>;

    /// Strobe transmission of the bytes staged in the TX FIFO.
    ///
    /// Fails with [`ChannelError::Busy`] when the radio cannot accept a
    /// transmission.
    ///
    /// [`ChannelError::Busy`]: crate::error::ChannelError::Busy
    fn begin_transmit(&mut self) -> Result<()>;
}
