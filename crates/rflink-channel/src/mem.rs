use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::error::{ChannelError, Result};
use crate::traits::FifoChannel;

/// In-memory model of a transceiver's RX/TX FIFOs.
///
/// Behaves like the hardware channel as seen from the host: the RX side
/// delivers bytes in arrival order and appends the two radio-quality bytes
/// (RSSI, LQI) after each staged frame, the TX side has a fixed depth and
/// rejects writes beyond it. Useful for exercising codec code without a
/// radio attached.
pub struct MemoryChannel {
    rx: VecDeque<u8>,
    tx: Vec<u8>,
    last_tx: Vec<u8>,
    tx_capacity: usize,
    busy: bool,
    transmits: usize,
}

impl MemoryChannel {
    /// Depth of the hardware TX FIFO this model mimics.
    pub const DEFAULT_TX_CAPACITY: usize = 64;

    /// Create a channel with the default TX FIFO depth.
    pub fn new() -> Self {
        Self::with_tx_capacity(Self::DEFAULT_TX_CAPACITY)
    }

    /// Create a channel with an explicit TX FIFO depth.
    pub fn with_tx_capacity(tx_capacity: usize) -> Self {
        Self {
            rx: VecDeque::new(),
            tx: Vec::new(),
            last_tx: Vec::new(),
            tx_capacity,
            busy: false,
            transmits: 0,
        }
    }

    /// Load raw bytes into the RX FIFO as-is.
    pub fn stage_bytes(&mut self, bytes: &[u8]) {
        self.rx.extend(bytes.iter().copied());
    }

    /// Load one complete received frame into the RX FIFO.
    ///
    /// Lays out the bytes the way the radio does: length byte
    /// (`2 + payload.len()`), destination, source, payload, then the two
    /// quality bytes the channel appends after the counted region.
    ///
    /// # Panics
    ///
    /// Panics when `payload` exceeds the 253 bytes the one-byte length
    /// field can encode; the cast below would otherwise wrap silently.
    pub fn stage_frame(&mut self, dest: u8, src: u8, payload: &[u8], rssi: u8, lqi: u8) {
        assert!(
            payload.len() <= u8::MAX as usize - 2,
            "payload of {} bytes does not fit the one-byte length field",
            payload.len()
        );
        self.rx.push_back((payload.len() + 2) as u8);
        self.rx.push_back(dest);
        self.rx.push_back(src);
        self.rx.extend(payload.iter().copied());
        self.rx.push_back(rssi);
        self.rx.push_back(lqi);
        debug!(dest, src, len = payload.len(), "staged frame into RX FIFO");
    }

    /// Mark the radio busy: subsequent transmit strobes are rejected.
    pub fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
    }

    /// Bytes currently staged in the TX FIFO (not yet strobed out).
    pub fn tx_bytes(&self) -> &[u8] {
        &self.tx
    }

    /// Bytes drained from the TX FIFO by the most recent transmit strobe.
    pub fn last_transmitted(&self) -> &[u8] {
        &self.last_tx
    }

    /// Number of transmit strobes accepted so far.
    pub fn transmit_count(&self) -> usize {
        self.transmits
    }

    /// Drop whatever is left in the RX FIFO.
    pub fn flush_rx(&mut self) {
        self.rx.clear();
    }
}

impl Default for MemoryChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl FifoChannel for MemoryChannel {
    fn bytes_available(&self) -> usize {
        self.rx.len()
    }

    fn read_byte(&mut self) -> Result<u8> {
        let byte = self.rx.pop_front().ok_or(ChannelError::Underrun)?;
        trace!(byte, "RX FIFO pop");
        Ok(byte)
    }

    fn write_byte(&mut self, byte: u8) -> Result<()> {
        if self.tx.len() >= self.tx_capacity {
            return Err(ChannelError::Overrun {
                capacity: self.tx_capacity,
            });
        }
        trace!(byte, "TX FIFO push");
        self.tx.push(byte);
        Ok(())
    }

    fn begin_transmit(&mut self) -> Result<()> {
        if self.busy {
            return Err(ChannelError::Busy);
        }
        debug!(staged = self.tx.len(), "transmit strobe");
        // The hardware drains the TX FIFO as it radiates the frame.
        self.last_tx = std::mem::take(&mut self.tx);
        self.transmits += 1;
        Ok(())
    }
}
