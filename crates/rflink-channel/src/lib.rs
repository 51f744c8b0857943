//! Byte-level access to a radio transceiver's command channel.
//!
//! A transceiver module exposes its receive and transmit FIFOs through a
//! synchronous command interface: read one byte, write one byte, query RX
//! occupancy, strobe transmission. This crate defines that contract as the
//! [`FifoChannel`] trait and provides [`MemoryChannel`], an in-memory model
//! of the two FIFOs for host-side testing and tooling.
//!
//! This is the lowest layer of rflink. The frame codec builds on top of
//! the [`FifoChannel`] trait provided here.

pub mod error;
pub mod mem;
pub mod traits;

pub use error::{ChannelError, Result};
pub use mem::MemoryChannel;
pub use traits::FifoChannel;
