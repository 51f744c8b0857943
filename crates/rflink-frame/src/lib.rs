//! Frame codec for FIFO-addressed radio transceiver modules.
//!
//! This is the core value-add layer of rflink. A frame on the wire is:
//! - A 1-byte length field counting everything after itself except the
//!   quality bytes: the two addresses plus the payload
//! - A 1-byte destination address and a 1-byte source address
//! - The payload (up to [`MAX_PAYLOAD`] bytes)
//! - RSSI and LQI, appended by the radio after the counted region
//!
//! Decoding drains exactly one frame from a [`FifoChannel`]'s RX FIFO;
//! encoding stages one frame into the TX FIFO and strobes transmission.
//! No partial-frame buffering across calls.
//!
//! [`FifoChannel`]: rflink_channel::FifoChannel

pub mod codec;
pub mod error;
pub mod frame;
pub mod render;

pub use codec::{ADDRESS_BYTES, MAX_PAYLOAD, QUALITY_BYTES};
pub use error::{FrameError, Result};
pub use frame::{DataFrame, RadioFrame};
pub use render::OutputFormat;
