//! SBUS protocol decoding for the rover RC receiver.
//!
//! SBUS carries 16 proportional RC channels as packed 11-bit values in
//! 25-byte frames on an inverted UART at 100000 baud, 8E2. This crate
//! provides the frame-level pieces ([`extract_channels`], [`calibrate`],
//! [`SbusFlags`]) and the [`SbusDecoder`] that drives a serial link:
//! synchronize on the frame boundaries, read one body per cycle, and hand
//! back a calibrated [`rc_core::ChannelReading`].
//!
//! # Frame layout
//!
//! ```text
//! 0x0F | 22 payload bytes (16 × 11 bits, LSB first) | flags | 0x00
//! ```
//!
//! The flags byte reports "frame lost" (bit 2) and "failsafe active"
//! (bit 3); both are decoded and exposed but the control loop does not act
//! on them.

pub mod decoder;
pub mod frame;

pub use decoder::SbusDecoder;
pub use frame::{
    calibrate, extract_channels, pack_channels, SbusFlags, BODY_LEN, FOOTER, FRAME_LEN, HEADER,
    NUM_CHANNELS, PAYLOAD_LEN, RAW_MAX, RAW_MIN,
};
