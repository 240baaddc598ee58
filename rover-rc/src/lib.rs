//! Host-side wiring for the rover's RC receiver.
//!
//! Connects the platform-agnostic core to real hardware: a serial transport
//! over the `serialport` crate ([`UartLink`]), a chassis handle backed by an
//! atomic enable flag ([`AtomicChassis`]), and the reader lifecycle that
//! runs the decode loop on a dedicated thread ([`RcReader`]).

pub mod chassis;
pub mod receiver;
pub mod serial;

pub use chassis::AtomicChassis;
pub use receiver::{RcReader, StartError};
pub use serial::{OpenError, UartLink};
