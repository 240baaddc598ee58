//! Frame decoder trait and the recoverable decode error taxonomy.

use thiserror::Error;

use crate::link::LinkError;
use crate::types::ChannelReading;

/// Per-cycle decode failures. All of these are recoverable: the loop logs
/// them, issues no command that cycle, and carries on.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// No frame boundary (header/footer/newline) arrived before the port
    /// timeout.
    #[error("no frame boundary before timeout")]
    Sync,
    /// A frame body or line was cut short by the port timeout.
    #[error("frame cut short after {0} bytes")]
    ShortRead(usize),
    /// The bytes read do not form a valid frame or sentence.
    #[error("unparseable frame")]
    Parse,
    /// The underlying link failed.
    #[error(transparent)]
    Link(#[from] LinkError),
}

/// One protocol decoder driving a serial link it owns.
///
/// Exactly one reading (or one recoverable error) is produced per call to
/// [`next_reading`](FrameDecoder::next_reading); decoders keep no partial
/// frame across calls beyond their documented resynchronization state.
pub trait FrameDecoder: Send {
    /// Discard receiver data buffered before the loop attached to the link.
    fn drain(&mut self) -> Result<(), DecodeError>;

    /// Block for up to the link timeout and decode the next reading.
    fn next_reading(&mut self) -> Result<ChannelReading, DecodeError>;
}
