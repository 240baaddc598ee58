//! ASCII sentence decoder over a serial link.

use std::time::Instant;

use heapless::Vec;
use rc_core::{ChannelReading, ChannelValues, DecodeError, FrameDecoder, SerialLink};

use crate::sentence::{parse_sentence, MAX_LINE_LENGTH};

/// Lines discarded at startup before live decoding begins.
const DRAIN_LINES: usize = 10;

/// Decodes `I`-sentences from a serial link it owns, one line per cycle.
pub struct AsciiDecoder<L> {
    link: L,
    buffer: Vec<u8, MAX_LINE_LENGTH>,
}

impl<L: SerialLink> AsciiDecoder<L> {
    #[must_use]
    pub fn new(link: L) -> Self {
        Self {
            link,
            buffer: Vec::new(),
        }
    }

    /// Read one newline-terminated line into the scratch buffer.
    ///
    /// An over-long line is swallowed through its newline and reported as
    /// unparseable so the next cycle starts clean; a timeout before the
    /// newline is a short read.
    fn read_line(&mut self) -> Result<(), DecodeError> {
        self.buffer.clear();
        loop {
            let mut byte = [0u8; 1];
            if self.link.read(&mut byte)? == 0 {
                return Err(DecodeError::ShortRead(self.buffer.len()));
            }
            if byte[0] == b'\n' {
                return Ok(());
            }
            if self.buffer.push(byte[0]).is_err() {
                loop {
                    if self.link.read(&mut byte)? == 0 {
                        return Err(DecodeError::ShortRead(self.buffer.len()));
                    }
                    if byte[0] == b'\n' {
                        break;
                    }
                }
                return Err(DecodeError::Parse);
            }
        }
    }
}

impl<L: SerialLink> FrameDecoder for AsciiDecoder<L> {
    fn drain(&mut self) -> Result<(), DecodeError> {
        for _ in 0..DRAIN_LINES {
            match self.read_line() {
                Ok(()) => {}
                // The port went quiet: nothing stale left.
                Err(DecodeError::ShortRead(_)) => return Ok(()),
                // Over-long garbage still counts as a flushed line.
                Err(DecodeError::Parse) => {}
                Err(err) => return Err(err),
            }
        }
        Ok(())
    }

    fn next_reading(&mut self) -> Result<ChannelReading, DecodeError> {
        self.read_line()?;
        let values = parse_sentence(&self.buffer).ok_or(DecodeError::Parse)?;

        let mut channels = ChannelValues::new();
        channels.extend(values);
        Ok(ChannelReading::new(Instant::now(), channels))
    }
}
