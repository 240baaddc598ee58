//! SBUS stream decoder: synchronize on frame boundaries, read one body per
//! cycle, extract and calibrate the channels.

use std::time::Instant;

use rc_core::{ChannelReading, ChannelValues, DecodeError, FrameDecoder, SerialLink};

use crate::frame::{
    calibrate, extract_channels, SbusFlags, BODY_LEN, FOOTER, HEADER, PAYLOAD_LEN,
};

/// Chunk size used while flushing stale input at startup.
const DRAIN_CHUNK: usize = 128;

/// Where the decoder is in its hunt for the next frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SyncState {
    /// The previous frame did not end cleanly; trust no header until a
    /// footer goes by.
    SeekFooter,
    SeekHeader,
    ReadBody,
}

/// Decodes SBUS frames from a serial link it owns.
///
/// Each call to [`next_reading`](FrameDecoder::next_reading) synchronizes to
/// at most one frame. The body buffer is scratch, fresh every cycle; the
/// only state carried across cycles is whether the last frame ended with a
/// clean footer.
pub struct SbusDecoder<L> {
    link: L,
    end_seen: bool,
    last_flags: SbusFlags,
}

impl<L: SerialLink> SbusDecoder<L> {
    #[must_use]
    pub fn new(link: L) -> Self {
        Self {
            link,
            end_seen: false,
            last_flags: SbusFlags::default(),
        }
    }

    /// Flags decoded from the most recent complete frame.
    #[must_use]
    pub fn last_flags(&self) -> SbusFlags {
        self.last_flags
    }

    /// One byte off the link, or `None` when the port timeout elapses.
    fn read_byte(&mut self) -> Result<Option<u8>, DecodeError> {
        let mut byte = [0u8; 1];
        match self.link.read(&mut byte)? {
            0 => Ok(None),
            _ => Ok(Some(byte[0])),
        }
    }

    /// Read the 24-byte body following a header. A timeout mid-body abandons
    /// the frame; nothing partial is kept.
    fn read_body(&mut self) -> Result<[u8; BODY_LEN], DecodeError> {
        let mut body = [0u8; BODY_LEN];
        let mut got = 0;
        while got < BODY_LEN {
            let n = self.link.read(&mut body[got..])?;
            if n == 0 {
                return Err(DecodeError::ShortRead(got));
            }
            got += n;
        }
        Ok(body)
    }
}

impl<L: SerialLink> FrameDecoder for SbusDecoder<L> {
    fn drain(&mut self) -> Result<(), DecodeError> {
        let mut chunk = [0u8; DRAIN_CHUNK];
        while self.link.read(&mut chunk)? > 0 {}
        // Whatever was mid-frame is gone with the drain.
        self.end_seen = true;
        Ok(())
    }

    fn next_reading(&mut self) -> Result<ChannelReading, DecodeError> {
        let mut state = if self.end_seen {
            SyncState::SeekHeader
        } else {
            SyncState::SeekFooter
        };

        loop {
            match state {
                SyncState::SeekFooter => match self.read_byte()? {
                    Some(FOOTER) => state = SyncState::SeekHeader,
                    Some(_) => {}
                    None => return Err(DecodeError::Sync),
                },
                SyncState::SeekHeader => match self.read_byte()? {
                    Some(HEADER) => state = SyncState::ReadBody,
                    Some(_) => {}
                    None => {
                        // Remember any footer we already passed.
                        self.end_seen = true;
                        return Err(DecodeError::Sync);
                    }
                },
                SyncState::ReadBody => break,
            }
        }

        self.end_seen = false;
        let body = self.read_body()?;
        self.end_seen = body[BODY_LEN - 1] == FOOTER;

        let mut payload = [0u8; PAYLOAD_LEN];
        payload.copy_from_slice(&body[..PAYLOAD_LEN]);

        let flags = SbusFlags::from_byte(body[PAYLOAD_LEN]);
        if flags.frame_lost || flags.failsafe {
            log::debug!(
                "sbus flags: frame_lost={} failsafe={}",
                flags.frame_lost,
                flags.failsafe
            );
        }
        self.last_flags = flags;

        let mut channels = ChannelValues::new();
        channels.extend(extract_channels(&payload).iter().map(|&raw| calibrate(raw)));

        Ok(ChannelReading::new(Instant::now(), channels))
    }
}
