//! Glitch rejection for the ASCII sentence link.
//!
//! The enable switch sits well away from neutral in both of its real
//! positions, so a value strictly inside the band around neutral means the
//! line garbled a sentence rather than the operator half-flipping a switch.
//! SBUS frames carry their own framing and are not filtered.

use crate::types::{ChannelReading, ChannelValues, CHANNEL_NEUTRAL, ENABLE_CHANNEL};

/// Half-width of the implausible band around neutral on the enable channel.
pub const GLITCH_BAND: f64 = 450.0;

/// Tracks the last channel values seen and rejects readings whose enable
/// channel sits strictly inside the glitch band.
#[derive(Debug, Default)]
pub struct GlitchFilter {
    last: ChannelValues,
}

impl GlitchFilter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            last: ChannelValues::new(),
        }
    }

    /// Check one reading, returning whether it should be acted on.
    ///
    /// A rejected reading is logged against the previously retained values
    /// and still replaces them, so the next comparison is against what the
    /// wire actually carried.
    pub fn accept(&mut self, reading: &ChannelReading) -> bool {
        let rc_use = reading.channel(ENABLE_CHANNEL) - CHANNEL_NEUTRAL;
        let glitched = rc_use > -GLITCH_BAND && rc_use < GLITCH_BAND;

        if glitched {
            log::warn!(
                "glitched reading discarded: last {:?}  now {:?}",
                self.last,
                reading.channels
            );
        }

        self.last = reading.channels.clone();
        !glitched
    }

    /// The most recent channel values seen, accepted or not.
    #[must_use]
    pub fn last_channels(&self) -> &ChannelValues {
        &self.last
    }
}
