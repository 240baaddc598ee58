//! Core reading and command types: ChannelReading, RcCommand, ChassisTarget.

use std::time::Instant;

use heapless::Vec;

/// Neutral PWM-equivalent channel value (stick centered).
pub const CHANNEL_NEUTRAL: f64 = 1500.0;

/// Most proportional channels any supported protocol carries per reading.
pub const MAX_CHANNELS: usize = 16;

/// Channel index driving the steering angle.
pub const STEERING_CHANNEL: usize = 0;

/// Channel index driving the throttle.
pub const THROTTLE_CHANNEL: usize = 2;

/// Channel index carrying the RC-enable switch.
pub const ENABLE_CHANNEL: usize = 4;

/// Calibrated channel values for one reading (8 on the ASCII link, 16 on
/// SBUS), in PWM-equivalent units of roughly 1000–2000.
pub type ChannelValues = Vec<f64, MAX_CHANNELS>;

/// One decoded receiver reading, stamped at decode time.
///
/// Produced at most once per loop cycle and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelReading {
    pub timestamp: Instant,
    pub channels: ChannelValues,
}

impl ChannelReading {
    #[must_use]
    pub fn new(timestamp: Instant, channels: ChannelValues) -> Self {
        Self {
            timestamp,
            channels,
        }
    }

    /// Channel value by index; neutral for channels the protocol does not
    /// carry.
    #[inline]
    #[must_use]
    pub fn channel(&self, index: usize) -> f64 {
        self.channels.get(index).copied().unwrap_or(CHANNEL_NEUTRAL)
    }
}

/// Steering/throttle command derived from one reading.
///
/// `angle` and `throttle` are clamped to [-100, 100]; `enabled` reflects the
/// transmitter's RC-enable switch for that reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RcCommand {
    pub angle: f64,
    pub throttle: f64,
    pub enabled: bool,
}

/// What the chassis is asked to do: a throttle percentage and a turn radius.
///
/// An infinite radius drives straight; the sign of a finite radius picks the
/// turn side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChassisTarget {
    pub throttle: f64,
    pub radius: f64,
}

impl ChassisTarget {
    /// The idle target: no throttle, straight wheels.
    #[must_use]
    pub const fn stop() -> Self {
        Self {
            throttle: 0.0,
            radius: f64::INFINITY,
        }
    }

    /// True when the target commands no motion at all.
    #[inline]
    #[must_use]
    pub fn is_stop(&self) -> bool {
        self.throttle == 0.0 && self.radius.is_infinite()
    }
}
