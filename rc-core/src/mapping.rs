//! Channel-to-command mapping.
//!
//! Channel 0 steers, channel 2 drives, channel 4 arms. Values are
//! PWM-equivalent (roughly 1000–2000, neutral 1500); a full stick throw of
//! ±500 maps to ±100 percent.

use crate::types::{
    ChannelReading, ChassisTarget, RcCommand, CHANNEL_NEUTRAL, ENABLE_CHANNEL, STEERING_CHANNEL,
    THROTTLE_CHANNEL,
};

/// Channel units per percent of stick throw.
const PERCENT_SCALE: f64 = 5.0;

/// Throttle magnitudes at or below this snap to exactly zero.
pub const THROTTLE_DEAD_ZONE: f64 = 5.0;

/// Steering angles inside ±this band drive straight (infinite radius).
pub const STRAIGHT_BAND: f64 = 6.0;

/// Chassis steering geometry, read from the chassis each cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusLimits {
    pub min: f64,
    pub max: f64,
}

/// Derive the clamped steering/throttle command and enable state from one
/// reading.
///
/// The enable switch is channel 4: anything at or above neutral enables RC
/// control, anything below disables it.
#[must_use]
pub fn command_from_reading(reading: &ChannelReading) -> RcCommand {
    let angle = (reading.channel(STEERING_CHANNEL) - CHANNEL_NEUTRAL) / PERCENT_SCALE;
    let throttle = (reading.channel(THROTTLE_CHANNEL) - CHANNEL_NEUTRAL) / PERCENT_SCALE;
    let enabled = reading.channel(ENABLE_CHANNEL) - CHANNEL_NEUTRAL >= 0.0;

    RcCommand {
        angle: angle.clamp(-100.0, 100.0),
        throttle: dead_zone(throttle.clamp(-100.0, 100.0)),
        enabled,
    }
}

#[inline]
fn dead_zone(throttle: f64) -> f64 {
    if throttle.abs() <= THROTTLE_DEAD_ZONE {
        0.0
    } else {
        throttle
    }
}

/// Turn radius for a clamped steering angle.
///
/// Inside the straight band the radius is infinite. Outside it the radius
/// shrinks linearly from `max` at the band edge toward `min` at full stick;
/// negative radii turn the other way.
#[must_use]
pub fn turn_radius(angle: f64, limits: RadiusLimits) -> f64 {
    if (-STRAIGHT_BAND..=STRAIGHT_BAND).contains(&angle) {
        f64::INFINITY
    } else if angle > 1.0 {
        limits.min + (limits.max - limits.min) * (100.0 - angle) / 100.0
    } else {
        -limits.min - (limits.max - limits.min) * (100.0 + angle) / 100.0
    }
}

/// Full chassis target for a command, using the chassis geometry limits.
#[must_use]
pub fn chassis_target(command: &RcCommand, limits: RadiusLimits) -> ChassisTarget {
    ChassisTarget {
        throttle: command.throttle,
        radius: turn_radius(command.angle, limits),
    }
}
