//! The RC control loop: drain, decode, filter, map, command, failsafe.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::chassis::Chassis;
use crate::config::Protocol;
use crate::decoder::FrameDecoder;
use crate::glitch::GlitchFilter;
use crate::mapping::{self, RadiusLimits};
use crate::types::ChannelReading;

/// Readings arriving closer together than this are decoded but not acted on.
pub const MIN_SAMPLE_INTERVAL: Duration = Duration::from_millis(50);

/// RC input is forced off when no enabled reading arrived within this window.
pub const ENABLE_TIMEOUT: Duration = Duration::from_secs(2);

/// Shared run flag: set at construction, cleared by [`cancel`](RunState::cancel),
/// polled once per loop iteration.
///
/// Cancellation is cooperative; a request is honored once the current
/// blocking read returns or times out.
#[derive(Debug, Clone)]
pub struct RunState(Arc<AtomicBool>);

impl RunState {
    #[must_use]
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    /// Request a graceful stop.
    pub fn cancel(&self) {
        self.0.store(false, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

impl Default for RunState {
    fn default() -> Self {
        Self::new()
    }
}

/// Drives one decoder against one chassis until cancelled.
///
/// The loop owns all of its state; [`RunState`] is the only handle the
/// outside world keeps. Decode failures skip the cycle, and the failsafe
/// check runs every iteration whether or not a reading arrived.
pub struct RcLoop<C: Chassis> {
    decoder: Box<dyn FrameDecoder>,
    protocol: Protocol,
    chassis: C,
    run: RunState,
    glitch: GlitchFilter,
    /// When the last acted-on reading arrived.
    last_accepted: Option<Instant>,
    /// When the enable switch was last seen on; `None` means never.
    last_enable: Option<Instant>,
    /// Whether the stop command for the current idle stretch went out.
    stop_sent: bool,
}

impl<C: Chassis> RcLoop<C> {
    #[must_use]
    pub fn new(decoder: Box<dyn FrameDecoder>, protocol: Protocol, chassis: C, run: RunState) -> Self {
        Self {
            decoder,
            protocol,
            chassis,
            run,
            glitch: GlitchFilter::new(),
            last_accepted: None,
            last_enable: None,
            stop_sent: false,
        }
    }

    /// Drain stale input, then cycle until the run flag clears.
    pub fn run(&mut self) {
        log::info!("rc reader loop starting, protocol {:?}", self.protocol);

        if let Err(err) = self.decoder.drain() {
            log::warn!("startup drain failed: {err}");
        }

        while self.run.is_running() {
            self.cycle(Instant::now());
        }

        log::info!("rc reader loop exiting");
    }

    /// One decode/command cycle. Split from `run` so tests can drive time.
    fn cycle(&mut self, now: Instant) {
        match self.decoder.next_reading() {
            Ok(reading) => self.process(reading),
            Err(err) => log::debug!("decode skipped: {err}"),
        }

        // The failsafe runs every iteration, decoded or not: silence must
        // never leave a stale command in control.
        let expired = match self.last_enable {
            Some(last) => now.duration_since(last) > ENABLE_TIMEOUT,
            None => true,
        };
        if expired {
            self.chassis.set_use_rc_input(false);
        }
    }

    fn process(&mut self, reading: ChannelReading) {
        if let Some(last) = self.last_accepted {
            if reading.timestamp.duration_since(last) <= MIN_SAMPLE_INTERVAL {
                return;
            }
        }
        self.last_accepted = Some(reading.timestamp);

        if self.protocol == Protocol::Ascii && !self.glitch.accept(&reading) {
            return;
        }

        let command = mapping::command_from_reading(&reading);
        if !command.enabled {
            self.chassis.set_use_rc_input(false);
            self.last_enable = None;
            return;
        }

        self.last_enable = Some(reading.timestamp);
        self.chassis.set_use_rc_input(true);

        let limits = RadiusLimits {
            min: self.chassis.min_radius(),
            max: self.chassis.max_radius(),
        };
        let target = mapping::chassis_target(&command, limits);

        if !target.is_stop() {
            self.stop_sent = false;
            self.chassis.ensure_ready();
            self.chassis.move_velocity_radius(target.throttle, target.radius);
        } else if !self.stop_sent {
            // One stop per transition into idle; the chassis does not need
            // to hear it again every 50 ms.
            self.stop_sent = true;
            self.chassis.ensure_ready();
            self.chassis.move_velocity_radius(target.throttle, target.radius);
        }
    }
}
