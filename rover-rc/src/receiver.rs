//! Reader lifecycle: open the link, pick the protocol, run the decode loop
//! on a dedicated thread.

use std::io;
use std::thread::{self, JoinHandle};

use ascii_proto::AsciiDecoder;
use rc_core::{Chassis, ConnectionConfig, FrameDecoder, Protocol, RcLoop, RunState};
use sbus_proto::SbusDecoder;
use thiserror::Error;

use crate::serial::{OpenError, UartLink};

/// Why the reader could not start.
#[derive(Debug, Error)]
pub enum StartError {
    /// `start` was already called on this reader.
    #[error("rc reader already started")]
    AlreadyStarted,
    /// The serial device could not be opened. RC mode stays disabled.
    #[error(transparent)]
    Open(#[from] OpenError),
    /// The reader thread could not be spawned.
    #[error("failed to spawn rc reader thread: {0}")]
    Spawn(#[source] io::Error),
}

/// Owns the background decode thread.
///
/// `start` and `cancel` are the only mutations available from outside the
/// loop; everything else is private to the thread body.
pub struct RcReader {
    run: RunState,
    thread: Option<JoinHandle<()>>,
    started: bool,
}

impl RcReader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            run: RunState::new(),
            thread: None,
            started: false,
        }
    }

    /// Open the configured link and start the decode loop.
    ///
    /// On an open failure RC input is disabled on the chassis and the loop
    /// never runs. Starting twice is an error even after a failed first
    /// attempt.
    pub fn start<C>(&mut self, config: &ConnectionConfig, chassis: C) -> Result<(), StartError>
    where
        C: Chassis + 'static,
    {
        if self.started {
            return Err(StartError::AlreadyStarted);
        }
        self.started = true;

        let link = match UartLink::open(config) {
            Ok(link) => link,
            Err(err) => {
                log::error!("rc reader start failed: {err}");
                chassis.set_use_rc_input(false);
                return Err(err.into());
            }
        };

        let protocol = config.resolve_protocol();
        let decoder: Box<dyn FrameDecoder> = match protocol {
            Protocol::Sbus => Box::new(SbusDecoder::new(link)),
            Protocol::Ascii => Box::new(AsciiDecoder::new(link)),
        };

        let mut rc_loop = RcLoop::new(decoder, protocol, chassis, self.run.clone());
        let handle = thread::Builder::new()
            .name("rc-reader".into())
            .spawn(move || rc_loop.run())
            .map_err(StartError::Spawn)?;
        self.thread = Some(handle);
        Ok(())
    }

    /// Request a graceful stop; honored within one read timeout.
    pub fn cancel(&self) {
        self.run.cancel();
    }

    /// Wait for the loop thread to exit.
    pub fn join(&mut self) {
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }
}

impl Default for RcReader {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for RcReader {
    fn drop(&mut self) {
        self.cancel();
        self.join();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chassis::AtomicChassis;

    fn missing_device_config() -> ConnectionConfig {
        ConnectionConfig::sbus("/dev/rover-rc-test-no-such-device")
    }

    #[test]
    fn test_failed_open_disables_rc_input() {
        let chassis = AtomicChassis::new(0.5, 5.0);
        chassis.set_use_rc_input(true);

        let mut reader = RcReader::new();
        let result = reader.start(&missing_device_config(), chassis.clone());

        assert!(matches!(result, Err(StartError::Open(_))));
        assert!(!chassis.use_rc_input());
    }

    #[test]
    fn test_double_start_is_rejected() {
        let chassis = AtomicChassis::new(0.5, 5.0);
        let mut reader = RcReader::new();

        let _ = reader.start(&missing_device_config(), chassis.clone());
        let second = reader.start(&missing_device_config(), chassis);
        assert!(matches!(second, Err(StartError::AlreadyStarted)));
    }

    #[test]
    fn test_cancel_before_start_is_harmless() {
        let reader = RcReader::new();
        reader.cancel();
    }
}
