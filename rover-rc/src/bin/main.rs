//! Drive a chassis from an RC receiver attached to a serial port.
//!
//! ```text
//! rover-rc <port> [sbus|ascii]
//! ```
//!
//! Without a protocol argument the legacy port-name rule applies: ports
//! named like `…sbus-rc` carry SBUS, everything else the ASCII sentences.
//! Commands are written to the log; set `RUST_LOG=info` to see them.

use anyhow::{bail, Result};
use rc_core::{ConnectionConfig, Protocol};
use rover_rc::{AtomicChassis, RcReader};

/// Demo chassis geometry, in meters.
const MIN_RADIUS: f64 = 0.5;
const MAX_RADIUS: f64 = 5.0;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(port) = args.next() else {
        bail!("usage: rover-rc <port> [sbus|ascii]");
    };
    let protocol = match args.next().as_deref() {
        Some("sbus") => Some(Protocol::Sbus),
        Some("ascii") => Some(Protocol::Ascii),
        Some(other) => bail!("unknown protocol {other:?}, expected sbus or ascii"),
        None => None,
    };

    let mut config = match protocol.unwrap_or_else(|| Protocol::from_port_name(&port)) {
        Protocol::Sbus => ConnectionConfig::sbus(&port),
        Protocol::Ascii => ConnectionConfig::ascii(&port),
    };
    config.protocol = protocol;

    let chassis = AtomicChassis::new(MIN_RADIUS, MAX_RADIUS);

    // Receiver hardware is optional: a failed open leaves the rover on
    // manual control with RC input disabled.
    let mut reader = RcReader::new();
    let reader = match reader.start(&config, chassis.clone()) {
        Ok(()) => Some(reader),
        Err(err) => {
            log::error!("rc receiver unavailable: {err}");
            None
        }
    };

    match reader {
        Some(mut reader) => {
            reader.join();
            Ok(())
        }
        None => bail!("rc receiver could not be started"),
    }
}
