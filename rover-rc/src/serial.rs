//! Serial transport over the host's UART devices.

use std::io::{self, Read, Write};

use rc_core::{ConnectionConfig, LinkError, Parity, SerialLink};
use serialport::SerialPort;
use thiserror::Error;

/// Why the port could not be opened.
///
/// Any of these is fatal to RC mode: the caller must disable RC input on the
/// chassis and never start the decode loop.
#[derive(Debug, Error)]
pub enum OpenError {
    #[error("serial device {0} is busy")]
    Busy(String),
    #[error("serial device {0} not found")]
    NotFound(String),
    #[error("permission denied opening serial device {0}")]
    PermissionDenied(String),
    #[error("failed to open serial device {port}: {source}")]
    Port {
        port: String,
        #[source]
        source: serialport::Error,
    },
}

/// An open serial device configured from a [`ConnectionConfig`].
///
/// The handle is released when the link is dropped.
pub struct UartLink {
    port: Box<dyn SerialPort>,
}

impl UartLink {
    /// Open the configured device and apply baud rate, parity, stop bits and
    /// read timeout.
    pub fn open(config: &ConnectionConfig) -> Result<Self, OpenError> {
        let parity = match config.parity {
            Parity::None => serialport::Parity::None,
            Parity::Even => serialport::Parity::Even,
            Parity::Odd => serialport::Parity::Odd,
        };
        let stop_bits = match config.stop_bits {
            2 => serialport::StopBits::Two,
            _ => serialport::StopBits::One,
        };

        let port = serialport::new(&config.port, config.baud_rate)
            .data_bits(serialport::DataBits::Eight)
            .parity(parity)
            .stop_bits(stop_bits)
            .flow_control(serialport::FlowControl::None)
            .timeout(config.timeout)
            .open()
            .map_err(|err| classify(&config.port, err))?;

        log::info!(
            "opened {} at {} baud, parity {:?}, {} stop bits",
            config.port,
            config.baud_rate,
            config.parity,
            config.stop_bits
        );

        Ok(Self { port })
    }
}

fn classify(port: &str, err: serialport::Error) -> OpenError {
    match err.kind() {
        serialport::ErrorKind::NoDevice => OpenError::NotFound(port.to_string()),
        serialport::ErrorKind::Io(io::ErrorKind::NotFound) => OpenError::NotFound(port.to_string()),
        serialport::ErrorKind::Io(io::ErrorKind::PermissionDenied) => {
            OpenError::PermissionDenied(port.to_string())
        }
        _ if err.description.contains("busy") => OpenError::Busy(port.to_string()),
        _ => OpenError::Port {
            port: port.to_string(),
            source: err,
        },
    }
}

impl SerialLink for UartLink {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, LinkError> {
        match self.port.read(buf) {
            Ok(n) => Ok(n),
            Err(err) if err.kind() == io::ErrorKind::TimedOut => Ok(0),
            Err(err) => Err(LinkError::Read(err)),
        }
    }

    fn write(&mut self, buf: &[u8]) -> Result<usize, LinkError> {
        self.port.write(buf).map_err(LinkError::Write)
    }
}
