//! Serial link trait and error types.

use std::io;

use thiserror::Error;

/// Error type for link operations.
///
/// A read that times out is not an error; it returns zero bytes.
#[derive(Debug, Error)]
pub enum LinkError {
    /// The underlying device failed while reading.
    #[error("serial read failed: {0}")]
    Read(#[source] io::Error),
    /// The underlying device failed while writing.
    #[error("serial write failed: {0}")]
    Write(#[source] io::Error),
}

/// Blocking serial byte stream with a bounded read timeout.
///
/// This trait abstracts the open serial device so decoders can be exercised
/// against scripted byte streams on the host. Implementations block in
/// [`read`](SerialLink::read) for at most the configured port timeout and
/// return `Ok(0)` when it elapses with nothing received.
pub trait SerialLink: Send {
    /// Read up to `buf.len()` bytes, returning how many were actually read.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, LinkError>;

    /// Write the buffer, returning how many bytes were accepted.
    fn write(&mut self, buf: &[u8]) -> Result<usize, LinkError>;
}
