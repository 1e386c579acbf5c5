pub mod replay;
pub mod tcp;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StreamError {
    #[error("sensor stream unavailable: {0}")]
    Unavailable(String),

    #[error("stream I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A replayed recording ran out of frames. Not a device failure.
    #[error("recording exhausted")]
    Exhausted,
}

/// Capability to read one frame line with a bounded wait.
///
/// `Ok(None)` means nothing arrived within the wait; the tick ends with no
/// state change. Errors other than [`StreamError::Exhausted`] are fatal to
/// the monitor loop.
pub trait LineStream {
    fn read_line(&mut self) -> Result<Option<String>, StreamError>;
}
