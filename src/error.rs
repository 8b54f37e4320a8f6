// Construction-time errors for the emitter

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmitterError {
    /// No event bus was supplied while bus validation is required.
    #[error("event bus is required, but none was supplied")]
    MissingBus,
    #[error("invalid channel configuration: {0}")]
    InvalidChannel(String),
}
