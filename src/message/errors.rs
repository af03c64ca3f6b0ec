use thiserror::Error;

/// Message building errors.
///
/// Every appender either succeeds, or reports one of these kinds and leaves
/// the running message length untouched. There is no rollback of partial
/// writes; a caller that cares about atomicity builds into a scratch buffer
/// and discards it on the first failure.
#[derive(Error, Debug, Copy, Clone, Eq, PartialEq)]
pub enum BuilderError {
    /// The attribute would overflow the declared buffer capacity. `needed`
    /// includes the reservation margin kept for the MESSAGE-INTEGRITY
    /// trailer.
    #[error("No buffer space: {needed} bytes needed, {available} available.")]
    NoBufferSpace {
        /// Bytes the append would need, margin included
        needed: usize,
        /// Usable buffer capacity
        available: usize,
    },
    /// ERROR-CODE values live in the 300-699 range.
    #[error("Error code {0} is outside the 300-699 range.")]
    ErrorCodeOutOfRange(u16),
}

/// Errors raised when wrapping received bytes into a [`MessageRef`](super::MessageRef).
#[derive(Error, Debug, Copy, Clone, Eq, PartialEq)]
pub enum MessageRefError {
    /// Fewer bytes than a STUN header were provided.
    #[error("A buffer of {0} bytes is too short to hold a STUN header.")]
    BufferTooShort(usize),
    /// The magic cookie field doesn't match 0x2112a442.
    /// It's possible that the received byte sequence is not a STUN message.
    #[error("Magic cookie mismatch.")]
    MagicCookieMismatch,
    /// The header declares more attribute bytes than the buffer holds.
    #[error("Message length field declares {declared} attribute bytes but only {available} are present.")]
    TruncatedMessage {
        /// Attribute byte count from the header
        declared: usize,
        /// Attribute bytes actually present
        available: usize,
    },
}
