// src/common/error.rs

use core::fmt::Debug;

/// Errors surfaced by driver operations.
#[derive(Debug, thiserror::Error)]
pub enum ImuError<E = ()>
where
    E: Debug, // Need Debug for the generic Io error
{
    /// Underlying I/O error from the transport implementation.
    #[error("I/O error: {0:?}")] // Format string requires Debug on E
    Io(E),

    /// Sensor data was requested before a data format was determined.
    #[error("Data format has not been determined")]
    FormatUnknown,

    /// No read produced a valid frame of either format within the probe budget.
    #[error("Data format undetermined after {attempts} probe reads")]
    FormatUndetermined { attempts: u32 },
}

/// Reason a frame window was rejected.
///
/// Never returned from driver operations: rejected frames are dropped and
/// scanning continues.
#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
pub enum FrameError {
    /// Window is shorter than one binary frame.
    #[error("Frame too short: needed {needed}, got {got}")]
    TooShort { needed: usize, got: usize },

    /// First two bytes are not `0xFF 0xFF`.
    #[error("Missing 0xFF 0xFF start marker")]
    BadMarker,

    /// Format signature is not `'R' 'T'` in that order.
    #[error("Format signature mismatch: {found:#04x?}")]
    SignatureMismatch { found: [u8; 2] },

    /// ASCII window does not begin and end with a newline.
    #[error("Frame is not delimited by newlines")]
    MissingDelimiter,

    /// ASCII frame does not have exactly eleven fields.
    #[error("Expected 11 fields, found {found}")]
    FieldCount { found: usize },

    /// ASCII timestamp token carries a decimal point.
    #[error("Timestamp has a fractional part")]
    FractionalTimestamp,

    /// ASCII timestamp token is not an integer literal.
    #[error("Timestamp is not an integer")]
    InvalidTimestamp,

    /// ASCII field at `field` is not a finite decimal number.
    #[error("Field {field} is not a number")]
    InvalidNumber { field: usize },

    /// ASCII window is not valid UTF-8.
    #[error("Frame is not valid UTF-8")]
    InvalidUtf8,

    /// ASCII window exceeds the maximum frame length.
    #[error("Frame longer than {max} bytes")]
    FrameTooLong { max: usize },
}
