// src/common/frame.rs

/// Wire format the device is streaming in.
///
/// `Unknown` until format detection succeeds. The driver only ever moves
/// `Unknown -> Binary` or `Unknown -> Ascii`; going back requires an explicit
/// reset.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum DataFormat {
    #[default]
    Unknown,
    /// Fixed 28-byte frames starting with `0xFF 0xFF 'R' 'T'`.
    Binary,
    /// Newline-delimited frames of eleven comma-separated decimal tokens.
    Ascii,
}

impl DataFormat {
    #[inline]
    pub const fn is_known(&self) -> bool {
        !matches!(self, DataFormat::Unknown)
    }
}
