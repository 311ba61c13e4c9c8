// src/driver/sync_driver/detect.rs

use crate::codec::FrameScanner;
use crate::common::frame::DataFormat;
use log::debug;

/// Progress of format detection.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum ProbeState {
    /// Nothing conclusive yet; another read may be probed.
    #[default]
    Unknown,
    Binary,
    Ascii,
    /// Probe budget spent without a valid frame.
    Undetermined,
}

impl ProbeState {
    pub const fn data_format(&self) -> DataFormat {
        match self {
            ProbeState::Binary => DataFormat::Binary,
            ProbeState::Ascii => DataFormat::Ascii,
            _ => DataFormat::Unknown,
        }
    }

    /// Binary, Ascii and Undetermined are final.
    pub const fn is_settled(&self) -> bool {
        matches!(self, ProbeState::Binary | ProbeState::Ascii | ProbeState::Undetermined)
    }
}

/// Result of probing one buffer.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Probe {
    pub state: ProbeState,
    /// Leading bytes of the probed buffer that can be dropped.
    pub consumed: usize,
}

/// Decides the wire format from accumulated receive bytes.
///
/// Binary is tried before ASCII on every probe. Frames that validate during
/// detection only establish the format; their values are not kept.
#[derive(Debug, Clone)]
pub struct FormatDetector {
    state: ProbeState,
    attempts: u32,
    max_attempts: u32,
}

impl FormatDetector {
    /// `max_attempts` below 1 is treated as 1.
    pub fn new(max_attempts: u32) -> Self {
        FormatDetector {
            state: ProbeState::Unknown,
            attempts: 0,
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn state(&self) -> ProbeState {
        self.state
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn reset(&mut self) {
        self.state = ProbeState::Unknown;
        self.attempts = 0;
    }

    /// Probes `buffer` once. A settled detector does not probe again.
    pub fn probe(&mut self, buffer: &[u8]) -> Probe {
        if self.state.is_settled() {
            return Probe { state: self.state, consumed: 0 };
        }
        self.attempts += 1;

        let (found, binary_consumed) = scan_for_valid(buffer, DataFormat::Binary);
        if found {
            self.state = ProbeState::Binary;
            return Probe { state: self.state, consumed: binary_consumed };
        }

        let (found, ascii_consumed) = scan_for_valid(buffer, DataFormat::Ascii);
        if found {
            self.state = ProbeState::Ascii;
            return Probe { state: self.state, consumed: ascii_consumed };
        }

        self.state = if self.attempts >= self.max_attempts {
            ProbeState::Undetermined
        } else {
            ProbeState::Unknown
        };
        // Keep whatever either format could still complete.
        Probe {
            state: self.state,
            consumed: binary_consumed.min(ascii_consumed),
        }
    }
}

fn scan_for_valid(buffer: &[u8], format: DataFormat) -> (bool, usize) {
    let mut scanner = FrameScanner::new(buffer, format);
    let mut found = false;
    for item in scanner.by_ref() {
        match item {
            Ok(_) => found = true,
            Err(e) => debug!("probe {:?}: rejected frame: {}", format, e),
        }
    }
    (found, scanner.finish())
}
