// src/transport/scripted.rs

use crate::common::hal_traits::ImuSerial;
use std::collections::VecDeque;
use std::vec::Vec;

/// Failure injected by a [`ScriptedTransport`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
pub enum ScriptedError {
    #[error("Scripted open failure")]
    OpenRefused,
    #[error("Scripted read failure")]
    ReadFailed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ScriptedRead {
    Data(Vec<u8>),
    Empty,
    Fail,
}

/// In-memory transport that replays a scripted sequence of reads.
///
/// Each call to `read_from_device` consumes the next scripted buffer. A buffer
/// larger than the caller's is served across several calls. Once the script
/// runs out, the `repeat` buffer (if any) is returned on every call, otherwise
/// reads report no data.
#[derive(Debug, Clone, Default)]
pub struct ScriptedTransport {
    open_results: VecDeque<bool>,
    reads: VecDeque<ScriptedRead>,
    repeat: Option<Vec<u8>>,
    pending: Vec<u8>,
    written: Vec<u8>,
    is_open: bool,
    read_calls: usize,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Results for successive opens; once exhausted, opens succeed.
    pub fn script_open(mut self, results: &[bool]) -> Self {
        self.open_results.extend(results.iter().copied());
        self
    }

    pub fn push_read(&mut self, bytes: &[u8]) -> &mut Self {
        self.reads.push_back(ScriptedRead::Data(bytes.to_vec()));
        self
    }

    pub fn push_empty_read(&mut self) -> &mut Self {
        self.reads.push_back(ScriptedRead::Empty);
        self
    }

    pub fn push_read_error(&mut self) -> &mut Self {
        self.reads.push_back(ScriptedRead::Fail);
        self
    }

    /// Returned by every read after the script runs out.
    pub fn repeat_forever(&mut self, bytes: &[u8]) -> &mut Self {
        self.repeat = Some(bytes.to_vec());
        self
    }

    pub fn read_calls(&self) -> usize {
        self.read_calls
    }

    pub fn written(&self) -> &[u8] {
        &self.written
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    fn serve(&mut self, buf: &mut [u8]) -> usize {
        let n = self.pending.len().min(buf.len());
        buf[..n].copy_from_slice(&self.pending[..n]);
        self.pending.drain(..n);
        n
    }
}

impl ImuSerial for ScriptedTransport {
    type Error = ScriptedError;

    fn open_serial_port(&mut self) -> Result<(), Self::Error> {
        let ok = self.open_results.pop_front().unwrap_or(true);
        self.is_open = ok;
        if ok {
            Ok(())
        } else {
            Err(ScriptedError::OpenRefused)
        }
    }

    fn close_serial_port(&mut self) {
        self.is_open = false;
    }

    fn read_from_device(&mut self, buf: &mut [u8]) -> nb::Result<usize, Self::Error> {
        self.read_calls += 1;
        if self.pending.is_empty() {
            match self.reads.pop_front() {
                Some(ScriptedRead::Data(bytes)) => self.pending = bytes,
                Some(ScriptedRead::Empty) => return Ok(0),
                Some(ScriptedRead::Fail) => return Err(nb::Error::Other(ScriptedError::ReadFailed)),
                None => match &self.repeat {
                    Some(bytes) => self.pending = bytes.clone(),
                    None => return Err(nb::Error::WouldBlock),
                },
            }
        }
        Ok(self.serve(buf))
    }

    fn write_to_device(&mut self, buf: &[u8]) -> nb::Result<usize, Self::Error> {
        self.written.extend_from_slice(buf);
        Ok(buf.len())
    }
}
