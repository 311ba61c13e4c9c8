// src/codec/scanner.rs

use super::{ascii::decode_ascii_frame, binary::{decode_binary_frame, has_binary_marker}};
use crate::common::{
    error::FrameError,
    frame::DataFormat,
    layout::*,
    types::RawReading,
};

/// Walks an accumulated receive buffer and yields every complete frame of one
/// format, in buffer order.
///
/// Each item is either a decoded frame or the reason a candidate window was
/// rejected. Once the iterator is exhausted, [`FrameScanner::finish`] reports
/// how many leading bytes are done with; the rest is a partial frame to keep
/// for the next read. Scanning never mutates the buffer, so scanning the same
/// bytes twice yields the same sequence.
#[derive(Debug, Clone)]
pub struct FrameScanner<'a> {
    buffer: &'a [u8],
    format: DataFormat,
    pos: usize,
}

impl<'a> FrameScanner<'a> {
    pub fn new(buffer: &'a [u8], format: DataFormat) -> Self {
        FrameScanner { buffer, format, pos: 0 }
    }

    /// Drains the remaining frames and returns the number of leading bytes
    /// that can be dropped from the buffer.
    pub fn finish(mut self) -> usize {
        while self.next().is_some() {}
        match self.format {
            DataFormat::Unknown => 0,
            DataFormat::Binary => self.binary_tail_start(),
            DataFormat::Ascii => self.ascii_tail_start(),
        }
    }

    // Byte-at-a-time resync: a rejected marker advances one byte, not a frame.
    fn next_binary(&mut self) -> Option<Result<RawReading, FrameError>> {
        while self.pos + BINARY_FRAME_LEN <= self.buffer.len() {
            let window = &self.buffer[self.pos..self.pos + BINARY_FRAME_LEN];
            if !has_binary_marker(window) {
                self.pos += 1;
                continue;
            }
            return match decode_binary_frame(window) {
                Ok(frame) => match self.header_inside_window() {
                    // Frame lost bytes and ran into the next one.
                    Some(next) if next + BINARY_FRAME_LEN <= self.buffer.len() => {
                        let got = next - self.pos;
                        self.pos = next;
                        Some(Err(FrameError::TooShort { needed: BINARY_FRAME_LEN, got }))
                    }
                    // Wait for the inner frame before deciding.
                    Some(_) => None,
                    None => {
                        self.pos += BINARY_FRAME_LEN;
                        Some(Ok(RawReading::Binary(frame)))
                    }
                },
                Err(e) => {
                    self.pos += 1;
                    Some(Err(e))
                }
            };
        }
        None
    }

    /// Start of a complete `FF FF 'R' 'T'` header inside the window at `pos`.
    fn header_inside_window(&self) -> Option<usize> {
        (self.pos + 1..self.pos + BINARY_FRAME_LEN).find(|&i| {
            self.buffer.get(i..i + BINARY_HEADER_LEN).map_or(false, |header| {
                header[..2] == BINARY_MARKER && header[2..] == BINARY_SIGNATURE
            })
        })
    }

    /// First byte after `pos` that could still begin a frame once more bytes
    /// arrive.
    fn binary_tail_start(&self) -> usize {
        let len = self.buffer.len();
        (self.pos..len)
            .find(|&i| {
                self.buffer[i] == BINARY_MARKER[0]
                    && self.buffer.get(i + 1).map_or(true, |&b| b == BINARY_MARKER[1])
            })
            .unwrap_or(len)
    }

    // A closing newline doubles as the opening newline of the next frame.
    fn next_ascii(&mut self) -> Option<Result<RawReading, FrameError>> {
        loop {
            let rest = self.buffer.get(self.pos..)?;
            let open = match rest.iter().position(|&b| b == ASCII_DELIMITER) {
                Some(offset) => self.pos + offset,
                None => {
                    self.pos = self.buffer.len();
                    return None;
                }
            };
            self.pos = open;
            let close = self.buffer[open + 1..]
                .iter()
                .position(|&b| b == ASCII_DELIMITER)
                .map(|offset| open + 1 + offset)?;
            self.pos = close;

            // Back-to-back newlines delimit nothing.
            if close == open + 1 {
                continue;
            }
            let window = &self.buffer[open..=close];
            return Some(decode_ascii_frame(window).map(RawReading::Ascii));
        }
    }

    /// Keeps an unterminated run only while it could still become a frame.
    fn ascii_tail_start(&self) -> usize {
        let len = self.buffer.len();
        if self.pos < len && len - self.pos < ASCII_FRAME_MAX_LEN {
            self.pos
        } else {
            len
        }
    }
}

impl<'a> Iterator for FrameScanner<'a> {
    type Item = Result<RawReading, FrameError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.format {
            DataFormat::Unknown => None,
            DataFormat::Binary => self.next_binary(),
            DataFormat::Ascii => self.next_ascii(),
        }
    }
}
