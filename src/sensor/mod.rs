// src/sensor/mod.rs

// Device-side view of the wire formats: turns raw channel values into the
// exact bytes the IMU emits. Used to emulate a device and to build fixtures.

#[cfg(test)]
pub(crate) mod fixtures;

use crate::common::{
    error::FrameError,
    layout::*,
    types::{AsciiFrame, BinaryFrame},
};
use arrayvec::ArrayString;
use core::fmt::Write;

/// One encoded ASCII frame, delimiters included.
pub type AsciiLine = ArrayString<ASCII_FRAME_MAX_LEN>;

#[inline]
fn put_i16(buf: &mut [u8], offset: usize, value: i16) {
    buf[offset..offset + 2].copy_from_slice(&value.to_le_bytes());
}

/// Encodes a binary frame with the `0xFF 0xFF 'R' 'T'` header.
pub fn encode_binary_frame(frame: &BinaryFrame) -> [u8; BINARY_FRAME_LEN] {
    let mut buf = [0u8; BINARY_FRAME_LEN];
    buf[BIN_HEADER_FF0] = BINARY_MARKER[0];
    buf[BIN_HEADER_FF1] = BINARY_MARKER[1];
    buf[BIN_HEADER_R] = BINARY_SIGNATURE[0];
    buf[BIN_HEADER_T] = BINARY_SIGNATURE[1];
    buf[BIN_HEADER_ID0] = frame.device_id[0];
    buf[BIN_HEADER_ID1] = frame.device_id[1];
    buf[BIN_FIRMWARE] = frame.firmware;
    buf[BIN_TIMESTAMP] = frame.timestamp;

    for (offset, value) in [BIN_ACC_X, BIN_ACC_Y, BIN_ACC_Z].into_iter().zip(frame.acc) {
        put_i16(&mut buf, offset, value);
    }
    put_i16(&mut buf, BIN_TEMP, frame.temperature);
    for (offset, value) in [BIN_GYRO_X, BIN_GYRO_Y, BIN_GYRO_Z].into_iter().zip(frame.gyro) {
        put_i16(&mut buf, offset, value);
    }
    for (offset, value) in [BIN_MAG_X, BIN_MAG_Y, BIN_MAG_Z].into_iter().zip(frame.mag) {
        put_i16(&mut buf, offset, value);
    }
    buf
}

/// Encodes an ASCII frame as `\n` + eleven comma-separated tokens + `\n`.
///
/// Fails with `FrameTooLong` if the values do not fit in one frame, which
/// only happens for extreme magnitudes.
pub fn encode_ascii_frame(frame: &AsciiFrame) -> Result<AsciiLine, FrameError> {
    let mut line = AsciiLine::new();
    let too_long = |_| FrameError::FrameTooLong { max: ASCII_FRAME_MAX_LEN };

    write!(line, "\n{}", frame.timestamp).map_err(too_long)?;
    let values = frame
        .gyro
        .iter()
        .chain(frame.acc.iter())
        .chain(frame.mag.iter())
        .chain(core::iter::once(&frame.temperature));
    for value in values {
        write!(line, ",{}", value).map_err(too_long)?;
    }
    line.try_push(ASCII_DELIMITER as char).map_err(|_| FrameError::FrameTooLong {
        max: ASCII_FRAME_MAX_LEN,
    })?;
    Ok(line)
}
