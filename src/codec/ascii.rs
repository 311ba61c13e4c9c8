// src/codec/ascii.rs

use crate::common::{
    error::FrameError,
    layout::*,
    types::AsciiFrame,
};
use core::str;

// --- Internal Helpers ---
#[inline]
fn strip_delimiters(window: &[u8]) -> Option<&[u8]> {
    window
        .strip_prefix(&[ASCII_DELIMITER])?
        .strip_suffix(&[ASCII_DELIMITER])
}

/// The timestamp must be an integer literal; a decimal point marks the frame
/// invalid even if the value is whole.
fn parse_timestamp(token: &str) -> Result<i64, FrameError> {
    if token.contains('.') {
        return Err(FrameError::FractionalTimestamp);
    }
    token.parse::<i64>().map_err(|_| FrameError::InvalidTimestamp)
}

fn parse_value(token: &str, field: usize) -> Result<f64, FrameError> {
    match token.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(FrameError::InvalidNumber { field }),
    }
}

/// Validates and decodes one ASCII frame.
///
/// `window` must be exactly `\n` + eleven comma-separated tokens + `\n`, in the
/// order timestamp, gyro x/y/z, accelerometer x/y/z, magnetometer x/y/z,
/// temperature. Tokens are plain decimal literals; the only padding tolerated
/// is a `\r` left by devices that end lines with `\r\n`.
pub fn decode_ascii_frame(window: &[u8]) -> Result<AsciiFrame, FrameError> {
    if window.len() > ASCII_FRAME_MAX_LEN {
        return Err(FrameError::FrameTooLong { max: ASCII_FRAME_MAX_LEN });
    }
    let body = strip_delimiters(window).ok_or(FrameError::MissingDelimiter)?;
    let text = str::from_utf8(body).map_err(|_| FrameError::InvalidUtf8)?;

    let mut fields = [""; ASCII_FIELD_COUNT];
    let mut found = 0;
    for token in text.split(ASCII_SEPARATOR) {
        if let Some(slot) = fields.get_mut(found) {
            *slot = token.trim_end_matches('\r');
        }
        found += 1;
    }
    if found != ASCII_FIELD_COUNT {
        return Err(FrameError::FieldCount { found });
    }

    let timestamp = parse_timestamp(fields[ASCII_TIMESTAMP])?;
    let value = |field: usize| parse_value(fields[field], field);

    Ok(AsciiFrame {
        timestamp,
        gyro: [value(ASCII_GYRO_X)?, value(ASCII_GYRO_Y)?, value(ASCII_GYRO_Z)?],
        acc: [value(ASCII_ACC_X)?, value(ASCII_ACC_Y)?, value(ASCII_ACC_Z)?],
        mag: [value(ASCII_MAG_X)?, value(ASCII_MAG_Y)?, value(ASCII_MAG_Z)?],
        temperature: value(ASCII_TEMP)?,
    })
}
