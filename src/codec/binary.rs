// src/codec/binary.rs

use crate::common::{
    error::FrameError,
    layout::*,
    types::BinaryFrame,
};

// --- Internal Helpers ---
#[inline]
fn read_i16(frame: &[u8], offset: usize) -> i16 {
    i16::from_le_bytes([frame[offset], frame[offset + 1]])
}

#[inline]
fn read_axes(frame: &[u8], x: usize, y: usize, z: usize) -> [i16; 3] {
    [read_i16(frame, x), read_i16(frame, y), read_i16(frame, z)]
}

/// True if `window` starts with the `0xFF 0xFF` frame marker.
#[inline]
pub fn has_binary_marker(window: &[u8]) -> bool {
    window.starts_with(&BINARY_MARKER)
}

/// Validates and decodes one binary frame from the start of `window`.
///
/// Checks the marker, then the `'R' 'T'` signature in that exact order. Device
/// ID and firmware bytes are read without validation. Bytes past the frame
/// length are ignored.
pub fn decode_binary_frame(window: &[u8]) -> Result<BinaryFrame, FrameError> {
    let frame = window.get(..BINARY_FRAME_LEN).ok_or(FrameError::TooShort {
        needed: BINARY_FRAME_LEN,
        got: window.len(),
    })?;

    if !has_binary_marker(frame) {
        return Err(FrameError::BadMarker);
    }

    let signature = [frame[BIN_HEADER_R], frame[BIN_HEADER_T]];
    if signature != BINARY_SIGNATURE {
        return Err(FrameError::SignatureMismatch { found: signature });
    }

    Ok(BinaryFrame {
        device_id: [frame[BIN_HEADER_ID0], frame[BIN_HEADER_ID1]],
        firmware: frame[BIN_FIRMWARE],
        timestamp: frame[BIN_TIMESTAMP],
        acc: read_axes(frame, BIN_ACC_X, BIN_ACC_Y, BIN_ACC_Z),
        temperature: read_i16(frame, BIN_TEMP),
        gyro: read_axes(frame, BIN_GYRO_X, BIN_GYRO_Y, BIN_GYRO_Z),
        mag: read_axes(frame, BIN_MAG_X, BIN_MAG_Y, BIN_MAG_Z),
    })
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensor::encode_binary_frame;
    use crate::sensor::fixtures::swapped_signature;

    fn sample_frame() -> BinaryFrame {
        BinaryFrame {
            device_id: [0x39, 0x41],
            firmware: 0x12,
            timestamp: 0x7A,
            acc: [1, -1, 256],
            temperature: -300,
            gyro: [i16::MAX, i16::MIN, 0],
            mag: [0x1234, -0x1234, 7],
        }
    }

    #[test]
    fn test_decode_valid_frame() {
        let bytes = encode_binary_frame(&sample_frame());
        assert_eq!(decode_binary_frame(&bytes), Ok(sample_frame()));
    }

    #[test]
    fn test_channels_are_little_endian() {
        let mut bytes = encode_binary_frame(&BinaryFrame::default());
        bytes[BIN_ACC_X] = 0x34;
        bytes[BIN_ACC_X + 1] = 0x12;
        bytes[BIN_TEMP] = 0xFE;
        bytes[BIN_TEMP + 1] = 0xFF;
        bytes[BIN_MAG_Z] = 0x00;
        bytes[BIN_MAG_Z + 1] = 0x80;
        let frame = decode_binary_frame(&bytes).unwrap();
        assert_eq!(frame.acc[0], 0x1234);
        assert_eq!(frame.temperature, -2);
        assert_eq!(frame.mag[2], i16::MIN);
    }

    #[test]
    fn test_swapped_signature_rejected() {
        for payload in [0i16, 1, -1, i16::MAX, i16::MIN] {
            let frame = BinaryFrame { acc: [payload; 3], gyro: [payload; 3], ..sample_frame() };
            let bytes = swapped_signature(encode_binary_frame(&frame));
            assert_eq!(
                decode_binary_frame(&bytes),
                Err(FrameError::SignatureMismatch { found: [b'T', b'R'] })
            );
        }
    }

    #[test]
    fn test_wrong_signature_value_rejected() {
        let mut bytes = encode_binary_frame(&sample_frame());
        bytes[BIN_HEADER_T] = b'X';
        assert!(matches!(decode_binary_frame(&bytes), Err(FrameError::SignatureMismatch { .. })));
    }

    #[test]
    fn test_bad_marker_rejected() {
        let mut bytes = encode_binary_frame(&sample_frame());
        bytes[BIN_HEADER_FF1] = 0xFE;
        assert_eq!(decode_binary_frame(&bytes), Err(FrameError::BadMarker));
    }

    #[test]
    fn test_short_window_rejected() {
        let bytes = encode_binary_frame(&sample_frame());
        assert_eq!(
            decode_binary_frame(&bytes[..BINARY_FRAME_LEN - 1]),
            Err(FrameError::TooShort { needed: 28, got: 27 })
        );
        assert!(matches!(decode_binary_frame(&[]), Err(FrameError::TooShort { got: 0, .. })));
    }

    #[test]
    fn test_trailing_bytes_ignored() {
        let mut bytes = [0u8; BINARY_FRAME_LEN + 4];
        bytes[..BINARY_FRAME_LEN].copy_from_slice(&encode_binary_frame(&sample_frame()));
        assert_eq!(decode_binary_frame(&bytes), Ok(sample_frame()));
    }
}
