// src/common/layout.rs

// Byte layout of the two wire formats. Offsets index into one frame window.

// === Binary frame ===

/// Total length of one binary frame.
pub const BINARY_FRAME_LEN: usize = 28;
/// Start-of-frame marker.
pub const BINARY_MARKER: [u8; 2] = [0xFF, 0xFF];
/// Format signature denoting binary framing: 'R' then 'T'.
pub const BINARY_SIGNATURE: [u8; 2] = [b'R', b'T'];
/// Marker plus signature.
pub const BINARY_HEADER_LEN: usize = 4;

pub const BIN_HEADER_FF0: usize = 0;
pub const BIN_HEADER_FF1: usize = 1;
pub const BIN_HEADER_R: usize = 2;
pub const BIN_HEADER_T: usize = 3;
pub const BIN_HEADER_ID0: usize = 4;
pub const BIN_HEADER_ID1: usize = 5;
pub const BIN_FIRMWARE: usize = 6;
pub const BIN_TIMESTAMP: usize = 7;

// Channels are little-endian i16, low byte at the offset, high byte after it.
pub const BIN_ACC_X: usize = 8;
pub const BIN_ACC_Y: usize = 10;
pub const BIN_ACC_Z: usize = 12;
pub const BIN_TEMP: usize = 14;
pub const BIN_GYRO_X: usize = 16;
pub const BIN_GYRO_Y: usize = 18;
pub const BIN_GYRO_Z: usize = 20;
pub const BIN_MAG_X: usize = 22;
pub const BIN_MAG_Y: usize = 24;
pub const BIN_MAG_Z: usize = 26;

// === ASCII frame ===

/// Opens and closes every ASCII frame.
pub const ASCII_DELIMITER: u8 = b'\n';
pub const ASCII_SEPARATOR: char = ',';
pub const ASCII_FIELD_COUNT: usize = 11;
/// Longest newline-to-newline run (delimiters included) accepted as a frame.
pub const ASCII_FRAME_MAX_LEN: usize = 256;

pub const ASCII_TIMESTAMP: usize = 0;
pub const ASCII_GYRO_X: usize = 1;
pub const ASCII_GYRO_Y: usize = 2;
pub const ASCII_GYRO_Z: usize = 3;
pub const ASCII_ACC_X: usize = 4;
pub const ASCII_ACC_Y: usize = 5;
pub const ASCII_ACC_Z: usize = 6;
pub const ASCII_MAG_X: usize = 7;
pub const ASCII_MAG_Y: usize = 8;
pub const ASCII_MAG_Z: usize = 9;
pub const ASCII_TEMP: usize = 10;

// === Receive path ===

/// Bytes requested from the transport per read.
pub const READ_CHUNK_LEN: usize = 512;
/// Capacity of the accumulated receive buffer (retained tail + one read).
pub const RX_BUFFER_CAPACITY: usize = 1024;

// The retained tail never exceeds one ASCII frame, so a full read always fits.
const _: () = assert!(ASCII_FRAME_MAX_LEN + READ_CHUNK_LEN <= RX_BUFFER_CAPACITY);
const _: () = assert!(BINARY_FRAME_LEN < ASCII_FRAME_MAX_LEN);
