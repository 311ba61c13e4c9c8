// src/common/types.rs

use super::config::FrameId;

// --- Engineering value types ---

/// Three-axis quantity in engineering units.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const ZERO: Vector3 = Vector3 { x: 0.0, y: 0.0, z: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Scales raw integer counts by `scale` per count.
    #[inline]
    pub fn from_counts(raw: [i16; 3], scale: f64) -> Self {
        Self::new(
            f64::from(raw[0]) * scale,
            f64::from(raw[1]) * scale,
            f64::from(raw[2]) * scale,
        )
    }

    #[inline]
    pub fn scaled(self, scale: f64) -> Self {
        Self::new(self.x * scale, self.y * scale, self.z * scale)
    }

    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from(value: [f64; 3]) -> Self {
        Self::new(value[0], value[1], value[2])
    }
}

// --- Raw frame contents (`RawReading`) ---

/// Contents of one binary frame, exactly as transmitted.
///
/// Device ID and firmware are carried so frames can be re-encoded; they are
/// never forwarded into a `DecodedReading`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct BinaryFrame {
    pub device_id: [u8; 2],
    pub firmware: u8,
    pub timestamp: u8,
    pub acc: [i16; 3],
    pub temperature: i16,
    pub gyro: [i16; 3],
    pub mag: [i16; 3],
}

/// Contents of one ASCII frame.
///
/// Gyro in rad/s, accelerometer in g, magnetometer in µT, temperature in °C.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct AsciiFrame {
    pub timestamp: i64,
    pub gyro: [f64; 3],
    pub acc: [f64; 3],
    pub mag: [f64; 3],
    pub temperature: f64,
}

/// One validated frame in either wire format, before unit conversion.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RawReading {
    Binary(BinaryFrame),
    Ascii(AsciiFrame),
}

impl RawReading {
    /// Device timestamp token of the frame.
    pub fn timestamp(&self) -> i64 {
        match self {
            RawReading::Binary(frame) => i64::from(frame.timestamp),
            RawReading::Ascii(frame) => frame.timestamp,
        }
    }
}

// --- Decoded state ---

/// The most recent fully validated reading, in engineering units.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct DecodedReading {
    /// rad/s
    pub angular_velocity: Vector3,
    /// m/s²
    pub linear_acceleration: Vector3,
    /// tesla
    pub magnetic_field: Vector3,
    /// °C
    pub temperature: f64,
}

// --- Outward snapshots ---

/// Angular velocity and linear acceleration, tagged with a caller-supplied stamp.
///
/// Covariances are row-major 3x3 matrices.
#[derive(Debug, Clone, PartialEq)]
pub struct ImuRawSnapshot<T> {
    pub stamp: T,
    pub frame_id: FrameId,
    pub angular_velocity: Vector3,
    pub angular_velocity_covariance: [f64; 9],
    pub linear_acceleration: Vector3,
    pub linear_acceleration_covariance: [f64; 9],
}

/// Magnetic field vector, tagged with a caller-supplied stamp.
#[derive(Debug, Clone, PartialEq)]
pub struct MagneticFieldSnapshot<T> {
    pub stamp: T,
    pub frame_id: FrameId,
    pub magnetic_field: Vector3,
    pub magnetic_field_covariance: [f64; 9],
}

/// Temperature scalar in °C.
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureSnapshot {
    pub frame_id: FrameId,
    pub temperature: f64,
}
