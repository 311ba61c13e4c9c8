// src/common/units.rs

use super::types::{AsciiFrame, BinaryFrame, DecodedReading, RawReading, Vector3};
use core::f64::consts::PI;

// === Datasheet sensitivities ===

/// Standard gravity, m/s² per g.
pub const STANDARD_GRAVITY: f64 = 9.80665;
/// Gyro sensitivity at ±2000 °/s full scale.
pub const GYRO_LSB_PER_DPS: f64 = 16.4;
/// Accelerometer sensitivity at ±16 g full scale.
pub const ACC_LSB_PER_G: f64 = 2048.0;
/// Magnetometer resolution, 0.15 µT per LSB.
pub const MAG_TESLA_PER_LSB: f64 = 1.5e-7;
/// Thermometer sensitivity.
pub const TEMP_LSB_PER_DEGC: f64 = 333.87;
/// Thermometer reading at raw zero.
pub const TEMP_OFFSET_DEGC: f64 = 21.0;
/// ASCII frames report the magnetic field in µT.
pub const ASCII_MAG_TESLA_PER_UNIT: f64 = 1.0e-6;

/// Scale factors mapping raw frame values to engineering units.
///
/// Defaults are the device datasheet values; override individual fields for
/// a unit with its own calibration.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Calibration {
    /// rad/s per binary gyro LSB.
    pub gyro_scale: f64,
    /// m/s² per binary accelerometer LSB.
    pub acc_scale: f64,
    /// tesla per binary magnetometer LSB.
    pub mag_scale: f64,
    /// °C per binary temperature LSB.
    pub temp_scale: f64,
    /// °C added after scaling binary temperature.
    pub temp_offset: f64,
    /// m/s² per g, applied to ASCII accelerometer fields.
    pub standard_gravity: f64,
    /// tesla per ASCII magnetometer unit.
    pub ascii_mag_scale: f64,
}

impl Calibration {
    pub const DATASHEET: Calibration = Calibration {
        gyro_scale: (1.0 / GYRO_LSB_PER_DPS) * (PI / 180.0),
        acc_scale: STANDARD_GRAVITY / ACC_LSB_PER_G,
        mag_scale: MAG_TESLA_PER_LSB,
        temp_scale: 1.0 / TEMP_LSB_PER_DEGC,
        temp_offset: TEMP_OFFSET_DEGC,
        standard_gravity: STANDARD_GRAVITY,
        ascii_mag_scale: ASCII_MAG_TESLA_PER_UNIT,
    };

    pub fn convert(&self, raw: &RawReading) -> DecodedReading {
        match raw {
            RawReading::Binary(frame) => self.convert_binary(frame),
            RawReading::Ascii(frame) => self.convert_ascii(frame),
        }
    }

    pub fn convert_binary(&self, frame: &BinaryFrame) -> DecodedReading {
        DecodedReading {
            angular_velocity: Vector3::from_counts(frame.gyro, self.gyro_scale),
            linear_acceleration: Vector3::from_counts(frame.acc, self.acc_scale),
            magnetic_field: Vector3::from_counts(frame.mag, self.mag_scale),
            temperature: f64::from(frame.temperature) * self.temp_scale + self.temp_offset,
        }
    }

    /// Gyro and temperature are already rad/s and °C and pass through.
    pub fn convert_ascii(&self, frame: &AsciiFrame) -> DecodedReading {
        DecodedReading {
            angular_velocity: Vector3::from(frame.gyro),
            linear_acceleration: Vector3::from(frame.acc).scaled(self.standard_gravity),
            magnetic_field: Vector3::from(frame.mag).scaled(self.ascii_mag_scale),
            temperature: frame.temperature,
        }
    }
}

impl Default for Calibration {
    fn default() -> Self {
        Self::DATASHEET
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensor::fixtures::{ascii_case, binary_case, assert_reading_near};

    #[test]
    fn test_binary_reference_cases() {
        let cal = Calibration::default();
        for case in 0..=10 {
            let fixture = binary_case(case);
            let decoded = cal.convert_binary(&fixture.frame);
            assert_reading_near(&decoded, &fixture.expected);
        }
    }

    #[test]
    fn test_binary_zero_is_exact() {
        let decoded = Calibration::default().convert_binary(&BinaryFrame::default());
        assert_eq!(decoded.angular_velocity, Vector3::ZERO);
        assert_eq!(decoded.linear_acceleration, Vector3::ZERO);
        assert_eq!(decoded.magnetic_field, Vector3::ZERO);
        assert_eq!(decoded.temperature, 21.0);
    }

    #[test]
    fn test_ascii_reference_cases() {
        let cal = Calibration::default();
        for case in 0..=10 {
            let fixture = ascii_case(case);
            let decoded = cal.convert_ascii(&fixture.frame);
            assert_reading_near(&decoded, &fixture.expected);
        }
    }

    #[test]
    fn test_ascii_scaling_is_exact() {
        let frame = AsciiFrame {
            timestamp: 0,
            gyro: [0.5, -0.25, 1.0],
            acc: [16.0, -1.0, 0.0],
            mag: [4800.0, -1.0, 0.0],
            temperature: 36.5,
        };
        let decoded = Calibration::default().convert_ascii(&frame);
        assert_eq!(decoded.angular_velocity, Vector3::new(0.5, -0.25, 1.0));
        assert_eq!(decoded.linear_acceleration.x, 16.0 * 9.80665);
        assert_eq!(decoded.linear_acceleration.y, -9.80665);
        assert_eq!(decoded.magnetic_field.x, 4800.0 * 1.0e-6);
        assert_eq!(decoded.magnetic_field.y, -1.0e-6);
        assert_eq!(decoded.temperature, 36.5);
    }

    #[test]
    fn test_overridden_calibration() {
        let cal = Calibration { temp_offset: 25.0, mag_scale: 0.5, ..Calibration::default() };
        let frame = BinaryFrame { mag: [10, -3, 0], ..Default::default() };
        let decoded = cal.convert_binary(&frame);
        assert_eq!(decoded.temperature, 25.0);
        assert_eq!(decoded.magnetic_field, Vector3::new(5.0, -1.5, 0.0));
    }
}
