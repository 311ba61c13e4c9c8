// src/sensor/fixtures.rs

// Reference frames and their expected decoded values, shared by tests.

use super::encode_binary_frame;
use crate::common::{
    layout::*,
    types::{AsciiFrame, BinaryFrame, DecodedReading, Vector3},
};
use core::fmt::Write;
use heapless::String;

pub(crate) const ABS_ERROR_ACC: f64 = 1e-3;
pub(crate) const ABS_ERROR_GYRO: f64 = 1e-3;
pub(crate) const ABS_ERROR_MAG: f64 = 1e-5;
pub(crate) const ABS_ERROR_TEMP: f64 = 1e-3;

pub(crate) struct BinaryFixture {
    pub frame: BinaryFrame,
    pub expected: DecodedReading,
}

pub(crate) struct AsciiFixture {
    pub frame: AsciiFrame,
    pub expected: DecodedReading,
}

fn uniform_expected(gyro: f64, acc: f64, mag: f64, temp: f64) -> DecodedReading {
    DecodedReading {
        angular_velocity: Vector3::new(gyro, gyro, gyro),
        linear_acceleration: Vector3::new(acc, acc, acc),
        magnetic_field: Vector3::new(mag, mag, mag),
        temperature: temp,
    }
}

/// Same raw value on every channel, with the decoded values the device reports.
pub(crate) fn binary_case(case: usize) -> BinaryFixture {
    let (raw, gyro, acc, mag, temp) = match case {
        0 => (0, 0.0, 0.0, 0.0, 21.0),
        1 => (32767, 34.87147, 156.90161, 0.00492, 119.14299),
        2 => (-32768, -34.87253, -156.9064, -0.00492, -77.14598),
        3 => (32766, 34.870401, 156.896823, 0.004915, 119.139995),
        4 => (-32767, -34.871466, -156.901612, -0.004915, -77.14299),
        5 => (1, 0.001064, 0.004788, 0.0, 21.002995),
        6 => (-1, -0.001064, -0.004788, 0.0, 20.997005),
        7 => (999, 1.063161, 4.783615, 0.00015, 23.992183),
        8 => (-999, -1.063161, -4.783615, -0.00015, 18.007817),
        9 => (12345, 13.13786, 59.112839, 0.001852, 57.975469),
        10 => (-12345, -13.13786, -59.112839, -0.001852, -15.975469),
        _ => panic!("no binary fixture {}", case),
    };
    BinaryFixture {
        frame: BinaryFrame {
            device_id: [0x39, 0x41],
            firmware: 0x12,
            timestamp: 0,
            acc: [raw; 3],
            temperature: raw,
            gyro: [raw; 3],
            mag: [raw; 3],
        },
        expected: uniform_expected(gyro, acc, mag, temp),
    }
}

/// Gyro, accelerometer (g), magnetometer (µT) and temperature, with the
/// decoded accelerometer and magnetic field.
pub(crate) fn ascii_case(case: usize) -> AsciiFixture {
    let (gyro, acc, mag, temp, ans_acc, ans_mag) = match case {
        0 => (0.0, 0.0, 0.0, 0.0, 0.0, 0.0),
        1 => (34.906585, 16.0, 4800.0, 85.0, 156.9064, 0.0048),
        2 => (-34.906585, -16.0, -4800.0, -40.0, -156.9064, -0.0048),
        3 => (0.00107, 0.0005, 0.14649, 0.0026, 0.00479, 0.00000015),
        4 => (-0.00107, -0.0005, -0.14649, -0.00122, -0.00479, -0.00000015),
        5 => (0.1, 0.1, 0.1, 0.1, 0.98067, 0.0000001),
        6 => (-0.1, -0.1, -0.1, -0.1, -0.98067, 0.0000001),
        7 => (1.0, 1.0, 1.0, 1.0, 9.80665, 0.000001),
        8 => (-1.0, -1.0, -1.0, -1.0, -9.80665, -0.000001),
        9 => (12.34567, 12.34567, 12.34567, 12.34567, 121.06966, 0.00001),
        10 => (-12.34567, -12.34567, -12.34567, -12.34567, -121.06966, -0.00001),
        _ => panic!("no ascii fixture {}", case),
    };
    AsciiFixture {
        frame: AsciiFrame {
            timestamp: 0,
            gyro: [gyro; 3],
            acc: [acc; 3],
            mag: [mag; 3],
            temperature: temp,
        },
        expected: uniform_expected(gyro, ans_acc, ans_mag, temp),
    }
}

pub(crate) fn swapped_signature(mut bytes: [u8; BINARY_FRAME_LEN]) -> [u8; BINARY_FRAME_LEN] {
    bytes.swap(BIN_HEADER_R, BIN_HEADER_T);
    bytes
}

/// Encoded binary fixture; `invalid` writes the signature as 'T' 'R'.
pub(crate) fn binary_bytes(case: usize, invalid: bool) -> [u8; BINARY_FRAME_LEN] {
    let bytes = encode_binary_frame(&binary_case(case).frame);
    if invalid {
        swapped_signature(bytes)
    } else {
        bytes
    }
}

/// Device-style token: six decimals, cut or zero-padded to eight characters.
fn device_token(value: f64) -> String<16> {
    let mut token: String<16> = String::new();
    write!(token, "{:.6}", value).unwrap();
    token.truncate(8);
    while token.len() < 8 {
        token.push('0').unwrap();
    }
    token
}

/// ASCII fixture as the device prints it; `invalid` writes the timestamp as "0.0".
pub(crate) fn ascii_bytes(case: usize, invalid: bool) -> String<256> {
    let frame = ascii_case(case).frame;
    let mut line: String<256> = String::new();
    line.push_str(if invalid { "\n0.0" } else { "\n0" }).unwrap();
    let values = frame
        .gyro
        .iter()
        .chain(frame.acc.iter())
        .chain(frame.mag.iter())
        .chain(core::iter::once(&frame.temperature));
    for value in values {
        line.push(',').unwrap();
        line.push_str(&device_token(*value)).unwrap();
    }
    line.push('\n').unwrap();
    line
}

/// Arbitrary timestamp token followed by ten numeric fields.
pub(crate) fn ascii_line(timestamp: &str, values: &[f64; 10]) -> String<256> {
    let mut line: String<256> = String::new();
    write!(line, "\n{}", timestamp).unwrap();
    for value in values {
        write!(line, ",{}", value).unwrap();
    }
    line.push('\n').unwrap();
    line
}

fn assert_vector_near(actual: &Vector3, expected: &Vector3, tolerance: f64, what: &str) {
    for (a, e) in actual.to_array().iter().zip(expected.to_array()) {
        assert!(
            (a - e).abs() <= tolerance,
            "{}: expected {} within {}, got {}",
            what,
            e,
            tolerance,
            a
        );
    }
}

pub(crate) fn assert_reading_near(actual: &DecodedReading, expected: &DecodedReading) {
    assert_vector_near(&actual.angular_velocity, &expected.angular_velocity, ABS_ERROR_GYRO, "gyro");
    assert_vector_near(&actual.linear_acceleration, &expected.linear_acceleration, ABS_ERROR_ACC, "acc");
    assert_vector_near(&actual.magnetic_field, &expected.magnetic_field, ABS_ERROR_MAG, "mag");
    assert!(
        (actual.temperature - expected.temperature).abs() <= ABS_ERROR_TEMP,
        "temp: expected {}, got {}",
        expected.temperature,
        actual.temperature
    );
}

#[test]
fn test_device_token_format() {
    assert_eq!(device_token(0.0).as_str(), "0.000000");
    assert_eq!(device_token(34.906585).as_str(), "34.90658");
    assert_eq!(device_token(-0.00107).as_str(), "-0.00107");
    assert_eq!(device_token(4800.0).as_str(), "4800.000");
}
