// src/common/config.rs

use super::units::Calibration;
use arrayvec::ArrayString;

/// Label copied into every outward snapshot.
pub type FrameId = ArrayString<32>;

/// Default bound on reads issued by one format check.
pub const DEFAULT_MAX_FORMAT_PROBES: u32 = 16;
pub const DEFAULT_FRAME_ID: &str = "imu";

/// Sensor noise, one standard deviation per axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NoiseStdDev {
    /// m/s²
    pub linear_acceleration: f64,
    /// rad/s
    pub angular_velocity: f64,
    /// tesla
    pub magnetic_field: f64,
}

impl NoiseStdDev {
    /// Diagonal row-major 3x3 covariance for a per-axis standard deviation.
    pub fn covariance(stddev: f64) -> [f64; 9] {
        let variance = stddev * stddev;
        let mut matrix = [0.0; 9];
        matrix[0] = variance;
        matrix[4] = variance;
        matrix[8] = variance;
        matrix
    }
}

impl Default for NoiseStdDev {
    fn default() -> Self {
        NoiseStdDev {
            linear_acceleration: 0.023,
            angular_velocity: 0.0035,
            magnetic_field: 8.0e-7,
        }
    }
}

/// Driver configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct DriverConfig {
    pub calibration: Calibration,
    /// Reads one `check_data_format` call may issue before giving up.
    /// Values below 1 are treated as 1.
    pub max_format_probes: u32,
    pub frame_id: FrameId,
    pub noise: NoiseStdDev,
}

impl DriverConfig {
    pub fn with_calibration(mut self, calibration: Calibration) -> Self {
        self.calibration = calibration;
        self
    }

    pub fn with_max_format_probes(mut self, probes: u32) -> Self {
        self.max_format_probes = probes;
        self
    }

    /// Sets the snapshot label, truncated to the label capacity.
    pub fn with_frame_id(mut self, frame_id: &str) -> Self {
        self.frame_id.clear();
        for c in frame_id.chars() {
            if self.frame_id.try_push(c).is_err() {
                break;
            }
        }
        self
    }

    pub fn with_noise(mut self, noise: NoiseStdDev) -> Self {
        self.noise = noise;
        self
    }
}

impl Default for DriverConfig {
    fn default() -> Self {
        let mut frame_id = FrameId::new();
        frame_id.push_str(DEFAULT_FRAME_ID);
        DriverConfig {
            calibration: Calibration::default(),
            max_format_probes: DEFAULT_MAX_FORMAT_PROBES,
            frame_id,
            noise: NoiseStdDev::default(),
        }
    }
}
