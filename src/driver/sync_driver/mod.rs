// src/driver/sync_driver/mod.rs

pub mod detect;
mod io_helpers;

use crate::codec::FrameScanner;
use crate::common::{
    config::{DriverConfig, NoiseStdDev},
    error::ImuError,
    frame::DataFormat,
    hal_traits::ImuSerial,
    layout::RX_BUFFER_CAPACITY,
    types::{DecodedReading, ImuRawSnapshot, MagneticFieldSnapshot, TemperatureSnapshot},
};
use arrayvec::ArrayVec;
use detect::{FormatDetector, ProbeState};
use log::{debug, info, trace, warn};

/// Counters kept across read cycles.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct DriverStats {
    pub read_cycles: u64,
    pub empty_reads: u64,
    pub accepted_frames: u64,
    pub rejected_frames: u64,
}

/// Acquisition driver for a 9-axis IMU streaming over a serial link.
///
/// Detects the wire format once, then turns every read into at most one new
/// [`DecodedReading`]: when a read holds several valid frames only the last
/// is kept, and frames that fail validation never touch the stored reading.
///
/// Single-threaded and blocking. The driver has no timeout of its own: a
/// transport whose read never returns blocks the caller indefinitely.
#[derive(Debug)]
pub struct SyncImuDriver<IF>
where
    IF: ImuSerial,
{
    interface: IF,
    config: DriverConfig,
    format: DataFormat,
    rx: ArrayVec<u8, RX_BUFFER_CAPACITY>,
    current: DecodedReading,
    refreshed: bool,
    stats: DriverStats,
}

impl<IF> SyncImuDriver<IF>
where
    IF: ImuSerial,
{
    pub fn new(interface: IF) -> Self {
        Self::with_config(interface, DriverConfig::default())
    }

    pub fn with_config(interface: IF, config: DriverConfig) -> Self {
        SyncImuDriver {
            interface,
            config,
            format: DataFormat::Unknown,
            rx: ArrayVec::new(),
            current: DecodedReading::default(),
            refreshed: false,
            stats: DriverStats::default(),
        }
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    pub fn interface(&self) -> &IF {
        &self.interface
    }

    pub fn interface_mut(&mut self) -> &mut IF {
        &mut self.interface
    }

    /// Gives the transport back.
    pub fn release(self) -> IF {
        self.interface
    }

    // --- Link ---

    /// Opens the link. Every call asks the transport again.
    pub fn start_communication(&mut self) -> bool {
        match self.interface.open_serial_port() {
            Ok(()) => {
                info!("IMU link open");
                true
            }
            Err(e) => {
                warn!("failed to open IMU link: {:?}", e);
                false
            }
        }
    }

    /// Closes the link and drops any partially received frame.
    pub fn stop_communication(&mut self) {
        self.interface.close_serial_port();
        self.rx.clear();
        info!("IMU link closed");
    }

    // --- Format ---

    /// Reads until one format validates or the probe budget runs out.
    ///
    /// Once a format is known this returns it without reading; use
    /// [`reset_data_format`](Self::reset_data_format) to detect again.
    pub fn check_data_format(&mut self) -> Result<DataFormat, ImuError<IF::Error>> {
        if self.format.is_known() {
            return Ok(self.format);
        }

        let mut detector = FormatDetector::new(self.config.max_format_probes);
        loop {
            self.fill_rx_buffer()?;
            let probe = detector.probe(&self.rx);
            self.discard_rx(probe.consumed);

            match probe.state {
                ProbeState::Binary | ProbeState::Ascii => {
                    self.format = probe.state.data_format();
                    info!("IMU data format: {:?} after {} reads", self.format, detector.attempts());
                    return Ok(self.format);
                }
                ProbeState::Undetermined => {
                    warn!("IMU data format undetermined after {} reads", detector.attempts());
                    return Err(ImuError::FormatUndetermined { attempts: detector.attempts() });
                }
                _ => continue,
            }
        }
    }

    /// Forgets the detected format so the next `check_data_format` probes again.
    pub fn reset_data_format(&mut self) {
        self.format = DataFormat::Unknown;
        self.refreshed = false;
        self.rx.clear();
    }

    pub fn data_format(&self) -> DataFormat {
        self.format
    }

    pub fn has_binary_data_format(&self) -> bool {
        self.format == DataFormat::Binary
    }

    pub fn has_ascii_data_format(&self) -> bool {
        self.format == DataFormat::Ascii
    }

    // --- Acquisition ---

    /// One read cycle: a single transport read, then every complete frame in
    /// the buffer is validated in order and the last valid one becomes the
    /// current reading.
    ///
    /// `has_refreshed_imu_data` is true afterwards only if this cycle
    /// validated at least one frame.
    pub fn read_sensor_data(&mut self) -> Result<(), ImuError<IF::Error>> {
        self.refreshed = false;
        self.stats.read_cycles += 1;
        if !self.format.is_known() {
            return Err(ImuError::FormatUnknown);
        }

        self.fill_rx_buffer()?;

        let mut latest = None;
        let mut scanner = FrameScanner::new(&self.rx, self.format);
        for item in scanner.by_ref() {
            match item {
                Ok(raw) => {
                    latest = Some(self.config.calibration.convert(&raw));
                    self.stats.accepted_frames += 1;
                }
                Err(e) => {
                    self.stats.rejected_frames += 1;
                    debug!("dropping {:?} frame: {}", self.format, e);
                }
            }
        }
        let consumed = scanner.finish();
        self.discard_rx(consumed);

        if let Some(reading) = latest {
            self.current = reading;
            self.refreshed = true;
        }
        trace!("read cycle done, refreshed={}, {} bytes retained", self.refreshed, self.rx.len());
        Ok(())
    }

    pub fn has_refreshed_imu_data(&self) -> bool {
        self.refreshed
    }

    pub fn current_reading(&self) -> &DecodedReading {
        &self.current
    }

    pub fn stats(&self) -> DriverStats {
        self.stats
    }

    // --- Snapshots ---

    pub fn imu_raw_data<T>(&self, stamp: T) -> ImuRawSnapshot<T> {
        ImuRawSnapshot {
            stamp,
            frame_id: self.config.frame_id.clone(),
            angular_velocity: self.current.angular_velocity,
            angular_velocity_covariance: NoiseStdDev::covariance(self.config.noise.angular_velocity),
            linear_acceleration: self.current.linear_acceleration,
            linear_acceleration_covariance: NoiseStdDev::covariance(
                self.config.noise.linear_acceleration,
            ),
        }
    }

    pub fn imu_mag<T>(&self, stamp: T) -> MagneticFieldSnapshot<T> {
        MagneticFieldSnapshot {
            stamp,
            frame_id: self.config.frame_id.clone(),
            magnetic_field: self.current.magnetic_field,
            magnetic_field_covariance: NoiseStdDev::covariance(self.config.noise.magnetic_field),
        }
    }

    pub fn imu_temperature(&self) -> TemperatureSnapshot {
        TemperatureSnapshot {
            frame_id: self.config.frame_id.clone(),
            temperature: self.current.temperature,
        }
    }
}
