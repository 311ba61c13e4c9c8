// src/common/mod.rs

// --- Declare all public modules within common ---
pub mod config;
pub mod error;
pub mod frame;
pub mod hal_traits;
pub mod layout;
pub mod types;
pub mod units;

// --- Re-export key types/traits/functions for easier access ---

// From config.rs
pub use config::{DriverConfig, FrameId, NoiseStdDev};

// From error.rs
pub use error::{FrameError, ImuError};

// From frame.rs
pub use frame::DataFormat;

// From hal_traits.rs
pub use hal_traits::ImuSerial;

// From types.rs
pub use types::{
    AsciiFrame, BinaryFrame, DecodedReading, ImuRawSnapshot, MagneticFieldSnapshot, RawReading,
    TemperatureSnapshot, Vector3,
};

// From units.rs
pub use units::Calibration;

// Layout constants are accessed via common::layout::*
