// src/lib.rs

#![no_std] // Specify no_std at the crate root

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod codec;
pub mod common;
pub mod driver;
pub mod sensor;
#[cfg(any(test, feature = "std"))]
pub mod transport;

// Re-export key types for convenience
pub use common::{Calibration, DataFormat, DecodedReading, DriverConfig, FrameError, ImuError, ImuSerial};
pub use driver::SyncImuDriver;
