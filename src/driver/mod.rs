// src/driver/mod.rs

// Declare the sub-module
pub mod sync_driver;

// Re-export the public driver and its companions
pub use sync_driver::detect::{FormatDetector, Probe, ProbeState};
pub use sync_driver::{DriverStats, SyncImuDriver};
