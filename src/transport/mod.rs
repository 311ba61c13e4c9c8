// src/transport/mod.rs

// Transports for hosts with std. Embedded targets implement `ImuSerial`
// directly on their UART.

pub mod scripted;
#[cfg(feature = "std")]
pub mod serial_port;

pub use scripted::{ScriptedError, ScriptedTransport};
#[cfg(feature = "std")]
pub use serial_port::{SerialConfig, SerialPortTransport, SerialTransportError};
