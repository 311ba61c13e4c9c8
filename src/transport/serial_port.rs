// src/transport/serial_port.rs

use crate::common::hal_traits::ImuSerial;
use log::{debug, info};
use serialport::SerialPort;
use std::boxed::Box;
use std::fmt;
use std::io::{self, Read, Write};
use std::string::String;
use std::time::Duration;

pub const DEFAULT_PORT_NAME: &str = "/dev/ttyACM0";
pub const DEFAULT_BAUD_RATE: u32 = 57600;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(100);

/// Host serial port settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerialConfig {
    pub port_name: String,
    pub baud_rate: u32,
    /// Read/write timeout; a read that times out reports no data.
    pub timeout: Duration,
}

impl Default for SerialConfig {
    fn default() -> Self {
        SerialConfig {
            port_name: String::from(DEFAULT_PORT_NAME),
            baud_rate: DEFAULT_BAUD_RATE,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SerialTransportError {
    #[error("Serial port is not open")]
    NotOpen,
    #[error(transparent)]
    Serial(#[from] serialport::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// `ImuSerial` over a host serial device (USB CDC-ACM or UART adapter).
pub struct SerialPortTransport {
    config: SerialConfig,
    port: Option<Box<dyn SerialPort>>,
}

impl SerialPortTransport {
    pub fn new(config: SerialConfig) -> Self {
        SerialPortTransport { config, port: None }
    }

    /// Changes the device path; takes effect on the next open.
    pub fn set_port(&mut self, port_name: &str) {
        self.config.port_name = String::from(port_name);
    }

    pub fn config(&self) -> &SerialConfig {
        &self.config
    }

    pub fn is_open(&self) -> bool {
        self.port.is_some()
    }

    fn port(&mut self) -> Result<&mut Box<dyn SerialPort>, SerialTransportError> {
        self.port.as_mut().ok_or(SerialTransportError::NotOpen)
    }
}

impl fmt::Debug for SerialPortTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerialPortTransport")
            .field("config", &self.config)
            .field("open", &self.is_open())
            .finish()
    }
}

// Timeouts surface as "no data yet" rather than as failures.
fn map_io(e: io::Error) -> nb::Error<SerialTransportError> {
    match e.kind() {
        io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock | io::ErrorKind::Interrupted => {
            nb::Error::WouldBlock
        }
        _ => nb::Error::Other(SerialTransportError::Io(e)),
    }
}

impl ImuSerial for SerialPortTransport {
    type Error = SerialTransportError;

    fn open_serial_port(&mut self) -> Result<(), Self::Error> {
        // Re-open so the result reflects the device as it is now.
        self.port = None;
        let port = serialport::new(self.config.port_name.as_str(), self.config.baud_rate)
            .timeout(self.config.timeout)
            .open()?;
        info!("opened {} at {} baud", self.config.port_name, self.config.baud_rate);
        self.port = Some(port);
        Ok(())
    }

    fn close_serial_port(&mut self) {
        if self.port.take().is_some() {
            debug!("closed {}", self.config.port_name);
        }
    }

    fn read_from_device(&mut self, buf: &mut [u8]) -> nb::Result<usize, Self::Error> {
        let port = self.port().map_err(nb::Error::Other)?;
        port.read(buf).map_err(map_io)
    }

    fn write_to_device(&mut self, buf: &[u8]) -> nb::Result<usize, Self::Error> {
        let port = self.port().map_err(nb::Error::Other)?;
        port.write(buf).map_err(map_io)
    }
}
