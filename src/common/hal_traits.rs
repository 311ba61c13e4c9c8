// src/common/hal_traits.rs

use core::fmt::Debug;

/// Abstraction for the serial link the IMU streams over.
///
/// The device emits frames on its own; the driver only reads. Implementations
/// may block inside `read_from_device`, the driver has no timeout logic of its
/// own and a read that never returns blocks the caller indefinitely.
pub trait ImuSerial {
    /// Associated error type for communication errors.
    type Error: Debug;

    /// Opens (or re-opens) the link.
    ///
    /// Called on every `start_communication`, so the result must reflect the
    /// link's current state rather than a cached one.
    fn open_serial_port(&mut self) -> Result<(), Self::Error>;

    /// Closes the link. Closing an already closed link is a no-op.
    fn close_serial_port(&mut self);

    /// Reads whatever bytes are available into `buf`.
    ///
    /// Returns `Ok(n)` with the number of valid bytes written to `buf`.
    /// `Ok(0)` and `Err(nb::Error::WouldBlock)` both mean no new data this
    /// cycle. Other errors are returned as `Err(nb::Error::Other(Self::Error))`.
    fn read_from_device(&mut self, buf: &mut [u8]) -> nb::Result<usize, Self::Error>;

    /// Writes bytes to the device, returning how many were accepted.
    fn write_to_device(&mut self, buf: &[u8]) -> nb::Result<usize, Self::Error>;
}
