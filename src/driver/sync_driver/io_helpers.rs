// src/driver/sync_driver/io_helpers.rs

use super::SyncImuDriver; // Access SyncImuDriver definition
use crate::common::{error::ImuError, hal_traits::ImuSerial, layout::READ_CHUNK_LEN};
use log::{trace, warn};

// Implementation block for receive-buffer helpers
impl<IF> SyncImuDriver<IF>
where
    IF: ImuSerial,
{
    /// Performs exactly one transport read and appends the bytes to the
    /// receive buffer. Returns the number of new bytes.
    pub(super) fn fill_rx_buffer(&mut self) -> Result<usize, ImuError<IF::Error>> {
        let mut chunk = [0u8; READ_CHUNK_LEN];
        let received = match self.interface.read_from_device(&mut chunk) {
            Ok(n) => n.min(READ_CHUNK_LEN),
            Err(nb::Error::WouldBlock) => 0,
            Err(nb::Error::Other(e)) => {
                warn!("IMU read failed: {:?}", e);
                return Err(ImuError::Io(e));
            }
        };

        if received == 0 {
            self.stats.empty_reads += 1;
            return Ok(0);
        }
        self.append_rx(&chunk[..received]);
        trace!("read {} bytes, {} buffered", received, self.rx.len());
        Ok(received)
    }

    /// Appends to the receive buffer, dropping the oldest bytes if full.
    pub(super) fn append_rx(&mut self, bytes: &[u8]) {
        let free = self.rx.remaining_capacity();
        if bytes.len() > free {
            let stale = (bytes.len() - free).min(self.rx.len());
            warn!("receive buffer full, dropping {} stale bytes", stale);
            self.discard_rx(stale);
        }
        if let Err(e) = self.rx.try_extend_from_slice(bytes) {
            warn!("receive buffer overflow: {}", e);
        }
    }

    /// Drops `count` leading bytes that scanning is done with.
    pub(super) fn discard_rx(&mut self, count: usize) {
        let count = count.min(self.rx.len());
        self.rx.drain(..count);
    }
}
