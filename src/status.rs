/// Status codes for channel operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Operation completed successfully
    NoError,
    /// Write would exceed the channel capacity; nothing was appended
    BufferOverflow,
    /// Operation rejected (or only partially satisfied) because the channel
    /// was stopped
    ControllerStopped,
    /// Wait expired before enough data arrived
    Timeout,
    /// Caller passed `min_bytes > max_bytes`
    InvalidArgument,
}

impl Status {
    /// Returns `true` for [`Status::NoError`].
    pub fn is_ok(self) -> bool {
        matches!(self, Status::NoError)
    }
}

/// Result of a single drain attempt.
///
/// Constructed fresh per [`drain`](crate::ByteChannel::drain) call and
/// immutable once returned; it holds no references back into the channel.
#[derive(Debug, Clone)]
pub struct DrainResult {
    /// Bytes removed from the head of the buffer, in FIFO order
    pub data: Vec<u8>,
    /// Outcome of the attempt
    pub status: Status,
    /// Bytes evicted to make room. Always 0: overflow is rejected, not
    /// evicted. Reserved for a future eviction policy.
    pub dropped_bytes: usize,
    /// Buffer length observed at the time of the operation (after removal,
    /// when bytes were taken)
    pub buffer_size: usize,
}

impl DrainResult {
    pub(crate) fn empty(status: Status, buffer_size: usize) -> Self {
        Self {
            data: Vec::new(),
            status,
            dropped_bytes: 0,
            buffer_size,
        }
    }

    /// Returns `true` if the attempt completed without error.
    pub fn is_ok(&self) -> bool {
        self.status.is_ok()
    }
}
