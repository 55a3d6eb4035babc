use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crossbeam_utils::CachePadded;
use parking_lot::{Condvar, Mutex};

use crate::producer::ProducerHandle;
use crate::status::{DrainResult, Status};

/// Default channel capacity (4096 bytes)
pub const DEFAULT_MAX_CAPACITY: usize = 4096;
/// Minimum read size (1 byte)
pub const MIN_READ_SIZE: usize = 1;
/// Default read chunk (512 bytes)
pub const DEFAULT_READ_CHUNK: usize = 512;
/// Default read timeout (1000ms)
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_millis(1000);

/// State guarded by the channel mutex.
struct Shared {
    buffer: VecDeque<u8>,
}

/// A thread-safe, bounded, in-memory byte channel.
///
/// Producers append byte bursts with the non-blocking [`offer`](Self::offer);
/// a single consumer removes them with the blocking [`drain`](Self::drain).
/// The buffer never grows past the capacity fixed at construction.
///
/// One mutex guards the buffer and pairs with the condition variable that
/// blocks the consumer. The stop flag can be read lock-free, but every
/// transition of it happens under the same mutex, so a waiter can never miss
/// the wakeup that `stop` or `start` sends.
pub struct ByteChannel {
    shared: Mutex<Shared>,
    data_ready: Condvar,
    stopped: CachePadded<AtomicBool>,
    max_capacity: usize,
}

impl ByteChannel {
    /// Creates a channel holding at most `max_capacity` bytes.
    ///
    /// The capacity is fixed for the life of the channel. The channel starts
    /// empty and running.
    pub fn new(max_capacity: usize) -> Self {
        Self {
            shared: Mutex::new(Shared {
                buffer: VecDeque::with_capacity(max_capacity),
            }),
            data_ready: Condvar::new(),
            stopped: CachePadded::new(AtomicBool::new(false)),
            max_capacity,
        }
    }

    /// Appends `data` to the tail of the buffer without blocking.
    ///
    /// The append is all-or-nothing: if `data` does not fit within the
    /// remaining capacity, nothing is written. Safe to call concurrently
    /// from any number of producer threads.
    ///
    /// # Returns
    /// * [`Status::NoError`] if the bytes were appended
    /// * [`Status::BufferOverflow`] if the append would exceed capacity
    /// * [`Status::ControllerStopped`] if the channel is stopped
    pub fn offer(&self, data: &[u8]) -> Status {
        if self.stopped.load(Ordering::Relaxed) {
            return Status::ControllerStopped;
        }

        {
            let mut shared = self.shared.lock();

            if shared.buffer.len() + data.len() > self.max_capacity {
                return Status::BufferOverflow;
            }

            shared.buffer.extend(data.iter().copied());
        }

        // Lock released above; one waiter is enough for a single consumer.
        self.data_ready.notify_one();
        Status::NoError
    }

    /// Removes up to `max_bytes` from the head of the buffer, waiting up to
    /// `timeout` for at least `min_bytes` to become available.
    ///
    /// The calling thread holds no lock while suspended. Once woken, the
    /// drain takes whatever is available (capped at `max_bytes`) rather than
    /// waiting for a full `max_bytes`, so a consumer polling a bursty
    /// producer is never blocked longer than `timeout`.
    ///
    /// Stopping the channel does not discard unread data: a drain on a
    /// stopped channel still returns the residual bytes, tagged
    /// [`Status::ControllerStopped`], until the buffer is empty.
    ///
    /// Intended for a single logical consumer; concurrent drains interleave
    /// bytes between callers arbitrarily.
    ///
    /// # Arguments
    /// * `min_bytes` - Minimum number of bytes to wait for
    /// * `max_bytes` - Maximum number of bytes to remove
    /// * `timeout` - Maximum time to wait for `min_bytes`
    ///
    /// # Returns
    /// A [`DrainResult`] whose `status` is one of:
    /// * [`Status::NoError`] - at least `min_bytes` arrived; bytes returned
    /// * [`Status::ControllerStopped`] - channel stopped; residual bytes
    ///   returned if any remained
    /// * [`Status::Timeout`] - wait expired; buffer untouched
    /// * [`Status::InvalidArgument`] - `min_bytes > max_bytes`
    pub fn drain(&self, min_bytes: usize, max_bytes: usize, timeout: Duration) -> DrainResult {
        let mut shared = self.shared.lock();

        if min_bytes > max_bytes {
            return DrainResult::empty(Status::InvalidArgument, shared.buffer.len());
        }

        let timed_out = self
            .data_ready
            .wait_while_for(
                &mut shared,
                |s| !self.stopped.load(Ordering::Relaxed) && s.buffer.len() < min_bytes,
                timeout,
            )
            .timed_out();

        let stopped = self.stopped.load(Ordering::Relaxed);

        // wait_while_for can report a timeout even when the predicate flipped
        // at the last instant, so recheck before giving up.
        if timed_out && !stopped && shared.buffer.len() < min_bytes {
            return DrainResult::empty(Status::Timeout, shared.buffer.len());
        }

        if stopped && shared.buffer.is_empty() {
            return DrainResult::empty(Status::ControllerStopped, 0);
        }

        // Never take more than is actually buffered, even when a stop
        // released the wait below min_bytes.
        let take = shared.buffer.len().min(max_bytes);
        let data: Vec<u8> = shared.buffer.drain(..take).collect();

        DrainResult {
            data,
            status: if stopped {
                Status::ControllerStopped
            } else {
                Status::NoError
            },
            dropped_bytes: 0,
            buffer_size: shared.buffer.len(),
        }
    }

    /// Stops the channel and wakes every blocked waiter.
    ///
    /// Idempotent. The buffer is not cleared: residual data stays drainable.
    pub fn stop(&self) {
        {
            let _shared = self.shared.lock();
            self.stopped.store(true, Ordering::Relaxed);
        }
        self.data_ready.notify_all();
    }

    /// Returns the channel to the running state.
    ///
    /// Idempotent. Waiters are woken so they re-evaluate their condition,
    /// which matters for a consumer re-entering after a stop/start cycle.
    pub fn start(&self) {
        {
            let _shared = self.shared.lock();
            self.stopped.store(false, Ordering::Relaxed);
        }
        self.data_ready.notify_all();
    }

    /// Returns the current buffer length.
    ///
    /// A synchronized snapshot; the value may be stale immediately after
    /// return if producers are active.
    pub fn size(&self) -> usize {
        self.shared.lock().buffer.len()
    }

    /// Returns `true` if the channel is stopped. Lock-free.
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }

    /// Returns an append-only handle to this channel.
    ///
    /// The handle carries shared ownership, so producer code needs neither
    /// the channel's lifetime nor its locking in view, only the capability
    /// to append.
    pub fn make_producer(self: &Arc<Self>) -> ProducerHandle {
        ProducerHandle::new(Arc::clone(self))
    }

    /// Returns the fixed capacity this channel was built with.
    pub fn max_capacity(&self) -> usize {
        self.max_capacity
    }
}
