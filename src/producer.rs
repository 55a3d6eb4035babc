use std::sync::Arc;

use crate::channel::ByteChannel;
use crate::status::Status;

/// An append-only handle to a [`ByteChannel`].
///
/// The handle has no state of its own and no lifecycle beyond the channel's;
/// it exists so producer code (a device driver callback, for instance) only
/// ever sees the capability to append, never the full channel surface.
#[derive(Clone)]
pub struct ProducerHandle {
    channel: Arc<ByteChannel>,
}

impl ProducerHandle {
    pub(crate) fn new(channel: Arc<ByteChannel>) -> Self {
        Self { channel }
    }

    /// Forwards to [`ByteChannel::offer`].
    pub fn offer(&self, data: &[u8]) -> Status {
        self.channel.offer(data)
    }

    /// Converts the handle into a plain callback.
    ///
    /// Useful where the producer side wants a bare function value, e.g. to
    /// hand to a driver that knows nothing about this crate's types.
    pub fn into_callback(self) -> impl Fn(&[u8]) -> Status + Send + Sync + 'static {
        move |data| self.channel.offer(data)
    }
}
