use std::sync::Arc;

use crate::channel::{ByteChannel, DEFAULT_MAX_CAPACITY};

/// Fluent configuration for a [`ByteChannel`].
pub struct ChannelBuilder {
    max_capacity: usize,
}

impl Default for ChannelBuilder {
    fn default() -> Self {
        Self {
            max_capacity: DEFAULT_MAX_CAPACITY,
        }
    }
}

impl ChannelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fixed capacity in bytes.
    pub fn with_max_capacity(mut self, max_capacity: usize) -> Self {
        self.max_capacity = max_capacity;
        self
    }

    /// Builds the channel behind an [`Arc`] so producers and the consumer
    /// can share it across threads.
    pub fn build(self) -> Arc<ByteChannel> {
        Arc::new(ByteChannel::new(self.max_capacity))
    }
}
