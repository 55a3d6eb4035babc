//! Bounded byte channel for bursty producers and a polling consumer.
//!
//! One or more threads push byte bursts through [`ByteChannel::offer`] (or a
//! [`ProducerHandle`]) without ever blocking; a single consumer thread calls
//! [`ByteChannel::drain`], which blocks until enough data has arrived, the
//! channel is stopped, or a timeout elapses. Capacity is fixed at
//! construction: writes that would overflow are rejected whole, never
//! truncated or evicted.
//!
//! ```
//! use std::time::Duration;
//! use bytechan::{ChannelBuilder, Status};
//!
//! let channel = ChannelBuilder::new().with_max_capacity(64).build();
//! let producer = channel.make_producer();
//!
//! assert_eq!(producer.offer(&[1, 2, 3]), Status::NoError);
//!
//! let result = channel.drain(3, 16, Duration::from_millis(100));
//! assert_eq!(result.status, Status::NoError);
//! assert_eq!(result.data, vec![1, 2, 3]);
//! ```

mod builder;
mod channel;
mod producer;
mod status;

pub use builder::ChannelBuilder;
pub use channel::{
    ByteChannel, DEFAULT_MAX_CAPACITY, DEFAULT_READ_CHUNK, DEFAULT_READ_TIMEOUT, MIN_READ_SIZE,
};
pub use producer::ProducerHandle;
pub use status::{DrainResult, Status};
