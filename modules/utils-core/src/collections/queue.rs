//! Capacity-bounded decorator over caller-supplied FIFO queues.

mod bounded_queue;
mod fifo_queue;
mod queue_error;
mod queue_source;

pub use bounded_queue::BoundedQueue;
pub use fifo_queue::FifoQueue;
pub use queue_error::QueueError;
pub use queue_source::QueueSource;
