
use crate::sync::SharedError;

/// Errors that occur during queue operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueueError<T> {
  /// The queue is full and cannot accept more elements. Contains the element that was attempted to
  /// be added.
  #[error("queue is full")]
  Full(T),
  /// The backing queue refused the element or could not be borrowed to accept it. Contains the
  /// element that was attempted to be provided.
  #[error("backing queue rejected the element")]
  OfferError(T),
  /// The backing queue is borrowed elsewhere and cannot be accessed right now.
  #[error("backing queue is borrowed elsewhere")]
  WouldBlock,
  /// A bulk insertion was requested without a source collection.
  #[error("no source collection was provided")]
  MissingSource,
  /// A bulk insertion named the queue itself, or its backing queue, as the source.
  #[error("a queue cannot be bulk-added into itself")]
  AliasedSource,
  /// A bulk insertion would push the queue past its capacity. Nothing was inserted.
  #[error("adding {additional} elements to {len} exceeds capacity {capacity}")]
  CapacityExceeded {
    /// Fixed capacity of the queue.
    capacity:   usize,
    /// Number of elements held when the insertion was attempted.
    len:        usize,
    /// Number of elements the source offered.
    additional: usize,
  },
}

impl<T> QueueError<T> {
  /// Extracts the payload carried by variants that preserve the element on failure.
  #[must_use]
  pub fn into_item(self) -> Option<T> {
    match self {
      | Self::Full(item) | Self::OfferError(item) => Some(item),
      | Self::WouldBlock | Self::MissingSource | Self::AliasedSource | Self::CapacityExceeded { .. } => None,
    }
  }
}

impl<T> From<SharedError> for QueueError<T> {
  fn from(err: SharedError) -> Self {
    match err {
      | SharedError::BorrowConflict => QueueError::WouldBlock,
    }
  }
}
