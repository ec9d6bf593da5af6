
use alloc::vec::Vec;
use core::{fmt, marker::PhantomData, ptr};

use super::{FifoQueue, QueueError, QueueSource};
use crate::sync::{SharedCell, SharedError};

/// Decorator that caps the number of elements held by a caller-supplied FIFO queue.
///
/// Apart from the capacity limit, behaviour is entirely dictated by the backing queue: reads are
/// forwarded unchanged and writes are delegated once the capacity check passes. The backing
/// queue is reached through a [`SharedCell`] so the caller keeps ownership of it.
pub struct BoundedQueue<T, Q>
where
  Q: FifoQueue<T>, {
  backing:  SharedCell<Q>,
  capacity: usize,
  _pd:      PhantomData<T>,
}

impl<T, Q> BoundedQueue<T, Q>
where
  Q: FifoQueue<T>,
{
  /// Creates a bounded view over `backing` that never holds more than `capacity` elements.
  #[must_use]
  pub const fn new(backing: SharedCell<Q>, capacity: usize) -> Self {
    Self { backing, capacity, _pd: PhantomData }
  }

  /// Returns the fixed maximum number of elements.
  #[must_use]
  pub const fn capacity(&self) -> usize {
    self.capacity
  }

  /// Provides access to the handle of the backing queue.
  #[must_use]
  pub const fn backing(&self) -> &SharedCell<Q> {
    &self.backing
  }

  /// Returns the number of elements held by the backing queue.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::WouldBlock`] when the backing queue is mutably borrowed elsewhere.
  pub fn len(&self) -> Result<usize, QueueError<T>> {
    Ok(self.backing.with_ref(Q::len)?)
  }

  /// Indicates whether the backing queue is empty.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::WouldBlock`] when the backing queue is mutably borrowed elsewhere.
  pub fn is_empty(&self) -> Result<bool, QueueError<T>> {
    Ok(self.len()? == 0)
  }

  /// Indicates whether the capacity has been reached.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::WouldBlock`] when the backing queue is mutably borrowed elsewhere.
  pub fn is_full(&self) -> Result<bool, QueueError<T>> {
    Ok(self.len()? >= self.capacity)
  }

  /// Returns how many more elements can be offered before the capacity is reached.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::WouldBlock`] when the backing queue is mutably borrowed elsewhere.
  pub fn remaining_capacity(&self) -> Result<usize, QueueError<T>> {
    Ok(self.capacity.saturating_sub(self.len()?))
  }

  /// Offers an element to the backing queue if the capacity allows it.
  ///
  /// The capacity is checked before the backing queue is touched; a full queue hands the
  /// element straight back.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Full`] when the capacity has been reached, or whatever the backing
  /// queue reports when it declines the element. [`QueueError::OfferError`] is also returned
  /// when the backing queue is borrowed elsewhere.
  pub fn offer(&mut self, item: T) -> Result<(), QueueError<T>> {
    let Ok(mut backing) = self.backing.try_borrow_mut() else {
      return Err(QueueError::OfferError(item));
    };
    if backing.len() >= self.capacity {
      return Err(QueueError::Full(item));
    }
    backing.offer(item)
  }

  /// Adds every element of `source` to the queue, in the source's iteration order.
  ///
  /// All preconditions are verified before anything is inserted. Returns `Ok(true)` when the
  /// queue changed and `Ok(false)` when the source was empty.
  ///
  /// If the backing queue refuses an element part-way through, the error is returned
  /// immediately and the elements inserted before it stay in the queue.
  ///
  /// # Errors
  ///
  /// - [`QueueError::MissingSource`] when `source` is `None`.
  /// - [`QueueError::AliasedSource`] when `source` is this queue or its backing queue.
  /// - [`QueueError::CapacityExceeded`] when the source holds more elements than the remaining
  ///   capacity; nothing is inserted.
  /// - Any error raised by [`offer`](Self::offer) for an individual element.
  /// - [`QueueError::WouldBlock`] when the backing queue or the source cannot be borrowed.
  pub fn add_all<S>(&mut self, source: Option<&S>) -> Result<bool, QueueError<T>>
  where
    S: QueueSource<T> + ?Sized, {
    let Some(source) = source else {
      return Err(QueueError::MissingSource);
    };
    if self.is_aliased_by(source) {
      return Err(QueueError::AliasedSource);
    }

    let len = self.len()?;
    let additional = source.source_len()?;
    let exceeds = match len.checked_add(additional) {
      | Some(total) => total > self.capacity,
      | None => true,
    };
    if exceeds {
      return Err(QueueError::CapacityExceeded { capacity: self.capacity, len, additional });
    }

    let mut modified = false;
    for item in source.snapshot()? {
      self.offer(item)?;
      modified = true;
    }
    Ok(modified)
  }

  /// Removes and returns the head of the backing queue.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::WouldBlock`] when the backing queue is borrowed elsewhere.
  pub fn poll(&mut self) -> Result<Option<T>, QueueError<T>> {
    Ok(self.backing.with_mut(Q::poll)?)
  }

  /// Returns a clone of the head of the backing queue.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::WouldBlock`] when the backing queue is mutably borrowed elsewhere.
  pub fn peek(&self) -> Result<Option<T>, QueueError<T>>
  where
    T: Clone, {
    Ok(self.backing.with_ref(|queue| queue.peek().cloned())?)
  }

  /// Runs `f` with an iterator over the backing queue, head to tail.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::WouldBlock`] when the backing queue is mutably borrowed elsewhere.
  pub fn with_iter<R>(&self, f: impl FnOnce(&mut dyn Iterator<Item = &T>) -> R) -> Result<R, QueueError<T>> {
    Ok(self.backing.with_ref(|queue| f(&mut queue.iter()))?)
  }

  /// Polls the backing queue until it is empty.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::WouldBlock`] when the backing queue is borrowed elsewhere.
  pub fn clear(&mut self) -> Result<(), QueueError<T>> {
    Ok(self.backing.with_mut(|queue| while queue.poll().is_some() {})?)
  }

  fn is_aliased_by<S>(&self, source: &S) -> bool
  where
    S: QueueSource<T> + ?Sized, {
    let addr = source.source_addr();
    ptr::eq(addr, (self as *const Self).cast::<()>()) || ptr::eq(addr, self.backing.as_ptr().cast::<()>())
  }
}

impl<T, Q> QueueSource<T> for BoundedQueue<T, Q>
where
  T: Clone,
  Q: FifoQueue<T>,
{
  // Decorators sharing a backing queue hold the same elements.
  fn source_addr(&self) -> *const () {
    self.backing.as_ptr().cast::<()>()
  }

  fn source_len(&self) -> Result<usize, SharedError> {
    self.backing.with_ref(Q::len)
  }

  fn snapshot(&self) -> Result<Vec<T>, SharedError> {
    self.backing.with_ref(|queue| queue.iter().cloned().collect())
  }
}

impl<T, Q> fmt::Debug for BoundedQueue<T, Q>
where
  Q: FifoQueue<T> + fmt::Debug,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("BoundedQueue").field("capacity", &self.capacity).field("backing", &self.backing).finish()
  }
}
