
use alloc::collections::{LinkedList, VecDeque, linked_list, vec_deque};

use super::QueueError;

/// First-in-first-out queue capability a [`BoundedQueue`](super::BoundedQueue) decorates.
pub trait FifoQueue<T> {
  /// Iterator over the queued elements from head to tail.
  type Iter<'a>: Iterator<Item = &'a T>
  where
    Self: 'a,
    T: 'a;

  /// Appends an element at the tail of the queue.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Full`] when the queue declines the element, or
  /// [`QueueError::OfferError`] when some property of the element prevents storing it. The
  /// element is handed back in both cases.
  fn offer(&mut self, item: T) -> Result<(), QueueError<T>>;

  /// Removes and returns the head of the queue.
  fn poll(&mut self) -> Option<T>;

  /// Returns a reference to the head of the queue.
  fn peek(&self) -> Option<&T>;

  /// Returns the number of queued elements.
  fn len(&self) -> usize;

  /// Indicates whether the queue is empty.
  fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Iterates the queued elements from head to tail.
  fn iter(&self) -> Self::Iter<'_>;
}

impl<T> FifoQueue<T> for VecDeque<T> {
  type Iter<'a>
    = vec_deque::Iter<'a, T>
  where
    T: 'a;

  fn offer(&mut self, item: T) -> Result<(), QueueError<T>> {
    self.push_back(item);
    Ok(())
  }

  fn poll(&mut self) -> Option<T> {
    self.pop_front()
  }

  fn peek(&self) -> Option<&T> {
    self.front()
  }

  fn len(&self) -> usize {
    VecDeque::len(self)
  }

  fn iter(&self) -> Self::Iter<'_> {
    VecDeque::iter(self)
  }
}

impl<T> FifoQueue<T> for LinkedList<T> {
  type Iter<'a>
    = linked_list::Iter<'a, T>
  where
    T: 'a;

  fn offer(&mut self, item: T) -> Result<(), QueueError<T>> {
    self.push_back(item);
    Ok(())
  }

  fn poll(&mut self) -> Option<T> {
    self.pop_front()
  }

  fn peek(&self) -> Option<&T> {
    self.front()
  }

  fn len(&self) -> usize {
    LinkedList::len(self)
  }

  fn iter(&self) -> Self::Iter<'_> {
    LinkedList::iter(self)
  }
}
