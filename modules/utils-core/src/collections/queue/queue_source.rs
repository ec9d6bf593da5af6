#[cfg(test)]
mod tests;

use alloc::{
  collections::{LinkedList, VecDeque},
  vec::Vec,
};

use crate::sync::{SharedCell, SharedError};

/// Collection whose elements can be bulk-added into a [`BoundedQueue`](super::BoundedQueue).
pub trait QueueSource<T> {
  /// Address identifying the collection that holds the elements.
  ///
  /// Two sources with the same address hold the very same elements. Bulk insertion compares
  /// this against the destination queue and its backing queue to refuse self-insertion.
  fn source_addr(&self) -> *const () {
    (self as *const Self).cast::<()>()
  }

  /// Returns the number of elements the source will provide.
  ///
  /// # Errors
  ///
  /// Returns [`SharedError::BorrowConflict`] when a shared source is mutably borrowed.
  fn source_len(&self) -> Result<usize, SharedError>;

  /// Clones the elements in iteration order.
  ///
  /// # Errors
  ///
  /// Returns [`SharedError::BorrowConflict`] when a shared source is mutably borrowed.
  fn snapshot(&self) -> Result<Vec<T>, SharedError>;
}

impl<T: Clone> QueueSource<T> for [T] {
  fn source_len(&self) -> Result<usize, SharedError> {
    Ok(self.len())
  }

  fn snapshot(&self) -> Result<Vec<T>, SharedError> {
    Ok(self.to_vec())
  }
}

impl<T: Clone> QueueSource<T> for Vec<T> {
  fn source_len(&self) -> Result<usize, SharedError> {
    Ok(self.len())
  }

  fn snapshot(&self) -> Result<Vec<T>, SharedError> {
    Ok(self.clone())
  }
}

impl<T: Clone> QueueSource<T> for VecDeque<T> {
  fn source_len(&self) -> Result<usize, SharedError> {
    Ok(self.len())
  }

  fn snapshot(&self) -> Result<Vec<T>, SharedError> {
    Ok(self.iter().cloned().collect())
  }
}

impl<T: Clone> QueueSource<T> for LinkedList<T> {
  fn source_len(&self) -> Result<usize, SharedError> {
    Ok(self.len())
  }

  fn snapshot(&self) -> Result<Vec<T>, SharedError> {
    Ok(self.iter().cloned().collect())
  }
}

impl<T, S> QueueSource<T> for SharedCell<S>
where
  S: QueueSource<T>,
{
  fn source_addr(&self) -> *const () {
    self.as_ptr().cast::<()>()
  }

  fn source_len(&self) -> Result<usize, SharedError> {
    self.with_ref(<S as QueueSource<T>>::source_len)?
  }

  fn snapshot(&self) -> Result<Vec<T>, SharedError> {
    self.with_ref(<S as QueueSource<T>>::snapshot)?
  }
}
