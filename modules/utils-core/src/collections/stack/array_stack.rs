
use alloc::vec::Vec;

use super::{ArrayStackConfig, Stack, StackError, grown_capacity};

const TRACE_TARGET: &str = "stowage::stack";

/// Last-in-first-out stack backed by a contiguous, growable buffer.
///
/// The buffer grows by half of its capacity whenever a push would overflow it and is never
/// shrunk. Popped elements are moved out of the buffer, so the stack keeps no ownership of
/// values past their removal.
#[derive(Debug)]
pub struct ArrayStack<T> {
  items:    Vec<T>,
  capacity: usize,
}

impl<T> ArrayStack<T> {
  /// Creates an empty stack with the default initial capacity.
  #[must_use]
  pub fn new() -> Self {
    Self::from_config(ArrayStackConfig::default())
  }

  /// Creates an empty stack able to hold `initial_capacity` elements before growing.
  ///
  /// # Panics
  ///
  /// Panics if `initial_capacity` is zero.
  #[must_use]
  pub fn with_capacity(initial_capacity: usize) -> Self {
    Self::from_config(ArrayStackConfig::new(initial_capacity))
  }

  /// Creates an empty stack from the provided configuration.
  #[must_use]
  pub fn from_config(config: ArrayStackConfig) -> Self {
    let capacity = config.initial_capacity();
    Self { items: Vec::with_capacity(capacity), capacity }
  }

  /// Pushes an element onto the top of the stack, growing the buffer when it is full.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::AllocError`] when the buffer cannot be grown. The stack is left
  /// unchanged in that case.
  pub fn push(&mut self, item: T) -> Result<(), StackError> {
    let required = self.items.len().checked_add(1).ok_or(StackError::AllocError { required: usize::MAX })?;
    self.ensure_capacity(required)?;
    self.items.push(item);
    Ok(())
  }

  /// Removes and returns the element at the top of the stack.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::Empty`] when the stack holds no elements.
  pub fn pop(&mut self) -> Result<T, StackError> {
    self.items.pop().ok_or(StackError::Empty)
  }

  /// Returns a reference to the element at the top of the stack.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::Empty`] when the stack holds no elements.
  pub fn peek(&self) -> Result<&T, StackError> {
    self.items.last().ok_or(StackError::Empty)
  }

  /// Returns the number of elements currently stored.
  #[must_use]
  pub fn len(&self) -> usize {
    self.items.len()
  }

  /// Indicates whether the stack is empty.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  /// Returns the number of elements the buffer holds before it has to grow.
  #[must_use]
  pub const fn capacity(&self) -> usize {
    self.capacity
  }

  /// Drops every element while keeping the current buffer.
  pub fn clear(&mut self) {
    self.items.clear();
  }

  fn ensure_capacity(&mut self, required: usize) -> Result<(), StackError> {
    if required <= self.capacity {
      return Ok(());
    }
    let next = grown_capacity(self.capacity, required)?;
    let additional = next - self.items.len();
    self.items.try_reserve_exact(additional).map_err(|_| StackError::AllocError { required: next })?;
    tracing::trace!(target: TRACE_TARGET, old_capacity = self.capacity, new_capacity = next, "array stack grew");
    self.capacity = next;
    Ok(())
  }
}

impl<T: Clone> Clone for ArrayStack<T> {
  // The physical buffer must cover the logical capacity.
  fn clone(&self) -> Self {
    let mut items = Vec::with_capacity(self.capacity);
    items.extend(self.items.iter().cloned());
    Self { items, capacity: self.capacity }
  }
}

impl<T> Default for ArrayStack<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> Stack<T> for ArrayStack<T> {
  fn push(&mut self, item: T) -> Result<(), StackError> {
    ArrayStack::push(self, item)
  }

  fn pop(&mut self) -> Result<T, StackError> {
    ArrayStack::pop(self)
  }

  fn peek(&self) -> Result<&T, StackError> {
    ArrayStack::peek(self)
  }

  fn len(&self) -> usize {
    ArrayStack::len(self)
  }
}
