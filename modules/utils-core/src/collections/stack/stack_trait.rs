use super::StackError;

/// Last-in-first-out stack operations.
pub trait Stack<T> {
  /// Pushes an element onto the top of the stack.
  ///
  /// # Errors
  ///
  /// Returns a [`StackError`] when the element cannot be stored.
  fn push(&mut self, item: T) -> Result<(), StackError>;

  /// Removes and returns the element at the top of the stack.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::Empty`] when the stack holds no elements.
  fn pop(&mut self) -> Result<T, StackError>;

  /// Returns a reference to the element at the top of the stack.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::Empty`] when the stack holds no elements.
  fn peek(&self) -> Result<&T, StackError>;

  /// Returns the number of elements currently stored.
  fn len(&self) -> usize;

  /// Indicates whether the stack is empty.
  fn is_empty(&self) -> bool {
    self.len() == 0
  }
}
