
/// Errors that may arise while operating on an [`ArrayStack`](super::ArrayStack).
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StackError {
  /// The stack contains no elements.
  #[error("stack is empty")]
  Empty,
  /// The buffer could not be grown to hold the required number of elements.
  #[error("cannot allocate stack capacity for {required} elements")]
  AllocError {
    /// Capacity that was needed when growth failed.
    required: usize,
  },
}
