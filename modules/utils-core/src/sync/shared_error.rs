/// Errors raised when a [`SharedCell`](super::SharedCell) cannot hand out the requested borrow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SharedError {
  /// The value is already borrowed in a way that conflicts with the request.
  #[error("shared value is already borrowed")]
  BorrowConflict,
}
