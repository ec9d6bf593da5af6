
use alloc::rc::Rc;
use core::{
  cell::{Ref, RefCell, RefMut},
  fmt,
};

use super::SharedError;

/// Single-threaded shared handle over a mutable value.
///
/// Clones point at the same value. Borrows are checked at runtime and surface as
/// [`SharedError::BorrowConflict`] instead of panicking, so decorators can report re-entrant
/// access as an ordinary error.
pub struct SharedCell<T>(Rc<RefCell<T>>);

impl<T> SharedCell<T> {
  /// Wraps the provided value in a new shared handle.
  #[must_use]
  pub fn new(value: T) -> Self {
    Self(Rc::new(RefCell::new(value)))
  }

  /// Executes the provided closure with a shared reference to the value.
  ///
  /// # Errors
  ///
  /// Returns [`SharedError::BorrowConflict`] while the value is mutably borrowed.
  pub fn with_ref<R>(&self, f: impl FnOnce(&T) -> R) -> Result<R, SharedError> {
    let guard = self.try_borrow()?;
    Ok(f(&guard))
  }

  /// Executes the provided closure with mutable access to the value.
  ///
  /// # Errors
  ///
  /// Returns [`SharedError::BorrowConflict`] while any other borrow of the value is alive.
  pub fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> Result<R, SharedError> {
    let mut guard = self.try_borrow_mut()?;
    Ok(f(&mut guard))
  }

  /// Borrows the value immutably.
  ///
  /// # Errors
  ///
  /// Returns [`SharedError::BorrowConflict`] while the value is mutably borrowed.
  pub fn try_borrow(&self) -> Result<Ref<'_, T>, SharedError> {
    self.0.try_borrow().map_err(|_| SharedError::BorrowConflict)
  }

  /// Borrows the value mutably.
  ///
  /// # Errors
  ///
  /// Returns [`SharedError::BorrowConflict`] while any other borrow of the value is alive.
  pub fn try_borrow_mut(&self) -> Result<RefMut<'_, T>, SharedError> {
    self.0.try_borrow_mut().map_err(|_| SharedError::BorrowConflict)
  }

  /// Returns the address of the shared value without borrowing it.
  #[must_use]
  pub fn as_ptr(&self) -> *const T {
    self.0.as_ptr().cast_const()
  }

  /// Returns `true` when both handles point at the same value.
  #[must_use]
  pub fn ptr_eq(&self, other: &Self) -> bool {
    Rc::ptr_eq(&self.0, &other.0)
  }

  /// Returns the number of handles pointing at the value.
  #[must_use]
  pub fn handle_count(&self) -> usize {
    Rc::strong_count(&self.0)
  }

  /// Consumes the handle and returns the value if no other handle exists.
  ///
  /// # Errors
  ///
  /// Returns the handle unchanged when other clones are still alive.
  pub fn try_unwrap(self) -> Result<T, Self> {
    Rc::try_unwrap(self.0).map(RefCell::into_inner).map_err(Self)
  }
}

impl<T> Clone for SharedCell<T> {
  fn clone(&self) -> Self {
    Self(Rc::clone(&self.0))
  }
}

impl<T: Default> Default for SharedCell<T> {
  fn default() -> Self {
    Self::new(T::default())
  }
}

impl<T: fmt::Debug> fmt::Debug for SharedCell<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.0.try_borrow() {
      | Ok(value) => f.debug_tuple("SharedCell").field(&*value).finish(),
      | Err(_) => f.write_str("SharedCell(<borrowed>)"),
    }
  }
}
