/// Initial capacity used when none is configured.
pub const DEFAULT_STACK_CAPACITY: usize = 10;

/// Construction parameters for [`ArrayStack`](super::ArrayStack).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArrayStackConfig {
  initial_capacity: usize,
}

impl ArrayStackConfig {
  /// Creates a configuration with the provided initial capacity.
  ///
  /// # Panics
  ///
  /// Panics if `initial_capacity` is zero.
  #[must_use]
  pub const fn new(initial_capacity: usize) -> Self {
    assert!(initial_capacity > 0, "initial_capacity must be positive");
    Self { initial_capacity }
  }

  /// Returns the configured initial capacity.
  #[must_use]
  pub const fn initial_capacity(&self) -> usize {
    self.initial_capacity
  }
}

impl Default for ArrayStackConfig {
  fn default() -> Self {
    Self::new(DEFAULT_STACK_CAPACITY)
  }
}
