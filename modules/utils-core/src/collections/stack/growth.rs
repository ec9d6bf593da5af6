#[cfg(test)]
mod tests;

use super::StackError;

/// Largest element count a single allocation may address.
pub const PLATFORM_MAX_COUNT: usize = isize::MAX as usize;

/// Largest capacity requested without the near-limit clamp.
///
/// Keeps a margin of eight slots below [`PLATFORM_MAX_COUNT`] so capacity arithmetic never
/// wraps at the boundary.
pub const MAX_STACK_CAPACITY: usize = PLATFORM_MAX_COUNT - 8;

/// Computes the capacity to grow a buffer of `current` slots to when `required` slots are needed.
///
/// The buffer grows by half of its current capacity. When that undershoots, the required
/// capacity is used instead. Requests past [`MAX_STACK_CAPACITY`] are clamped to either
/// [`MAX_STACK_CAPACITY`] or [`PLATFORM_MAX_COUNT`].
///
/// # Errors
///
/// Returns [`StackError::AllocError`] when `required` exceeds [`PLATFORM_MAX_COUNT`].
pub const fn grown_capacity(current: usize, required: usize) -> Result<usize, StackError> {
  let mut next = current.saturating_add(current >> 1);
  if next < required {
    next = required;
  }
  if next > MAX_STACK_CAPACITY {
    return huge_capacity(required);
  }
  Ok(next)
}

const fn huge_capacity(required: usize) -> Result<usize, StackError> {
  if required > PLATFORM_MAX_COUNT {
    return Err(StackError::AllocError { required });
  }
  if required > MAX_STACK_CAPACITY { Ok(PLATFORM_MAX_COUNT) } else { Ok(MAX_STACK_CAPACITY) }
}
