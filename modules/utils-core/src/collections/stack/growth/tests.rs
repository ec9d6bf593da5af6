use super::*;

#[test]
fn grows_by_half_of_current_capacity() {
  assert_eq!(grown_capacity(10, 11), Ok(15));
  assert_eq!(grown_capacity(15, 16), Ok(22));
  assert_eq!(grown_capacity(100, 101), Ok(150));
}

#[test]
fn falls_back_to_required_when_factor_undershoots() {
  assert_eq!(grown_capacity(0, 1), Ok(1));
  assert_eq!(grown_capacity(1, 2), Ok(2));
  assert_eq!(grown_capacity(10, 40), Ok(40));
}

#[test]
fn clamps_to_max_capacity_near_the_limit() {
  let current = MAX_STACK_CAPACITY - 1;
  assert_eq!(grown_capacity(current, MAX_STACK_CAPACITY), Ok(MAX_STACK_CAPACITY));
}

#[test]
fn clamps_to_platform_max_when_required_exceeds_max_capacity() {
  let required = MAX_STACK_CAPACITY + 1;
  assert_eq!(grown_capacity(MAX_STACK_CAPACITY, required), Ok(PLATFORM_MAX_COUNT));
  assert_eq!(grown_capacity(MAX_STACK_CAPACITY, PLATFORM_MAX_COUNT), Ok(PLATFORM_MAX_COUNT));
}

#[test]
fn rejects_required_capacity_past_platform_max() {
  let required = PLATFORM_MAX_COUNT + 1;
  assert_eq!(grown_capacity(PLATFORM_MAX_COUNT, required), Err(StackError::AllocError { required }));
  assert_eq!(grown_capacity(0, usize::MAX), Err(StackError::AllocError { required: usize::MAX }));
}

#[test]
fn max_capacity_keeps_safety_margin() {
  assert_eq!(PLATFORM_MAX_COUNT - MAX_STACK_CAPACITY, 8);
}
