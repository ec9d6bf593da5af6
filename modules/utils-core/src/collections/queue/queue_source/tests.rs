use alloc::{vec, vec::Vec};

use super::*;

#[test]
fn slice_and_vec_sources_clone_in_order() {
  let items = vec![3, 1, 2];
  assert_eq!(items.source_len(), Ok(3));
  assert_eq!(items.snapshot(), Ok(vec![3, 1, 2]));
  assert_eq!(items[..2].snapshot(), Ok(vec![3, 1]));
  assert_eq!(items.len(), 3);
}

#[test]
fn deque_and_list_sources_clone_head_to_tail() {
  let deque: VecDeque<i32> = [1, 2, 3].into_iter().collect();
  let list: LinkedList<i32> = [4, 5].into_iter().collect();

  assert_eq!(deque.snapshot(), Ok(vec![1, 2, 3]));
  assert_eq!(list.source_len(), Ok(2));
  assert_eq!(list.snapshot(), Ok(vec![4, 5]));
}

#[test]
fn owned_source_addr_is_the_collection_address() {
  let items: Vec<u8> = vec![1];
  let expected = (&items as *const Vec<u8>).cast::<()>();
  assert_eq!(QueueSource::<u8>::source_addr(&items), expected);
}

#[test]
fn shared_source_addr_is_the_shared_value_address() {
  let cell = SharedCell::new(VecDeque::from([1, 2]));
  let clone = cell.clone();

  assert_eq!(QueueSource::<i32>::source_addr(&cell), cell.as_ptr().cast::<()>());
  assert_eq!(QueueSource::<i32>::source_addr(&cell), QueueSource::<i32>::source_addr(&clone));
  assert_eq!(QueueSource::<i32>::snapshot(&cell), Ok(vec![1, 2]));
}

#[test]
fn shared_source_reports_borrow_conflict() {
  let cell = SharedCell::new(vec![1, 2]);
  let _guard = cell.try_borrow_mut().unwrap();

  assert_eq!(QueueSource::<i32>::source_len(&cell), Err(SharedError::BorrowConflict));
  assert_eq!(QueueSource::<i32>::snapshot(&cell), Err(SharedError::BorrowConflict));
}
