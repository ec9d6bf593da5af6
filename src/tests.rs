use alloc::collections::VecDeque;

use super::{
  collections::{lazy_map::LazyTreeMap, queue::BoundedQueue, stack::ArrayStack},
  crate_version,
  sync::SharedCell,
};

#[test]
fn version_matches_package_metadata() {
  assert_eq!(crate_version(), env!("CARGO_PKG_VERSION"));
}

#[test]
fn facade_exposes_core_collections() {
  let mut stack = ArrayStack::new();
  stack.push(1_u8).unwrap();
  assert_eq!(stack.pop(), Ok(1));

  let mut queue = BoundedQueue::new(SharedCell::new(VecDeque::new()), 1);
  queue.offer('a').unwrap();
  assert!(queue.offer('b').is_err());

  let mut map: LazyTreeMap<u8, u8> = LazyTreeMap::new();
  assert!(!map.is_created());
  map.insert(1, 2);
  assert!(map.is_created());
}
