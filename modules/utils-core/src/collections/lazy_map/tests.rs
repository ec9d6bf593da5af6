use alloc::{collections::BTreeMap, rc::Rc, vec::Vec};
use core::hash::Hash;

use ahash::RandomState;
use hashbrown::HashMap;
use indexmap::IndexMap;

use super::*;

fn hash_of<T: Hash>(value: &T) -> u64 {
  RandomState::with_seeds(1, 2, 3, 4).hash_one(value)
}

macro_rules! lazy_map_contract {
  ($name:ident, $lazy:ty, $backing:ty) => {
    mod $name {
      use super::*;

      type Lazy = $lazy;
      type Backing = $backing;

      fn backing() -> Backing {
        <Backing as MapBackend<Rc<u32>, u32>>::create()
      }

      #[test]
      fn len_counts_entries() {
        let mut map = Lazy::new();
        assert_eq!(map.len(), 0);

        map.insert(Rc::new(3211), 3211);
        assert_eq!(map.len(), 1);
      }

      #[test]
      fn is_empty_until_first_insert() {
        let mut map = Lazy::new();
        assert!(map.is_empty());

        map.insert(Rc::new(3211), 3211);
        assert!(!map.is_empty());
      }

      #[test]
      fn contains_key_after_insert() {
        let mut map = Lazy::new();
        let key = Rc::new(3211);
        assert!(!map.contains_key(&key));

        map.insert(Rc::clone(&key), 3211);
        assert!(map.contains_key(&key));
      }

      #[test]
      fn contains_value_after_insert() {
        let mut map = Lazy::new();
        assert!(!map.contains_value(&3211));

        map.insert(Rc::new(3211), 3211);
        assert!(map.contains_value(&3211));
      }

      #[test]
      fn get_finds_inserted_value() {
        let mut map = Lazy::new();
        let key = Rc::new(3211);
        assert_eq!(map.get(&key), None);

        map.insert(Rc::clone(&key), 3211);
        assert_eq!(map.get(&key), Some(&3211));
      }

      #[test]
      fn remove_returns_stored_value() {
        let mut map = Lazy::new();
        let key = Rc::new(3211);
        assert_eq!(map.remove(&key), None);
        assert!(!map.is_created());

        map.insert(Rc::clone(&key), 3211);
        assert_eq!(map.remove(&key), Some(3211));
        assert_eq!(Rc::strong_count(&key), 1);
      }

      #[test]
      fn clear_empties_map() {
        let mut map = Lazy::new();
        let key = Rc::new(3211);
        map.clear();
        assert!(map.is_empty());
        assert!(!map.is_created());

        map.insert(Rc::clone(&key), 3211);
        assert!(!map.is_empty());
        map.clear();
        assert!(map.is_empty());
        assert!(map.is_created());
      }

      #[test]
      fn keys_values_and_entries_reflect_contents() {
        let mut map = Lazy::new();
        assert_eq!(map.keys().count(), 0);
        assert_eq!(map.values().count(), 0);
        assert_eq!(map.iter().count(), 0);

        let key = Rc::new(3211);
        map.insert(Rc::clone(&key), 7);
        assert_eq!(map.keys().collect::<Vec<_>>(), [&key]);
        assert_eq!(map.values().collect::<Vec<_>>(), [&7]);
        assert_eq!(map.iter().collect::<Vec<_>>(), [(&key, &7)]);
      }

      #[test]
      fn hash_matches_empty_map_until_insert() {
        let mut map = Lazy::new();
        let mut created_empty = Lazy::new();
        created_empty.get_or_create();
        assert_eq!(hash_of(&map), hash_of(&created_empty));

        map.insert(Rc::new(32), 3211);
        assert_ne!(hash_of(&map), hash_of(&created_empty));
      }

      #[test]
      fn equals_fresh_backing_map_until_insert() {
        let mut map = Lazy::new();
        assert_eq!(map, backing());

        map.insert(Rc::new(3211), 3211);
        assert_ne!(map, backing());
      }

      #[test]
      fn equals_backing_map_with_same_entries() {
        let key = Rc::new(5);
        let mut map = Lazy::new();
        let mut expected = backing();
        map.insert(Rc::clone(&key), 50);
        MapBackend::insert(&mut expected, Rc::clone(&key), 50);

        assert_eq!(map, expected);
      }

      #[test]
      fn insert_stores_element() {
        let mut map = Lazy::new();
        let key = Rc::new(3211);
        map.insert(Rc::clone(&key), 3211);

        assert!(map.get(&key).is_some());
      }

      #[test]
      fn insert_all_stores_every_element() {
        let mut map = Lazy::new();
        let key = Rc::new(3211);
        map.insert_all([(Rc::clone(&key), 3211)]);

        assert!(map.get(&key).is_some());
      }
    }
  };
}

lazy_map_contract!(hash_backend, LazyHashMap<Rc<u32>, u32>, HashMap<Rc<u32>, u32, RandomState>);
lazy_map_contract!(index_backend, LazyIndexMap<Rc<u32>, u32>, IndexMap<Rc<u32>, u32, RandomState>);
lazy_map_contract!(identity_backend, LazyIdentityMap<Rc<u32>, u32>, IdentityMap<Rc<u32>, u32>);
lazy_map_contract!(tree_backend, LazyTreeMap<Rc<u32>, u32>, BTreeMap<Rc<u32>, u32>);

#[test]
fn index_map_iterates_in_insertion_order() {
  let mut map: LazyIndexMap<u32, char> = LazyIndexMap::new();
  map.extend([(30, 'c'), (10, 'a'), (20, 'b')]);
  assert_eq!(map.keys().copied().collect::<Vec<_>>(), [30, 10, 20]);

  map.remove(&10);
  map.insert(40, 'd');
  assert_eq!(map.keys().copied().collect::<Vec<_>>(), [30, 20, 40]);
}

#[test]
fn tree_map_iterates_in_key_order() {
  let mut map: LazyTreeMap<u32, char> = LazyTreeMap::new();
  map.extend([(30, 'c'), (10, 'a'), (20, 'b')]);

  assert_eq!(map.iter().collect::<Vec<_>>(), [(&10, &'a'), (&20, &'b'), (&30, &'c')]);
}

#[test]
fn identity_map_separates_equal_keys_at_distinct_addresses() {
  let first = Rc::new(1_u32);
  let second = Rc::new(1_u32);

  let mut by_identity: LazyIdentityMap<Rc<u32>, &str> = LazyIdentityMap::new();
  by_identity.insert(Rc::clone(&first), "first");
  by_identity.insert(Rc::clone(&second), "second");

  let mut by_value: LazyHashMap<Rc<u32>, &str> = LazyHashMap::new();
  by_value.insert(Rc::clone(&first), "first");
  by_value.insert(Rc::clone(&second), "second");

  assert_eq!(by_identity.len(), 2);
  assert_eq!(by_identity.get(&first), Some(&"first"));
  assert_eq!(by_value.len(), 1);
  assert_eq!(by_value.get(&first), Some(&"second"));
}

#[test]
fn identity_maps_with_the_same_keys_are_equal() {
  let key = Rc::new(9_u32);
  let mut left: LazyIdentityMap<Rc<u32>, u8> = LazyIdentityMap::new();
  let mut right: LazyIdentityMap<Rc<u32>, u8> = LazyIdentityMap::new();
  left.insert(Rc::clone(&key), 1);
  right.insert(Rc::new(9), 1);
  assert_ne!(left, right);

  right.clear();
  right.insert(Rc::clone(&key), 1);
  assert_eq!(left, right);
  assert_eq!(hash_of(&left), hash_of(&right));
}

#[test]
fn hash_does_not_depend_on_insertion_order() {
  let mut forward: LazyIndexMap<u32, u32> = LazyIndexMap::new();
  let mut backward: LazyIndexMap<u32, u32> = LazyIndexMap::new();
  forward.extend((0..16).map(|key| (key, key * 3)));
  backward.extend((0..16).rev().map(|key| (key, key * 3)));

  assert_ne!(forward.keys().collect::<Vec<_>>(), backward.keys().collect::<Vec<_>>());
  assert_eq!(forward, backward);
  assert_eq!(hash_of(&forward), hash_of(&backward));
}

#[test]
fn identity_map_keeps_separately_created_unit_keys_apart() {
  let keys: Vec<Rc<()>> = (0..3).map(|_| Rc::new(())).collect();
  let mut map: LazyIdentityMap<Rc<()>, usize> = LazyIdentityMap::new();
  map.extend(keys.iter().cloned().enumerate().map(|(index, key)| (key, index)));

  assert_eq!(map.len(), 3);
  for (index, key) in keys.iter().enumerate() {
    assert_eq!(map.get(key), Some(&index));
  }
}
