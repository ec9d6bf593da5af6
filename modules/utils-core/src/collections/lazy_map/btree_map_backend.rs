use alloc::collections::{BTreeMap, btree_map};
use core::hash::Hash;

use super::{ContentHash, LazyMap, MapBackend, content_hash::hash_entry};

impl<K, V> MapBackend<K, V> for BTreeMap<K, V>
where
  K: Ord,
{
  type Iter<'a>
    = btree_map::Iter<'a, K, V>
  where
    K: 'a,
    V: 'a;

  fn create() -> Self {
    BTreeMap::new()
  }

  fn len(&self) -> usize {
    BTreeMap::len(self)
  }

  fn get(&self, key: &K) -> Option<&V> {
    BTreeMap::get(self, key)
  }

  fn get_mut(&mut self, key: &K) -> Option<&mut V> {
    BTreeMap::get_mut(self, key)
  }

  fn insert(&mut self, key: K, value: V) -> Option<V> {
    BTreeMap::insert(self, key, value)
  }

  fn remove(&mut self, key: &K) -> Option<V> {
    BTreeMap::remove(self, key)
  }

  fn clear(&mut self) {
    BTreeMap::clear(self);
  }

  fn iter(&self) -> Self::Iter<'_> {
    BTreeMap::iter(self)
  }
}

impl<K, V> ContentHash<K, V> for BTreeMap<K, V>
where
  K: Ord + Hash,
  V: Hash,
{
  fn entry_hash(key: &K, value: &V) -> u64 {
    hash_entry(key, value)
  }
}

impl<K, V> PartialEq<BTreeMap<K, V>> for LazyMap<K, V, BTreeMap<K, V>>
where
  K: Ord,
  V: PartialEq,
{
  fn eq(&self, other: &BTreeMap<K, V>) -> bool {
    self.matches_backing(other)
  }
}
