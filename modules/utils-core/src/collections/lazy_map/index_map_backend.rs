use core::hash::Hash;

use ahash::RandomState;
use indexmap::{IndexMap, map};

use super::{ContentHash, LazyMap, MapBackend, content_hash::hash_entry};

impl<K, V> MapBackend<K, V> for IndexMap<K, V, RandomState>
where
  K: Hash + Eq,
{
  type Iter<'a>
    = map::Iter<'a, K, V>
  where
    K: 'a,
    V: 'a;

  fn create() -> Self {
    IndexMap::with_hasher(RandomState::new())
  }

  fn len(&self) -> usize {
    IndexMap::len(self)
  }

  fn get(&self, key: &K) -> Option<&V> {
    IndexMap::get(self, key)
  }

  fn get_mut(&mut self, key: &K) -> Option<&mut V> {
    IndexMap::get_mut(self, key)
  }

  fn insert(&mut self, key: K, value: V) -> Option<V> {
    IndexMap::insert(self, key, value)
  }

  // shift_remove keeps the remaining entries in insertion order.
  fn remove(&mut self, key: &K) -> Option<V> {
    IndexMap::shift_remove(self, key)
  }

  fn clear(&mut self) {
    IndexMap::clear(self);
  }

  fn iter(&self) -> Self::Iter<'_> {
    IndexMap::iter(self)
  }
}

impl<K, V> ContentHash<K, V> for IndexMap<K, V, RandomState>
where
  K: Hash + Eq,
  V: Hash,
{
  fn entry_hash(key: &K, value: &V) -> u64 {
    hash_entry(key, value)
  }
}

impl<K, V> PartialEq<IndexMap<K, V, RandomState>> for LazyMap<K, V, IndexMap<K, V, RandomState>>
where
  K: Hash + Eq,
  V: PartialEq,
{
  fn eq(&self, other: &IndexMap<K, V, RandomState>) -> bool {
    self.matches_backing(other)
  }
}
