use core::hash::Hash;

use ahash::RandomState;
use hashbrown::{HashMap, hash_map};

use super::{ContentHash, LazyMap, MapBackend, content_hash::hash_entry};

impl<K, V> MapBackend<K, V> for HashMap<K, V, RandomState>
where
  K: Hash + Eq,
{
  type Iter<'a>
    = hash_map::Iter<'a, K, V>
  where
    K: 'a,
    V: 'a;

  fn create() -> Self {
    HashMap::with_hasher(RandomState::new())
  }

  fn len(&self) -> usize {
    HashMap::len(self)
  }

  fn get(&self, key: &K) -> Option<&V> {
    HashMap::get(self, key)
  }

  fn get_mut(&mut self, key: &K) -> Option<&mut V> {
    HashMap::get_mut(self, key)
  }

  fn insert(&mut self, key: K, value: V) -> Option<V> {
    HashMap::insert(self, key, value)
  }

  fn remove(&mut self, key: &K) -> Option<V> {
    HashMap::remove(self, key)
  }

  fn clear(&mut self) {
    HashMap::clear(self);
  }

  fn iter(&self) -> Self::Iter<'_> {
    HashMap::iter(self)
  }
}

impl<K, V> ContentHash<K, V> for HashMap<K, V, RandomState>
where
  K: Hash + Eq,
  V: Hash,
{
  fn entry_hash(key: &K, value: &V) -> u64 {
    hash_entry(key, value)
  }
}

impl<K, V> PartialEq<HashMap<K, V, RandomState>> for LazyMap<K, V, HashMap<K, V, RandomState>>
where
  K: Hash + Eq,
  V: PartialEq,
{
  fn eq(&self, other: &HashMap<K, V, RandomState>) -> bool {
    self.matches_backing(other)
  }
}
