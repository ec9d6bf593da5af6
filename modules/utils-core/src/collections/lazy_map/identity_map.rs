
use core::{fmt, hash::Hash};

use ahash::RandomState;
use hashbrown::{HashMap, hash_map};

use super::{ContentHash, IdentityKey, LazyMap, MapBackend, content_hash::hash_entry};

/// Map comparing keys by the allocation they point into rather than by value.
///
/// Keys are shared handles implementing [`IdentityKey`]. Two keys are the same entry only when
/// one is a clone of the other, so equal values created separately occupy distinct entries.
pub struct IdentityMap<K, V> {
  entries: HashMap<usize, (K, V), RandomState>,
}

impl<K, V> IdentityMap<K, V>
where
  K: IdentityKey,
{
  /// Creates an empty map.
  #[must_use]
  pub fn new() -> Self {
    Self { entries: HashMap::with_hasher(RandomState::new()) }
  }
}

impl<K, V> Default for IdentityMap<K, V>
where
  K: IdentityKey,
{
  fn default() -> Self {
    Self::new()
  }
}

impl<K, V> MapBackend<K, V> for IdentityMap<K, V>
where
  K: IdentityKey,
{
  type Iter<'a>
    = IdentityMapIter<'a, K, V>
  where
    K: 'a,
    V: 'a;

  fn create() -> Self {
    Self::new()
  }

  fn len(&self) -> usize {
    self.entries.len()
  }

  fn get(&self, key: &K) -> Option<&V> {
    self.entries.get(&key.identity()).map(|(_, value)| value)
  }

  fn get_mut(&mut self, key: &K) -> Option<&mut V> {
    self.entries.get_mut(&key.identity()).map(|(_, value)| value)
  }

  fn insert(&mut self, key: K, value: V) -> Option<V> {
    let address = key.identity();
    self.entries.insert(address, (key, value)).map(|(_, previous)| previous)
  }

  fn remove(&mut self, key: &K) -> Option<V> {
    self.entries.remove(&key.identity()).map(|(_, value)| value)
  }

  fn clear(&mut self) {
    self.entries.clear();
  }

  fn iter(&self) -> Self::Iter<'_> {
    IdentityMapIter { inner: self.entries.values() }
  }
}

impl<K, V> ContentHash<K, V> for IdentityMap<K, V>
where
  K: IdentityKey,
  V: Hash,
{
  fn entry_hash(key: &K, value: &V) -> u64 {
    hash_entry(key.identity(), value)
  }
}

impl<K, V> PartialEq<IdentityMap<K, V>> for LazyMap<K, V, IdentityMap<K, V>>
where
  K: IdentityKey,
  V: PartialEq,
{
  fn eq(&self, other: &IdentityMap<K, V>) -> bool {
    self.matches_backing(other)
  }
}

impl<K, V> fmt::Debug for IdentityMap<K, V>
where
  K: fmt::Debug,
  V: fmt::Debug,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_map().entries(self.entries.values().map(|(key, value)| (key, value))).finish()
  }
}

/// Iterator over the entries of an [`IdentityMap`].
pub struct IdentityMapIter<'a, K, V> {
  inner: hash_map::Values<'a, usize, (K, V)>,
}

impl<'a, K, V> Iterator for IdentityMapIter<'a, K, V> {
  type Item = (&'a K, &'a V);

  fn next(&mut self) -> Option<Self::Item> {
    self.inner.next().map(|(key, value)| (key, value))
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    self.inner.size_hint()
  }
}
