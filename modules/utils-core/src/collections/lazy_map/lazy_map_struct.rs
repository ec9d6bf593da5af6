
use core::{
  fmt,
  hash::{Hash, Hasher},
  marker::PhantomData,
};

use super::{ContentHash, MapBackend};

const TRACE_TARGET: &str = "stowage::lazy_map";

/// Map decorator that creates its backing map on the first insertion.
///
/// Until then the decorator behaves as an empty map: lookups miss, iteration yields nothing and
/// `remove`/`clear` are no-ops, none of which allocate. Equality and hashing are defined by the
/// stored entries only, so an uncreated map equals a created empty one.
pub struct LazyMap<K, V, M> {
  backing: Option<M>,
  _pd:     PhantomData<(K, V)>,
}

impl<K, V, M> LazyMap<K, V, M>
where
  M: MapBackend<K, V>,
{
  /// Creates a map whose backing map does not exist yet.
  #[must_use]
  pub const fn new() -> Self {
    Self { backing: None, _pd: PhantomData }
  }

  /// Indicates whether the backing map has been created.
  #[must_use]
  pub const fn is_created(&self) -> bool {
    self.backing.is_some()
  }

  /// Returns the number of stored entries.
  #[must_use]
  pub fn len(&self) -> usize {
    match &self.backing {
      | Some(backing) => backing.len(),
      | None => 0,
    }
  }

  /// Indicates whether the map holds no entries.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Indicates whether an entry exists for `key`.
  #[must_use]
  pub fn contains_key(&self, key: &K) -> bool {
    self.get(key).is_some()
  }

  /// Indicates whether any entry stores a value equal to `value`.
  #[must_use]
  pub fn contains_value(&self, value: &V) -> bool
  where
    V: PartialEq, {
    self.values().any(|stored| stored == value)
  }

  /// Returns the value stored for `key`.
  #[must_use]
  pub fn get(&self, key: &K) -> Option<&V> {
    self.backing.as_ref().and_then(|backing| backing.get(key))
  }

  /// Returns mutable access to the value stored for `key`.
  pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
    self.backing.as_mut().and_then(|backing| backing.get_mut(key))
  }

  /// Stores `value` for `key`, creating the backing map if needed.
  ///
  /// Returns the value previously stored for `key`.
  pub fn insert(&mut self, key: K, value: V) -> Option<V> {
    self.get_or_create().insert(key, value)
  }

  /// Stores every entry of `entries`, creating the backing map even when `entries` is empty.
  pub fn insert_all<I>(&mut self, entries: I)
  where
    I: IntoIterator<Item = (K, V)>, {
    let backing = self.get_or_create();
    for (key, value) in entries {
      backing.insert(key, value);
    }
  }

  /// Removes the entry for `key`. Does not create the backing map.
  pub fn remove(&mut self, key: &K) -> Option<V> {
    self.backing.as_mut().and_then(|backing| backing.remove(key))
  }

  /// Removes every entry. Does not create the backing map.
  pub fn clear(&mut self) {
    if let Some(backing) = self.backing.as_mut() {
      backing.clear();
    }
  }

  /// Iterates the stored entries in the backing map's order.
  pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
    self.backing.as_ref().map(M::iter).into_iter().flatten()
  }

  /// Iterates the stored keys.
  pub fn keys(&self) -> impl Iterator<Item = &K> {
    self.iter().map(|(key, _)| key)
  }

  /// Iterates the stored values.
  pub fn values(&self) -> impl Iterator<Item = &V> {
    self.iter().map(|(_, value)| value)
  }

  /// Returns the backing map, creating it first if necessary.
  pub fn get_or_create(&mut self) -> &mut M {
    if self.backing.is_none() {
      tracing::trace!(target: TRACE_TARGET, backend = core::any::type_name::<M>(), "lazy map created");
    }
    self.backing.get_or_insert_with(M::create)
  }

  /// Returns the backing map if it has been created.
  #[must_use]
  pub const fn as_created(&self) -> Option<&M> {
    self.backing.as_ref()
  }

  /// Consumes the decorator and returns the backing map, creating an empty one if needed.
  #[must_use]
  pub fn into_inner(self) -> M {
    match self.backing {
      | Some(backing) => backing,
      | None => M::create(),
    }
  }

  pub(crate) fn matches_backing(&self, other: &M) -> bool
  where
    V: PartialEq, {
    self.len() == other.len() && self.iter().all(|(key, value)| other.get(key) == Some(value))
  }
}

impl<K, V, M> Default for LazyMap<K, V, M>
where
  M: MapBackend<K, V>,
{
  fn default() -> Self {
    Self::new()
  }
}

impl<K, V, M> fmt::Debug for LazyMap<K, V, M>
where
  K: fmt::Debug,
  V: fmt::Debug,
  M: MapBackend<K, V>,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_map().entries(self.iter()).finish()
  }
}

impl<K, V, M> Extend<(K, V)> for LazyMap<K, V, M>
where
  M: MapBackend<K, V>,
{
  fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
    self.insert_all(iter);
  }
}

impl<K, V, M> FromIterator<(K, V)> for LazyMap<K, V, M>
where
  M: MapBackend<K, V>,
{
  fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
    let mut map = Self::new();
    map.insert_all(iter);
    map
  }
}

impl<K, V, M> PartialEq for LazyMap<K, V, M>
where
  V: PartialEq,
  M: MapBackend<K, V>,
{
  fn eq(&self, other: &Self) -> bool {
    self.len() == other.len() && self.iter().all(|(key, value)| other.get(key) == Some(value))
  }
}

impl<K, V, M> Eq for LazyMap<K, V, M>
where
  V: Eq,
  M: MapBackend<K, V>,
{
}

impl<K, V, M> Hash for LazyMap<K, V, M>
where
  M: MapBackend<K, V> + ContentHash<K, V>,
{
  fn hash<H: Hasher>(&self, state: &mut H) {
    let sum = self.iter().fold(0_u64, |acc, (key, value)| acc.wrapping_add(M::entry_hash(key, value)));
    state.write_u64(sum);
  }
}
