/// Associative container a [`LazyMap`](super::LazyMap) creates on demand and delegates to.
pub trait MapBackend<K, V> {
  /// Iterator over the stored entries.
  type Iter<'a>: Iterator<Item = (&'a K, &'a V)>
  where
    Self: 'a,
    K: 'a,
    V: 'a;

  /// Creates a new, empty map.
  fn create() -> Self;

  /// Returns the number of stored entries.
  fn len(&self) -> usize;

  /// Indicates whether the map holds no entries.
  fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Returns the value stored for `key`.
  fn get(&self, key: &K) -> Option<&V>;

  /// Returns mutable access to the value stored for `key`.
  fn get_mut(&mut self, key: &K) -> Option<&mut V>;

  /// Stores `value` for `key`, returning the value it replaced.
  fn insert(&mut self, key: K, value: V) -> Option<V>;

  /// Removes the entry for `key`, returning its value.
  fn remove(&mut self, key: &K) -> Option<V>;

  /// Removes every entry.
  fn clear(&mut self);

  /// Iterates the stored entries in the backend's own order.
  fn iter(&self) -> Self::Iter<'_>;
}
