//! Associative containers whose storage is created on the first insertion.
//!
//! A [`LazyMap`] starts without any backing map. Reads, removals and clears before the first
//! insertion observe an empty map and allocate nothing; the first `insert` or `extend` creates the
//! backing map through [`MapBackend::create`]. Four backends are provided:
//!
//! | alias | backing map | key semantics |
//! |---|---|---|
//! | [`LazyHashMap`] | `hashbrown::HashMap` | `Hash + Eq`, unordered |
//! | [`LazyIndexMap`] | `indexmap::IndexMap` | `Hash + Eq`, insertion order |
//! | [`LazyIdentityMap`] | [`IdentityMap`] | allocation identity ([`IdentityKey`]) |
//! | [`LazyTreeMap`] | `BTreeMap` | `Ord`, sorted |
//!
//! Lazy maps cannot be cloned. Use [`LazyMap::get_or_create`] or [`LazyMap::into_inner`] to reach
//! the backing map when that is needed.

mod btree_map_backend;
mod content_hash;
mod hash_map_backend;
mod identity_key;
mod identity_map;
mod index_map_backend;
mod lazy_map_struct;
mod map_backend;
#[cfg(test)]
mod tests;

use alloc::collections::BTreeMap;

use ahash::RandomState;
use hashbrown::HashMap;
use indexmap::IndexMap;

pub use content_hash::ContentHash;
pub use identity_key::IdentityKey;
pub use identity_map::{IdentityMap, IdentityMapIter};
pub use lazy_map_struct::LazyMap;
pub use map_backend::MapBackend;

/// Lazily created `hashbrown::HashMap`.
pub type LazyHashMap<K, V> = LazyMap<K, V, HashMap<K, V, RandomState>>;
/// Lazily created `indexmap::IndexMap`, iterating in insertion order.
pub type LazyIndexMap<K, V> = LazyMap<K, V, IndexMap<K, V, RandomState>>;
/// Lazily created [`IdentityMap`], comparing keys by allocation identity.
pub type LazyIdentityMap<K, V> = LazyMap<K, V, IdentityMap<K, V>>;
/// Lazily created `BTreeMap`, iterating in key order.
pub type LazyTreeMap<K, V> = LazyMap<K, V, BTreeMap<K, V>>;
