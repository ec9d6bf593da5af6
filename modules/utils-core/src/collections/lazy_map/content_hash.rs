use core::hash::Hash;

use ahash::RandomState;

/// Per-entry hashing used to hash a [`LazyMap`](super::LazyMap) by content.
///
/// Entry hashes are summed, so the resulting map hash does not depend on iteration order.
pub trait ContentHash<K, V> {
  /// Hashes a single entry.
  fn entry_hash(key: &K, value: &V) -> u64;
}

/// Fixed seeds keep entry hashes identical across map instances.
const ENTRY_HASH_SEEDS: [u64; 4] =
  [0x243f_6a88_85a3_08d3, 0x1319_8a2e_0370_7344, 0xa409_3822_299f_31d0, 0x082e_fa98_ec4e_6c89];

pub(crate) fn hash_entry<A: Hash, B: Hash>(key: A, value: B) -> u64 {
  let [k0, k1, k2, k3] = ENTRY_HASH_SEEDS;
  RandomState::with_seeds(k0, k1, k2, k3).hash_one((key, value))
}
