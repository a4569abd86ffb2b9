use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use hashlink::LinkedHashMap;
use opt_core::Opt;

/// Map lookup that returns an [`Opt`].
pub trait TryGet<Q: ?Sized> {
  type Value;

  /// Returns the value for `key` if present, or a missing optional if the map has no such key.
  fn try_get(&self, key: &Q) -> Opt<&Self::Value>;
}

impl<K, V, Q, S> TryGet<Q> for HashMap<K, V, S> where
  K: Borrow<Q> + Hash + Eq,
  Q: Hash + Eq + ?Sized,
  S: BuildHasher,
{
  type Value = V;

  #[inline]
  fn try_get(&self, key: &Q) -> Opt<&V> { self.get(key).into() }
}

impl<K, V, Q> TryGet<Q> for BTreeMap<K, V> where
  K: Borrow<Q> + Ord,
  Q: Ord + ?Sized,
{
  type Value = V;

  #[inline]
  fn try_get(&self, key: &Q) -> Opt<&V> { self.get(key).into() }
}

impl<K, V, Q, S> TryGet<Q> for hashbrown::HashMap<K, V, S> where
  K: Borrow<Q> + Hash + Eq,
  Q: Hash + Eq + ?Sized,
  S: BuildHasher,
{
  type Value = V;

  #[inline]
  fn try_get(&self, key: &Q) -> Opt<&V> { self.get(key).into() }
}

impl<K, V, Q, S> TryGet<Q> for LinkedHashMap<K, V, S> where
  K: Borrow<Q> + Hash + Eq,
  Q: Hash + Eq + ?Sized,
  S: BuildHasher,
{
  type Value = V;

  #[inline]
  fn try_get(&self, key: &Q) -> Opt<&V> { self.get(key).into() }
}
