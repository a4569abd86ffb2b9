//! Serializes [`Opt`] the way serde serializes `Option`: a present value as the value itself, a missing value as the
//! format's null/none. As with `Option`, `Opt::Some(Opt::None)` cannot be distinguished from `Opt::None` in formats
//! such as JSON.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::opt::Opt;

impl<T: Serialize> Serialize for Opt<T> {
  #[inline]
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    self.as_ref().into_option().serialize(serializer)
  }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Opt<T> {
  #[inline]
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    Option::<T>::deserialize(deserializer).map(Opt::from)
  }
}
