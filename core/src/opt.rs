use std::fmt::{self, Display, Formatter};
use std::hash::{Hash, Hasher};

use crate::error::OptionalMissingError;
use crate::seq::{IntoSeq, Seq};

/// A value of type `T`, or explicitly nothing.
///
/// An `Opt` never changes variant: every operation either inspects it or produces a new `Opt`. All operations are
/// built on [`match_with`](Self::match_with) (or [`as_ref`](Self::as_ref) for borrowing operations), which guarantees
/// that closures passed to them are only called when the matching variant is present.
#[must_use]
#[derive(Copy, Clone, Debug)]
pub enum Opt<T> {
  /// A present value.
  Some(T),
  /// An absent value.
  None,
}

/// Hashed for every [`Opt::None`], regardless of `T`.
const NONE_HASH: u64 = 0;

impl<T> Opt<T> {
  /// Creates a present optional containing `value`.
  #[inline]
  pub const fn some(value: T) -> Self { Self::Some(value) }

  /// Creates a missing optional.
  #[inline]
  pub const fn none() -> Self { Self::None }


  /// Calls `on_some` with the contained value if this optional is present, or `on_none` if it is missing, returning
  /// the result of the called function. Exactly one of the two functions is called, exactly once.
  #[inline]
  pub fn match_with<R>(self, on_some: impl FnOnce(T) -> R, on_none: impl FnOnce() -> R) -> R {
    match self {
      Self::Some(value) => on_some(value),
      Self::None => on_none(),
    }
  }

  /// Converts from `&Opt<T>` to `Opt<&T>`.
  #[inline]
  pub const fn as_ref(&self) -> Opt<&T> {
    match self {
      Self::Some(value) => Opt::Some(value),
      Self::None => Opt::None,
    }
  }


  /// Returns `true` if a value is present.
  #[inline]
  pub fn is_some(&self) -> bool { self.as_ref().match_with(|_| true, || false) }

  /// Returns `true` if the value is missing.
  #[inline]
  pub fn is_none(&self) -> bool { self.as_ref().match_with(|_| false, || true) }

  /// Returns the contained value, or [`OptionalMissingError`] if it is missing.
  #[inline]
  pub fn get(self) -> Result<T, OptionalMissingError> {
    self.match_with(Ok, || {
      #[cfg(feature = "tracing")]
      tracing::trace!("attempted to read missing value from an optional");
      Err(OptionalMissingError)
    })
  }

  /// Calls `action` with the contained value if present; does nothing otherwise.
  #[inline]
  pub fn for_some(self, action: impl FnOnce(T)) { self.match_with(action, || {}) }


  /// Maps the contained value with `f`, keeping a missing value missing. `f` is never called for a missing value.
  #[inline]
  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Opt<U> {
    self.match_with(|value| Opt::Some(f(value)), Opt::none)
  }

  /// Maps the contained value with `f`, which itself produces an optional. A missing value stays missing and `f` is
  /// not called.
  #[inline]
  pub fn bind<U>(self, f: impl FnOnce(T) -> Opt<U>) -> Opt<U> {
    self.match_with(f, Opt::none)
  }

  /// Keeps the contained value only if it satisfies `predicate`.
  #[inline]
  pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
    self.bind(|value| if predicate(&value) { Opt::Some(value) } else { Opt::None })
  }


  /// Returns `combine(seed, value)` if present, or `seed` if missing.
  #[inline]
  pub fn fold<S>(self, combine: impl FnOnce(S, T) -> S, seed: S) -> S {
    match self.ok_or(()) {
      Ok(value) => combine(seed, value),
      Err(()) => seed,
    }
  }

  /// Returns `combine(value, seed)` if present, or `seed` if missing.
  #[inline]
  pub fn fold_back<S>(self, combine: impl FnOnce(T, S) -> S, seed: S) -> S {
    self.fold(|seed, value| combine(value, seed), seed)
  }

  /// Returns whether the contained value satisfies `predicate`; vacuously `true` if missing.
  #[inline]
  pub fn for_all(&self, predicate: impl FnOnce(&T) -> bool) -> bool {
    self.as_ref().match_with(predicate, || true)
  }

  /// Returns whether the contained value satisfies `predicate`; `false` if missing.
  #[inline]
  pub fn exists(&self, predicate: impl FnOnce(&T) -> bool) -> bool {
    self.as_ref().match_with(predicate, || false)
  }

  /// Returns whether the contained value equals `value`; `false` if missing.
  #[inline]
  pub fn contains(&self, value: &T) -> bool where T: PartialEq {
    self.as_ref().match_with(|contained| contained == value, || false)
  }


  /// Returns the contained value, or `default` if missing.
  #[inline]
  pub fn default_value(self, default: T) -> T {
    self.match_with(|value| value, || default)
  }

  /// Returns the contained value, or the result of `f` if missing. `f` is only called for a missing value.
  #[inline]
  pub fn default_with(self, f: impl FnOnce() -> T) -> T {
    self.match_with(|value| value, f)
  }


  /// Returns the number of contained values: `1` if present, `0` if missing.
  #[inline]
  pub fn count(&self) -> usize { self.as_ref().match_with(|_| 1, || 0) }

  /// Returns a sequence view over a reference to the contained value, yielding one element if present and none if
  /// missing.
  #[inline]
  pub fn seq(&self) -> Seq<'_, T> { Seq::new(self.as_ref()) }

  /// Returns a sequence view that yields the contained value if present, and nothing if missing.
  #[inline]
  pub fn into_seq(self) -> IntoSeq<T> { IntoSeq::new(self) }


  #[inline]
  pub fn into_option(self) -> Option<T> { self.match_with(Option::Some, || Option::None) }

  /// Transforms into `Ok(value)` if present, or `Err(err)` if missing.
  #[inline]
  pub fn ok_or<E>(self, err: E) -> Result<T, E> { self.match_with(Ok, || Err(err)) }

  /// Transforms into `Ok(value)` if present, or `Err(f())` if missing.
  #[inline]
  pub fn ok_or_else<E>(self, f: impl FnOnce() -> E) -> Result<T, E> { self.match_with(Ok, || Err(f())) }
}

impl<T: Clone> Opt<&T> {
  /// Maps an `Opt<&T>` to an `Opt<T>` by cloning the contained value.
  #[inline]
  pub fn cloned(self) -> Opt<T> { self.map(T::clone) }
}

impl<T: Copy> Opt<&T> {
  /// Maps an `Opt<&T>` to an `Opt<T>` by copying the contained value.
  #[inline]
  pub fn copied(self) -> Opt<T> { self.map(|value| *value) }
}

impl<T> Opt<Opt<T>> {
  /// Removes one level of nesting: a missing outer optional becomes missing, a present outer optional becomes its
  /// inner optional.
  #[inline]
  pub fn flatten(self) -> Opt<T> { self.match_with(|inner| inner, Opt::none) }
}


impl<T> Default for Opt<T> {
  #[inline]
  fn default() -> Self { Self::None }
}

impl<T: PartialEq> PartialEq for Opt<T> {
  fn eq(&self, other: &Self) -> bool {
    match (self, other) {
      (Self::Some(value), Self::Some(other_value)) => value == other_value,
      (Self::None, Self::None) => true,
      (Self::Some(_), Self::None) | (Self::None, Self::Some(_)) => false,
    }
  }
}
impl<T: Eq> Eq for Opt<T> {}

/// Hashes a present value exactly as the value itself, and a missing value as a constant. Consistent with
/// [`PartialEq`] as long as `T`'s `Hash` and `Eq` agree.
impl<T: Hash> Hash for Opt<T> {
  fn hash<H: Hasher>(&self, state: &mut H) {
    match self.as_ref().ok_or(NONE_HASH) {
      Ok(value) => value.hash(state),
      Err(none_hash) => none_hash.hash(state),
    }
  }
}

/// Formats as `Opt { value }` if present, and `Opt { }` if missing.
impl<T: Display> Display for Opt<T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str("Opt { ")?;
    self.seq().try_for_each(|value| write!(f, "{} ", value))?;
    f.write_str("}")
  }
}
