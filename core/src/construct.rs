//! Constructing [`Opt`]s from nullable values and from operations that may fail.

use std::panic::{self, UnwindSafe};

use crate::opt::Opt;

impl<T> Opt<T> {
  /// Creates a present optional if `option` is `Some`, and a missing optional otherwise.
  #[inline]
  pub fn from_option(option: Option<T>) -> Self {
    option.map_or_else(Self::none, Self::some)
  }

  /// Runs `op` once, creating a present optional from its result on success, and a missing optional on failure.
  ///
  /// The error is discarded. Prefer handling the `Result` directly when the cause of failure matters.
  pub fn from_fallible<E>(op: impl FnOnce() -> Result<T, E>) -> Self {
    op().map_or_else(|_error| {
      #[cfg(feature = "tracing")]
      tracing::debug!(error_type = std::any::type_name::<E>(), "operation failed; discarding error and returning None");
      Self::None
    }, Self::Some)
  }

  /// Runs `op` once, creating a present optional from its return value, and a missing optional if it panics.
  ///
  /// Any panic is caught and discarded, whatever its cause. The panic hook still runs, and this does nothing for
  /// panics under `panic = "abort"`. Prefer [`from_fallible`](Self::from_fallible) for operations that report failure
  /// through a `Result`.
  pub fn from_panicking<F>(op: F) -> Self where
    F: FnOnce() -> T + UnwindSafe
  {
    match panic::catch_unwind(op) {
      Ok(value) => Self::Some(value),
      Err(payload) => {
        #[cfg(feature = "tracing")] {
          let message = payload.downcast_ref::<&str>().copied()
            .or_else(|| payload.downcast_ref::<String>().map(String::as_str));
          tracing::debug!(panic = message, "operation panicked; discarding panic and returning None");
        }
        drop(payload);
        Self::None
      }
    }
  }
}

impl<T> From<Option<T>> for Opt<T> {
  #[inline]
  fn from(option: Option<T>) -> Self { Self::from_option(option) }
}

impl<T> From<Opt<T>> for Option<T> {
  #[inline]
  fn from(opt: Opt<T>) -> Self { opt.into_option() }
}

/// Collects an iterator of optionals into an optional collection: present only if every element is present.
/// Iteration stops at the first missing element.
impl<A, V: FromIterator<A>> FromIterator<Opt<A>> for Opt<V> {
  #[inline]
  fn from_iter<I: IntoIterator<Item=Opt<A>>>(iter: I) -> Self {
    iter.into_iter().map(Opt::into_option).collect::<Option<V>>().into()
  }
}


#[cfg(test)]
mod tests {
  use std::cell::Cell;

  use super::*;

  #[test]
  fn from_option() {
    assert_eq!(Opt::from_option(Some(1)), Opt::Some(1));
    assert_eq!(Opt::<i32>::from_option(None), Opt::None);
    assert_eq!(Opt::from(Some("a")), Opt::Some("a"));
    assert_eq!(Option::from(Opt::Some(1)), Some(1));
  }

  #[test]
  fn from_fallible_discards_error() {
    assert_eq!(Opt::from_fallible(|| "12".parse::<i32>()), Opt::Some(12));
    assert_eq!(Opt::from_fallible(|| "twelve".parse::<i32>()), Opt::None);
    assert_eq!(Opt::from_fallible(|| Err::<i32, _>("failed")), Opt::None);
  }

  #[test]
  fn from_fallible_runs_once() {
    let calls = Cell::new(0);
    let opt = Opt::from_fallible(|| { calls.set(calls.get() + 1); Ok::<_, ()>(calls.get()) });
    assert_eq!(opt, Opt::Some(1));
    assert_eq!(calls.get(), 1);
  }

  #[test]
  fn from_panicking_catches_panics() {
    let values = vec![1, 2, 3];
    assert_eq!(Opt::from_panicking(|| values[1]), Opt::Some(2));
    assert_eq!(Opt::from_panicking(|| values[5]), Opt::None);
    assert_eq!(Opt::<i32>::from_panicking(|| panic!("custom")), Opt::None);
  }

  #[test]
  fn collect_short_circuits() {
    let all: Opt<Vec<i32>> = vec![Opt::Some(0), Opt::Some(1)].into_iter().collect();
    assert_eq!(all, Opt::Some(vec![0, 1]));

    let pulled = Cell::new(0);
    let some_missing: Opt<Vec<i32>> = vec![Opt::Some(0), Opt::None, Opt::Some(1)]
      .into_iter()
      .inspect(|_| pulled.set(pulled.get() + 1))
      .collect();
    assert_eq!(some_missing, Opt::None);
    assert_eq!(pulled.get(), 2);

    let empty: Opt<Vec<i32>> = Vec::<Opt<i32>>::new().into_iter().collect();
    assert_eq!(empty, Opt::Some(Vec::new()));
  }
}
