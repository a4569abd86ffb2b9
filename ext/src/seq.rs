use std::iter::FusedIterator;

use opt_core::Opt;

/// Element lookups on iterators that return an [`Opt`]: missing for an empty sequence or when nothing matches.
pub trait TrySeqExt: Iterator + Sized {
  /// Returns the first element.
  #[inline]
  fn try_first(mut self) -> Opt<Self::Item> { self.next().into() }

  /// Returns the last element, consuming the iterator.
  #[inline]
  fn try_last(self) -> Opt<Self::Item> { self.last().into() }

  /// Returns the element at zero-based `index`.
  #[inline]
  fn try_element_at(mut self, index: usize) -> Opt<Self::Item> { self.nth(index).into() }

  /// Returns the first element that satisfies `predicate`.
  #[inline]
  fn try_find_first(mut self, predicate: impl FnMut(&Self::Item) -> bool) -> Opt<Self::Item> {
    self.find(predicate).into()
  }

  /// Returns the maximum element. If several elements are equally maximum, the last one is returned.
  #[inline]
  fn try_max(self) -> Opt<Self::Item> where Self::Item: Ord { self.max().into() }

  /// Returns the element that gives the maximum value from `f`. If several elements are equally maximum, the last one
  /// is returned.
  #[inline]
  fn try_max_by_key<B: Ord>(self, f: impl FnMut(&Self::Item) -> B) -> Opt<Self::Item> {
    self.max_by_key(f).into()
  }

  /// Returns the minimum element. If several elements are equally minimum, the first one is returned.
  #[inline]
  fn try_min(self) -> Opt<Self::Item> where Self::Item: Ord { self.min().into() }

  /// Returns the element that gives the minimum value from `f`. If several elements are equally minimum, the first one
  /// is returned.
  #[inline]
  fn try_min_by_key<B: Ord>(self, f: impl FnMut(&Self::Item) -> B) -> Opt<Self::Item> {
    self.min_by_key(f).into()
  }

  /// Returns the only element: missing if the sequence is empty or has more than one element. Pulls at most two
  /// elements.
  #[inline]
  fn try_single(mut self) -> Opt<Self::Item> {
    Opt::from(self.next()).filter(|_| self.next().is_none())
  }
}

impl<I: Iterator> TrySeqExt for I {}


/// Operations on iterators of [`Opt`]s.
pub trait OptSeqExt<T>: Iterator<Item=Opt<T>> + Sized {
  /// Collects the contained values into `C` if every element is present, or returns a missing optional if any element
  /// is missing. Stops pulling elements at the first missing one.
  #[inline]
  fn collect_all<C: FromIterator<T>>(self) -> Opt<C> { self.collect() }

  /// Returns an iterator over the contained values of the present elements, in their original order.
  #[inline]
  fn filter_some(self) -> FilterSome<Self> { FilterSome { inner: self } }
}

impl<T, I: Iterator<Item=Opt<T>>> OptSeqExt<T> for I {}

/// Iterator over the contained values of present optionals. Created by [`OptSeqExt::filter_some`].
#[derive(Clone, Debug)]
pub struct FilterSome<I> {
  inner: I,
}

impl<T, I: Iterator<Item=Opt<T>>> Iterator for FilterSome<I> {
  type Item = T;

  #[inline]
  fn next(&mut self) -> Option<T> { self.inner.find_map(Opt::into_option) }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    let (_, upper) = self.inner.size_hint();
    (0, upper)
  }
}
impl<T, I: DoubleEndedIterator<Item=Opt<T>>> DoubleEndedIterator for FilterSome<I> {
  #[inline]
  fn next_back(&mut self) -> Option<T> { self.inner.by_ref().rev().find_map(Opt::into_option) }
}
impl<T, I: FusedIterator<Item=Opt<T>>> FusedIterator for FilterSome<I> {}
