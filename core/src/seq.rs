//! Sequence views of an [`Opt`]: a present optional is a sequence of one element, a missing optional an empty
//! sequence.

use std::iter::FusedIterator;
use std::mem;

use crate::opt::Opt;

/// Iterator over a reference to the value of an [`Opt`]. Created by [`Opt::seq`].
#[derive(Debug)]
pub struct Seq<'a, T> {
  inner: Opt<&'a T>,
}
impl<'a, T> Seq<'a, T> {
  #[inline]
  pub(crate) fn new(inner: Opt<&'a T>) -> Self { Self { inner } }
}
impl<T> Clone for Seq<'_, T> {
  #[inline]
  fn clone(&self) -> Self { Self { inner: self.inner } }
}

impl<'a, T> Iterator for Seq<'a, T> {
  type Item = &'a T;

  #[inline]
  fn next(&mut self) -> Option<&'a T> { mem::take(&mut self.inner).into_option() }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    let len = self.inner.count();
    (len, Some(len))
  }
}
impl<T> DoubleEndedIterator for Seq<'_, T> {
  #[inline]
  fn next_back(&mut self) -> Option<Self::Item> { self.next() }
}
impl<T> ExactSizeIterator for Seq<'_, T> {}
impl<T> FusedIterator for Seq<'_, T> {}


/// Iterator over the value of an [`Opt`]. Created by [`Opt::into_seq`].
#[derive(Clone, Debug)]
pub struct IntoSeq<T> {
  inner: Opt<T>,
}
impl<T> IntoSeq<T> {
  #[inline]
  pub(crate) fn new(inner: Opt<T>) -> Self { Self { inner } }
}

impl<T> Iterator for IntoSeq<T> {
  type Item = T;

  #[inline]
  fn next(&mut self) -> Option<T> { mem::take(&mut self.inner).into_option() }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    let len = self.inner.count();
    (len, Some(len))
  }
}
impl<T> DoubleEndedIterator for IntoSeq<T> {
  #[inline]
  fn next_back(&mut self) -> Option<T> { self.next() }
}
impl<T> ExactSizeIterator for IntoSeq<T> {}
impl<T> FusedIterator for IntoSeq<T> {}
