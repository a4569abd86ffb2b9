//! Lookup helpers for maps and iterators that return [`Opt`](opt_core::Opt) instead of `Option`.

pub mod map;
pub mod seq;

pub use map::TryGet;
pub use seq::{FilterSome, OptSeqExt, TrySeqExt};
