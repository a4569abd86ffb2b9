//! An explicit optional value, [`Opt`], with a combinator set built on a single elimination form,
//! [`Opt::match_with`].

pub mod opt;
pub mod seq;
pub mod error;
mod construct;
pub mod app;

#[cfg(feature = "serde")]
mod serde_impls;

pub use error::OptionalMissingError;
pub use opt::Opt;
