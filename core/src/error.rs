use thiserror::Error;

/// Attempted to read the value of a missing optional. The optional equivalent of a null dereference: it signals a
/// logic error where presence was not checked before access.
#[derive(Default, Clone, Copy, Eq, PartialEq, Hash, Debug, Error)]
#[error("Attempted to read missing value from an optional")]
pub struct OptionalMissingError;
