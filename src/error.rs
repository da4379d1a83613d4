use thiserror::Error;

/// Failure of a mutating operation. The map is unchanged when one is returned.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Error)]
pub enum Error {
    /// `insert` was given a key that is already present.
    #[error("key is already present in the tree")]
    DuplicateKey,
    /// `delete` was given a key that is not present.
    #[error("key is not present in the tree")]
    KeyNotFound,
}
