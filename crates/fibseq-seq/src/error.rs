//! Sequence operation errors.

/// Error type for sequence operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeqError {
    /// `reduce_seq` had neither an element nor an initial value to start from.
    #[error("cannot reduce an empty sequence without an initial value")]
    EmptySequence,
}
