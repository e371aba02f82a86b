//! # fibseq-seq
//!
//! Higher-order operations over an ordered, caller-owned sequence.
//! Every operation reads its explicit `source` argument, never mutates it,
//! and returns a new `Vec` or a scalar.

pub mod error;
pub mod ext;
pub mod ops;

pub use error::SeqError;
pub use ext::SeqOps;
pub use ops::{filter_seq, fold_seq, map_seq, reduce_seq};
