//! fibseq library: application logic for the `fibseq` binary.

pub mod app;
pub mod completion;
pub mod config;
pub mod errors;
pub mod orchestrator;
pub mod output;
pub mod presenter;
