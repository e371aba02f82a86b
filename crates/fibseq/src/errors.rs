//! Error handling and exit codes.

use fibseq_core::{exit_codes, FibError};
use fibseq_seq::SeqError;

/// Map a calculation error to its exit code.
pub fn handle_error(err: &FibError) -> i32 {
    match err {
        FibError::InvalidArgument(_) | FibError::LimitExceeded { .. } | FibError::Config(_) => {
            exit_codes::ERROR_CONFIG
        }
        FibError::Mismatch => exit_codes::ERROR_MISMATCH,
    }
}

/// Map an application error to its exit code by inspecting its cause chain.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    for cause in err.chain() {
        if let Some(fib) = cause.downcast_ref::<FibError>() {
            return handle_error(fib);
        }
        if cause.downcast_ref::<SeqError>().is_some() {
            return exit_codes::ERROR_GENERIC;
        }
    }
    exit_codes::ERROR_GENERIC
}
