//! Workspace-level golden tests for fibseq. See `tests/`.
