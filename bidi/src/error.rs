use std::collections::TryReserveError;

#[derive(Debug, thiserror::Error)]
pub enum BidiError {
    /// An allocation for the run list or one of its side tables failed.
    /// No output has been written; retrying with a shorter paragraph
    /// may succeed.
    #[error("out of memory while resolving the paragraph")]
    OutOfMemory(#[from] TryReserveError),
}
