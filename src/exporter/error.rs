/// Errors raised by a [`SampleSink`](super::SampleSink).
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("sample sink is closed")]
    Closed,
}

/// Cycle-level scrape failure.
///
/// Per-container problems never become an `Error`; they are absorbed by the
/// runtime helpers and reported to the observer.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to emit reading: {0}")]
    Emit(#[from] SinkError),
}

pub type Result<T> = std::result::Result<T, Error>;
