/// Errors that stop the exporter from starting or serving.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to set up metrics: {0}")]
    Metrics(#[from] prometheus::Error),
    #[error("failed to bind `{address}`: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },
    #[error("metrics server failed: {0}")]
    Serve(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
