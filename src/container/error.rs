use std::num::ParseIntError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid container id `{raw}`: {source}")]
    InvalidContainerID {
        raw: String,
        #[source]
        source: ParseIntError,
    },
}
pub type Result<T> = std::result::Result<T, Error>;
