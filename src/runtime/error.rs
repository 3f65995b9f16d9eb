use std::path::PathBuf;
use std::process::ExitStatus;
use std::string::FromUtf8Error;

/// Errors raised while invoking the host's container tooling.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to spawn `{program}`: {source}")]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("`{program}` exited with {status}: {stderr}")]
    CommandFailed {
        program: PathBuf,
        status: ExitStatus,
        stderr: String,
    },
    #[error("`{program}` produced non UTF-8 output: {source}")]
    InvalidUtf8 {
        program: PathBuf,
        #[source]
        source: FromUtf8Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
