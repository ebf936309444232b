use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced at the boundaries of a training run.
///
/// Merge steps themselves cannot fail; everything here is either I/O, a bad
/// configuration, or running out of 16-bit ids.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read input {}: {source}", path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write checkpoint {}: {source}", path.display())]
    OutputUnwritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("no 16-bit symbol id left for merge (next would be {next})")]
    SymbolSpaceExhausted { next: u32 },
}

pub type Result<T> = std::result::Result<T, Error>;
