use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CountError {
    #[error("no input file")]
    MissingArgument,
    #[error("open input file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("create output file {}: {source}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("can't count words: {0}")]
    Read(#[source] io::Error),
    #[error("write output: {0}")]
    Write(#[source] io::Error),
    #[error("json encoding failed: {0}")]
    Encode(#[source] serde_json::Error),
}
