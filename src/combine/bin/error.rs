use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BinError {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("Track file is missing or unreadable: {0}")]
    MissingTrackFile(PathBuf),

    #[error("Output file already exists, use --force to overwrite: {0}")]
    OutputExists(PathBuf),

    #[error("I/O failure while appending {path} to the merged file")]
    PartialWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type BinResult<T> = Result<T, BinError>;
