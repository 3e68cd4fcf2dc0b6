use crate::combine::bin::error::BinError;
use crate::combine::cue::error::CueError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CombineError {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    CueError(#[from] CueError),

    #[error(transparent)]
    BinError(#[from] BinError),

    #[error("Cannot create output directory {0}, check privileges")]
    CannotCreateOutputDir(PathBuf),

    #[error("No files are referenced in the CUE sheet")]
    NoFileReferencedInCueSheet,

    #[error("Aborted at user request")]
    UserAborted,
}

impl CombineError {
    /// Process exit code for this failure: 2 for anything that touched the
    /// output (directory creation, dump, cue write), 1 for read and parse
    /// failures.
    pub fn exit_code(&self) -> u8 {
        match self {
            CombineError::IoError(_)
            | CombineError::BinError(_)
            | CombineError::CannotCreateOutputDir(_) => 2,
            _ => 1,
        }
    }
}

pub type CombineResult<T> = Result<T, CombineError>;
