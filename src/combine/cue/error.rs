use crate::cd::error::CdError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CueError {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    CdError(#[from] CdError),

    #[error(transparent)]
    ParseIntError(#[from] std::num::ParseIntError),

    #[error("Unknown file type: {0}")]
    InvalidFileType(String),

    #[error("Invalid quoted string: {0}")]
    InvalidQuotedString(String),

    #[error("{0}")]
    MissingQuoteError(String),

    #[error("Malformed INDEX line: {0}")]
    MalformedIndexLine(String),

    #[error("Cue sheet is {size} bytes, over the {limit} byte safety limit")]
    InputTooLarge { size: u64, limit: u64 },

    #[error("No FILE line found in the cue sheet")]
    NoFileLineFound,

    #[error("INDEX line appears before any FILE line: {0}")]
    IndexOutsideFile(String),

    #[error("INDEX line has no matching track file record: {0}")]
    MissingTrackRecord(String),
}

pub type CueResult<T> = Result<T, CueError>;
