use crate::cd::Msf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CdError {
    #[error(
        "Byte offset {0} is not a multiple of the {sector} byte sector size",
        sector = crate::cd::SECTOR_SIZE
    )]
    UnalignedOffset(u64),

    #[error("Timestamp {0} is out of range, needs seconds < 60 and frames < 75")]
    InvalidTimestamp(Msf),

    #[error("Byte offset {0} is past the MM:SS:FF addressable range of 99:59:74")]
    OffsetOverflow(u64),

    #[error("Invalid MSF format: {0}")]
    InvalidMsfFormat(String),

    #[error(transparent)]
    ParseIntError(#[from] std::num::ParseIntError),
}

pub type CdResult<T> = Result<T, CdError>;
