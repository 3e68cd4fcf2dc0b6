use crate::cd::error::{CdError, CdResult};
use std::fmt;
use std::str::FromStr;

pub mod error;

pub const SECTOR_SIZE: usize = 2352;
pub const FRAMES_PER_SECOND: u64 = 75;
pub const SECONDS_PER_MINUTE: u64 = 60;

/// Largest minute value the two-digit MM field can carry.
pub const MAX_MINUTES: u64 = 99;

/// MM:SS:FF position in CD addressing, 75 frames per second.
///
/// Offsets that are exact multiples of [`SECTOR_SIZE`] map bijectively onto
/// timestamps up to 99:59:74.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Msf {
    pub minutes: u32,
    pub seconds: u8,
    pub frames: u8,
}

impl Msf {
    /// Converts a byte offset inside a disc image into a timestamp.
    ///
    /// The offset must be sector aligned; offsets past 99:59:74 do not fit
    /// the two-digit minute field and are rejected rather than truncated.
    pub fn from_byte_offset(offset: u64) -> CdResult<Self> {
        if offset % SECTOR_SIZE as u64 != 0 {
            return Err(CdError::UnalignedOffset(offset));
        }

        let total_frames = offset / SECTOR_SIZE as u64;
        let minutes = total_frames / (FRAMES_PER_SECOND * SECONDS_PER_MINUTE);

        if minutes > MAX_MINUTES {
            return Err(CdError::OffsetOverflow(offset));
        }

        Ok(Self {
            minutes: minutes as u32,
            seconds: ((total_frames / FRAMES_PER_SECOND) % SECONDS_PER_MINUTE) as u8,
            frames: (total_frames % FRAMES_PER_SECOND) as u8,
        })
    }

    /// Converts this timestamp back into a byte offset.
    pub fn to_byte_offset(&self) -> CdResult<u64> {
        if self.seconds as u64 >= SECONDS_PER_MINUTE || self.frames as u64 >= FRAMES_PER_SECOND {
            return Err(CdError::InvalidTimestamp(*self));
        }

        let total_frames = (self.minutes as u64 * SECONDS_PER_MINUTE + self.seconds as u64)
            * FRAMES_PER_SECOND
            + self.frames as u64;

        Ok(total_frames * SECTOR_SIZE as u64)
    }
}

impl fmt::Display for Msf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.minutes, self.seconds, self.frames)
    }
}

impl FromStr for Msf {
    type Err = CdError;

    // Range checks happen in to_byte_offset, a sheet with "00:60:00" should
    // parse and then fail the conversion, not disappear at the tokenizer.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() != 3 {
            return Err(CdError::InvalidMsfFormat(s.to_string()));
        }

        Ok(Self {
            minutes: parts[0].parse()?,
            seconds: parts[1].parse()?,
            frames: parts[2].parse()?,
        })
    }
}
