use crate::cd::Msf;
use crate::combine::cue::error::{CueError, CueResult};
use std::fmt;

/// One physical line of a cue sheet, classified.
#[derive(Debug, Clone)]
pub enum CueLine {
    File { filename: String, file_type: FileType },
    Index { number: u8, position: Msf },
    Other(String),
}

/// The type keyword carried on a FILE line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Binary,
    Motorola,
    Aiff,
    Wave,
    Mp3,
}

impl FileType {
    pub fn parse(type_str: &str) -> CueResult<Self> {
        match type_str {
            "BINARY" => Ok(FileType::Binary),
            "MOTOROLA" => Ok(FileType::Motorola),
            "AIFF" => Ok(FileType::Aiff),
            "WAVE" => Ok(FileType::Wave),
            "MP3" => Ok(FileType::Mp3),
            _ => Err(CueError::InvalidFileType(type_str.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::Binary => "BINARY",
            FileType::Motorola => "MOTOROLA",
            FileType::Aiff => "AIFF",
            FileType::Wave => "WAVE",
            FileType::Mp3 => "MP3",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
