use crate::combine::cue::error::{CueError, CueResult};
use crate::combine::cue::models::{CueLine, FileType};
use std::path::Path;

pub mod error;
pub mod models;
pub mod rewrite;

/// Safety ceiling for the cue sheet itself. Anything bigger is almost
/// certainly not a cue sheet.
pub const CUE_BYTE_LIMIT: u64 = 100 * 1024;

/// Reads a cue sheet as raw lines, enforcing the size ceiling before
/// touching the content.
pub async fn read_cue_lines(path: impl AsRef<Path>) -> CueResult<Vec<String>> {
    let metadata = tokio::fs::metadata(path.as_ref()).await?;
    if metadata.len() > CUE_BYTE_LIMIT {
        return Err(CueError::InputTooLarge {
            size: metadata.len(),
            limit: CUE_BYTE_LIMIT,
        });
    }

    let data = tokio::fs::read_to_string(path.as_ref()).await?;

    Ok(data.lines().map(str::to_string).collect())
}

/// Writes the rewritten cue sheet with a trailing newline.
pub async fn write_cue_lines(path: impl AsRef<Path>, lines: &[String]) -> std::io::Result<()> {
    let mut data = lines.join("\n");
    data.push('\n');

    tokio::fs::write(path.as_ref(), data).await
}

/// Classifies one physical cue line.
///
/// Matching is deliberately substring based, any line carrying the FILE or
/// INDEX token is treated as such a line. This accepts everything the common
/// ripping tools emit, regardless of indentation.
pub fn parse_line(line: &str) -> CueResult<CueLine> {
    if line.contains("FILE") {
        let (filename, file_type) = parse_file_fields(line)?;
        return Ok(CueLine::File {
            filename,
            file_type,
        });
    }

    if line.contains("INDEX") {
        let (number, position) = parse_index_fields(line)?;
        return Ok(CueLine::Index { number, position });
    }

    Ok(CueLine::Other(line.to_string()))
}

/// Structural check used to decide whether to prompt before continuing.
/// Never errors.
pub fn line_is_valid(line: &str) -> bool {
    parse_line(line).is_ok()
}

fn parse_file_fields(line: &str) -> CueResult<(String, FileType)> {
    let filename = extract_quoted_string(line)?;

    let type_str = line
        .split_whitespace()
        .next_back()
        .ok_or_else(|| CueError::InvalidQuotedString(line.to_string()))?;
    let file_type = FileType::parse(type_str)?;

    Ok((filename, file_type))
}

fn parse_index_fields(line: &str) -> CueResult<(u8, crate::cd::Msf)> {
    let mut parts = line.split_whitespace();

    for part in parts.by_ref() {
        if part == "INDEX" {
            break;
        }
    }

    let number = parts
        .next()
        .ok_or_else(|| CueError::MalformedIndexLine(line.to_string()))?
        .parse::<u8>()?;
    let position = parts
        .next()
        .ok_or_else(|| CueError::MalformedIndexLine(line.to_string()))?
        .parse()?;

    Ok((number, position))
}

fn extract_quoted_string(line: &str) -> CueResult<String> {
    let start = line.find('"').ok_or(CueError::MissingQuoteError(
        "Missing opening quote".to_string(),
    ))?;
    let end = line.rfind('"').ok_or(CueError::MissingQuoteError(
        "Missing closing quote".to_string(),
    ))?;
    if start >= end {
        return Err(CueError::InvalidQuotedString(line.to_string()));
    }

    Ok(line[start + 1..end].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cd::Msf;

    #[test]
    fn parses_a_file_line() {
        let line = parse_line("FILE \"Track 01.bin\" BINARY").unwrap();
        match line {
            CueLine::File {
                filename,
                file_type,
            } => {
                assert_eq!(filename, "Track 01.bin");
                assert_eq!(file_type, FileType::Binary);
            }
            other => panic!("expected a FILE line, got {other:?}"),
        }
    }

    #[test]
    fn parses_an_indented_index_line() {
        let line = parse_line("    INDEX 01 00:02:00").unwrap();
        match line {
            CueLine::Index { number, position } => {
                assert_eq!(number, 1);
                assert_eq!(
                    position,
                    Msf {
                        minutes: 0,
                        seconds: 2,
                        frames: 0
                    }
                );
            }
            other => panic!("expected an INDEX line, got {other:?}"),
        }
    }

    #[test]
    fn track_lines_pass_through_as_other() {
        let line = parse_line("  TRACK 02 AUDIO").unwrap();
        assert!(matches!(line, CueLine::Other(text) if text == "  TRACK 02 AUDIO"));
    }

    #[test]
    fn file_line_without_quotes_is_malformed() {
        assert!(matches!(
            parse_line("FILE Track01.bin BINARY"),
            Err(CueError::MissingQuoteError(_))
        ));
    }

    #[test]
    fn file_line_with_one_quote_is_malformed() {
        assert!(matches!(
            parse_line("FILE \"Track01.bin BINARY"),
            Err(CueError::InvalidQuotedString(_))
        ));
    }

    #[test]
    fn file_line_with_unknown_type_is_malformed() {
        assert!(matches!(
            parse_line("FILE \"Track01.bin\" FLAC"),
            Err(CueError::InvalidFileType(_))
        ));
    }

    #[test]
    fn index_line_with_missing_fields_is_malformed() {
        assert!(matches!(
            parse_line("    INDEX"),
            Err(CueError::MalformedIndexLine(_))
        ));
    }

    #[test]
    fn index_line_with_bad_number_is_malformed() {
        assert!(matches!(
            parse_line("    INDEX xx 00:00:00"),
            Err(CueError::ParseIntError(_))
        ));
    }

    #[test]
    fn index_with_out_of_range_seconds_still_parses() {
        // the codec rejects it later, see the rewrite tests
        let line = parse_line("    INDEX 01 00:60:00").unwrap();
        assert!(matches!(line, CueLine::Index { .. }));
    }

    #[test]
    fn line_is_valid_accepts_well_formed_lines() {
        assert!(line_is_valid("FILE \"a.bin\" BINARY"));
        assert!(line_is_valid("    INDEX 01 00:00:00"));
        assert!(line_is_valid("REM ripped with cdrdao"));
    }

    #[test]
    fn line_is_valid_rejects_broken_file_lines() {
        assert!(!line_is_valid("FILE a.bin BINARY"));
        assert!(!line_is_valid("FILE \"a.bin\""));
    }
}
