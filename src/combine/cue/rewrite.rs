use crate::cd::Msf;
use crate::combine::cue::error::{CueError, CueResult};
use crate::combine::cue::models::CueLine;
use crate::combine::cue::parse_line;
use crate::combine::models::TrackFile;

/// Rewrites a cue sheet so it describes the merged output file.
///
/// Exactly one FILE line is emitted, at the position of the first original
/// one and reusing its type keyword. Each INDEX timestamp, originally
/// relative to the start of its own file, is shifted by that file's start
/// offset in the merged output. Everything else passes through verbatim.
pub fn rewrite_cue_lines(
    lines: &[String],
    track_files: &[TrackFile],
    output_bin_name: &str,
) -> CueResult<Vec<String>> {
    let mut rewritten = Vec::with_capacity(lines.len());

    // 0-based position among FILE lines seen so far; None until the first.
    let mut file_index: Option<usize> = None;

    for line in lines {
        match parse_line(line)? {
            CueLine::File { file_type, .. } => {
                let next = file_index.map_or(0, |index| index + 1);
                if next == 0 {
                    rewritten.push(format!("FILE \"{output_bin_name}\" {file_type}"));
                }
                file_index = Some(next);
            }
            CueLine::Index { number, position } => {
                let index = file_index
                    .ok_or_else(|| CueError::IndexOutsideFile(line.clone()))?;
                let track = track_files
                    .get(index)
                    .ok_or_else(|| CueError::MissingTrackRecord(line.clone()))?;

                let offset = track.start_offset + position.to_byte_offset()?;
                let shifted = Msf::from_byte_offset(offset)?;

                let indent = &line[..line.len() - line.trim_start().len()];
                rewritten.push(format!("{indent}INDEX {number:02} {shifted}"));
            }
            CueLine::Other(text) => rewritten.push(text),
        }
    }

    if file_index.is_none() {
        return Err(CueError::NoFileLineFound);
    }

    Ok(rewritten)
}
