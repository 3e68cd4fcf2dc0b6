use crate::combine::cue::models::CueLine;
use crate::combine::error::{CombineError, CombineResult};
use crate::combine::models::MergeResult;
use crate::util;
use indicatif::MultiProgress;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use tokio::io::AsyncBufReadExt;

pub mod bin;
pub mod cue;
pub mod error;
pub mod models;

/// Merges every track file referenced by the cue sheet into one .bin and
/// writes a rewritten .cue next to it, under a `psx-comBINe/` sibling
/// directory of the input.
pub async fn combine_bin_cue(
    pb: MultiProgress,
    cue_path: PathBuf,
    force: bool,
    assume_yes: bool,
) -> CombineResult<MergeResult> {
    debug!("Reading CUE file: {cue_path:?}");
    let lines = cue::read_cue_lines(&cue_path).await?;

    let paths = util::fs::derive_output_paths(&cue_path);
    match util::fs::ensure_dir(&paths.dir).await {
        Ok(true) => info!("Created directory: {:?}", paths.dir),
        Ok(false) => {}
        Err(_) => return Err(CombineError::CannotCreateOutputDir(paths.dir.clone())),
    }

    // Collect the referenced track files, resolved against the cue sheet's
    // own directory. A malformed line is only skipped after confirmation.
    let cue_dir = cue_path.parent().unwrap_or(Path::new("."));
    let mut kept_lines = Vec::with_capacity(lines.len());
    let mut bin_paths = Vec::new();

    for line in lines {
        if !cue::line_is_valid(&line) {
            warn!("Malformed cue line: {line}");
            if !assume_yes && !prompt_continue().await? {
                return Err(CombineError::UserAborted);
            }
            debug!("Dropping malformed line");
            continue;
        }

        if let CueLine::File { filename, .. } = cue::parse_line(&line)? {
            bin_paths.push(cue_dir.join(&filename));
        }
        kept_lines.push(line);
    }

    if bin_paths.is_empty() {
        return Err(CombineError::NoFileReferencedInCueSheet);
    }

    info!(
        "Merging {} track files into {:?}",
        bin_paths.len(),
        paths.bin
    );
    let track_files = bin::dump_bin_files(&pb, &bin_paths, &paths.bin, force).await?;

    let output_bin_name = paths
        .bin
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let new_lines = cue::rewrite::rewrite_cue_lines(&kept_lines, &track_files, &output_bin_name)?;

    // The cue sheet is written only once the data file is complete, a failed
    // run must never leave a sheet describing a partial merge.
    cue::write_cue_lines(&paths.cue, &new_lines).await?;
    info!("Wrote rewritten cue sheet: {:?}", paths.cue);

    Ok(MergeResult {
        output_bin_path: paths.bin,
        output_cue_path: paths.cue,
        track_files,
    })
}

async fn prompt_continue() -> CombineResult<bool> {
    print!("Continue anyway? [y/N] ");
    std::io::Write::flush(&mut std::io::stdout())?;

    let mut answer = String::new();
    tokio::io::BufReader::new(tokio::io::stdin())
        .read_line(&mut answer)
        .await?;

    Ok(matches!(answer.trim(), "y" | "Y" | "yes" | "YES"))
}
