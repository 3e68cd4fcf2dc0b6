use std::path::{Path, PathBuf};
use tokio::fs;

/// Output subdirectory created next to the input cue sheet.
pub const OUTPUT_DIR_NAME: &str = "psx-comBINe";

#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub dir: PathBuf,
    pub bin: PathBuf,
    pub cue: PathBuf,
}

/// Derives the output directory and file paths from the input cue path.
///
/// The base name is cut at the first dot, so "Game.a.cue" yields "Game".
/// Pure string work, no filesystem access.
pub fn derive_output_paths(cue_path: &Path) -> OutputPaths {
    let dir = cue_path
        .parent()
        .unwrap_or(Path::new("."))
        .join(OUTPUT_DIR_NAME);

    let file_name = cue_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let base = file_name.split('.').next().unwrap_or("").to_string();

    OutputPaths {
        bin: dir.join(format!("{base}.bin")),
        cue: dir.join(format!("{base}.cue")),
        dir,
    }
}

/// Creates the directory when absent. Returns whether it was created.
pub async fn ensure_dir(dir: &Path) -> std::io::Result<bool> {
    if fs::try_exists(dir).await? {
        return Ok(false);
    }

    fs::create_dir_all(dir).await?;

    Ok(true)
}
