pub mod error;

use crate::combine::bin::error::{BinError, BinResult};
use crate::combine::models::TrackFile;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use log::debug;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs::{self, File, OpenOptions};
use tokio::io::{AsyncReadExt, AsyncWriteExt, BufReader, BufWriter};

const COPY_BUFFER_SIZE: usize = 8 * 1024 * 1024; // 8 MB buffer
const READ_CHUNK_SIZE: usize = 1024 * 1024;

/// Streams every track file, in cue order, into one output file.
///
/// Returns one [`TrackFile`] per input with its byte length and start offset
/// in the merged output. The copy is byte exact. On any mid-copy failure the
/// output is removed, a partial merge must never survive.
pub async fn dump_bin_files(
    pb: &MultiProgress,
    bin_paths: &[PathBuf],
    output_path: &Path,
    force: bool,
) -> BinResult<Vec<TrackFile>> {
    // Stat every input up front so a missing track aborts before the output
    // file is even created.
    let mut total_bytes = 0u64;
    for path in bin_paths {
        let metadata = fs::metadata(path)
            .await
            .map_err(|_| BinError::MissingTrackFile(path.clone()))?;
        total_bytes += metadata.len();
    }

    if force && fs::try_exists(output_path).await? {
        debug!("Removing stale output file: {output_path:?}");
        fs::remove_file(output_path).await?;
    }

    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(output_path)
        .await
        .map_err(|err| match err.kind() {
            ErrorKind::AlreadyExists => BinError::OutputExists(output_path.to_path_buf()),
            _ => BinError::IoError(err),
        })?;
    let mut writer = BufWriter::with_capacity(COPY_BUFFER_SIZE, file);

    let bar = pb.add(ProgressBar::new(total_bytes));
    bar.set_style(byte_progress_style());

    match copy_all(&mut writer, bin_paths, &bar).await {
        Ok(track_files) => {
            bar.finish();
            Ok(track_files)
        }
        Err(err) => {
            bar.abandon();
            drop(writer);
            // the aborted output is unusable, remove it best-effort
            let _ = fs::remove_file(output_path).await;
            Err(err)
        }
    }
}

async fn copy_all(
    writer: &mut BufWriter<File>,
    bin_paths: &[PathBuf],
    bar: &ProgressBar,
) -> BinResult<Vec<TrackFile>> {
    let mut track_files = Vec::with_capacity(bin_paths.len());
    let mut offset = 0u64;

    for path in bin_paths {
        debug!("Appending {path:?} at byte offset {offset}");

        let byte_length = copy_file(path, writer, bar)
            .await
            .map_err(|source| BinError::PartialWrite {
                path: path.clone(),
                source,
            })?;

        // Recorded only once the whole file made it into the output.
        track_files.push(TrackFile {
            path: path.clone(),
            byte_length,
            start_offset: offset,
        });
        offset += byte_length;
    }

    writer.flush().await?;

    Ok(track_files)
}

async fn copy_file(
    path: &Path,
    writer: &mut BufWriter<File>,
    bar: &ProgressBar,
) -> std::io::Result<u64> {
    let file = File::open(path).await?;
    let mut reader = BufReader::with_capacity(COPY_BUFFER_SIZE, file);

    let mut buffer = vec![0u8; READ_CHUNK_SIZE];
    let mut copied = 0u64;

    loop {
        let read = reader.read(&mut buffer).await?;
        if read == 0 {
            break;
        }

        writer.write_all(&buffer[..read]).await?;
        bar.inc(read as u64);
        copied += read as u64;
    }

    Ok(copied)
}

fn byte_progress_style() -> ProgressStyle {
    ProgressStyle::with_template("[{bar:40.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec})")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_fixture(dir: &Path, name: &str, content: &[u8]) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[tokio::test]
    async fn concatenates_in_order_and_records_offsets() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_fixture(dir.path(), "a.bin", &[1u8; 2352]);
        let b = write_fixture(dir.path(), "b.bin", &[2u8; 4704]);
        let output = dir.path().join("merged.bin");

        let tracks = dump_bin_files(&MultiProgress::new(), &[a.clone(), b.clone()], &output, false)
            .await
            .unwrap();

        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0].path, a);
        assert_eq!(tracks[0].byte_length, 2352);
        assert_eq!(tracks[0].start_offset, 0);
        assert_eq!(tracks[1].path, b);
        assert_eq!(tracks[1].byte_length, 4704);
        assert_eq!(tracks[1].start_offset, 2352);

        let merged = std::fs::read(&output).unwrap();
        assert_eq!(merged.len(), 7056);
        assert!(merged[..2352].iter().all(|byte| *byte == 1));
        assert!(merged[2352..].iter().all(|byte| *byte == 2));
    }

    #[tokio::test]
    async fn zero_length_files_keep_offsets_stable() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_fixture(dir.path(), "a.bin", &[1u8; 16]);
        let empty = write_fixture(dir.path(), "empty.bin", &[]);
        let b = write_fixture(dir.path(), "b.bin", &[2u8; 16]);
        let output = dir.path().join("merged.bin");

        let tracks = dump_bin_files(&MultiProgress::new(), &[a, empty, b], &output, false)
            .await
            .unwrap();

        assert_eq!(tracks[1].byte_length, 0);
        assert_eq!(tracks[1].start_offset, 16);
        assert_eq!(tracks[2].start_offset, 16);
        assert_eq!(std::fs::read(&output).unwrap().len(), 32);
    }

    #[tokio::test]
    async fn missing_track_file_aborts_before_output_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_fixture(dir.path(), "a.bin", &[1u8; 16]);
        let missing = dir.path().join("not-there.bin");
        let output = dir.path().join("merged.bin");

        let result = dump_bin_files(&MultiProgress::new(), &[a, missing.clone()], &output, false).await;

        match result {
            Err(BinError::MissingTrackFile(path)) => assert_eq!(path, missing),
            other => panic!("expected MissingTrackFile, got {other:?}"),
        }
        assert!(!output.exists());
    }

    #[tokio::test]
    async fn existing_output_is_rejected_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_fixture(dir.path(), "a.bin", &[1u8; 16]);
        let output = write_fixture(dir.path(), "merged.bin", b"stale");

        let result = dump_bin_files(&MultiProgress::new(), &[a], &output, false).await;

        assert!(matches!(result, Err(BinError::OutputExists(_))));
        assert_eq!(std::fs::read(&output).unwrap(), b"stale");
    }

    #[tokio::test]
    async fn force_overwrites_an_existing_output() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_fixture(dir.path(), "a.bin", &[7u8; 8]);
        let output = write_fixture(dir.path(), "merged.bin", b"stale");

        let tracks = dump_bin_files(&MultiProgress::new(), &[a], &output, true)
            .await
            .unwrap();

        assert_eq!(tracks[0].byte_length, 8);
        assert_eq!(std::fs::read(&output).unwrap(), [7u8; 8]);
    }
}
