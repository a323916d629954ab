//! Zip extraction for downloaded archives

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use crate::console::Console;
use crate::error::FigshareError;

/// Extracts every entry of the zip archive at `archive_path` into `dest_dir`.
///
/// Entries whose path would land outside `dest_dir` are skipped and reported
/// on `console`. A file that is not a zip archive fails with
/// [`FigshareError::Archive`].
///
/// # Returns
///
/// The paths of the extracted files, in archive order.
pub(crate) fn extract_archive(
    archive_path: &Path,
    dest_dir: &Path,
    console: &mut dyn Console,
) -> Result<Vec<PathBuf>, FigshareError> {
    let file = File::open(archive_path)?;
    let mut archive = zip::ZipArchive::new(file)?;
    let mut extracted = Vec::new();

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;

        let out_path = match entry.enclosed_name() {
            Some(path) => dest_dir.join(path),
            None => {
                console.say(&format!(
                    "Warning: skipping entry with unsafe path: {}",
                    entry.name()
                ));
                continue;
            }
        };

        if entry.is_dir() {
            std::fs::create_dir_all(&out_path)?;
            continue;
        }

        if let Some(parent) = out_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut out_file = File::create(&out_path)?;
        io::copy(&mut entry, &mut out_file)?;
        extracted.push(out_path);
    }

    Ok(extracted)
}
