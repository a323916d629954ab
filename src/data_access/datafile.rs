//! Downloading single files described by the API
//!
//! Two flavors exist:
//! - [`save_file`] skips files that already exist and downloads quietly
//! - [`save_and_extract`] shows a progress bar, unpacks the zip archive it
//!   downloaded and offers to delete it afterwards

use std::path::{Path, PathBuf};

use indicatif::ProgressBar;

use crate::client::BaseClient;
use crate::console::Console;
use crate::error::FigshareError;
use crate::file::archive::extract_archive;
use crate::file::filestream::stream_file;
use crate::native_api::article::FileDescriptor;
use crate::progress::setup_progress_log;
use crate::request::RequestType;
use crate::utils::{target_path, validate_directory};

/// Result of [`save_file`].
#[derive(Debug, Clone, PartialEq)]
pub enum DownloadOutcome {
    /// The file already existed and nothing was transferred
    Skipped(PathBuf),
    /// The file was downloaded
    Downloaded { path: PathBuf, bytes: u64 },
}

/// Result of [`save_and_extract`].
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractOutcome {
    pub archive: PathBuf,
    pub bytes: u64,
    pub extracted: Vec<PathBuf>,
    pub archive_deleted: bool,
}

/// Downloads a file into `out_dir` unless a file of that name is already there.
///
/// # Arguments
///
/// * `client` - A reference to the `BaseClient` instance used to send the request.
/// * `file` - The file to download.
/// * `out_dir` - Target directory, created when missing. An empty path means the
///   working directory.
/// * `console` - Receives the skip/download notices.
pub async fn save_file(
    client: &BaseClient,
    file: &FileDescriptor,
    out_dir: &Path,
    console: &mut dyn Console,
) -> Result<DownloadOutcome, FigshareError> {
    let out_path = target_path(out_dir, &file.name)?;

    if out_path.exists() {
        console.say(&format!("Skipping {}", file.name));
        return Ok(DownloadOutcome::Skipped(out_path));
    }

    validate_directory(out_dir).await?;
    console.say(&format!("Downloading {}", file.name));

    let response = fetch(client, file).await?;
    let bytes = stream_file(&out_path, response, &ProgressBar::hidden()).await?;

    Ok(DownloadOutcome::Downloaded {
        path: out_path,
        bytes,
    })
}

/// Downloads a zip archive with a progress bar and extracts it into `out_dir`.
///
/// The download always happens, even if the archive is already present. After
/// extraction the user is asked whether to delete the archive; only an exact
/// `y` deletes it.
///
/// # Errors
///
/// Besides transport and filesystem errors this fails with
/// [`FigshareError::Archive`] when the downloaded file is not a zip archive.
pub async fn save_and_extract(
    client: &BaseClient,
    file: &FileDescriptor,
    out_dir: &Path,
    console: &mut dyn Console,
) -> Result<ExtractOutcome, FigshareError> {
    let out_path = target_path(out_dir, &file.name)?;
    validate_directory(out_dir).await?;

    let response = fetch(client, file).await?;
    let pb = setup_progress_log(file.size, &file.name);
    let bytes = stream_file(&out_path, response, &pb).await?;
    pb.finish();

    console.say("Extracting zip file...");
    let extracted = extract_archive(&out_path, out_dir, console)?;

    let answer = console.ask("Extraction complete. Delete zip file? (y/n)")?;
    let archive_deleted = answer == "y";
    if archive_deleted {
        tokio::fs::remove_file(&out_path).await?;
    }

    Ok(ExtractOutcome {
        archive: out_path,
        bytes,
        extracted,
        archive_deleted,
    })
}

async fn fetch(
    client: &BaseClient,
    file: &FileDescriptor,
) -> Result<reqwest::Response, FigshareError> {
    let response = client
        .get(&file.download_url, None, RequestType::Plain)
        .await?;

    // Never write an error page to disk under the real file name
    Ok(response.error_for_status()?)
}
