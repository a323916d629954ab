use std::error::Error;
use std::fs;
use std::path::{Component, Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::error::FigshareError;

/// Validates the output directory, creating it when missing.
///
/// # Errors
///
/// This function will return an error if:
/// - The output directory exists but is not a directory.
/// - The output directory cannot be created.
pub(crate) async fn validate_directory(out_dir: &Path) -> Result<(), FigshareError> {
    if out_dir.as_os_str().is_empty() {
        return Ok(());
    }

    if out_dir.exists() && !out_dir.is_dir() {
        return Err(FigshareError::NotADirectory(out_dir.to_path_buf()));
    }

    if !out_dir.exists() {
        tokio::fs::create_dir_all(out_dir).await?;
    }

    Ok(())
}

/// Joins a file name reported by the API onto `out_dir`.
///
/// Names must be a single normal path component. Anything that could
/// escape `out_dir` is rejected instead of sanitized.
pub(crate) fn target_path(out_dir: &Path, name: &str) -> Result<PathBuf, FigshareError> {
    let unsafe_name = || FigshareError::UnsafeFileName(name.to_string());

    if name.contains(['/', '\\', '\0']) {
        return Err(unsafe_name());
    }

    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(out_dir.join(name)),
        _ => Err(unsafe_name()),
    }
}

/// Parses a JSON or YAML file into the specified type
///
/// # Arguments
/// * `path` - Path to the file to parse
///
/// # Returns
/// * `Ok(T)` - Successfully parsed file contents
/// * `Err` - File reading or parsing error
pub fn parse_file<P, T>(path: P) -> Result<T, Box<dyn Error>>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let content = fs::read_to_string(path)?;

    if let Ok(content) = serde_json::from_str(&content) {
        Ok(content)
    } else {
        Ok(serde_yaml::from_str(&content)?)
    }
}
