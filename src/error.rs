use std::path::PathBuf;

use crate::response::ErrorDocument;

/// Errors raised anywhere in the download pipeline.
///
/// Nothing is retried. The binaries print the error and exit with
/// the code returned by [`FigshareError::exit_code`].
#[derive(Debug, thiserror::Error)]
pub enum FigshareError {
    /// The API base URL could not be parsed
    #[error("invalid API url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Network or HTTP transport failure
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// figshare answered with an error document instead of data
    #[error("figshare returned an error: {0}")]
    Api(ErrorDocument),

    /// The response body was not the JSON we expected
    #[error("could not decode response: {source} - {body}")]
    Decode {
        body: String,
        #[source]
        source: serde_json::Error,
    },

    /// The search matched nothing
    #[error("No results")]
    NoResults,

    /// Interactive input was not a number in range
    #[error("Did not provide a number in range: '{0}'")]
    InvalidSelection(String),

    /// A result number given on the command line does not exist
    #[error("result number {index} is out of range ({len} results)")]
    ResultOutOfRange { index: usize, len: usize },

    /// The chosen project index has no manifest entry
    #[error("project {index} is not listed in the manifest (available: {available})")]
    NotInManifest { index: u32, available: String },

    /// The manifest could not be read or failed validation
    #[error("invalid manifest {path}: {reason}")]
    Manifest { path: PathBuf, reason: String },

    /// The article has no files to download
    #[error("article {0} has no files")]
    EmptyArticle(String),

    /// A file name reported by the API is not a plain file name
    #[error("refusing to write file with unsafe name '{0}'")]
    UnsafeFileName(String),

    /// The download target exists but is not a directory
    #[error("the output directory is not a directory: {0}")]
    NotADirectory(PathBuf),

    /// Zip archive could not be read
    #[error("could not extract archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// Metadata could not be serialized
    #[error("could not serialize metadata: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl FigshareError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> exitcode::ExitCode {
        match self {
            FigshareError::InvalidUrl { .. } | FigshareError::Manifest { .. } => exitcode::CONFIG,
            FigshareError::Transport(_) => exitcode::UNAVAILABLE,
            FigshareError::Api(_)
            | FigshareError::Decode { .. }
            | FigshareError::Archive(_)
            | FigshareError::Json(_)
            | FigshareError::EmptyArticle(_)
            | FigshareError::UnsafeFileName(_) => exitcode::DATAERR,
            FigshareError::NoResults => exitcode::NOINPUT,
            FigshareError::InvalidSelection(_)
            | FigshareError::ResultOutOfRange { .. }
            | FigshareError::NotInManifest { .. } => exitcode::USAGE,
            FigshareError::NotADirectory(_) => exitcode::CANTCREAT,
            FigshareError::Io(_) => exitcode::IOERR,
        }
    }
}
