//! Streaming HTTP response bodies to disk

use std::path::Path;

use futures::StreamExt;
use indicatif::ProgressBar;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::error::FigshareError;

/// Bytes written per write call.
pub(crate) const CHUNK_SIZE: usize = 1024;

/// Streams a response body into a new file at `out_path`.
///
/// Any existing file is truncated. Every chunk written advances `pb`, so a
/// body of `n` bytes leaves the bar at position `n`. Nothing is resumed: if the
/// transfer fails midway the partial file stays on disk.
///
/// # Returns
///
/// The number of bytes written.
pub(crate) async fn stream_file(
    out_path: &Path,
    response: reqwest::Response,
    pb: &ProgressBar,
) -> Result<u64, FigshareError> {
    let mut file = File::create(out_path).await?;
    let mut stream = response.bytes_stream();
    let mut written = 0u64;

    while let Some(item) = stream.next().await {
        let bytes = item?;
        for chunk in bytes.chunks(CHUNK_SIZE) {
            file.write_all(chunk).await?;
            written += chunk.len() as u64;
            pb.inc(chunk.len() as u64);
        }
    }

    // tokio hands writes to a background thread; wait for them to land
    file.flush().await?;

    Ok(written)
}
