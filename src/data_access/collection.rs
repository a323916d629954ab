//! Collection-wide access: metadata export and file enumeration

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use crate::client::BaseClient;
use crate::console::Console;
use crate::data_access::datafile::{save_file, DownloadOutcome};
use crate::error::FigshareError;
use crate::native_api::article::{get_article_files, FileDescriptor};
use crate::native_api::collection::{get_collection, get_collection_articles};

/// Name of the metadata file written for a collection.
pub fn metadata_file_name(collection_id: i64) -> String {
    format!("metadata_{collection_id}.json")
}

/// Fetches the metadata document of a collection and writes it, indented by
/// two spaces, to `metadata_<id>.json` in `out_dir`.
///
/// An existing file of that name is overwritten.
///
/// # Returns
///
/// The path of the written file.
pub async fn export_collection_metadata(
    client: &BaseClient,
    collection_id: i64,
    out_dir: &Path,
    console: &mut dyn Console,
) -> Result<PathBuf, FigshareError> {
    let collection = get_collection(client, collection_id).await?;

    let out_path = out_dir.join(metadata_file_name(collection_id));
    console.say(&format!("Saving metadata to {}", out_path.display()));

    let json = serde_json::to_string_pretty(&collection.document)?;
    tokio::fs::write(&out_path, json).await?;

    Ok(out_path)
}

/// Lazy walk over every file of every article in a collection.
///
/// Article ids are fetched up front; each article's file list is only
/// requested once the files of the previous article are used up. Files come
/// out in API order (articles first, then files) without sorting or
/// deduplication. The walk is single-pass.
pub struct CollectionFiles<'a> {
    client: &'a BaseClient,
    articles: VecDeque<i64>,
    pending: VecDeque<FileDescriptor>,
}

impl<'a> CollectionFiles<'a> {
    /// Starts a walk over the files of `collection_id`.
    pub async fn new(client: &'a BaseClient, collection_id: i64) -> Result<Self, FigshareError> {
        let articles = get_collection_articles(client, collection_id).await?;

        Ok(CollectionFiles {
            client,
            articles: articles.into(),
            pending: VecDeque::new(),
        })
    }

    /// Returns the next file, or `None` once every article is exhausted.
    pub async fn next_file(&mut self) -> Result<Option<FileDescriptor>, FigshareError> {
        loop {
            if let Some(file) = self.pending.pop_front() {
                return Ok(Some(file));
            }

            let Some(article_id) = self.articles.pop_front() else {
                return Ok(None);
            };

            self.pending = get_article_files(self.client, article_id).await?.into();
        }
    }

    /// Drains the remaining files into a vector.
    pub async fn collect(mut self) -> Result<Vec<FileDescriptor>, FigshareError> {
        let mut files = Vec::new();
        while let Some(file) = self.next_file().await? {
            files.push(file);
        }
        Ok(files)
    }
}

/// Downloads every file of a collection into `out_dir`, skipping files that
/// already exist there.
///
/// A name shared by two articles is only downloaded once: the second
/// occurrence finds the first on disk and is skipped.
pub async fn download_collection_files(
    client: &BaseClient,
    collection_id: i64,
    out_dir: &Path,
    console: &mut dyn Console,
) -> Result<Vec<DownloadOutcome>, FigshareError> {
    let mut files = CollectionFiles::new(client, collection_id).await?;
    let mut outcomes = Vec::new();

    while let Some(file) = files.next_file().await? {
        outcomes.push(save_file(client, &file, out_dir, console).await?);
    }

    Ok(outcomes)
}
