use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::client::{evaluate_response, BaseClient};
use crate::error::FigshareError;
use crate::request::RequestType;

/// A downloadable file of an article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileDescriptor {
    /// Name reported by figshare, used as the local file name
    pub name: String,
    pub download_url: String,
    /// Declared size in bytes
    #[serde(default)]
    pub size: u64,
}

/// Lists the files of an article, in API order.
///
/// `article_id` is anything printable as the id segment, which lets the
/// manager pass the code it cut out of a manifest URL unchanged.
///
/// # Arguments
///
/// * `client` - A reference to the `BaseClient` instance used to send the request.
/// * `article_id` - The article id or figshare code.
pub async fn get_article_files(
    client: &BaseClient,
    article_id: impl Display,
) -> Result<Vec<FileDescriptor>, FigshareError> {
    let path = format!("articles/{article_id}/files");

    let context = RequestType::Plain;
    let response = client.get(&path, None, context).await;

    evaluate_response::<Vec<FileDescriptor>>(response).await
}
