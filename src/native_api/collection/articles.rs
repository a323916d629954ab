use std::collections::HashMap;

use serde::Deserialize;

use crate::client::{evaluate_response, BaseClient};
use crate::error::FigshareError;
use crate::request::RequestType;

/// The single page size requested from the articles endpoint.
///
/// No further pages are fetched, so collections with more articles than
/// this are only partially enumerated.
pub const ARTICLES_PAGE_SIZE: u32 = 1000;

/// The only field read from an article record.
#[derive(Debug, Deserialize)]
struct ArticleSummary {
    id: i64,
}

/// Lists the ids of the articles in a collection, in API order.
///
/// # Arguments
///
/// * `client` - A reference to the `BaseClient` instance used to send the request.
/// * `collection_id` - The numeric collection id.
pub async fn get_collection_articles(
    client: &BaseClient,
    collection_id: i64,
) -> Result<Vec<i64>, FigshareError> {
    let path = format!("collections/{collection_id}/articles");
    let params = HashMap::from([("page_size".to_string(), ARTICLES_PAGE_SIZE.to_string())]);

    let context = RequestType::Plain;
    let response = client.get(&path, params.into(), context).await;

    let articles = evaluate_response::<Vec<ArticleSummary>>(response).await?;
    Ok(articles.into_iter().map(|article| article.id).collect())
}
