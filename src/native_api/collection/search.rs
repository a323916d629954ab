use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::client::{evaluate_response, BaseClient};
use crate::error::FigshareError;
use crate::request::RequestType;

/// One hit of a collection search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionSummary {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub doi: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,
}

/// Searches public collections by free text or DOI.
///
/// The query is posted as `{"search_for": query}`. An error document in the
/// response is returned as [`FigshareError::Api`].
///
/// # Arguments
///
/// * `client` - A reference to the `BaseClient` instance used to send the request.
/// * `query` - Free text or a DOI such as `10.6084/m9.figshare.999`.
///
/// # Returns
///
/// The matching collections in API order, possibly empty.
pub async fn search(
    client: &BaseClient,
    query: &str,
) -> Result<Vec<CollectionSummary>, FigshareError> {
    let body = json!({ "search_for": query }).to_string();

    let context = RequestType::JSON { body };
    let response = client.post("collections/search", None, context).await;

    evaluate_response::<Vec<CollectionSummary>>(response).await
}
