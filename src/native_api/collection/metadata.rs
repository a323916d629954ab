use serde_json::Value;

use crate::client::{evaluate_response, BaseClient};
use crate::error::FigshareError;
use crate::request::RequestType;

/// A fetched collection.
///
/// Only a few fields are lifted out; `document` keeps the complete response
/// so it can be written to disk verbatim. Nothing in the document is
/// required: `id` is the id the collection was requested by, and missing
/// text fields are empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection {
    pub id: i64,
    pub title: String,
    pub doi: String,
    pub document: Value,
}

impl Collection {
    /// Wraps the raw document fetched for collection `id`.
    pub fn from_document(id: i64, document: Value) -> Self {
        let text = |key: &str| {
            document
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        Collection {
            id,
            title: text("title"),
            doi: text("doi"),
            document,
        }
    }
}

/// Retrieves the metadata document of a collection.
///
/// # Arguments
///
/// * `client` - A reference to the `BaseClient` instance used to send the request.
/// * `collection_id` - The numeric collection id.
///
/// # Returns
///
/// The collection with the unmodified API document attached.
pub async fn get_collection(
    client: &BaseClient,
    collection_id: i64,
) -> Result<Collection, FigshareError> {
    let path = format!("collections/{collection_id}");

    let context = RequestType::Plain;
    let response = client.get(&path, None, context).await;

    let document = evaluate_response::<Value>(response).await?;
    Ok(Collection::from_document(collection_id, document))
}
